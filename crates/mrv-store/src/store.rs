//! Directory-backed record store.

use crate::error::StoreError;
use mrv_canonical::RecordId;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Stores MRV record documents as one pretty-printed JSON file per id.
pub struct RecordStore {
    dir: PathBuf,
}

impl RecordStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Generates a fresh producer-side identifier (`MRV-{uuid}`).
    pub fn generate_record_id() -> RecordId {
        RecordId::new(format!("MRV-{}", uuid::Uuid::new_v4()))
    }

    fn path_for(&self, id: &RecordId) -> PathBuf {
        self.dir.join(format!("{}.json", id.as_ref()))
    }

    /// Saves a record document under `id`, overwriting any previous copy.
    ///
    /// The file is pretty-printed with sorted keys for human inspection;
    /// the stored text is not the canonical form and is never hashed.
    pub fn save(&self, id: &RecordId, record: &Value) -> Result<PathBuf, StoreError> {
        let path = self.path_for(id);
        let text = serde_json::to_string_pretty(record)?;
        fs::write(&path, text)?;
        Ok(path)
    }

    /// Loads the record document stored under `id`.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] when no file exists for the identifier.
    pub fn load(&self, id: &RecordId) -> Result<Value, StoreError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(StoreError::NotFound(id.as_ref().to_string()));
        }
        let text = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Lists the identifiers of all stored records.
    pub fn list(&self) -> Result<Vec<RecordId>, StoreError> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            let Some(stem) = name.strip_suffix(".json") else {
                continue;
            };
            if let Ok(id) = RecordId::parse(stem) {
                ids.push(id);
            }
        }
        ids.sort_by(|a, b| a.as_ref().cmp(b.as_ref()));
        Ok(ids)
    }

    /// Copies the record stored under `id` to an arbitrary path.
    pub fn export<P: AsRef<Path>>(&self, id: &RecordId, target: P) -> Result<(), StoreError> {
        let record = self.load(id)?;
        let text = serde_json::to_string_pretty(&record)?;
        fs::write(target, text)?;
        Ok(())
    }
}
