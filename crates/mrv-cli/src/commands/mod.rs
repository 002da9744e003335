//! CLI command implementations.

pub mod anchor;
pub mod canonicalize;
pub mod exists;
pub mod get;
pub mod hash;
pub mod list;
pub mod verify;

use mrv_canonical::{Canonicalizer, RecordId, SchemaVersion};
use mrv_registry::{FileLedger, FileLedgerOptions};
use mrv_schemas::CURRENT_SCHEMA_VERSION;
use serde_json::Value;

/// Opens the ledger file shared by registry-facing commands.
pub(crate) fn open_ledger(path: &str) -> Result<FileLedger, Box<dyn std::error::Error>> {
    FileLedger::open(path, FileLedgerOptions::default())
        .map_err(|e| format!("Failed to open ledger {}: {}", path, e).into())
}

/// The canonicalizer for the wire format version this build emits.
pub(crate) fn make_canonicalizer() -> Result<Canonicalizer, Box<dyn std::error::Error>> {
    let version = SchemaVersion::parse(CURRENT_SCHEMA_VERSION)
        .map_err(|e| format!("Invalid schema version: {}", e))?;
    Ok(Canonicalizer::new(version))
}

/// Loads a record document from a JSON file.
pub(crate) fn load_record(path: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read file {}: {}", path, e))?;
    let value: Value =
        serde_json::from_str(&text).map_err(|e| format!("Invalid JSON in {}: {}", path, e))?;
    Ok(value)
}

/// Resolves the identifier for a record: an explicit `--id` wins, otherwise
/// the record's own `mrv_id` field.
pub(crate) fn resolve_id(
    record: &Value,
    explicit: Option<String>,
) -> Result<RecordId, Box<dyn std::error::Error>> {
    let raw = match explicit {
        Some(id) => id,
        None => record
            .get("mrv_id")
            .and_then(|v| v.as_str())
            .ok_or("Record has no mrv_id field; pass --id")?
            .to_string(),
    };
    RecordId::parse(raw).map_err(|e| format!("Invalid record id: {}", e).into())
}
