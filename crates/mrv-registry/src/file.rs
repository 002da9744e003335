//! File-backed append-only ledger.
//!
//! State is an append-only JSON Lines event log: a validated header line
//! followed by one [`LedgerEvent`] per line. The Present/Absent map is
//! replayed from `registered` lines on open; `queried` audit lines are
//! durable but carry no state. Nothing in the file is ever rewritten.

use crate::entry::RegistryEntry;
use crate::errors::LedgerError;
use crate::events::{LedgerEvent, QueryEvent, RegistrationEvent};
use crate::ledger::{Ledger, LedgerReceipt};
use mrv_canonical::{Digest, RecordId, SubmitterId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::sync::Mutex;

/// Ledger file magic string.
const MAGIC: &str = "MRVL1";

/// Current ledger file format version.
const VERSION: u32 = 1;

/// Header line at the start of every ledger file.
#[derive(Debug, Serialize, Deserialize)]
struct LedgerFileHeader {
    magic: String,
    version: u32,
}

/// Options for opening a file ledger.
#[derive(Debug, Clone)]
pub struct FileLedgerOptions {
    /// Whether to fsync after each append (default: false).
    pub sync: bool,
}

impl Default for FileLedgerOptions {
    fn default() -> Self {
        Self { sync: false }
    }
}

#[derive(Debug)]
struct FileState {
    file: File,
    entries: BTreeMap<String, RegistryEntry>,
    next_seq: u64,
}

/// Append-only ledger persisted to a single local file.
///
/// The mutex serializes mutations the way a real ledger's consensus would;
/// the append-only file gives registrations durability across processes.
#[derive(Debug)]
pub struct FileLedger {
    state: Mutex<FileState>,
    sync: bool,
    clock: fn() -> u64,
}

impl FileLedger {
    /// Opens or creates a ledger file, replaying its event log.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Corrupt`] if the header or any event line
    /// does not parse, or if a `registered` line duplicates an identifier.
    pub fn open<P: AsRef<Path>>(path: P, options: FileLedgerOptions) -> Result<Self, LedgerError> {
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(path)?;

        let metadata = file.metadata()?;
        let mut entries = BTreeMap::new();
        let mut next_seq = 0u64;

        if metadata.len() == 0 {
            let header = LedgerFileHeader {
                magic: MAGIC.to_string(),
                version: VERSION,
            };
            let line = serde_json::to_string(&header)
                .map_err(|e| LedgerError::Corrupt(e.to_string()))?;
            writeln!(file, "{}", line)?;
            file.flush()?;
            if options.sync {
                file.sync_all()?;
            }
        } else {
            let reader = BufReader::new(&file);
            let mut lines = reader.lines();

            let header_line = lines
                .next()
                .ok_or_else(|| LedgerError::Corrupt("empty ledger file".to_string()))??;
            let header: LedgerFileHeader = serde_json::from_str(&header_line)
                .map_err(|e| LedgerError::Corrupt(format!("invalid header: {}", e)))?;
            if header.magic != MAGIC {
                return Err(LedgerError::Corrupt(format!(
                    "invalid magic '{}', expected '{}'",
                    header.magic, MAGIC
                )));
            }
            if header.version != VERSION {
                return Err(LedgerError::Corrupt(format!(
                    "unsupported version {}, expected {}",
                    header.version, VERSION
                )));
            }

            for (lineno, line) in lines.enumerate() {
                let line = line?;
                if line.is_empty() {
                    continue;
                }
                let event: LedgerEvent = serde_json::from_str(&line).map_err(|e| {
                    LedgerError::Corrupt(format!("invalid event at line {}: {}", lineno + 2, e))
                })?;
                if let LedgerEvent::Registered(reg) = event {
                    let id = reg.id.as_ref().to_string();
                    let entry = RegistryEntry {
                        id: reg.id,
                        digest: reg.digest,
                        creation_time: reg.creation_time,
                        submitter: reg.submitter,
                    };
                    if entries.insert(id.clone(), entry).is_some() {
                        return Err(LedgerError::Corrupt(format!(
                            "duplicate registration for '{}' at line {}",
                            id,
                            lineno + 2
                        )));
                    }
                    next_seq += 1;
                }
            }
        }

        Ok(Self {
            state: Mutex::new(FileState {
                file,
                entries,
                next_seq,
            }),
            sync: options.sync,
            clock: || {
                let now = chrono::Utc::now().timestamp();
                u64::try_from(now).unwrap_or(0)
            },
        })
    }

    fn append_event(&self, state: &mut FileState, event: &LedgerEvent) -> Result<(), LedgerError> {
        let line = serde_json::to_string(event).map_err(|e| LedgerError::Corrupt(e.to_string()))?;
        writeln!(state.file, "{}", line)?;
        state.file.flush()?;
        if self.sync {
            state.file.sync_all()?;
        }
        Ok(())
    }
}

impl Ledger for FileLedger {
    fn create(
        &self,
        id: &RecordId,
        digest: &Digest,
        submitter: &SubmitterId,
    ) -> Result<LedgerReceipt, LedgerError> {
        if digest.is_zero() {
            return Err(LedgerError::ZeroDigest);
        }

        let mut state = self.state.lock().expect("ledger mutex poisoned");
        if state.entries.contains_key(id.as_ref()) {
            return Err(LedgerError::AlreadyExists(id.as_ref().to_string()));
        }

        let creation_time = (self.clock)();
        state.next_seq += 1;
        let reference = format!("file-{:06}", state.next_seq);

        let event = LedgerEvent::Registered(RegistrationEvent {
            id: id.clone(),
            digest: digest.clone(),
            creation_time,
            submitter: submitter.clone(),
            reference: reference.clone(),
        });
        // Durability first: the entry becomes Present only once the
        // registration line is on disk.
        self.append_event(&mut state, &event)?;

        state.entries.insert(
            id.as_ref().to_string(),
            RegistryEntry {
                id: id.clone(),
                digest: digest.clone(),
                creation_time,
                submitter: submitter.clone(),
            },
        );

        Ok(LedgerReceipt {
            reference,
            creation_time,
        })
    }

    fn get(
        &self,
        id: &RecordId,
        requester: &SubmitterId,
    ) -> Result<Option<RegistryEntry>, LedgerError> {
        let mut state = self.state.lock().expect("ledger mutex poisoned");
        let event = LedgerEvent::Queried(QueryEvent {
            id: id.clone(),
            requester: requester.clone(),
        });
        self.append_event(&mut state, &event)?;
        Ok(state.entries.get(id.as_ref()).cloned())
    }

    fn exists(&self, id: &RecordId) -> Result<bool, LedgerError> {
        let state = self.state.lock().expect("ledger mutex poisoned");
        Ok(state.entries.contains_key(id.as_ref()))
    }

    fn verify(&self, id: &RecordId, candidate: &Digest) -> Result<bool, LedgerError> {
        let state = self.state.lock().expect("ledger mutex poisoned");
        Ok(state
            .entries
            .get(id.as_ref())
            .map(|entry| &entry.digest == candidate)
            .unwrap_or(false))
    }
}
