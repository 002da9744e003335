//! In-memory reference ledger.

use crate::entry::RegistryEntry;
use crate::errors::LedgerError;
use crate::events::{LedgerEvent, QueryEvent, RegistrationEvent};
use crate::ledger::{Ledger, LedgerReceipt};
use mrv_canonical::{Digest, RecordId, SubmitterId};
use std::collections::BTreeMap;
use std::sync::Mutex;

fn wall_clock() -> u64 {
    let now = chrono::Utc::now().timestamp();
    u64::try_from(now).unwrap_or(0)
}

#[derive(Default)]
struct MemoryState {
    entries: BTreeMap<String, RegistryEntry>,
    events: Vec<LedgerEvent>,
    next_seq: u64,
}

/// In-memory ledger with linearizable create-per-key.
///
/// The single mutex is the whole consensus layer: every mutation observes
/// a consistent Absent/Present state, so of two racing creates exactly one
/// wins. Suitable for tests and for embedding the registry in-process.
pub struct MemoryLedger {
    state: Mutex<MemoryState>,
    clock: fn() -> u64,
}

impl MemoryLedger {
    /// Creates an empty ledger using the wall clock.
    pub fn new() -> Self {
        Self::with_clock(wall_clock)
    }

    /// Creates an empty ledger with an injected clock (for deterministic tests).
    pub fn with_clock(clock: fn() -> u64) -> Self {
        Self {
            state: Mutex::new(MemoryState::default()),
            clock,
        }
    }

    /// Returns a copy of all observable events emitted so far.
    pub fn events(&self) -> Vec<LedgerEvent> {
        self.state.lock().expect("ledger mutex poisoned").events.clone()
    }

    /// Drains and returns the observable event log.
    pub fn take_events(&self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.state.lock().expect("ledger mutex poisoned").events)
    }
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger for MemoryLedger {
    fn create(
        &self,
        id: &RecordId,
        digest: &Digest,
        submitter: &SubmitterId,
    ) -> Result<LedgerReceipt, LedgerError> {
        // Sentinel check precedes the existence check: a zero digest always
        // fails with ZeroDigest, even for a taken identifier.
        if digest.is_zero() {
            return Err(LedgerError::ZeroDigest);
        }

        let mut state = self.state.lock().expect("ledger mutex poisoned");
        if state.entries.contains_key(id.as_ref()) {
            return Err(LedgerError::AlreadyExists(id.as_ref().to_string()));
        }

        let creation_time = (self.clock)();
        state.next_seq += 1;
        let reference = format!("mem-{:06}", state.next_seq);

        let entry = RegistryEntry {
            id: id.clone(),
            digest: digest.clone(),
            creation_time,
            submitter: submitter.clone(),
        };
        state.entries.insert(id.as_ref().to_string(), entry);
        state.events.push(LedgerEvent::Registered(RegistrationEvent {
            id: id.clone(),
            digest: digest.clone(),
            creation_time,
            submitter: submitter.clone(),
            reference: reference.clone(),
        }));

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
        state.events.push(LedgerEvent::Queried(QueryEvent {
            id: id.clone(),
            requester: requester.clone(),
        }));
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
