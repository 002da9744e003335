//! Thin registry client over a ledger.

use crate::entry::RegistryEntry;
use crate::errors::RegistryError;
use crate::ledger::{Ledger, LedgerReceipt};
use mrv_canonical::{Digest, RecordId, SubmitterId};

/// Client-side model of the registry contract.
///
/// A thin mapping over the [`Ledger`] collaborator: no locking, no caching.
/// The ledger is the single source of truth for what is anchored; keeping
/// a client-side "already anchored" map would only let the two disagree.
pub struct Registry<L: Ledger> {
    ledger: L,
    caller: SubmitterId,
}

impl<L: Ledger> Registry<L> {
    /// Creates a registry client acting as `caller`.
    ///
    /// `caller` is recorded as the submitter of create-mutations and the
    /// requester in query-audit events.
    pub fn new(ledger: L, caller: SubmitterId) -> Self {
        Self { ledger, caller }
    }

    /// The identity this client acts as.
    pub fn caller(&self) -> &SubmitterId {
        &self.caller
    }

    /// Registers `digest` under `id`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::ZeroDigest`] for the all-zero sentinel
    /// - [`RegistryError::DuplicateIdentifier`] when `id` is Present
    /// - [`RegistryError::Unavailable`] / [`RegistryError::Indeterminate`]
    ///   for transport failures and finality timeouts
    pub fn create(&self, id: &RecordId, digest: &Digest) -> Result<LedgerReceipt, RegistryError> {
        Ok(self.ledger.create(id, digest, &self.caller)?)
    }

    /// Reads the entry for `id`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] for an Absent identifier.
    pub fn get(&self, id: &RecordId) -> Result<RegistryEntry, RegistryError> {
        self.ledger
            .get(id, &self.caller)?
            .ok_or_else(|| RegistryError::NotFound {
                id: id.as_ref().to_string(),
            })
    }

    /// Existence check; no audit event.
    pub fn exists(&self, id: &RecordId) -> Result<bool, RegistryError> {
        Ok(self.ledger.exists(id)?)
    }

    /// Returns true iff `id` is Present with exactly `candidate`.
    ///
    /// False covers both Absent and mismatch; callers needing the
    /// distinction use [`exists`](Self::exists) + [`get`](Self::get).
    pub fn verify(&self, id: &RecordId, candidate: &Digest) -> Result<bool, RegistryError> {
        Ok(self.ledger.verify(id, candidate)?)
    }
}
