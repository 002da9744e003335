//! The ledger collaborator trait.

use crate::entry::RegistryEntry;
use crate::errors::LedgerError;
use mrv_canonical::{Digest, RecordId, SubmitterId};
use std::sync::Arc;

/// Receipt for an executed create-mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerReceipt {
    /// Opaque reference to the executed mutation (transaction hash,
    /// sequence number, ...).
    pub reference: String,
    /// Ledger clock time the mutation executed (Unix seconds).
    pub creation_time: u64,
}

/// The external consensus/finality collaborator the registry is built on.
///
/// Implementations must provide linearizable `create` semantics per
/// identifier: of two concurrent creates for the same id, exactly one
/// observes Absent and succeeds, the other fails with `AlreadyExists`.
/// The registry never replicates or second-guesses that serialization.
///
/// `create` blocks until the ledger reports finality; implementations with
/// a real transport enforce their own timeout window and return
/// [`LedgerError::Timeout`] when it elapses without a definite answer.
pub trait Ledger: Send + Sync {
    /// Registers `digest` under `id`, recording the submitter and the
    /// ledger clock time, and emits a durable registration event.
    ///
    /// Fails with `ZeroDigest` for the all-zero sentinel and with
    /// `AlreadyExists` when the identifier is Present.
    fn create(
        &self,
        id: &RecordId,
        digest: &Digest,
        submitter: &SubmitterId,
    ) -> Result<LedgerReceipt, LedgerError>;

    /// Reads the entry for `id`, emitting a query-audit event.
    ///
    /// Returns `None` for an Absent identifier (the on-ledger all-zero
    /// sentinel). Never mutates entry state.
    fn get(
        &self,
        id: &RecordId,
        requester: &SubmitterId,
    ) -> Result<Option<RegistryEntry>, LedgerError>;

    /// Pure existence check; emits no event.
    fn exists(&self, id: &RecordId) -> Result<bool, LedgerError>;

    /// Returns true iff `id` is Present and its digest equals `candidate`.
    ///
    /// Deliberately does not distinguish Absent from mismatch; callers that
    /// need the distinction use `exists` + `get`. Emits no event.
    fn verify(&self, id: &RecordId, candidate: &Digest) -> Result<bool, LedgerError>;
}

impl<L: Ledger + ?Sized> Ledger for Arc<L> {
    fn create(
        &self,
        id: &RecordId,
        digest: &Digest,
        submitter: &SubmitterId,
    ) -> Result<LedgerReceipt, LedgerError> {
        (**self).create(id, digest, submitter)
    }

    fn get(
        &self,
        id: &RecordId,
        requester: &SubmitterId,
    ) -> Result<Option<RegistryEntry>, LedgerError> {
        (**self).get(id, requester)
    }

    fn exists(&self, id: &RecordId) -> Result<bool, LedgerError> {
        (**self).exists(id)
    }

    fn verify(&self, id: &RecordId, candidate: &Digest) -> Result<bool, LedgerError> {
        (**self).verify(id, candidate)
    }
}

impl<L: Ledger + ?Sized> Ledger for &L {
    fn create(
        &self,
        id: &RecordId,
        digest: &Digest,
        submitter: &SubmitterId,
    ) -> Result<LedgerReceipt, LedgerError> {
        (**self).create(id, digest, submitter)
    }

    fn get(
        &self,
        id: &RecordId,
        requester: &SubmitterId,
    ) -> Result<Option<RegistryEntry>, LedgerError> {
        (**self).get(id, requester)
    }

    fn exists(&self, id: &RecordId) -> Result<bool, LedgerError> {
        (**self).exists(id)
    }

    fn verify(&self, id: &RecordId, candidate: &Digest) -> Result<bool, LedgerError> {
        (**self).verify(id, candidate)
    }
}
