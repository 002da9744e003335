//! The verifier and its outcome type.

use crate::errors::CoreError;
use mrv_canonical::{compute_record_digest, Canonicalizer, Digest, RecordId};
use mrv_registry::{Ledger, Registry, RegistryError};
use serde::Serialize;
use std::fmt;

/// Outcome of verifying a record against its claimed identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// The registry holds exactly the recomputed digest.
    Valid,
    /// The identifier is registered but the digests differ: the record
    /// changed since it was anchored.
    Tampered,
    /// The identifier was never anchored.
    NotFound,
}

impl fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationOutcome::Valid => write!(f, "VALID"),
            VerificationOutcome::Tampered => write!(f, "TAMPERED"),
            VerificationOutcome::NotFound => write!(f, "NOT_FOUND"),
        }
    }
}

/// Recomputes record digests and classifies them against the registry.
pub struct Verifier {
    canonicalizer: Canonicalizer,
}

impl Verifier {
    /// Creates a verifier over the given canonicalizer.
    pub fn new(canonicalizer: Canonicalizer) -> Self {
        Self { canonicalizer }
    }

    /// Computes the digest the verifier would compare for `record`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Digest`] when the record cannot be
    /// canonicalized (including an unsupported `schema_version`).
    pub fn digest_of<T: Serialize>(&self, record: &T) -> Result<Digest, CoreError> {
        Ok(compute_record_digest(record, &self.canonicalizer)?)
    }

    /// Verifies `record` against the entry anchored under `claimed_id`.
    ///
    /// Safe to call any number of times with identical results; the only
    /// side effect is the registry's own query-audit event.
    ///
    /// # Errors
    ///
    /// Infrastructure failures only: an uncanonicalizable record or an
    /// unreachable ledger. Absent identifiers and digest mismatches are
    /// reported as outcomes, not errors.
    pub fn verify_record<T: Serialize, L: Ledger>(
        &self,
        record: &T,
        claimed_id: &RecordId,
        registry: &Registry<L>,
    ) -> Result<VerificationOutcome, CoreError> {
        let digest = self.digest_of(record)?;

        if !registry.exists(claimed_id)? {
            return Ok(VerificationOutcome::NotFound);
        }

        let entry = match registry.get(claimed_id) {
            Ok(entry) => entry,
            // exists and get are separate round trips; an entry reported
            // absent by either is NOT_FOUND.
            Err(RegistryError::NotFound { .. }) => return Ok(VerificationOutcome::NotFound),
            Err(e) => return Err(e.into()),
        };

        if entry.digest == digest {
            Ok(VerificationOutcome::Valid)
        } else {
            Ok(VerificationOutcome::Tampered)
        }
    }
}
