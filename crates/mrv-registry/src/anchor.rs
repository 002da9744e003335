//! Anchoring client with definite-outcome resolution.

use crate::errors::RegistryError;
use crate::ledger::Ledger;
use crate::registry::Registry;
use mrv_canonical::{Digest, RecordId};
use std::time::Duration;

/// Options controlling anchor submission.
#[derive(Debug, Clone)]
pub struct AnchorOptions {
    /// Maximum number of create submissions (default: 3).
    pub max_attempts: u32,
    /// Initial backoff between attempts, doubled each retry (default: 500ms).
    pub initial_backoff: Duration,
}

impl Default for AnchorOptions {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(500),
        }
    }
}

/// A confirmed anchor: the registry transitioned Absent -> Present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorConfirmation {
    /// Ledger reference for the executed mutation. `None` when confirmation
    /// was recovered by re-query after an indeterminate submission, in which
    /// case the original receipt was lost with the timeout.
    pub ledger_reference: Option<String>,
    /// Ledger clock time of the registration (Unix seconds).
    pub creation_time: u64,
}

/// Why the ledger rejected an executed mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    /// The identifier is already Present. `stored` is the anchored digest
    /// when it could be fetched, letting callers tell an idempotent
    /// re-anchor from a genuine conflict.
    #[error("identifier already anchored")]
    Duplicate {
        /// Digest currently anchored under the identifier, if readable.
        stored: Option<Digest>,
    },
    /// The all-zero sentinel digest was offered.
    #[error("zero digest")]
    ZeroDigest,
    /// Ledger-level policy revert.
    #[error("ledger policy: {0}")]
    Policy(String),
}

/// Terminal failure outcomes of an anchor operation.
#[derive(Debug, thiserror::Error)]
pub enum AnchorError {
    /// The mutation executed and was reverted.
    #[error("anchor rejected: {0}")]
    Rejected(RejectReason),
    /// No definite ledger answer within the attempt budget. The identifier
    /// must be re-queried before deciding to retry.
    #[error("indeterminate outcome for '{id}'; re-query before retrying")]
    Indeterminate {
        /// Identifier whose outcome is unknown.
        id: String,
    },
    /// Transport failure that survived the retry budget.
    #[error("ledger unavailable after {attempts} attempts: {reason}")]
    Unavailable {
        /// Number of submissions attempted.
        attempts: u32,
        /// Last transport failure.
        reason: String,
    },
}

impl AnchorError {
    /// True when this is a duplicate rejection whose stored digest equals
    /// `digest`: anchoring already happened, so callers may treat the
    /// operation as a successful no-op.
    pub fn is_already_anchored(&self, digest: &Digest) -> bool {
        matches!(
            self,
            AnchorError::Rejected(RejectReason::Duplicate {
                stored: Some(stored)
            }) if stored == digest
        )
    }
}

/// Submits create-mutations and resolves them to definite outcomes.
///
/// The client retries transport failures with doubling backoff, and never
/// resubmits after a finality timeout without first re-checking whether the
/// original mutation landed. Retrying blindly would risk a spurious
/// duplicate rejection for an anchor that actually succeeded.
pub struct AnchorClient<'a, L: Ledger> {
    registry: &'a Registry<L>,
    options: AnchorOptions,
}

impl<'a, L: Ledger> AnchorClient<'a, L> {
    /// Creates an anchor client over a registry with default options.
    pub fn new(registry: &'a Registry<L>) -> Self {
        Self::with_options(registry, AnchorOptions::default())
    }

    /// Creates an anchor client with explicit options.
    pub fn with_options(registry: &'a Registry<L>, options: AnchorOptions) -> Self {
        Self { registry, options }
    }

    /// Anchors `digest` under `id`, blocking until a terminal outcome.
    ///
    /// Calling `anchor` twice with the same `(id, digest)` is safe: the
    /// second call fails with a duplicate rejection for which
    /// [`AnchorError::is_already_anchored`] returns true.
    pub fn anchor(
        &self,
        id: &RecordId,
        digest: &Digest,
    ) -> Result<AnchorConfirmation, AnchorError> {
        // Local precheck; the ledger enforces the same rule authoritatively.
        if digest.is_zero() {
            return Err(AnchorError::Rejected(RejectReason::ZeroDigest));
        }

        let mut backoff = self.options.initial_backoff;
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            match self.registry.create(id, digest) {
                Ok(receipt) => {
                    return Ok(AnchorConfirmation {
                        ledger_reference: Some(receipt.reference),
                        creation_time: receipt.creation_time,
                    });
                }
                Err(RegistryError::ZeroDigest) => {
                    return Err(AnchorError::Rejected(RejectReason::ZeroDigest));
                }
                Err(RegistryError::PolicyRejected(reason)) => {
                    return Err(AnchorError::Rejected(RejectReason::Policy(reason)));
                }
                Err(RegistryError::DuplicateIdentifier { .. }) => {
                    let stored = self.registry.get(id).ok().map(|entry| entry.digest);
                    return Err(AnchorError::Rejected(RejectReason::Duplicate { stored }));
                }
                Err(RegistryError::Unavailable(reason)) => {
                    if attempt >= self.options.max_attempts {
                        return Err(AnchorError::Unavailable {
                            attempts: attempt,
                            reason,
                        });
                    }
                }
                Err(RegistryError::Indeterminate) => {
                    // The mutation may have landed; re-query before anything else.
                    if let Some(outcome) = self.resolve_after_timeout(id, digest, attempt)? {
                        return Ok(outcome);
                    }
                    // Still Absent: resubmitting is safe.
                    if attempt >= self.options.max_attempts {
                        return Err(AnchorError::Indeterminate {
                            id: id.as_ref().to_string(),
                        });
                    }
                }
                Err(RegistryError::NotFound { .. }) => {
                    // create never reports NotFound; treat as a broken transport.
                    return Err(AnchorError::Unavailable {
                        attempts: attempt,
                        reason: "unexpected not-found from create".to_string(),
                    });
                }
            }

            std::thread::sleep(backoff);
            backoff = backoff.saturating_mul(2);
        }
    }

    /// After a finality timeout, learns the true outcome by re-query.
    ///
    /// Returns `Ok(Some(..))` when the digest is anchored (our submission
    /// landed, or an identical one won), `Ok(None)` when the identifier is
    /// still Absent, and a duplicate rejection when another digest won.
    fn resolve_after_timeout(
        &self,
        id: &RecordId,
        digest: &Digest,
        attempt: u32,
    ) -> Result<Option<AnchorConfirmation>, AnchorError> {
        let present = self.registry.exists(id).map_err(|e| AnchorError::Unavailable {
            attempts: attempt,
            reason: e.to_string(),
        })?;
        if !present {
            return Ok(None);
        }

        let entry = self.registry.get(id).map_err(|e| AnchorError::Unavailable {
            attempts: attempt,
            reason: e.to_string(),
        })?;
        if &entry.digest == digest {
            Ok(Some(AnchorConfirmation {
                ledger_reference: None,
                creation_time: entry.creation_time,
            }))
        } else {
            Err(AnchorError::Rejected(RejectReason::Duplicate {
                stored: Some(entry.digest),
            }))
        }
    }
}
