//! Record digest computation.
//!
//! The digest of a record is `sha256(canonical_bytes(record))` with no salt
//! and no domain separator: the canonical bytes are the whole contract, and
//! any independent implementation that reproduces them reproduces the digest.

use crate::{Canonicalizer, Digest};
use serde::Serialize;
use serde_json::Value;

/// Computes the digest of a record.
///
/// The record is serialized to a JSON value, canonicalized under its
/// declared `schema_version`, and hashed. Works for both typed record
/// structs and already-parsed `serde_json::Value` documents.
///
/// # Errors
///
/// Returns [`RecordDigestError`] if serialization fails, the record declares
/// an unsupported schema version, or the value tree cannot be canonicalized.
pub fn compute_record_digest<T: Serialize>(
    record: &T,
    canonicalizer: &Canonicalizer,
) -> Result<Digest, RecordDigestError> {
    let value: Value =
        serde_json::to_value(record).map_err(|e| RecordDigestError::Serialization(e.to_string()))?;
    let result = canonicalizer.canonicalize_record(&value)?;
    Ok(Digest::of_bytes(&result.bytes))
}

/// Error during record digest computation.
#[derive(thiserror::Error, Debug)]
pub enum RecordDigestError {
    /// Serialization failed.
    #[error("serialization failed: {0}")]
    Serialization(String),
    /// Canonicalization failed.
    #[error("canonicalization failed: {0}")]
    Canonicalization(#[from] crate::CanonicalizationError),
}

/// Verifies that a claimed digest matches the computed record digest.
///
/// # Errors
///
/// Returns [`RecordDigestError`] if computation fails.
pub fn verify_record_digest<T: Serialize>(
    record: &T,
    claimed: &Digest,
    canonicalizer: &Canonicalizer,
) -> Result<bool, RecordDigestError> {
    let computed = compute_record_digest(record, canonicalizer)?;
    Ok(claimed == &computed)
}
