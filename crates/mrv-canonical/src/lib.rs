//! Canonical wire form and digest primitives for MRV records.
//!
//! Producers and verifiers of MRV records never share a runtime, so the only
//! thing they can agree on is bytes. This crate defines the versioned
//! canonical byte encoding of a record (key ordering, string escaping,
//! integer-vs-float numeric rendering) and the SHA-256 digest computed over
//! it. Every field that participates in hashing or verification lives here.
//!
#![deny(missing_docs)]

/// Canonicalization into deterministic bytes.
pub mod canonicalizer;
/// Digest type and SHA-256 hashing.
pub mod digest;
/// Hygiene report types emitted during canonicalization.
pub mod hygiene;
/// Validated identifier newtypes.
pub mod identifiers;
/// Record digest computation (serialize, canonicalize, hash).
pub mod record_digest;
/// Validation helpers used by canonical types.
pub mod validation;

pub use canonicalizer::{CanonicalizationError, CanonicalizationResult, Canonicalizer};
pub use digest::{Digest, DigestAlg};
pub use hygiene::{HygieneReport, HygieneStatus, HygieneWarning};
pub use identifiers::{RecordId, SchemaVersion, SubmitterId, Timestamp};
pub use record_digest::{compute_record_digest, verify_record_digest, RecordDigestError};
pub use validation::ValidationError;
