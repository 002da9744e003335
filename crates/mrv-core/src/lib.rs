//! Verification protocol for anchored MRV records.
//!
//! Given a record and a claimed identifier, the verifier recomputes the
//! record's digest through the canonical byte form and classifies it against
//! the registry into one of three outcomes: valid, tampered, or not found.
//!
//! Core invariants:
//! - Tampered and not-found are ordinary outcomes of the contract, never
//!   errors; only infrastructure failures and uncanonicalizable input err
//! - Verification is read-only and idempotent, modulo the registry's own
//!   query-audit event
//!
#![deny(missing_docs)]

/// Error types for verification.
pub mod errors;
/// The verifier and its outcome type.
pub mod verifier;

pub use errors::CoreError;
pub use verifier::{VerificationOutcome, Verifier};
