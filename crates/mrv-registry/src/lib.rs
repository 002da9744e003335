//! Append-only hash registry for MRV records.
//!
//! This crate provides:
//! - The [`Ledger`] trait: the black-box collaborator that serializes
//!   concurrent create-mutations and owns the authoritative clock
//! - [`Registry`]: a thin, cache-free client over a ledger exposing the
//!   create / get / exists / verify contract
//! - [`AnchorClient`]: submits a create-mutation and resolves it to a
//!   definite confirmed / rejected / indeterminate outcome
//! - [`MemoryLedger`] and [`FileLedger`] backends
//!
//! Core invariants:
//! - Per identifier, the only state transition is Absent -> Present;
//!   entries are never updated or deleted
//! - The registry performs no locking of its own: correctness of concurrent
//!   writes rests entirely on the ledger's linearizable create-per-key
//! - A timeout is never resolved into a false confirmed or false rejected
//!
#![deny(missing_docs)]

/// Anchoring client with definite-outcome resolution.
pub mod anchor;
/// Registry entry type.
pub mod entry;
/// Error types for ledger and registry operations.
pub mod errors;
/// Registration and query-audit events.
pub mod events;
/// File-backed append-only ledger.
pub mod file;
/// The ledger collaborator trait.
pub mod ledger;
/// In-memory reference ledger.
pub mod memory;
/// Thin registry client over a ledger.
pub mod registry;

pub use anchor::{AnchorClient, AnchorConfirmation, AnchorError, AnchorOptions, RejectReason};
pub use entry::RegistryEntry;
pub use errors::{LedgerError, RegistryError};
pub use events::{LedgerEvent, QueryEvent, RegistrationEvent};
pub use file::{FileLedger, FileLedgerOptions};
pub use ledger::{Ledger, LedgerReceipt};
pub use memory::MemoryLedger;
pub use registry::Registry;
