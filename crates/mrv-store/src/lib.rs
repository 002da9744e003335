//! Local file persistence for MRV record documents.
//!
//! Records are stored one JSON file per identifier (`{mrv_id}.json`),
//! pretty-printed with sorted keys for human readers. The file form is
//! never hashed or compared: any digest computation goes through the
//! canonical byte form in `mrv-canonical`.

#![deny(missing_docs)]

/// Error types for store operations.
pub mod error;
/// Directory-backed record store.
pub mod store;

pub use error::StoreError;
pub use store::RecordStore;
