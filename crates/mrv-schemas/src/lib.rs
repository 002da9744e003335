//! Typed MRV record document schema.
//!
//! Every numeric field in the record carries an explicit integer-or-float
//! type: counters and durations are unsigned integers, measured quantities
//! are `f64`. The canonical wire form renders the two differently, so the
//! distinction must live here in the schema rather than be patched into
//! serialized text after the fact.

#![deny(missing_docs)]

pub mod record;
pub mod sections;

pub use record::{MrvRecord, RecordValidationError, CURRENT_SCHEMA_VERSION};
pub use sections::{EnergyReport, ExperimentInfo, HardwareInfo, TimeWindow, TrainingInfo};
