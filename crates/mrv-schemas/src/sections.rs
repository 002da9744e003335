//! Record section types.

use mrv_canonical::Timestamp;
use serde::{Deserialize, Serialize};

/// Experiment identification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentInfo {
    /// Human-chosen experiment name.
    pub experiment_name: String,
    /// Model trained or evaluated.
    pub model_name: String,
    /// Dataset used.
    pub dataset_name: String,
}

/// Training configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingInfo {
    /// Number of training epochs, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epochs: Option<u64>,
    /// Training batch size, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u64>,
    /// Framework used (e.g. "PyTorch").
    pub framework: String,
}

/// Hardware the workload ran on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareInfo {
    /// GPU model name, or "None".
    pub gpu_type: String,
    /// Number of GPUs used.
    pub num_gpus: u32,
    /// CPU model name.
    pub cpu_type: String,
    /// Total system RAM in whole gigabytes.
    pub ram_gb: u64,
    /// Per-GPU memory in gigabytes (fractional; measured quantity).
    pub gpu_memory_gb: f64,
}

/// Energy and emissions measurements, consumed from the measurement source
/// as opaque numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyReport {
    /// Tool that produced the measurements (e.g. "CodeCarbon").
    pub measurement_tool: String,
    /// Energy consumed in kilowatt-hours. Float-typed: a zero measurement
    /// still canonicalizes as `0.0`.
    pub energy_kwh: f64,
    /// CO2-equivalent emissions in kilograms. Float-typed.
    pub co2_kg: f64,
    /// Wall-clock duration of the workload in whole seconds.
    pub duration_seconds: u64,
}

/// Start/end timestamps of the tracked window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// When tracking started (UTC RFC3339).
    pub start_time: Timestamp,
    /// When tracking stopped (UTC RFC3339).
    pub end_time: Timestamp,
}
