//! The MRV record document.

use crate::sections::{EnergyReport, ExperimentInfo, HardwareInfo, TimeWindow, TrainingInfo};
use mrv_canonical::{RecordId, SchemaVersion};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire format version emitted by this build.
pub const CURRENT_SCHEMA_VERSION: &str = "1.0";

/// A structured MRV (measurement / reporting / verification) record.
///
/// The typed fields are the canonicalization-sensitive part of the document;
/// `metadata` is an arbitrary payload the core treats as untyped structured
/// data. The pretty-printed file form of this record is for humans only;
/// hashing always goes through the canonical byte form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MrvRecord {
    /// Canonical wire format version that applies to this record.
    pub schema_version: SchemaVersion,
    /// Producer-chosen unique identifier.
    pub mrv_id: RecordId,
    /// Experiment identification.
    pub experiment: ExperimentInfo,
    /// Training configuration.
    pub training: TrainingInfo,
    /// Hardware description.
    pub hardware: HardwareInfo,
    /// Energy and emissions measurements.
    pub energy_emissions: EnergyReport,
    /// Tracked time window.
    pub timestamps: TimeWindow,
    /// Arbitrary additional payload, hashed as-is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Structural validation failure for an untyped record document.
#[derive(Debug, thiserror::Error)]
pub enum RecordValidationError {
    /// The document is not a JSON object.
    #[error("record is not a JSON object")]
    NotAnObject,
    /// A required top-level section is missing.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
}

impl MrvRecord {
    /// Checks that an untyped document has the required record structure.
    ///
    /// Used before hashing documents that arrive as raw JSON (e.g. loaded
    /// from disk by a verifier that was not the producer).
    pub fn validate_structure(value: &Value) -> Result<(), RecordValidationError> {
        let obj = value
            .as_object()
            .ok_or(RecordValidationError::NotAnObject)?;

        const REQUIRED: &[&str] = &[
            "schema_version",
            "mrv_id",
            "experiment",
            "training",
            "hardware",
            "energy_emissions",
            "timestamps",
        ];
        for field in REQUIRED {
            if !obj.contains_key(*field) {
                return Err(RecordValidationError::MissingField(field));
            }
        }

        if value.pointer("/experiment/experiment_name").is_none() {
            return Err(RecordValidationError::MissingField(
                "experiment.experiment_name",
            ));
        }
        if value.pointer("/energy_emissions/energy_kwh").is_none() {
            return Err(RecordValidationError::MissingField(
                "energy_emissions.energy_kwh",
            ));
        }
        if value.pointer("/timestamps/start_time").is_none() {
            return Err(RecordValidationError::MissingField("timestamps.start_time"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mrv_canonical::Timestamp;
    use serde_json::json;

    fn make_record() -> MrvRecord {
        MrvRecord {
            schema_version: SchemaVersion::parse(CURRENT_SCHEMA_VERSION).unwrap(),
            mrv_id: RecordId::parse("MRV-001").unwrap(),
            experiment: ExperimentInfo {
                experiment_name: "resnet-baseline".to_string(),
                model_name: "resnet18".to_string(),
                dataset_name: "cifar10".to_string(),
            },
            training: TrainingInfo {
                epochs: Some(10),
                batch_size: Some(64),
                framework: "PyTorch".to_string(),
            },
            hardware: HardwareInfo {
                gpu_type: "None".to_string(),
                num_gpus: 0,
                cpu_type: "test-cpu".to_string(),
                ram_gb: 16,
                gpu_memory_gb: 0.0,
            },
            energy_emissions: EnergyReport {
                measurement_tool: "CodeCarbon".to_string(),
                energy_kwh: 0.5,
                co2_kg: 0.0,
                duration_seconds: 3600,
            },
            timestamps: TimeWindow {
                start_time: Timestamp::parse("2024-01-01T00:00:00Z").unwrap(),
                end_time: Timestamp::parse("2024-01-01T01:00:00Z").unwrap(),
            },
            metadata: None,
        }
    }

    #[test]
    fn serialized_record_keeps_float_typing() {
        let record = make_record();
        let value = serde_json::to_value(&record).unwrap();
        // Zero-valued measurements must stay float-typed through serde.
        assert!(value["energy_emissions"]["co2_kg"].is_f64());
        assert!(value["hardware"]["gpu_memory_gb"].is_f64());
        assert!(value["energy_emissions"]["duration_seconds"].is_u64());
    }

    #[test]
    fn serialized_record_passes_structural_validation() {
        let value = serde_json::to_value(make_record()).unwrap();
        MrvRecord::validate_structure(&value).unwrap();
    }

    #[test]
    fn validation_rejects_missing_sections() {
        let mut value = serde_json::to_value(make_record()).unwrap();
        value.as_object_mut().unwrap().remove("energy_emissions");
        assert!(matches!(
            MrvRecord::validate_structure(&value),
            Err(RecordValidationError::MissingField("energy_emissions"))
        ));
        assert!(matches!(
            MrvRecord::validate_structure(&json!( [1, 2] )),
            Err(RecordValidationError::NotAnObject)
        ));
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = make_record();
        let text = serde_json::to_string(&record).unwrap();
        let back: MrvRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(record, back);
    }
}
