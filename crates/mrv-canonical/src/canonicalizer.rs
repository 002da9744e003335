use serde_json::Value;

use crate::hygiene::{HygieneReport, HygieneStatus, HygieneWarning};
use crate::identifiers::SchemaVersion;
use std::collections::BTreeMap;
use std::fmt;

/// Maximum nesting depth accepted by the canonicalizer.
pub const MAX_DEPTH: usize = 128;

/// Wire format versions this canonicalizer implements.
pub const SUPPORTED_SCHEMA_VERSIONS: &[&str] = &["1.0"];

/// Largest integer magnitude exactly representable in an f64 (2^53).
const MAX_EXACT_FLOAT_INT: u64 = 1 << 53;

/// Error returned when canonicalization fails.
#[derive(thiserror::Error, Debug)]
pub enum CanonicalizationError {
    /// Provided JSON could not be canonicalized.
    #[error("invalid JSON structure: {0}")]
    InvalidStructure(String),
    /// Non-finite number (NaN/Infinity) detected.
    #[error("non-finite number detected at {0}")]
    NonFiniteNumber(String),
    /// Nesting exceeds [`MAX_DEPTH`].
    #[error("nesting depth exceeds {MAX_DEPTH} at {0}")]
    DepthExceeded(String),
    /// The record declares a wire format version this canonicalizer does not implement.
    ///
    /// Unknown versions are rejected rather than guessed at: bytes produced
    /// under the wrong rules would hash to a digest no other party can check.
    #[error("unsupported schema version '{declared}' (supported: {supported})")]
    UnsupportedSchemaVersion {
        /// Version string the record declared.
        declared: String,
        /// Comma-separated list of versions this build understands.
        supported: String,
    },
    /// The record is missing its `schema_version` field.
    #[error("record has no schema_version field")]
    MissingSchemaVersion,
}

/// Result of canonicalization.
#[derive(Debug)]
pub struct CanonicalizationResult {
    /// Canonical UTF-8 bytes for the input value.
    pub bytes: Vec<u8>,
    /// Hygiene report describing validation of the input.
    pub report: HygieneReport,
}

/// Helper for building JSON paths during validation.
#[derive(Debug, Clone)]
struct Path {
    segments: Vec<String>,
}

impl Path {
    fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    fn push_field(&self, field: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(field.to_string());
        Self { segments }
    }

    fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(format!("[{}]", index));
        Self { segments }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "root")
        } else {
            write!(f, "{}", self.segments.join("."))
        }
    }
}

/// Canonicalizer that emits deterministic bytes.
///
/// The wire rules are fixed per schema version:
/// - object keys sorted by exact code-point order, insertion order discarded
/// - array element order preserved
/// - `"` and `\` escaped, control characters as `\b \t \n \f \r` or `\u00XX`,
///   non-ASCII emitted as raw UTF-8
/// - integers render with no fractional part; floats render in shortest
///   round-trip decimal form, which always carries a decimal point or an
///   exponent (a zero-valued float is `0.0`, never `0`)
/// - no whitespace; `,` between entries, `:` between key and value
pub struct Canonicalizer {
    version: SchemaVersion,
}

impl Canonicalizer {
    /// Creates a canonicalizer for the provided wire format version.
    pub fn new(version: SchemaVersion) -> Self {
        Self { version }
    }

    /// Produces canonical bytes + hygiene report for an arbitrary value tree.
    pub fn canonicalize(
        &self,
        value: &Value,
    ) -> Result<CanonicalizationResult, CanonicalizationError> {
        let mut report = HygieneReport {
            status: HygieneStatus::Ok,
            warnings: vec![],
            metrics: BTreeMap::new(),
            schema_version: self.version.clone(),
        };

        if let Err(e) = self.validate(value, Path::root(), 0, &mut report) {
            report.status = HygieneStatus::Invalid;
            return Err(e);
        }
        if !report.warnings.is_empty() {
            report.status = HygieneStatus::Lossy;
        }

        let mut bytes = Vec::new();
        write_canonical(value, &mut bytes);

        Ok(CanonicalizationResult { bytes, report })
    }

    /// Canonicalizes a full record, enforcing its declared `schema_version`.
    ///
    /// Records pin the canonicalization rules that apply to them; a version
    /// this build does not implement is a hard error, never a silent guess.
    pub fn canonicalize_record(
        &self,
        record: &Value,
    ) -> Result<CanonicalizationResult, CanonicalizationError> {
        let declared = record
            .get("schema_version")
            .and_then(|v| v.as_str())
            .ok_or(CanonicalizationError::MissingSchemaVersion)?;
        if !SUPPORTED_SCHEMA_VERSIONS.contains(&declared) {
            return Err(CanonicalizationError::UnsupportedSchemaVersion {
                declared: declared.to_string(),
                supported: SUPPORTED_SCHEMA_VERSIONS.join(", "),
            });
        }
        self.canonicalize(record)
    }

    /// Validates the JSON value tree and populates hygiene metrics.
    fn validate(
        &self,
        value: &Value,
        path: Path,
        depth: usize,
        report: &mut HygieneReport,
    ) -> Result<(), CanonicalizationError> {
        if depth > MAX_DEPTH {
            return Err(CanonicalizationError::DepthExceeded(format!("{}", path)));
        }
        let max_depth = report.metrics.entry("max_depth".to_string()).or_insert(0);
        if depth as u64 > *max_depth {
            *max_depth = depth as u64;
        }

        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    self.validate(child, path.push_field(key), depth + 1, report)?;
                }
                Ok(())
            }
            Value::Array(items) => {
                for (idx, item) in items.iter().enumerate() {
                    self.validate(item, path.push_index(idx), depth + 1, report)?;
                }
                Ok(())
            }
            Value::Number(num) => {
                if num.is_f64() {
                    // serde_json cannot normally hold NaN/Infinity, but the
                    // check matches the wire rule rather than one parser.
                    let f = num.as_f64().unwrap_or(f64::NAN);
                    if !f.is_finite() {
                        report.warnings.push(HygieneWarning::new("NonFiniteNumber"));
                        return Err(CanonicalizationError::NonFiniteNumber(format!("{}", path)));
                    }
                    report
                        .metrics
                        .entry("float_fields".to_string())
                        .and_modify(|count| *count += 1)
                        .or_insert(1);
                } else {
                    report
                        .metrics
                        .entry("integer_fields".to_string())
                        .and_modify(|count| *count += 1)
                        .or_insert(1);
                    // Integers past 2^53 canonicalize exactly here but are
                    // mangled by consumers that parse numbers into floats.
                    let in_exact_range = num
                        .as_i64()
                        .map(|v| v.unsigned_abs() <= MAX_EXACT_FLOAT_INT)
                        .unwrap_or_else(|| {
                            num.as_u64().is_some_and(|v| v <= MAX_EXACT_FLOAT_INT)
                        });
                    if !in_exact_range {
                        report
                            .warnings
                            .push(HygieneWarning::new("IntegerPrecisionRisk"));
                    }
                }
                Ok(())
            }
            Value::String(_) | Value::Bool(_) | Value::Null => Ok(()),
        }
    }
}

/// Writes the canonical form of a value into `out`.
///
/// `serde_json::Value` objects are `BTreeMap`-backed, so iteration order is
/// already exact code-point key order; numbers preserve the integer/float
/// distinction of the typed schema they were serialized from.
fn write_canonical(value: &Value, out: &mut Vec<u8>) {
    match value {
        Value::Null => out.extend_from_slice(b"null"),
        Value::Bool(true) => out.extend_from_slice(b"true"),
        Value::Bool(false) => out.extend_from_slice(b"false"),
        Value::Number(num) => {
            // Integers render plain; floats via ryu shortest round-trip,
            // which always keeps the decimal point or exponent marker.
            out.extend_from_slice(num.to_string().as_bytes());
        }
        Value::String(s) => write_escaped_string(s, out),
        Value::Array(items) => {
            out.push(b'[');
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    out.push(b',');
                }
                write_canonical(item, out);
            }
            out.push(b']');
        }
        Value::Object(map) => {
            out.push(b'{');
            for (idx, (key, child)) in map.iter().enumerate() {
                if idx > 0 {
                    out.push(b',');
                }
                write_escaped_string(key, out);
                out.push(b':');
                write_canonical(child, out);
            }
            out.push(b'}');
        }
    }
}

/// Writes a string with the fixed escaping rule.
fn write_escaped_string(s: &str, out: &mut Vec<u8>) {
    out.push(b'"');
    for c in s.chars() {
        match c {
            '"' => out.extend_from_slice(b"\\\""),
            '\\' => out.extend_from_slice(b"\\\\"),
            '\u{08}' => out.extend_from_slice(b"\\b"),
            '\t' => out.extend_from_slice(b"\\t"),
            '\n' => out.extend_from_slice(b"\\n"),
            '\u{0c}' => out.extend_from_slice(b"\\f"),
            '\r' => out.extend_from_slice(b"\\r"),
            c if (c as u32) < 0x20 => {
                out.extend_from_slice(format!("\\u{:04x}", c as u32).as_bytes());
            }
            // Non-ASCII goes out as raw UTF-8; escaping it is
            // implementation-specific and breaks cross-language hashing.
            c => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
        }
    }
    out.push(b'"');
}
