use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest as Sha2Digest, Sha256};
use std::fmt;

use crate::validation::ValidationError;

/// Supported digest algorithms for canonical identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigestAlg {
    /// SHA-256 (the only algorithm in the current wire format).
    #[serde(rename = "sha-256")]
    Sha256,
}

/// Algorithm + 32 digest bytes, encoded as lowercase hexadecimal.
///
/// The hex form is the wire representation compared by the registry; the
/// all-zero value is a sentinel meaning "no digest" and is never accepted
/// by `create`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digest {
    /// Digest algorithm (currently always `sha-256`).
    pub alg: DigestAlg,
    /// Lowercase hex digest bytes (64 characters).
    pub hex: String,
}

impl Digest {
    /// Constructs a validated digest from a lowercase hex string.
    pub fn new(alg: DigestAlg, hex: impl Into<String>) -> Result<Self, ValidationError> {
        let hex = hex.into();
        let re = Regex::new(r"^[0-9a-f]{64}$").expect("invalid regex");
        if !re.is_match(&hex) {
            return Err(ValidationError::PatternMismatch {
                field: "digest",
                value: hex,
            });
        }
        Ok(Digest { alg, hex })
    }

    /// Constructs a digest from 32 raw bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Digest {
            alg: DigestAlg::Sha256,
            hex: hex::encode(bytes),
        }
    }

    /// Hashes arbitrary bytes with SHA-256.
    ///
    /// Callers are responsible for passing canonical bytes; hashing
    /// non-canonical bytes produces a digest no verifier will reproduce.
    pub fn of_bytes(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        Self::from_bytes(hasher.finalize().into())
    }

    /// The all-zero sentinel digest.
    pub fn zero() -> Self {
        Self::from_bytes([0u8; 32])
    }

    /// Returns true for the all-zero sentinel.
    pub fn is_zero(&self) -> bool {
        self.hex.bytes().all(|b| b == b'0')
    }

    /// Decodes the digest into its 32 raw bytes.
    pub fn to_bytes(&self) -> Result<[u8; 32], ValidationError> {
        let raw = hex::decode(&self.hex).map_err(|_| ValidationError::PatternMismatch {
            field: "digest",
            value: self.hex.clone(),
        })?;
        let len = raw.len();
        raw.try_into()
            .map_err(|_| ValidationError::InvalidDigestLength(len))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex)
    }
}
