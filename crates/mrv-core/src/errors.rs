use thiserror::Error;

/// Verification failures that are not outcomes.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The record could not be reduced to a digest (serialization failure,
    /// unsupported schema version, uncanonicalizable structure). Fatal to
    /// this operation: without canonical bytes there is no basis for any
    /// of the three outcomes.
    #[error("record digest computation failed: {0}")]
    Digest(#[from] mrv_canonical::RecordDigestError),
    /// The registry could not be consulted.
    #[error("registry error: {0}")]
    Registry(#[from] mrv_registry::RegistryError),
}
