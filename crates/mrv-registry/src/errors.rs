use thiserror::Error;

/// Errors surfaced by ledger backends.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The identifier is already Present; Present is terminal.
    #[error("identifier '{0}' is already registered")]
    AlreadyExists(String),
    /// The all-zero sentinel digest was offered to `create`.
    #[error("refusing to register the all-zero sentinel digest")]
    ZeroDigest,
    /// The mutation executed but was reverted by a ledger-level policy.
    #[error("mutation reverted by ledger policy: {0}")]
    PolicyRejected(String),
    /// Transport or connectivity failure; the mutation was not submitted.
    /// Recoverable: callers should retry with backoff.
    #[error("ledger unavailable: {0}")]
    Unavailable(String),
    /// The ledger produced no definite answer within its timeout window.
    /// The mutation may or may not have executed; callers must re-query
    /// before retrying.
    #[error("no finality within the timeout window")]
    Timeout,
    /// I/O failure in a file-backed ledger.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The ledger's persistent state could not be parsed.
    #[error("corrupt ledger state: {0}")]
    Corrupt(String),
}

/// Error taxonomy of the registry contract.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// `create` on an already-Present identifier.
    #[error("duplicate identifier '{id}'")]
    DuplicateIdentifier {
        /// Identifier that is already registered.
        id: String,
    },
    /// Attempted to anchor the null/placeholder digest.
    #[error("zero digest rejected")]
    ZeroDigest,
    /// The mutation executed but was reverted by a ledger-level policy.
    #[error("mutation reverted by ledger policy: {0}")]
    PolicyRejected(String),
    /// Query against an Absent identifier.
    #[error("identifier '{id}' not found")]
    NotFound {
        /// Identifier that was queried.
        id: String,
    },
    /// Transport failure talking to the ledger.
    #[error("ledger unavailable: {0}")]
    Unavailable(String),
    /// The ledger gave no definite answer; the true outcome is unknown
    /// until the identifier is re-queried.
    #[error("indeterminate ledger outcome")]
    Indeterminate,
}

impl From<LedgerError> for RegistryError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::AlreadyExists(id) => RegistryError::DuplicateIdentifier { id },
            LedgerError::ZeroDigest => RegistryError::ZeroDigest,
            LedgerError::PolicyRejected(reason) => RegistryError::PolicyRejected(reason),
            LedgerError::Unavailable(reason) => RegistryError::Unavailable(reason),
            LedgerError::Timeout => RegistryError::Indeterminate,
            LedgerError::Io(e) => RegistryError::Unavailable(e.to_string()),
            LedgerError::Corrupt(reason) => RegistryError::Unavailable(reason),
        }
    }
}
