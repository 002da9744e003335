use mrv_canonical::{Digest, RecordId, SubmitterId};
use serde::{Deserialize, Serialize};

/// Durable, publicly observable event emitted by a successful registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationEvent {
    /// Registered identifier.
    pub id: RecordId,
    /// Anchored digest.
    pub digest: Digest,
    /// Ledger clock time of the registration (Unix seconds).
    pub creation_time: u64,
    /// Caller that submitted the mutation.
    pub submitter: SubmitterId,
    /// Ledger reference for the executed mutation.
    pub reference: String,
}

/// Query-observability event emitted by `get` for audit purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryEvent {
    /// Queried identifier.
    pub id: RecordId,
    /// Identity that issued the query.
    pub requester: SubmitterId,
}

/// Union of observable ledger events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LedgerEvent {
    /// An identifier transitioned Absent -> Present.
    Registered(RegistrationEvent),
    /// An entry was read through `get`.
    Queried(QueryEvent),
}
