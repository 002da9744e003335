use mrv_canonical::{Digest, RecordId, SubmitterId};
use serde::{Deserialize, Serialize};

/// A ledger-resident registry entry.
///
/// Created exactly once per identifier by a successful create-mutation;
/// never updated, never deleted. The on-ledger "present" flag / all-zero
/// sentinel is mapped to `Option<RegistryEntry>` at the [`Ledger`] boundary,
/// so an entry value always describes a Present identifier.
///
/// [`Ledger`]: crate::Ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// Registered identifier.
    pub id: RecordId,
    /// Digest anchored for the identifier.
    pub digest: Digest,
    /// Registration time from the ledger's authoritative clock (Unix seconds).
    pub creation_time: u64,
    /// Authenticated caller that submitted the create-mutation.
    pub submitter: SubmitterId,
}
