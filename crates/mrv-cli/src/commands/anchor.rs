//! Anchor command implementation.

use crate::commands::{load_record, make_canonicalizer, open_ledger, resolve_id};
use mrv_canonical::{compute_record_digest, SubmitterId};
use mrv_registry::{AnchorClient, Registry};
use mrv_schemas::MrvRecord;

pub fn run(
    ledger: String,
    record_path: String,
    id: Option<String>,
    submitter: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let record = load_record(&record_path)?;
    MrvRecord::validate_structure(&record).map_err(|e| format!("Invalid record: {}", e))?;
    let id = resolve_id(&record, id)?;

    let canonicalizer = make_canonicalizer()?;
    let digest = compute_record_digest(&record, &canonicalizer)
        .map_err(|e| format!("Digest computation failed: {}", e))?;

    let submitter =
        SubmitterId::parse(submitter).map_err(|e| format!("Invalid submitter: {}", e))?;
    let registry = Registry::new(open_ledger(&ledger)?, submitter);
    let client = AnchorClient::new(&registry);

    match client.anchor(&id, &digest) {
        Ok(confirmation) => {
            println!("Anchored {} -> {}", id, digest);
            match confirmation.ledger_reference {
                Some(reference) => println!("Ledger reference: {}", reference),
                None => println!("Confirmed by re-query after timeout"),
            }
            Ok(())
        }
        Err(err) if err.is_already_anchored(&digest) => {
            // Idempotent no-op: the exact digest is already anchored.
            println!("Already anchored {} -> {}", id, digest);
            Ok(())
        }
        Err(err) => Err(format!("Anchor failed: {}", err).into()),
    }
}
