//! Verify command implementation.

use crate::commands::{load_record, make_canonicalizer, open_ledger, resolve_id};
use mrv_canonical::SubmitterId;
use mrv_core::{VerificationOutcome, Verifier};
use mrv_registry::Registry;
use serde_json::json;

pub fn run(
    ledger: String,
    record_path: String,
    id: Option<String>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let record = load_record(&record_path)?;
    let id = resolve_id(&record, id)?;

    let verifier = Verifier::new(make_canonicalizer()?);
    let requester = SubmitterId::parse("cli:verifier").map_err(|e| e.to_string())?;
    let registry = Registry::new(open_ledger(&ledger)?, requester);

    let outcome = verifier
        .verify_record(&record, &id, &registry)
        .map_err(|e| format!("Verification failed: {}", e))?;

    if json_output {
        println!(
            "{}",
            json!({ "id": id.as_ref(), "outcome": outcome.to_string() })
        );
    } else {
        println!("{}: {}", id, outcome);
    }

    let code = match outcome {
        VerificationOutcome::Valid => 0,
        VerificationOutcome::Tampered => 1,
        VerificationOutcome::NotFound => 2,
    };
    std::process::exit(code);
}
