//! Exists command implementation.

use crate::commands::open_ledger;
use mrv_canonical::{RecordId, SubmitterId};
use mrv_registry::Registry;

pub fn run(ledger: String, id: String) -> Result<(), Box<dyn std::error::Error>> {
    let id = RecordId::parse(id).map_err(|e| format!("Invalid record id: {}", e))?;
    let requester = SubmitterId::parse("cli:reader").map_err(|e| e.to_string())?;
    let registry = Registry::new(open_ledger(&ledger)?, requester);

    let present = registry
        .exists(&id)
        .map_err(|e| format!("Query failed: {}", e))?;
    println!("{}", present);
    Ok(())
}
