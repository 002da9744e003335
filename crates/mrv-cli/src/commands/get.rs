//! Get command implementation.

use crate::commands::open_ledger;
use crate::output;
use mrv_canonical::{RecordId, SubmitterId};
use mrv_registry::{Registry, RegistryError};

pub fn run(ledger: String, id: String, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let id = RecordId::parse(id).map_err(|e| format!("Invalid record id: {}", e))?;
    let requester = SubmitterId::parse("cli:reader").map_err(|e| e.to_string())?;
    let registry = Registry::new(open_ledger(&ledger)?, requester);

    match registry.get(&id) {
        Ok(entry) => {
            if json {
                println!("{}", output::format_json(&entry));
            } else {
                output::print_table_header();
                println!("{}", output::format_table_row(&entry));
            }
            Ok(())
        }
        Err(RegistryError::NotFound { .. }) => {
            eprintln!("Record not found");
            std::process::exit(2);
        }
        Err(e) => Err(format!("Query failed: {}", e).into()),
    }
}
