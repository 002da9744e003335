//! Hash command implementation.

use crate::commands::{load_record, make_canonicalizer};
use mrv_canonical::compute_record_digest;

pub fn run(record_path: String) -> Result<(), Box<dyn std::error::Error>> {
    let record = load_record(&record_path)?;
    let canonicalizer = make_canonicalizer()?;

    let digest = compute_record_digest(&record, &canonicalizer)
        .map_err(|e| format!("Digest computation failed: {}", e))?;
    println!("{}", digest);
    Ok(())
}
