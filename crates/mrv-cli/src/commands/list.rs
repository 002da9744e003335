//! List command implementation.

use mrv_store::RecordStore;

pub fn run(store_dir: String) -> Result<(), Box<dyn std::error::Error>> {
    let store = RecordStore::open(&store_dir)
        .map_err(|e| format!("Failed to open store {}: {}", store_dir, e))?;

    for id in store.list()? {
        println!("{}", id);
    }
    Ok(())
}
