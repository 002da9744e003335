//! MRV CLI - anchoring and verification of MRV records over a local file ledger.

use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{anchor, canonicalize, exists, get, hash, list, verify};

#[derive(Parser)]
#[command(name = "mrv")]
#[command(about = "Anchor and verify MRV records against an append-only hash registry")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Anchor a record's digest in the registry
    Anchor {
        /// Path to the ledger file
        #[arg(long)]
        ledger: String,
        /// Path to the record JSON file
        record: String,
        /// Identifier to anchor under (default: the record's mrv_id)
        #[arg(long)]
        id: Option<String>,
        /// Submitter identity recorded with the registration
        #[arg(long, default_value = "cli:local")]
        submitter: String,
    },
    /// Verify a record against its anchored digest (exit: 0 valid, 1 tampered, 2 not found)
    Verify {
        /// Path to the ledger file
        #[arg(long)]
        ledger: String,
        /// Path to the record JSON file
        record: String,
        /// Claimed identifier (default: the record's mrv_id)
        #[arg(long)]
        id: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the registry entry for an identifier
    Get {
        /// Path to the ledger file
        #[arg(long)]
        ledger: String,
        /// Record identifier
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check whether an identifier is anchored
    Exists {
        /// Path to the ledger file
        #[arg(long)]
        ledger: String,
        /// Record identifier
        id: String,
    },
    /// List records in a local record store
    List {
        /// Path to the record store directory
        store: String,
    },
    /// Show canonical bytes for input JSON
    Canonicalize {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// Compute the digest of a record file
    Hash {
        /// Path to the record JSON file
        record: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Anchor {
            ledger,
            record,
            id,
            submitter,
        } => anchor::run(ledger, record, id, submitter),
        Commands::Verify {
            ledger,
            record,
            id,
            json,
        } => verify::run(ledger, record, id, json),
        Commands::Get { ledger, id, json } => get::run(ledger, id, json),
        Commands::Exists { ledger, id } => exists::run(ledger, id),
        Commands::List { store } => list::run(store),
        Commands::Canonicalize { input } => canonicalize::run(input),
        Commands::Hash { record } => hash::run(record),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
