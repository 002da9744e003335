//! Output formatting utilities.

use mrv_registry::RegistryEntry;

/// Formats a registry entry as JSON.
pub fn format_json(entry: &RegistryEntry) -> String {
    serde_json::to_string_pretty(entry).unwrap_or_else(|_| "{}".to_string())
}

/// Formats a registry entry as a simple table row.
pub fn format_table_row(entry: &RegistryEntry) -> String {
    format!(
        "{:<20} {:<64} {:<20} {}",
        truncate(entry.id.as_ref(), 20),
        entry.digest.hex,
        format_time(entry.creation_time),
        entry.submitter.as_ref()
    )
}

/// Prints a table header for registry entries.
pub fn print_table_header() {
    println!(
        "{:<20} {:<64} {:<20} {}",
        "ID", "DIGEST", "CREATED", "SUBMITTER"
    );
    println!("{}", "-".repeat(120));
}

/// Renders a Unix timestamp as UTC RFC3339.
pub fn format_time(unix_seconds: u64) -> String {
    chrono::DateTime::from_timestamp(unix_seconds as i64, 0)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
        .unwrap_or_else(|| unix_seconds.to_string())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}
