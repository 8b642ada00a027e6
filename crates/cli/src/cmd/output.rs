//! Shared output formatting for record commands.

use mdstore_core::Entry;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use crate::OutputFormat;

/// Formatted entry for JSON output.
#[derive(Debug, Serialize)]
pub struct EntryOutput<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub tags: &'a [String],
    #[serde(skip_serializing_if = "serde_yaml::Mapping::is_empty")]
    pub fields: &'a serde_yaml::Mapping,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub body: &'a str,
}

impl<'a> From<&'a Entry> for EntryOutput<'a> {
    fn from(entry: &'a Entry) -> Self {
        Self {
            id: &entry.id,
            title: &entry.title,
            tags: &entry.tags,
            fields: &entry.extra,
            body: &entry.body,
        }
    }
}

/// Row for entry tables.
#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Tags")]
    tags: String,
}

/// Resolve the output format from flags.
pub fn resolve_format(output: OutputFormat, json: bool, quiet: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else if quiet {
        OutputFormat::Quiet
    } else {
        output
    }
}

pub fn print_entries(entries: &[Entry], format: OutputFormat) {
    match format {
        OutputFormat::Table => print_entries_table(entries),
        OutputFormat::Json => print_entries_json(entries),
        OutputFormat::Quiet => print_entries_quiet(entries),
    }
}

/// Print entries as a table.
fn print_entries_table(entries: &[Entry]) {
    if entries.is_empty() {
        println!("(no records found)");
        return;
    }

    let rows: Vec<EntryRow> = entries
        .iter()
        .map(|e| EntryRow {
            id: e.id.clone(),
            title: truncate(&e.title, 50),
            tags: e.tags.join(", "),
        })
        .collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{}", table);
    println!("\nTotal: {} records", rows.len());
}

/// Print entries as JSON.
fn print_entries_json(entries: &[Entry]) {
    let output: Vec<EntryOutput<'_>> = entries.iter().map(EntryOutput::from).collect();
    println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
}

/// Print entry ids only (quiet mode).
fn print_entries_quiet(entries: &[Entry]) {
    for entry in entries {
        println!("{}", entry.id);
    }
}

/// Truncate a string to a maximum number of characters, adding an ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly ten", 11), "exactly ten");
        assert_eq!(truncate("a much longer title", 10), "a much ...");
    }

    #[test]
    fn test_resolve_format() {
        assert!(matches!(resolve_format(OutputFormat::Table, true, true), OutputFormat::Json));
        assert!(matches!(resolve_format(OutputFormat::Table, false, true), OutputFormat::Quiet));
        assert!(matches!(resolve_format(OutputFormat::Json, false, false), OutputFormat::Json));
    }
}
