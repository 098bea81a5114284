//! Shared rendering for command output

use crate::catalog::{BlockLabel, Entry};
use serde_json::{json, Value};
use std::io::Write;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

const MAX_TITLE: usize = 50;

/// Table row for entry listings
#[derive(Tabled)]
pub struct EntryRow {
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Examples")]
    pub examples: String,
}

impl EntryRow {
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            category: entry.category.to_string(),
            id: entry.id.to_string(),
            title: truncate(&entry.title(), MAX_TITLE),
            examples: labels_display(entry),
        }
    }
}

/// Render rows as a rounded table with a centered header
pub fn render_table<T: Tabled>(rows: &[T]) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

/// Block labels as a comma-separated list, e.g. "bad, good, better"
pub fn labels_display(entry: &Entry) -> String {
    entry
        .blocks
        .iter()
        .map(|b| label_name(b.label))
        .collect::<Vec<_>>()
        .join(", ")
}

fn label_name(label: BlockLabel) -> &'static str {
    match label {
        BlockLabel::Bad => "bad",
        BlockLabel::Good => "good",
        BlockLabel::Better => "better",
        BlockLabel::Best => "best",
        BlockLabel::Alternative => "alt",
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max - 3).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

/// Compact JSON summary of an entry
pub fn entry_summary_json(entry: &Entry) -> Value {
    json!({
        "category": entry.category,
        "id": entry.id,
        "title": entry.title(),
        "source": entry.source,
        "labels": entry.blocks.iter().map(|b| b.label).collect::<Vec<_>>(),
    })
}

/// Full JSON view of an entry
pub fn entry_json(entry: &Entry) -> Value {
    json!({
        "category": entry.category,
        "id": entry.id,
        "title": entry.title(),
        "source": entry.source,
        "commentary": entry.commentary,
        "blocks": entry.blocks,
    })
}

/// Write an entry as readable text
///
/// Section headings are printed once, when they change between blocks.
pub fn write_entry(out: &mut dyn Write, entry: &Entry) -> std::io::Result<()> {
    writeln!(out, "{}/{}: {}", entry.category, entry.id, entry.title())?;
    writeln!(out, "Source: {}", entry.source.display())?;

    let sections: Vec<&str> = entry
        .blocks
        .iter()
        .filter_map(|b| b.section.as_deref())
        .collect();
    for note in entry.commentary.iter().filter(|c| !sections.contains(&c.as_str())) {
        writeln!(out, "{note}")?;
    }

    let mut current_section: Option<&str> = None;
    for block in &entry.blocks {
        if block.section.is_some() && block.section.as_deref() != current_section {
            current_section = block.section.as_deref();
            writeln!(out)?;
            writeln!(out, "# {}", current_section.unwrap_or_default())?;
        }

        writeln!(out)?;
        writeln!(out, "## {}", block.heading)?;
        for line in &block.lines {
            writeln!(out, "    {line}")?;
        }
    }

    Ok(())
}
