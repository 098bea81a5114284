//! Source unit parser
//!
//! Source units are free-form text. The only structure recognised is:
//! - `## Heading` opens an example block (label taken from the heading)
//! - `# Heading` directly followed by a `##` block is a section heading
//! - text before the first block is preamble commentary
//!
//! Everything inside a block is kept verbatim apart from markdown fences.

use super::entry::{BlockLabel, Category, Entry, EntryId, ExampleBlock};
use crate::error::MalformedReason;
use crate::{CatalogError, Result};
use std::path::Path;
use tracing::{debug, trace};

const BLOCK_MARKER: &str = "## ";
const SECTION_MARKER: &str = "# ";
const FENCE: &str = "```";

/// Parse one source unit into an entry
///
/// Fails with `MalformedEntry` when no non-empty example block is found.
pub fn parse_unit(category: Category, id: EntryId, source: &Path, text: &str) -> Result<Entry> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines: Vec<&str> = text.lines().collect();

    let mut blocks = Vec::new();
    let mut commentary = Vec::new();
    let mut section: Option<String> = None;
    let mut current: Option<ExampleBlock> = None;

    for (index, line) in lines.iter().enumerate() {
        if let Some(heading) = line.strip_prefix(BLOCK_MARKER) {
            finish_block(current.take(), &mut blocks, source);
            let heading = heading.trim().to_string();
            trace!("Block '{}' at line {}", heading, index + 1);
            current = Some(ExampleBlock {
                label: BlockLabel::from_heading(&heading),
                heading,
                section: section.clone(),
                lines: Vec::new(),
            });
            continue;
        }

        if let Some(heading) = section_heading(line) {
            // Inside a block only a heading set off by a blank line starts a section
            let after_blank = index == 0 || lines[index - 1].trim().is_empty();
            if (current.is_none() || after_blank) && next_is_block(&lines[index + 1..]) {
                finish_block(current.take(), &mut blocks, source);
                commentary.push(heading.to_string());
                section = Some(heading.to_string());
                continue;
            }
        }

        if is_fence(line) {
            continue;
        }

        match current.as_mut() {
            Some(block) => block.lines.push(line.to_string()),
            None => {
                let prose = line.trim().trim_start_matches('#').trim();
                if !prose.is_empty() {
                    commentary.push(prose.to_string());
                }
            }
        }
    }
    finish_block(current, &mut blocks, source);

    if blocks.is_empty() {
        return Err(CatalogError::MalformedEntry {
            path: source.to_path_buf(),
            reason: MalformedReason::NoExampleBlock,
        });
    }

    Ok(Entry {
        category,
        id,
        source: source.to_path_buf(),
        blocks,
        commentary,
    })
}

fn section_heading(line: &str) -> Option<&str> {
    line.strip_prefix(SECTION_MARKER)
        .map(str::trim)
        .filter(|h| !h.is_empty())
}

fn next_is_block(rest: &[&str]) -> bool {
    rest.iter()
        .find(|l| !l.trim().is_empty())
        .is_some_and(|l| l.starts_with(BLOCK_MARKER))
}

fn is_fence(line: &str) -> bool {
    line.trim_start().starts_with(FENCE)
}

/// Trim surrounding blank lines and keep the block if anything is left
fn finish_block(block: Option<ExampleBlock>, blocks: &mut Vec<ExampleBlock>, source: &Path) {
    let Some(mut block) = block else {
        return;
    };

    while block.lines.last().is_some_and(|l| l.trim().is_empty()) {
        block.lines.pop();
    }
    let leading = block
        .lines
        .iter()
        .take_while(|l| l.trim().is_empty())
        .count();
    block.lines.drain(..leading);

    if block.lines.is_empty() {
        debug!(
            "Dropping empty '{}' block in {}",
            block.heading,
            source.display()
        );
        return;
    }

    blocks.push(block);
}
