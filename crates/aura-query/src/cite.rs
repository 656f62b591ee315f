//! Numbered citation rendering.

use aura_core::ReferenceRecord;
use std::collections::HashMap;

/// Maximum reference ids considered per record.
const MAX_REFS: usize = 5;

/// Rendered citations for one record.
#[derive(Debug, Clone)]
pub struct Citations {
    /// Display text, one `[n] ...` line per resolved reference, or
    /// "No references." when nothing resolved.
    pub text: String,
    /// The citation numbers actually assigned, for numbering continuity
    /// across records.
    pub numbers: Vec<usize>,
}

/// Render numbered citations for up to the first five reference ids.
///
/// Ids absent from the index are skipped without consuming a number, so
/// numbering stays dense. `start_index` lets callers keep a running count
/// when rendering several records in sequence.
pub fn cite(
    ref_ids: &[String],
    index: &HashMap<&str, &ReferenceRecord>,
    start_index: usize,
) -> Citations {
    let mut lines = Vec::new();
    let mut numbers = Vec::new();
    let mut n = start_index;

    for rid in ref_ids.iter().take(MAX_REFS) {
        let Some(reference) = index.get(rid.as_str()) else {
            continue;
        };
        let authors = reference.authors.replace('&', "and");
        lines.push(format!(
            "[{}] {} ({}). {}. {}. {}",
            n, authors, reference.year, reference.title, reference.venue,
            reference.link()
        ));
        numbers.push(n);
        n += 1;
    }

    let text = if lines.is_empty() {
        "No references.".to_string()
    } else {
        lines.join("\n")
    };
    Citations { text, numbers }
}
