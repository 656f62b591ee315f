//! Paginated PDF export of a query result.
//!
//! A4 pages with 2 cm margins, Helvetica body text with a fixed 12 pt line
//! advance, word wrapping by an average-glyph-width estimate. A page break
//! is inserted between record blocks whenever the remaining vertical space
//! falls below 3 cm; individual lines also break the page when they would
//! run into the bottom margin.

use aura_core::{ReferenceRecord, Result, RiskRecord};
use aura_query::{Assessment, Match};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

const REPORT_TITLE: &str = "Aura UX Risk Guardian";

// A4 in points.
const PAGE_WIDTH: f32 = 595.28;
const PAGE_HEIGHT: f32 = 841.89;
const MARGIN: f32 = 56.7; // 2 cm
const BLOCK_BREAK_AT: f32 = 85.0; // 3 cm
const LINE_ADVANCE: f32 = 12.0;
const BODY_SIZE: f32 = 10.0;
const HEADER_SIZE: f32 = 11.0;
const TITLE_SIZE: f32 = 12.0;
// Average Helvetica glyph width as a fraction of the font size.
const GLYPH_RATIO: f32 = 0.5;

const MAX_LIST_ITEMS: usize = 5;

const FONT_BODY: &str = "F1";
const FONT_BOLD: &str = "F2";

/// Accumulates text operations page by page, tracking the write cursor.
struct PageComposer {
    pages: Vec<Vec<Operation>>,
    current: Vec<Operation>,
    y: f32,
}

impl PageComposer {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: Vec::new(),
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn break_page(&mut self) {
        let ops = std::mem::take(&mut self.current);
        self.pages.push(ops);
        self.y = PAGE_HEIGHT - MARGIN;
    }

    /// Break the page unless at least `space` points remain below the cursor.
    fn ensure_space(&mut self, space: f32) {
        if self.y < space {
            self.break_page();
        }
    }

    fn emit_line(&mut self, text: &str, font: &str, size: f32, x: f32) {
        if self.y < MARGIN {
            self.break_page();
        }
        self.current.push(Operation::new("BT", vec![]));
        self.current
            .push(Operation::new("Tf", vec![font.into(), size.into()]));
        self.current
            .push(Operation::new("Td", vec![x.into(), self.y.into()]));
        self.current.push(Operation::new(
            "Tj",
            vec![Object::String(encode_latin1(text), StringFormat::Literal)],
        ));
        self.current.push(Operation::new("ET", vec![]));
        self.y -= LINE_ADVANCE;
    }

    /// Word-wrap `text` to the width remaining after `indent` and write it.
    fn write_wrapped(&mut self, text: &str, font: &str, size: f32, indent: f32) {
        let max_width = PAGE_WIDTH - 2.0 * MARGIN - indent;
        let max_chars = ((max_width / (size * GLYPH_RATIO)) as usize).max(1);
        for line in wrap(text, max_chars) {
            self.emit_line(&line, font, size, MARGIN + indent);
        }
    }

    fn gap(&mut self, points: f32) {
        self.y -= points;
    }

    fn finish(mut self) -> Vec<Vec<Operation>> {
        if !self.current.is_empty() || self.pages.is_empty() {
            let ops = std::mem::take(&mut self.current);
            self.pages.push(ops);
        }
        self.pages
    }
}

/// Export a query result as a paginated PDF. Returns the output path.
pub fn export_pdf(
    path: &Path,
    query: &str,
    assessment: &Assessment,
    matches: &[Match<'_>],
    index: &HashMap<&str, &ReferenceRecord>,
) -> Result<PathBuf> {
    let mut composer = PageComposer::new();

    composer.emit_line(REPORT_TITLE, FONT_BOLD, TITLE_SIZE, MARGIN);
    composer.gap(4.0);
    composer.write_wrapped(&format!("Query: {}", query), FONT_BODY, BODY_SIZE, 0.0);
    composer.write_wrapped(
        &format!("EU AI Act: {} - {}", assessment.tag, assessment.note),
        FONT_BODY,
        BODY_SIZE,
        0.0,
    );
    composer.gap(8.0);

    for m in matches {
        write_record(&mut composer, m.record, index);
        composer.gap(8.0);
        composer.ensure_space(BLOCK_BREAK_AT);
    }

    let pages = composer.finish();
    let page_count = pages.len();
    write_document(path, pages)?;
    debug!(path = %path.display(), pages = page_count, "exported PDF report");
    Ok(path.to_path_buf())
}

fn write_record(
    composer: &mut PageComposer,
    record: &RiskRecord,
    index: &HashMap<&str, &ReferenceRecord>,
) {
    composer.write_wrapped(
        &format!(
            "Risk: {} (Priority: {}; Phase: {})",
            record.title, record.severity, record.phase
        ),
        FONT_BOLD,
        HEADER_SIZE,
        0.0,
    );
    composer.write_wrapped(
        &format!("Justification: {}", record.justification),
        FONT_BODY,
        BODY_SIZE,
        0.0,
    );

    composer.write_wrapped("Mitigations:", FONT_BODY, BODY_SIZE, 0.0);
    for m in record.mitigations.iter().take(MAX_LIST_ITEMS) {
        composer.write_wrapped(&format!("- {}", m), FONT_BODY, BODY_SIZE, 12.0);
    }

    composer.write_wrapped("Evidence:", FONT_BODY, BODY_SIZE, 0.0);
    for e in record.evidence.iter().take(MAX_LIST_ITEMS) {
        composer.write_wrapped(&format!("- {}", e), FONT_BODY, BODY_SIZE, 12.0);
    }

    let ref_ids: Vec<&String> = record.references.iter().take(MAX_LIST_ITEMS).collect();
    if !ref_ids.is_empty() {
        composer.write_wrapped("References:", FONT_BODY, BODY_SIZE, 0.0);
        // Numbering restarts per record in the PDF; unresolved ids are
        // skipped without consuming a number.
        let mut n = 1;
        for rid in ref_ids {
            if let Some(reference) = index.get(rid.as_str()) {
                composer.write_wrapped(
                    &format!(
                        "[{}] {} ({}). {} - {} - DOI: {}",
                        n,
                        reference.authors,
                        reference.year,
                        reference.title,
                        reference.venue,
                        reference.doi.as_deref().unwrap_or("")
                    ),
                    FONT_BODY,
                    BODY_SIZE,
                    12.0,
                );
                n += 1;
            }
        }
    }
}

/// Assemble the lopdf document: one content stream per page, a shared
/// pages tree with Helvetica resources, catalog, and save.
fn write_document(path: &Path, pages: Vec<Vec<Operation>>) -> Result<()> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let body_font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_BODY => body_font_id,
            FONT_BOLD => bold_font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    let page_count = pages.len() as i64;
    for operations in pages {
        let content = Content { operations };
        let encoded = content
            .encode()
            .map_err(|e| aura_core::AuraError::page_encode(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();
    doc.save(path)
        .map_err(|e| aura_core::AuraError::write_failed(e.to_string()))?;
    Ok(())
}

/// Word-wrap to a character budget, hard-splitting words longer than the
/// budget.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut line));
        }
        if word.len() > max_chars {
            // Hard split an oversized token (long URLs, DOIs).
            let mut rest = word;
            while rest.len() > max_chars {
                let (head, tail) = rest.split_at(max_chars);
                lines.push(head.to_string());
                rest = tail;
            }
            line = rest.to_string();
        } else {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

/// Encode text as single Latin-1 bytes for the WinAnsi-encoded Helvetica
/// fonts. Common punctuation outside Latin-1 is folded to ASCII; anything
/// else becomes '?'. One char must yield exactly one byte, or viewers
/// decode the content stream as mojibake.
fn encode_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{2014}' | '\u{2013}' => b'-',
            '\u{2018}' | '\u{2019}' => b'\'',
            '\u{201C}' | '\u{201D}' => b'"',
            c if (c as u32) <= 0xFF => c as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_core::{Phase, Severity};
    use aura_query::RegulatoryTag;

    fn record(id: &str) -> RiskRecord {
        RiskRecord {
            id: id.into(),
            phase: Phase::Create,
            title: "Automation bias".into(),
            severity: Severity::High,
            justification: "Designers may accept wrong AI suggestions.".into(),
            evidence: vec!["Accuracy drops with erroneous AI output.".into()],
            mitigations: vec!["Show uncertainty cues.".into(), "Review rituals.".into()],
            references: vec!["a".into(), "missing".into()],
            ai_act_note: None,
        }
    }

    fn assessment() -> Assessment {
        aura_query::classify("chatbot flows")
    }

    #[test]
    fn wrap_respects_budget() {
        let lines = wrap("one two three four five", 9);
        assert!(lines.iter().all(|l| l.len() <= 9), "{:?}", lines);
        assert_eq!(lines.join(" "), "one two three four five");
    }

    #[test]
    fn wrap_hard_splits_long_tokens() {
        let lines = wrap("https://example.org/very/long/path", 10);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.len() <= 10));
    }

    #[test]
    fn wrap_empty_yields_single_empty_line() {
        assert_eq!(wrap("", 20), vec![String::new()]);
    }

    #[test]
    fn latin1_encoding_is_one_byte_per_char() {
        assert_eq!(encode_latin1("Z\u{F6}ller"), b"Z\xF6ller".to_vec());
        assert_eq!(
            encode_latin1("a\u{2014}b \u{2019}quoted\u{2019}"),
            b"a-b 'quoted'".to_vec()
        );
        assert_eq!(encode_latin1("\u{4E16}"), b"?".to_vec());
    }

    #[test]
    fn content_stream_holds_single_latin1_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("latin1.pdf");
        let mut rec = record("r1");
        rec.title = "Z\u{F6}ller study".into();
        let reference = ReferenceRecord {
            id: "a".into(),
            authors: "Z\u{F6}ller, C.; et al.".into(),
            year: 2024,
            title: "The impact of AI errors".into(),
            venue: "PLOS ONE".into(),
            doi: Some("10.1371/journal.pone.0296535".into()),
            url: None,
        };
        let mut index = HashMap::new();
        index.insert("a", &reference);
        let matches = vec![Match {
            record: &rec,
            score: 1,
        }];

        export_pdf(&out, "q", &assessment(), &matches, &index).unwrap();

        let doc = Document::load(&out).unwrap();
        let first_page = *doc.get_pages().values().next().unwrap();
        let content = doc.get_page_content(first_page).unwrap();
        // 'ö' must appear as the single Latin-1 byte, never as UTF-8 0xC3 0xB6.
        assert!(content.contains(&0xF6));
        assert!(content.windows(2).all(|w| w != [0xC3, 0xB6]));
    }

    #[test]
    fn export_writes_loadable_document() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.pdf");
        let rec = record("r1");
        let reference = ReferenceRecord {
            id: "a".into(),
            authors: "Doe, J.".into(),
            year: 2024,
            title: "Paper".into(),
            venue: "Venue".into(),
            doi: Some("10.1/doe".into()),
            url: None,
        };
        let mut index = HashMap::new();
        index.insert("a", &reference);
        let matches = vec![Match {
            record: &rec,
            score: 2,
        }];

        let written = export_pdf(&out, "chatbot flows", &assessment(), &matches, &index).unwrap();
        assert_eq!(written, out);

        let doc = Document::load(&out).unwrap();
        assert!(!doc.get_pages().is_empty());
    }

    #[test]
    fn many_records_paginate() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("long.pdf");
        let rec = record("r1");
        let index = HashMap::new();
        let matches: Vec<Match<'_>> = (0..20)
            .map(|_| Match {
                record: &rec,
                score: 1,
            })
            .collect();
        let a = Assessment {
            tag: RegulatoryTag::MinimalRisk,
            note: "note",
        };
        export_pdf(&out, "q", &a, &matches, &index).unwrap();
        let doc = Document::load(&out).unwrap();
        assert!(doc.get_pages().len() > 1);
    }
}
