//! Metadata panel sizing.
//!
//! The panel shows each section as one paragraph, its heading inline ahead
//! of the text. Heights are estimated with a greedy word wrap so the layout
//! can give the panel every row it needs before the canvas takes the rest.

use pl_catalog::PatternEntry;

/// Separator between a section heading and its text.
pub const HEADING_GAP: &str = "  ";

/// Narrowest text width the scroll offset is bounded for.
pub const MIN_METADATA_WIDTH: u16 = 20;

/// Rows moved by one PgUp/PgDn.
pub const METADATA_SCROLL_STEP: u16 = 3;

/// The four sections, heading first, in display order.
pub fn metadata_sections(entry: &PatternEntry) -> [(&'static str, &'static str); 4] {
    [
        ("What", entry.what),
        ("How?", entry.how),
        ("Why?", entry.why),
        ("Scenario", entry.scenario),
    ]
}

/// Wrapped rows of all four sections at `width` columns.
pub fn metadata_rows(entry: &PatternEntry, width: u16) -> u16 {
    metadata_sections(entry)
        .iter()
        .map(|(heading, body)| wrapped_rows(&format!("{heading}{HEADING_GAP}{body}"), width))
        .fold(0u16, u16::saturating_add)
}

/// Rows `text` occupies when word-wrapped to `width` columns.
///
/// Words longer than the width are split across rows.
pub fn wrapped_rows(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut rows = 1usize;
    let mut col = 0usize;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if col > 0 && col + 1 + len <= width {
            col += 1 + len;
            continue;
        }
        if col > 0 {
            rows += 1;
        }
        col = len;
        while col > width {
            rows += 1;
            col -= width;
        }
    }
    u16::try_from(rows).unwrap_or(u16::MAX)
}
