//! Physical geometry of the answer sheet.
//!
//! A sheet is a grid of 22 lines by 20 character cells per page, up to three
//! pages. Lines are numbered continuously across pages starting at 1.

use std::ops::RangeInclusive;

use unicode_normalization::UnicodeNormalization;

/// Lines on one physical page.
pub const LINES_PER_PAGE: u32 = 22;

/// Pages in a complete sheet.
pub const MAX_PAGES: u32 = 3;

/// Highest usable line number.
pub const MAX_LINES: u32 = LINES_PER_PAGE * MAX_PAGES;

/// Character cells available on one line; the budget for table column widths.
pub const MAX_CELLS_PER_LINE: u32 = 20;

/// Narrowest allowed table column, in cells.
pub const MIN_COLUMN_WIDTH: u32 = 1;

/// Columns of the outline gutter to the left of the grid.
pub const LEFT_MARGIN_COLUMNS: u8 = 3;

/// Page (1-indexed) that holds `line`. Line 0 is on no page and maps to 0.
pub fn page_of(line: u32) -> u32 {
    line.div_ceil(LINES_PER_PAGE)
}

/// Whether the range `line_start..=line_end` touches more than one page.
pub fn crosses_pages(line_start: u32, line_end: u32) -> bool {
    page_of(line_start) != page_of(line_end)
}

/// Line numbers that belong to `page` (1-indexed).
pub fn page_range(page: u32) -> RangeInclusive<u32> {
    let first = page.saturating_sub(1) * LINES_PER_PAGE + 1;
    first..=first + LINES_PER_PAGE - 1
}

/// Width of one character in half cells.
///
/// Hangul syllables and jamo take a full cell; line breaks take nothing;
/// everything else (Latin letters, digits, punctuation, spaces) takes half.
pub fn char_half_cells(c: char) -> u32 {
    match c {
        '\n' | '\r' => 0,
        '\u{AC00}'..='\u{D7A3}' | '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}' => 2,
        _ => 1,
    }
}

/// Cells a line of text occupies on the sheet, rounded up.
pub fn line_cells(line: &str) -> u32 {
    let halves: u32 = line.nfc().map(char_half_cells).sum();
    halves.div_ceil(2)
}

/// Whether a line of text fits within one grid line.
pub fn fits_line(line: &str) -> bool {
    line_cells(line) <= MAX_CELLS_PER_LINE
}
