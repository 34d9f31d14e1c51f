//! PDF writer and the page layout behind it.
//!
//! Page geometry follows a plain A4 text report: 10 mm margins, 10 mm line
//! pitch and a 20 mm bottom break margin, which fits 26 lines per page.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::error::{Result, TabexError};
use crate::table::Table;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;
const CELL_PADDING_MM: f32 = 1.0;
const BREAK_MARGIN_MM: f32 = 20.0;
const PT_TO_MM: f32 = 25.4 / 72.0;

/// Options for document output.
#[derive(Debug, Clone)]
pub struct DocumentOptions {
    /// Write the column names as the first line.
    ///
    /// Off by default: row lines only, header omitted.
    pub include_header: bool,
    /// Joins cell values within a line.
    pub separator: String,
    /// Font size in points.
    pub font_size: f32,
    /// Vertical distance between lines in millimetres.
    pub line_height_mm: f32,
    /// Document title stored in the PDF metadata.
    pub title: String,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            include_header: false,
            separator: "  ".to_string(),
            font_size: 12.0,
            line_height_mm: 10.0,
            title: "Table export".to_string(),
        }
    }
}

impl DocumentOptions {
    /// Number of lines that fit on one page.
    pub fn lines_per_page(&self) -> usize {
        let usable = PAGE_HEIGHT_MM - MARGIN_MM - BREAK_MARGIN_MM;
        let pitch = self.line_height_mm.max(1.0);
        ((usable / pitch).floor() as usize).max(1)
    }
}

/// Text lines of a document, split into pages.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    pages: Vec<Vec<String>>,
}

impl DocumentLayout {
    /// Lay out a table: one line per row, values joined by the separator.
    ///
    /// An empty table yields a single blank page.
    pub fn from_table(table: &Table, options: &DocumentOptions) -> Self {
        let mut lines = Vec::with_capacity(table.row_count() + 1);
        if options.include_header {
            lines.push(table.columns().join(&options.separator));
        }
        lines.extend(table.rows().iter().map(|row| row.join(&options.separator)));

        let per_page = options.lines_per_page();
        let mut pages: Vec<Vec<String>> = lines
            .chunks(per_page)
            .map(|chunk| chunk.to_vec())
            .collect();
        if pages.is_empty() {
            pages.push(Vec::new());
        }

        Self { pages }
    }

    pub fn pages(&self) -> &[Vec<String>] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All lines across pages, in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().flatten().map(|l| l.as_str())
    }
}

/// Render a layout to a PDF file.
pub(crate) fn write_document(
    layout: &DocumentLayout,
    options: &DocumentOptions,
    path: &Path,
) -> Result<()> {
    let write_err = |e: printpdf::Error| TabexError::write(path, e);

    let (doc, first_page, first_layer) = PdfDocument::new(
        options.title.as_str(),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(write_err)?;

    let font_mm = options.font_size * PT_TO_MM;
    let x = Mm(MARGIN_MM + CELL_PADDING_MM);

    for (page_idx, lines) in layout.pages().iter().enumerate() {
        let (page, layer) = if page_idx == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1")
        };
        let canvas = doc.get_page(page).get_layer(layer);

        for (line_idx, line) in lines.iter().enumerate() {
            // Baseline sits mid-cell, measured from the top edge.
            let top = MARGIN_MM
                + line_idx as f32 * options.line_height_mm
                + options.line_height_mm / 2.0
                + 0.3 * font_mm;
            canvas.use_text(
                encodable_text(line),
                options.font_size,
                x,
                Mm(PAGE_HEIGHT_MM - top),
                &font,
            );
        }
    }

    let file = File::create(path).map_err(|e| TabexError::write(path, e))?;
    doc.save(&mut BufWriter::new(file)).map_err(write_err)
}

/// Characters WinAnsiEncoding places in 0x80..=0x9F, where Latin-1 has
/// control codes.
const WIN_ANSI_EXTRAS: &[char] = &[
    '€', '‚', 'ƒ', '„', '…', '†', '‡', 'ˆ', '‰', 'Š', '‹', 'Œ', 'Ž', '‘', '’', '“',
    '”', '•', '–', '—', '˜', '™', 'š', '›', 'œ', 'ž', 'Ÿ',
];

/// Replace characters the builtin fonts cannot show.
///
/// Builtin fonts are written with WinAnsiEncoding: printable ASCII, the
/// Latin-1 upper half and [`WIN_ANSI_EXTRAS`]. Anything else becomes `?`
/// and control characters become spaces.
fn encodable_text(line: &str) -> String {
    line.chars()
        .map(|c| match c {
            c if c.is_control() => ' ',
            ' '..='~' | '\u{a0}'..='\u{ff}' => c,
            c if WIN_ANSI_EXTRAS.contains(&c) => c,
            _ => '?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: usize) -> Table {
        let rows = (0..rows)
            .map(|i| vec![format!("r{}", i), i.to_string()])
            .collect();
        Table::new(vec!["id".to_string(), "n".to_string()], rows).unwrap()
    }

    #[test]
    fn test_lines_per_page_default() {
        assert_eq!(DocumentOptions::default().lines_per_page(), 26);
    }

    #[test]
    fn test_layout_omits_header_by_default() {
        let layout = DocumentLayout::from_table(&table(2), &DocumentOptions::default());
        assert_eq!(layout.lines().collect::<Vec<_>>(), vec!["r0  0", "r1  1"]);
    }

    #[test]
    fn test_layout_with_header() {
        let options = DocumentOptions {
            include_header: true,
            ..DocumentOptions::default()
        };
        let layout = DocumentLayout::from_table(&table(1), &options);
        assert_eq!(layout.lines().collect::<Vec<_>>(), vec!["id  n", "r0  0"]);
    }

    #[test]
    fn test_layout_paginates() {
        let layout = DocumentLayout::from_table(&table(60), &DocumentOptions::default());
        assert_eq!(layout.page_count(), 3);
        assert_eq!(layout.pages()[0].len(), 26);
        assert_eq!(layout.pages()[1].len(), 26);
        assert_eq!(layout.pages()[2].len(), 8);
        assert_eq!(layout.pages()[1][0], "r26  26");
    }

    #[test]
    fn test_empty_table_has_one_blank_page() {
        let layout = DocumentLayout::from_table(&table(0), &DocumentOptions::default());
        assert_eq!(layout.page_count(), 1);
        assert!(layout.pages()[0].is_empty());
    }

    #[test]
    fn test_encodable_text() {
        assert_eq!(encodable_text("café\tbar"), "café bar");
        assert_eq!(encodable_text("→ 東京"), "? ??");
    }

    #[test]
    fn test_encodable_text_keeps_win_ansi_punctuation() {
        assert_eq!(encodable_text("€5 — “x” … ‘y’ • ™"), "€5 — “x” … ‘y’ • ™");
        assert_eq!(encodable_text("Œuvre, Šimon, Ÿ"), "Œuvre, Šimon, Ÿ");
        assert_eq!(encodable_text("\u{2212}1"), "?1");
    }
}
