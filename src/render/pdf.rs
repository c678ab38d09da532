//! Paginated PDF adapter
//!
//! A4 portrait, builtin Helvetica. Layout: title line, one line per schema
//! column describing its applied constraint, total record count, then the
//! table. The header row repeats on every page; body rows wrap onto new
//! pages when vertical space runs out.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::errors::ReportError;
use crate::report::{FilterSummary, ReportResult};

use super::{cell_text, ensure_columns};

const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN: f64 = 14.0;
const TOP: f64 = PAGE_HEIGHT - 15.0;
const BOTTOM: f64 = 16.0;
const ROW_STEP: f64 = 5.5;
const BODY_SIZE: f64 = 9.0;
const TITLE_SIZE: f64 = 14.0;
// Rough Helvetica advance at 9pt, used to truncate overflowing cells
const CHAR_WIDTH: f64 = 1.9;

/// Renders the result as a paginated PDF document.
pub fn render_pdf(
    result: &ReportResult,
    summary: &FilterSummary,
) -> Result<Vec<u8>, ReportError> {
    ensure_columns(result)?;

    let (doc, first_page, first_layer) =
        PdfDocument::new("Employee Report", Mm(210.0), Mm(297.0), "Layer 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Render(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::Render(e.to_string()))?;

    let column_step = (PAGE_WIDTH - 2.0 * MARGIN) / result.width() as f64;
    let max_chars = ((column_step / CHAR_WIDTH) as usize).max(1);

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = TOP;

    text(&layer, "Employee Report", TITLE_SIZE, MARGIN, y, &bold);
    y -= 9.0;

    for (label, description) in &summary.entries {
        text(
            &layer,
            &format!("{}: {}", label, description),
            BODY_SIZE,
            MARGIN,
            y,
            &font,
        );
        y -= 5.0;
    }

    y -= 2.0;
    text(
        &layer,
        &format!("Total records: {}", result.rows.len()),
        BODY_SIZE,
        MARGIN,
        y,
        &font,
    );
    y -= 8.0;

    header_row(&layer, result, column_step, max_chars, y, &bold);
    y -= ROW_STEP;

    for row in &result.rows {
        if y < BOTTOM {
            let (page, page_layer) = doc.add_page(Mm(210.0), Mm(297.0), "Layer 1");
            layer = doc.get_page(page).get_layer(page_layer);
            y = TOP;
            header_row(&layer, result, column_step, max_chars, y, &bold);
            y -= ROW_STEP;
        }

        for (i, cell) in row.iter().enumerate() {
            let x = MARGIN + i as f64 * column_step;
            text(
                &layer,
                &truncate(&cell_text(cell), max_chars),
                BODY_SIZE,
                x,
                y,
                &font,
            );
        }
        y -= ROW_STEP;
    }

    doc.save_to_bytes()
        .map_err(|e| ReportError::Render(e.to_string()))
}

fn text(
    layer: &PdfLayerReference,
    content: &str,
    size: f64,
    x: f64,
    y: f64,
    font: &IndirectFontRef,
) {
    layer.use_text(content, size as _, Mm(x as _), Mm(y as _), font);
}

fn header_row(
    layer: &PdfLayerReference,
    result: &ReportResult,
    column_step: f64,
    max_chars: usize,
    y: f64,
    bold: &IndirectFontRef,
) {
    for (i, label) in result.labels().iter().enumerate() {
        let x = MARGIN + i as f64 * column_step;
        text(layer, &truncate(label, max_chars), BODY_SIZE, x, y, bold);
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        s.chars().take(max_chars.saturating_sub(1)).collect::<String>() + "…"
    }
}
