use std::fs::File;
use std::io::BufWriter;

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::app::error::{AppError, Result};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;
const LINE_HEIGHT_MM: f32 = 10.0;
const FONT_SIZE_PT: f32 = 12.0;

/// Emit one fixed-height text cell per source line in a fixed builtin
/// font. Long lines are not wrapped; a new page starts when the current
/// one runs out of rows.
pub fn write_pdf(path: &str, text: &str) -> Result<()> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "Quillpad export",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_err)?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM - LINE_HEIGHT_MM;

    for line in text.trim_end().split('\n') {
        if y < MARGIN_MM {
            let (page, new_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            layer = doc.get_page(page).get_layer(new_layer);
            y = PAGE_HEIGHT_MM - MARGIN_MM - LINE_HEIGHT_MM;
        }
        layer.use_text(
            line.trim_end_matches('\r'),
            FONT_SIZE_PT,
            Mm(MARGIN_MM),
            Mm(y),
            &font,
        );
        y -= LINE_HEIGHT_MM;
    }

    let file = File::create(path)?;
    doc.save(&mut BufWriter::new(file)).map_err(pdf_err)?;
    Ok(())
}

fn pdf_err(e: impl std::fmt::Display) -> AppError {
    AppError::Pdf(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("quillpad-test-{}-{}", std::process::id(), name))
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn test_output_has_pdf_magic() {
        let path = temp_path("export.pdf");
        write_pdf(&path, "line one\nline two\nline three").unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_long_document_spills_onto_more_pages() {
        let short_path = temp_path("short.pdf");
        let long_path = temp_path("long.pdf");
        write_pdf(&short_path, "one line").unwrap();
        let many_lines = vec!["a line of text"; 120].join("\n");
        write_pdf(&long_path, &many_lines).unwrap();
        let short = std::fs::read(&short_path).unwrap();
        let long = std::fs::read(&long_path).unwrap();
        assert!(long.len() > short.len());
        std::fs::remove_file(&short_path).ok();
        std::fs::remove_file(&long_path).ok();
    }
}
