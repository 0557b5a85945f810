use std::fs::File;

use docx_rs::{Docx, Paragraph, Run};

use crate::app::error::Result;

/// Wrap the trimmed buffer text as a single paragraph in a fresh DOCX
/// container. Embedded newlines are left to the writer; bold/italic/color
/// tags are not carried over.
pub fn write_docx(path: &str, text: &str) -> Result<()> {
    let file = File::create(path)?;
    Docx::new()
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(text.trim_end())))
        .build()
        .pack(file)?;
    Ok(())
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
    fn test_output_is_a_zip_container() {
        let path = temp_path("export.docx");
        write_docx(&path, "hello docx\nsecond line").unwrap();
        let bytes = std::fs::read(&path).unwrap();
        // DOCX is a ZIP archive
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..2], b"PK");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_empty_buffer_still_produces_a_document() {
        let path = temp_path("empty.docx");
        write_docx(&path, "").unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
        std::fs::remove_file(&path).ok();
    }
}
