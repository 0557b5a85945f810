use std::fs;

use crate::app::error::Result;

/// Write the buffer text verbatim with trailing whitespace trimmed.
/// Overwrites any existing file at `path`.
pub fn write_txt(path: &str, text: &str) -> Result<()> {
    fs::write(path, text.trim_end())?;
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
    fn test_round_trip_preserves_trimmed_text() {
        let path = temp_path("roundtrip.txt");
        let text = "hello world\nfoo\n\n  ";
        write_txt(&path, text).unwrap();
        let read_back = std::fs::read_to_string(&path).unwrap();
        assert_eq!(read_back, "hello world\nfoo");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_overwrites_existing_file() {
        let path = temp_path("overwrite.txt");
        write_txt(&path, "first").unwrap();
        write_txt(&path, "second").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_unwritable_path_is_an_io_error() {
        let err = write_txt("/nonexistent-dir/quillpad.txt", "x").unwrap_err();
        assert!(matches!(err, crate::app::error::AppError::Io(_)));
    }
}
