use std::path::Path;

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Append `ext` when the user typed a path without an extension in the save
/// dialog. Paths that already carry any extension are left alone.
pub fn ensure_extension(path: &str, ext: &str) -> String {
    if Path::new(path).extension().is_some() {
        path.to_string()
    } else {
        format!("{}.{}", path, ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_filename_from_path() {
        assert_eq!(extract_filename("/home/user/test.txt"), "test.txt");
        assert_eq!(extract_filename("test.txt"), "test.txt");
        assert_eq!(extract_filename("/path/with/many/levels/file.md"), "file.md");
    }

    #[test]
    fn test_extract_filename_edge_cases() {
        assert_eq!(extract_filename("/home/user/"), "user");
        assert_eq!(extract_filename(""), "Unknown");
        assert_eq!(extract_filename("."), "Unknown");
        assert_eq!(extract_filename("/"), "Unknown");
    }

    #[test]
    fn test_ensure_extension_appends_when_missing() {
        assert_eq!(ensure_extension("/tmp/notes", "txt"), "/tmp/notes.txt");
        assert_eq!(ensure_extension("report", "pdf"), "report.pdf");
    }

    #[test]
    fn test_ensure_extension_keeps_existing() {
        assert_eq!(ensure_extension("/tmp/notes.txt", "txt"), "/tmp/notes.txt");
        // Any extension counts, even a different one
        assert_eq!(ensure_extension("archive.bak", "docx"), "archive.bak");
    }
}
