use time::macros::format_description;
use time::OffsetDateTime;

/// Append-only activity log.
///
/// Entries live for the lifetime of the process and are mirrored into the
/// log panel by the coordinator; nothing is persisted or rotated.
pub struct ActivityLog {
    entries: Vec<String>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a message stamped with the current wall-clock time and return
    /// the formatted entry.
    pub fn append(&mut self, message: &str) -> &str {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        self.append_at(now, message)
    }

    fn append_at(&mut self, at: OffsetDateTime, message: &str) -> &str {
        let format = format_description!("[hour]:[minute]:[second]");
        let stamp = at.format(&format).unwrap_or_default();
        self.entries.push(format!("[{}] {}", stamp, message));
        self.entries.last().map(String::as_str).unwrap_or("")
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_entry_format() {
        let mut log = ActivityLog::new();
        let entry = log.append_at(datetime!(2024-06-01 09:05:03 UTC), "Opened file: notes.txt");
        assert_eq!(entry, "[09:05:03] Opened file: notes.txt");
    }

    #[test]
    fn test_entries_are_appended_in_order() {
        let mut log = ActivityLog::new();
        log.append_at(datetime!(2024-06-01 10:00:00 UTC), "first");
        log.append_at(datetime!(2024-06-01 10:00:01 UTC), "second");
        log.append_at(datetime!(2024-06-01 10:00:02 UTC), "third");
        let entries = log.entries();
        assert_eq!(entries.len(), 3);
        assert!(entries[0].ends_with("first"));
        assert!(entries[1].ends_with("second"));
        assert!(entries[2].ends_with("third"));
    }

    #[test]
    fn test_timestamps_are_zero_padded() {
        let mut log = ActivityLog::new();
        let entry = log.append_at(datetime!(2024-06-01 01:02:03 UTC), "x");
        assert!(entry.starts_with("[01:02:03]"));
    }
}
