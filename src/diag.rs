//! Append-only diagnostics log for swallowed failures.
//!
//! Fetch and parse errors are never surfaced beyond the empty-state display,
//! so they land here. A write failure on the log itself is ignored.

use std::io::Write;
use std::path::Path;

pub fn log_error(path: &Path, message: &str) {
    let _ = append(path, message);
}

fn append(path: &Path, message: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    writeln!(file, "{} {}", chrono::Utc::now().to_rfc3339(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_timestamped_lines() {
        let dir = std::env::temp_dir().join("chick-feed-diag-test");
        let path = dir.join("errors.log");
        let _ = std::fs::remove_file(&path);

        log_error(&path, "inspiration fetch failed");
        log_error(&path, "library fetch failed");

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("inspiration fetch failed"));
        assert!(lines[1].ends_with("library fetch failed"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
