use crate::error::Result;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// One logged command line and its 1-based position in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub index: usize,
    pub line: String,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.  \t{}", self.index, self.line)
    }
}

/// Append-only command log stored as one line per command.
#[derive(Debug, Clone)]
pub struct History {
    path: PathBuf,
}

impl History {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a line. Embedded newlines are flattened to spaces so one
    /// command always occupies one line.
    pub fn add(&self, line: &str) -> Result<()> {
        self.ensure_parent()?;
        let line = line.replace(['\r', '\n'], " ");

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;

        tracing::debug!(path = %self.path.display(), "appended history line");
        Ok(())
    }

    /// Read back the log.
    ///
    /// Only lines containing every term in `match_terms` are kept. With
    /// `limit > 0` only the last `limit` of those are returned. A missing
    /// log reads as empty.
    pub fn get(&self, match_terms: &[String], limit: usize) -> Result<Vec<HistoryEntry>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut entries: Vec<HistoryEntry> = content
            .lines()
            .enumerate()
            .filter(|(_, line)| match_terms.iter().all(|term| line.contains(term.as_str())))
            .map(|(i, line)| HistoryEntry {
                index: i + 1,
                line: line.to_string(),
            })
            .collect();

        if limit > 0 && entries.len() > limit {
            entries.drain(..entries.len() - limit);
        }
        Ok(entries)
    }

    /// Truncate the log to empty.
    pub fn clean(&self) -> Result<()> {
        self.ensure_parent()?;
        File::create(&self.path)?;
        tracing::debug!(path = %self.path.display(), "cleaned history");
        Ok(())
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn terms(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_entry_display() {
        let entry = HistoryEntry {
            index: 7,
            line: "server list".to_string(),
        };
        assert_eq!(entry.to_string(), "7.  \tserver list");
    }

    #[test]
    fn test_add_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let history = History::new(dir.path().join("nested/deeper/history"));
        history.add("file list").unwrap();

        let content = fs::read_to_string(history.path()).unwrap();
        assert_eq!(content, "file list\n");
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let history = History::new(dir.path().join("history"));
        assert!(history.get(&[], 0).unwrap().is_empty());
    }

    #[test]
    fn test_multiline_input_is_flattened() {
        let dir = TempDir::new().unwrap();
        let history = History::new(dir.path().join("history"));
        history.add("first\nsecond").unwrap();

        let entries = history.get(&[], 0).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].line, "first second");
    }

    #[test]
    fn test_limit_keeps_last_entries() {
        let dir = TempDir::new().unwrap();
        let history = History::new(dir.path().join("history"));
        for line in ["a", "b", "c", "d"] {
            history.add(line).unwrap();
        }

        let entries = history.get(&[], 2).unwrap();
        assert_eq!(entries.iter().map(|e| e.index).collect::<Vec<_>>(), vec![3, 4]);

        let all = history.get(&[], 10).unwrap();
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_match_requires_every_term() {
        let dir = TempDir::new().unwrap();
        let history = History::new(dir.path().join("history"));
        history.add("server list --detail").unwrap();
        history.add("file list").unwrap();
        history.add("server info 42").unwrap();

        let entries = history.get(&terms(&["server", "list"]), 0).unwrap();
        assert_eq!(
            entries,
            vec![HistoryEntry {
                index: 1,
                line: "server list --detail".to_string()
            }]
        );

        let entries = history.get(&terms(&["list"]), 1).unwrap();
        assert_eq!(entries[0].index, 2);
    }

    #[test]
    fn test_clean_truncates() {
        let dir = TempDir::new().unwrap();
        let history = History::new(dir.path().join("history"));
        history.add("one").unwrap();
        history.clean().unwrap();

        assert!(history.get(&[], 0).unwrap().is_empty());
        assert_eq!(fs::read_to_string(history.path()).unwrap(), "");
    }
}
