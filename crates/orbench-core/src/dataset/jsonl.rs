//! Newline-delimited JSON helpers
//!
//! The datasets, query files, and result logs are all JSONL: one JSON
//! object per line, blank lines ignored.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{BenchError, BenchResult};

/// Read every record from a JSONL file
pub fn read_jsonl<T: DeserializeOwned>(path: impl AsRef<Path>) -> BenchResult<Vec<T>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| BenchError::dataset(path, format!("failed to read: {e}")))?;

    let mut records = Vec::new();
    for (lineno, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(line).map_err(|e| {
            BenchError::dataset(path, format!("invalid JSON on line {}: {e}", lineno + 1))
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Write records to a JSONL file, creating parent directories as needed
pub fn write_jsonl<T: Serialize>(records: &[T], path: impl AsRef<Path>) -> BenchResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }

    std::fs::write(path, out)?;
    Ok(())
}

/// Append a single record to a JSONL file, creating it if missing
pub fn append_jsonl<T: Serialize>(record: &T, path: impl AsRef<Path>) -> BenchResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", serde_json::to_string(record)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        id: u64,
        name: String,
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rows.jsonl");

        let rows = vec![
            Row {
                id: 1,
                name: "a".to_string(),
            },
            Row {
                id: 2,
                name: "b".to_string(),
            },
        ];

        write_jsonl(&rows, &path).unwrap();
        let read: Vec<Row> = read_jsonl(&path).unwrap();
        assert_eq!(read, rows);
    }

    #[test]
    fn test_blank_lines_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rows.jsonl");
        std::fs::write(&path, "{\"id\":1,\"name\":\"a\"}\n\n{\"id\":2,\"name\":\"b\"}\n").unwrap();

        let read: Vec<Row> = read_jsonl(&path).unwrap();
        assert_eq!(read.len(), 2);
    }

    #[test]
    fn test_invalid_line_reports_position() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rows.jsonl");
        std::fs::write(&path, "{\"id\":1,\"name\":\"a\"}\nnot json\n").unwrap();

        let err = read_jsonl::<Row>(&path).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_append_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("log.jsonl");

        append_jsonl(
            &Row {
                id: 1,
                name: "x".to_string(),
            },
            &path,
        )
        .unwrap();
        append_jsonl(
            &Row {
                id: 2,
                name: "y".to_string(),
            },
            &path,
        )
        .unwrap();

        let read: Vec<Row> = read_jsonl(&path).unwrap();
        assert_eq!(read.len(), 2);
    }
}
