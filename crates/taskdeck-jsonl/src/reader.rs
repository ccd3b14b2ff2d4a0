//! JSONL reading operations.
//!
//! This module provides async, resilient reading of JSONL files: each
//! line is parsed independently, malformed lines are skipped with a
//! [`Warning`], and blank lines are ignored.

use crate::error::Result;
use crate::warning::Warning;
use serde::de::DeserializeOwned;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Read a JSONL file, skipping malformed lines instead of failing.
///
/// Returns the successfully parsed values in file order together with
/// a warning for every line that could not be parsed. Blank lines
/// (after trimming) are ignored silently.
///
/// # Errors
///
/// Returns an error only for IO failures (the file cannot be opened or
/// read). Parse failures never abort the load; they become warnings.
pub async fn read_jsonl_resilient<T, P>(path: P) -> Result<(Vec<T>, Vec<Warning>)>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let file = File::open(path.as_ref()).await?;
    let mut lines = BufReader::new(file).lines();

    let mut values = Vec::new();
    let mut warnings = Vec::new();
    let mut line_number = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match serde_json::from_str::<T>(trimmed) {
            Ok(value) => values.push(value),
            Err(e) => {
                tracing::warn!(line_number, error = %e, "skipping malformed JSONL line");
                warnings.push(Warning::MalformedJson {
                    line_number,
                    error: e.to_string(),
                });
            }
        }
    }

    Ok((values, warnings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Record {
        id: u32,
        name: String,
    }

    fn write_fixture(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn reads_all_valid_lines_in_order() {
        let file = write_fixture("{\"id\":1,\"name\":\"a\"}\n{\"id\":2,\"name\":\"b\"}\n");
        let (records, warnings) = read_jsonl_resilient::<Record, _>(file.path()).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[1].id, 2);
        assert!(warnings.is_empty());
    }

    #[tokio::test]
    async fn malformed_line_is_skipped_with_warning() {
        let file = write_fixture("{\"id\":1,\"name\":\"a\"}\nnot json\n{\"id\":3,\"name\":\"c\"}\n");
        let (records, warnings) = read_jsonl_resilient::<Record, _>(file.path()).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].line_number(), 2);
    }

    #[tokio::test]
    async fn blank_lines_are_ignored_silently() {
        let file = write_fixture("\n{\"id\":1,\"name\":\"a\"}\n   \n");
        let (records, warnings) = read_jsonl_resilient::<Record, _>(file.path()).await.unwrap();

        assert_eq!(records.len(), 1);
        assert!(warnings.is_empty());
    }

    #[tokio::test]
    async fn empty_file_yields_nothing() {
        let file = write_fixture("");
        let (records, warnings) = read_jsonl_resilient::<Record, _>(file.path()).await.unwrap();

        assert!(records.is_empty());
        assert!(warnings.is_empty());
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let result = read_jsonl_resilient::<Record, _>("/nonexistent/tasks.jsonl").await;
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
