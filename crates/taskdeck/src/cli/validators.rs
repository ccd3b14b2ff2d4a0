//! CLI input validation functions.
//!
//! Used by clap's `value_parser` attribute to validate user input at
//! parse time, providing immediate feedback for invalid values.

use crate::domain::{TaskId, DUE_DATE_FORMAT, MAX_TITLE_LENGTH};

/// Validate a task title.
///
/// A title must be non-empty after trimming and at most
/// `MAX_TITLE_LENGTH` characters.
pub fn validate_title(s: &str) -> Result<String, String> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err("Title cannot be empty".to_string());
    }

    if trimmed.len() > MAX_TITLE_LENGTH {
        return Err(format!(
            "Title cannot exceed {MAX_TITLE_LENGTH} characters (got {})",
            trimmed.len()
        ));
    }

    Ok(trimmed.to_string())
}

/// Validate a task id argument.
///
/// Ids are positive integers assigned by the store.
pub fn validate_task_id(s: &str) -> Result<TaskId, String> {
    let value: i64 = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid task id '{s}'. Expected a positive integer"))?;

    if value <= 0 {
        return Err(format!("Invalid task id '{s}'. Ids start at 1"));
    }

    Ok(TaskId::new(value))
}

/// Validate a due date argument.
///
/// The store accepts any string as a due date (unparsable dates just
/// sort last), but arguments typed at the CLI are almost always meant
/// to be real dates, so reject anything that isn't `YYYY-MM-DD`.
pub fn validate_due_date(s: &str) -> Result<String, String> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Ok(String::new());
    }

    chrono::NaiveDate::parse_from_str(trimmed, DUE_DATE_FORMAT)
        .map_err(|_| format!("Invalid due date '{trimmed}'. Expected YYYY-MM-DD"))?;

    Ok(trimmed.to_string())
}
