//! Warning types for non-fatal errors during JSONL processing.
//!
//! Resilient loading keeps going when individual lines contain
//! malformed JSON; each skipped line is reported as a [`Warning`] so
//! callers can surface data-quality problems without aborting the load.

/// A non-fatal warning that occurred during JSONL processing.
///
/// Each variant carries the 1-based line number where the issue
/// occurred so callers can point users at the offending record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A line contained malformed JSON that could not be parsed.
    ///
    /// The line is skipped and processing continues with the next line.
    MalformedJson {
        /// The 1-based line number where the error occurred.
        line_number: usize,
        /// A description of the JSON parsing error.
        error: String,
    },

    /// A line was skipped for a reason other than malformed JSON.
    SkippedLine {
        /// The 1-based line number that was skipped.
        line_number: usize,
        /// The reason the line was skipped.
        reason: String,
    },
}

impl Warning {
    /// Returns the line number associated with this warning.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::MalformedJson { line_number, .. } | Self::SkippedLine { line_number, .. } => {
                *line_number
            }
        }
    }

    /// Returns a human-readable description of the warning.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::MalformedJson { line_number, error } => {
                format!("line {}: malformed JSON: {}", line_number, error)
            }
            Self::SkippedLine {
                line_number,
                reason,
            } => {
                format!("line {}: skipped: {}", line_number, reason)
            }
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::error::Error for Warning {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_number_is_reported_for_both_variants() {
        let malformed = Warning::MalformedJson {
            line_number: 42,
            error: "unexpected token".to_string(),
        };
        assert_eq!(malformed.line_number(), 42);

        let skipped = Warning::SkippedLine {
            line_number: 7,
            reason: "empty line".to_string(),
        };
        assert_eq!(skipped.line_number(), 7);
    }

    #[test]
    fn description_contains_line_and_cause() {
        let warning = Warning::MalformedJson {
            line_number: 5,
            error: "unexpected end of input".to_string(),
        };
        let desc = warning.description();
        assert!(desc.contains("line 5"));
        assert!(desc.contains("unexpected end of input"));
    }
}
