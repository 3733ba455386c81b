//! Review verdicts and their user-facing wording.

use std::fmt;
use std::str::FromStr;

use crate::error::StatusError;

use super::homework::HomeworkRecord;

/// Recognized review states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Reviewing,
    Rejected,
    Approved,
}

impl Verdict {
    /// Wire label used by the review API.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Verdict::Reviewing => "reviewing",
            Verdict::Rejected => "rejected",
            Verdict::Approved => "approved",
        }
    }

    /// Sentence shown to the student.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Verdict::Reviewing => "The submission has been taken into review.",
            Verdict::Rejected => "Unfortunately, the reviewer found issues in the submission.",
            Verdict::Approved => {
                "The reviewer is happy with everything, you can move on to the next lesson."
            }
        }
    }

    /// Validate a record and resolve its verdict.
    ///
    /// Returns the submission name alongside the verdict.
    pub fn for_record(record: &HomeworkRecord) -> Result<(&str, Verdict), StatusError> {
        let name = record
            .homework_name
            .as_deref()
            .ok_or(StatusError::MissingField {
                field: "homework_name",
                name: None,
            })?;
        let status = record
            .status
            .as_deref()
            .ok_or_else(|| StatusError::MissingField {
                field: "status",
                name: Some(name.to_string()),
            })?;

        let verdict = status
            .parse::<Verdict>()
            .map_err(|_| StatusError::UnknownStatus {
                name: name.to_string(),
                status: status.to_string(),
            })?;

        Ok((name, verdict))
    }
}

impl FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reviewing" => Ok(Verdict::Reviewing),
            "rejected" => Ok(Verdict::Rejected),
            "approved" => Ok(Verdict::Approved),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back() {
        for verdict in [Verdict::Reviewing, Verdict::Rejected, Verdict::Approved] {
            assert_eq!(verdict.label().parse::<Verdict>(), Ok(verdict));
        }
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert!("Approved".parse::<Verdict>().is_err());
    }

    #[test]
    fn for_record_reports_first_missing_field() {
        let record = HomeworkRecord::default();
        assert_eq!(
            Verdict::for_record(&record),
            Err(StatusError::MissingField {
                field: "homework_name",
                name: None,
            })
        );
    }

    #[test]
    fn for_record_names_submission_missing_status() {
        let record = HomeworkRecord {
            homework_name: Some("proj3".into()),
            status: None,
        };
        assert_eq!(
            Verdict::for_record(&record),
            Err(StatusError::MissingField {
                field: "status",
                name: Some("proj3".into()),
            })
        );
    }

    #[test]
    fn for_record_rejects_unknown_status() {
        let record = HomeworkRecord::new("proj2", "pending");
        assert_eq!(
            Verdict::for_record(&record),
            Err(StatusError::UnknownStatus {
                name: "proj2".into(),
                status: "pending".into(),
            })
        );
    }
}
