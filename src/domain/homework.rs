//! Homework status records as reported by the review API.
//!
//! Example response body:
//! ```json
//! {"homeworks":[{"homework_name":"proj1","status":"approved"}],"current_date":1700000000}
//! ```

use serde::Deserialize;

/// One homework submission and its review status.
///
/// Both fields are optional so that a malformed record still decodes and
/// can be reported to the user instead of failing the whole page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HomeworkRecord {
    pub homework_name: Option<String>,
    pub status: Option<String>,
}

impl HomeworkRecord {
    /// Create a complete record.
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            homework_name: Some(name.into()),
            status: Some(status.into()),
        }
    }
}

/// One page of status updates newer than the requested cursor.
///
/// `StatusPage::default()` doubles as the empty result handed back when the
/// API could not be reached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StatusPage {
    #[serde(default)]
    pub homeworks: Vec<HomeworkRecord>,
    #[serde(default)]
    pub current_date: Option<i64>,
}

impl StatusPage {
    /// The most recent record; the API lists newest first.
    #[must_use]
    pub fn latest(&self) -> Option<&HomeworkRecord> {
        self.homeworks.first()
    }
}
