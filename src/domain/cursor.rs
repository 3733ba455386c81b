//! Timestamp cursor used to request only newer status updates.

use std::fmt;

use chrono::Utc;

/// Lower bound, in seconds since the Unix epoch, of the next status request.
///
/// The inner value is private; the poll loop moves it forward only through
/// [`Cursor::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor(i64);

impl Cursor {
    /// Create a cursor at the given Unix timestamp.
    #[must_use]
    pub const fn new(timestamp: i64) -> Self {
        Self(timestamp)
    }

    /// Create a cursor at the current wall-clock time.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now().timestamp())
    }

    /// Get the raw timestamp.
    #[must_use]
    pub const fn timestamp(self) -> i64 {
        self.0
    }

    /// Move to the server-reported `current_date`, or stay put when the
    /// server did not report one.
    #[must_use]
    pub fn advance(self, current_date: Option<i64>) -> Self {
        current_date.map_or(self, Self)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
