//! Homework review domain: records, verdicts, cursor, message text.

mod cursor;
mod homework;
mod translate;
mod verdict;

pub use cursor::Cursor;
pub use homework::{HomeworkRecord, StatusPage};
pub use translate::translate;
pub use verdict::Verdict;
