//! Turns homework records into chat messages.

use tracing::error;

use super::homework::HomeworkRecord;
use super::verdict::Verdict;

/// Build the notification text for a record.
///
/// Never fails: malformed records and unknown statuses produce a message
/// describing the problem, which is also logged.
#[must_use]
pub fn translate(record: &HomeworkRecord) -> String {
    match Verdict::for_record(record) {
        Ok((name, verdict)) => format!(
            "Your submission \"{name}\" has been reviewed!\n\n{}",
            verdict.text()
        ),
        Err(e) => {
            error!(error = %e, ?record, "Cannot translate homework record");
            e.to_string()
        }
    }
}
