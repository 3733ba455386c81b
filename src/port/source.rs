//! Status source port for the homework review API.

use async_trait::async_trait;

use crate::domain::{Cursor, StatusPage};
use crate::error::Result;

/// Fetches homework status updates newer than a cursor.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Request every status change since `from`.
    ///
    /// Any failure to reach the API or decode its answer is an
    /// [`Error::Transport`](crate::error::Error::Transport).
    async fn statuses_since(&self, from: Cursor) -> Result<StatusPage>;

    /// Name used in logs.
    fn source_name(&self) -> &'static str;
}
