//! Notifier port for outbound chat messages.

use async_trait::async_trait;

use crate::error::Result;

/// Delivers text to the one configured destination.
///
/// Delivery failures are returned to the caller; implementations do not
/// retry.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send `text` verbatim.
    async fn notify(&self, text: &str) -> Result<()>;
}
