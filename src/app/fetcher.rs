//! Status fetching with local recovery from transport failures.

use std::sync::Arc;
use std::time::Duration;

use tracing::error;

use crate::domain::{Cursor, StatusPage};
use crate::error::Result;
use crate::port::{Notifier, Sleeper, StatusSource};

/// Wraps a [`StatusSource`] so that API failures never reach the poll loop.
///
/// A failed request is logged, announced in the chat, followed by the retry
/// delay, and turned into an empty page. Only a failure to deliver that
/// announcement is returned as an error.
pub struct StatusFetcher {
    source: Arc<dyn StatusSource>,
    notifier: Arc<dyn Notifier>,
    sleeper: Arc<dyn Sleeper>,
    retry_delay: Duration,
}

impl StatusFetcher {
    pub fn new(
        source: Arc<dyn StatusSource>,
        notifier: Arc<dyn Notifier>,
        sleeper: Arc<dyn Sleeper>,
        retry_delay: Duration,
    ) -> Self {
        Self {
            source,
            notifier,
            sleeper,
            retry_delay,
        }
    }

    /// Fetch status changes since `cursor`, or since now when unset.
    pub async fn fetch(&self, cursor: Option<Cursor>) -> Result<StatusPage> {
        let cursor = cursor.unwrap_or_else(Cursor::now);

        match self.source.statuses_since(cursor).await {
            Ok(page) => Ok(page),
            Err(e) => {
                error!(
                    source = self.source.source_name(),
                    cursor = %cursor,
                    error = %e,
                    "Homework status not received"
                );
                self.notifier
                    .notify(&format!("Failed to fetch homework status: {e}"))
                    .await?;
                self.sleeper.sleep(self.retry_delay).await;
                Ok(StatusPage::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testkit::domain::{page, record};
    use crate::testkit::notifier::RecordingNotifier;
    use crate::testkit::sleeper::RecordingSleeper;
    use crate::testkit::source::{ScriptedSource, Step};

    const RETRY: Duration = Duration::from_secs(5);

    fn fetcher(
        source: &ScriptedSource,
        notifier: &RecordingNotifier,
        sleeper: &RecordingSleeper,
    ) -> StatusFetcher {
        StatusFetcher::new(
            Arc::new(source.clone()),
            Arc::new(notifier.clone()),
            Arc::new(sleeper.clone()),
            RETRY,
        )
    }

    #[tokio::test]
    async fn passes_page_through() {
        let expected = page(vec![record("proj1", "approved")], Some(2_000));
        let source = ScriptedSource::new().with_steps(vec![Step::Page(expected.clone())]);
        let notifier = RecordingNotifier::new();
        let sleeper = RecordingSleeper::new();

        let result = fetcher(&source, &notifier, &sleeper)
            .fetch(Some(Cursor::new(1_000)))
            .await
            .unwrap();

        assert_eq!(result, expected);
        assert_eq!(source.cursors(), vec![Cursor::new(1_000)]);
        assert!(notifier.is_empty());
        assert!(sleeper.sleeps().is_empty());
    }

    #[tokio::test]
    async fn transport_failure_returns_empty_page_and_alerts_once() {
        let source = ScriptedSource::new().with_steps(vec![Step::TransportFailure]);
        let notifier = RecordingNotifier::new();
        let sleeper = RecordingSleeper::new();

        let result = fetcher(&source, &notifier, &sleeper)
            .fetch(Some(Cursor::new(1_000)))
            .await
            .unwrap();

        assert_eq!(result, StatusPage::default());
        assert_eq!(notifier.len(), 1);
        assert!(notifier.messages()[0].starts_with("Failed to fetch homework status"));
        assert_eq!(sleeper.sleeps(), vec![RETRY]);
    }

    #[tokio::test]
    async fn missing_cursor_defaults_to_now() {
        let source = ScriptedSource::new();
        let notifier = RecordingNotifier::new();
        let sleeper = RecordingSleeper::new();
        let before = Cursor::now();

        fetcher(&source, &notifier, &sleeper)
            .fetch(None)
            .await
            .unwrap();

        let used = source.cursors()[0];
        assert!(used >= before);
        assert!(used <= Cursor::now());
    }

    #[tokio::test]
    async fn alert_delivery_failure_propagates() {
        let source = ScriptedSource::new().with_steps(vec![Step::TransportFailure]);
        let notifier = RecordingNotifier::new();
        notifier.fail_next(1);
        let sleeper = RecordingSleeper::new();

        let result = fetcher(&source, &notifier, &sleeper)
            .fetch(Some(Cursor::new(1_000)))
            .await;

        assert!(matches!(result, Err(Error::Notify(_))));
        assert!(sleeper.sleeps().is_empty());
    }
}
