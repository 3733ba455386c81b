//! The poll loop: fetch, translate, notify, sleep, forever.
//!
//! ```text
//! Starting ──▶ WaitingResult ──ok──▶ IdleSleep ──poll_interval──┐
//!                  ▲   │                                        │
//!                  │   └──err──▶ ErrorRecovery ──retry_delay──┐ │
//!                  └──────────────────────────────────────────┴─┘
//! ```

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use super::fetcher::StatusFetcher;
use crate::domain::{translate, Cursor, HomeworkRecord, StatusPage};
use crate::error::{Error, Recovery, Result};
use crate::infrastructure::config::polling::DeliveryMode;
use crate::infrastructure::config::settings::Config;
use crate::port::{Notifier, Sleeper, StatusSource};

/// Where the loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Starting,
    WaitingResult,
    IdleSleep,
    ErrorRecovery,
}

/// Outcome of one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The iteration finished; `sent` notifications went out.
    Idle { sent: usize },
    /// The iteration failed and the failure was handled.
    Recovered,
}

/// Timing and delivery policy of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    pub poll_interval: Duration,
    pub retry_delay: Duration,
    pub delivery: DeliveryMode,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for PollSettings {
    fn from(config: &Config) -> Self {
        Self {
            poll_interval: config.polling.poll_interval(),
            retry_delay: config.polling.retry_delay(),
            delivery: config.delivery,
        }
    }
}

/// Records of a fetched page still waiting for delivery.
///
/// The cursor moves to `current_date` only once `records` is drained, so a
/// failed send resumes at the first undelivered record.
#[derive(Debug)]
struct Backlog {
    records: VecDeque<HomeworkRecord>,
    current_date: Option<i64>,
}

impl Backlog {
    fn from_page(page: StatusPage, delivery: DeliveryMode) -> Self {
        let records: VecDeque<HomeworkRecord> = match delivery {
            DeliveryMode::Latest => page.latest().cloned().into_iter().collect(),
            DeliveryMode::All => page.homeworks.into(),
        };
        Self {
            records,
            current_date: page.current_date,
        }
    }
}

/// Single-owner polling state machine.
///
/// The cursor lives here and nowhere else.
pub struct PollLoop {
    fetcher: StatusFetcher,
    notifier: Arc<dyn Notifier>,
    sleeper: Arc<dyn Sleeper>,
    settings: PollSettings,
    cursor: Cursor,
    state: LoopState,
    backlog: Option<Backlog>,
}

impl PollLoop {
    /// Create a loop whose cursor starts at the current time.
    pub fn new(
        source: Arc<dyn StatusSource>,
        notifier: Arc<dyn Notifier>,
        sleeper: Arc<dyn Sleeper>,
        settings: PollSettings,
    ) -> Self {
        Self::with_cursor(source, notifier, sleeper, settings, Cursor::now())
    }

    pub fn with_cursor(
        source: Arc<dyn StatusSource>,
        notifier: Arc<dyn Notifier>,
        sleeper: Arc<dyn Sleeper>,
        settings: PollSettings,
        cursor: Cursor,
    ) -> Self {
        let fetcher = StatusFetcher::new(
            source,
            Arc::clone(&notifier),
            Arc::clone(&sleeper),
            settings.retry_delay,
        );
        info!(cursor = %cursor, delivery = ?settings.delivery, "reviewbot started");

        Self {
            fetcher,
            notifier,
            sleeper,
            settings,
            cursor,
            state: LoopState::Starting,
            backlog: None,
        }
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Poll until a failure that cannot be recovered from.
    ///
    /// Every error an iteration can raise today maps to
    /// [`Recovery::AlertAndRetry`], so in practice this only ends when the
    /// process is stopped. The `Abort` arm keeps the dispatch total should a
    /// fatal error kind reach the loop.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.tick().await?;
        }
    }

    /// Run one iteration including its trailing sleep.
    ///
    /// Only errors whose [`Recovery`] is `Abort` are returned.
    pub async fn tick(&mut self) -> Result<Tick> {
        self.state = LoopState::WaitingResult;

        match self.poll_once().await {
            Ok(sent) => {
                self.state = LoopState::IdleSleep;
                info!(sent, cursor = %self.cursor, "Poll iteration complete");
                self.sleeper.sleep(self.settings.poll_interval).await;
                Ok(Tick::Idle { sent })
            }
            Err(e) => match e.recovery() {
                Recovery::Abort => Err(e),
                Recovery::AlertAndRetry => {
                    self.state = LoopState::ErrorRecovery;
                    self.recover(&e).await;
                    Ok(Tick::Recovered)
                }
            },
        }
    }

    async fn poll_once(&mut self) -> Result<usize> {
        let mut backlog = match self.backlog.take() {
            Some(backlog) => {
                debug!(
                    remaining = backlog.records.len(),
                    "Resuming partially delivered page"
                );
                backlog
            }
            None => {
                let page = self.fetcher.fetch(Some(self.cursor)).await?;
                let total = page.homeworks.len();
                let backlog = Backlog::from_page(page, self.settings.delivery);
                if total > backlog.records.len() {
                    debug!(
                        skipped = total - backlog.records.len(),
                        "Skipping older records in this page"
                    );
                }
                backlog
            }
        };

        let mut sent = 0;
        while let Some(record) = backlog.records.front() {
            let message = translate(record);
            if let Err(e) = self.notifier.notify(&message).await {
                self.backlog = Some(backlog);
                return Err(e);
            }
            backlog.records.pop_front();
            sent += 1;
        }

        let next = self.cursor.advance(backlog.current_date);
        if next != self.cursor {
            debug!(from = %self.cursor, to = %next, "Cursor advanced");
        }
        self.cursor = next;

        Ok(sent)
    }

    async fn recover(&self, e: &Error) {
        error!(error = %e, cursor = %self.cursor, "Bot encountered an error");
        if let Err(notify_err) = self
            .notifier
            .notify(&format!("Bot encountered an error: {e}"))
            .await
        {
            warn!(error = %notify_err, "Failed to deliver error notification");
        }
        self.sleeper.sleep(self.settings.retry_delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Verdict;
    use crate::testkit::domain::{page, record};
    use crate::testkit::notifier::RecordingNotifier;
    use crate::testkit::sleeper::RecordingSleeper;
    use crate::testkit::source::{ScriptedSource, Step};

    const POLL: Duration = Duration::from_secs(300);
    const RETRY: Duration = Duration::from_secs(5);

    struct Harness {
        source: ScriptedSource,
        notifier: RecordingNotifier,
        sleeper: RecordingSleeper,
        poll_loop: PollLoop,
    }

    fn harness(steps: Vec<Step>, delivery: DeliveryMode) -> Harness {
        let source = ScriptedSource::new().with_steps(steps);
        let notifier = RecordingNotifier::new();
        let sleeper = RecordingSleeper::new();
        let settings = PollSettings {
            poll_interval: POLL,
            retry_delay: RETRY,
            delivery,
        };
        let poll_loop = PollLoop::with_cursor(
            Arc::new(source.clone()),
            Arc::new(notifier.clone()),
            Arc::new(sleeper.clone()),
            settings,
            Cursor::new(1_000),
        );
        Harness {
            source,
            notifier,
            sleeper,
            poll_loop,
        }
    }

    #[tokio::test]
    async fn starts_in_starting_state() {
        let h = harness(vec![], DeliveryMode::Latest);
        assert_eq!(h.poll_loop.state(), LoopState::Starting);
        assert_eq!(h.poll_loop.cursor(), Cursor::new(1_000));
    }

    #[tokio::test]
    async fn sends_latest_record_and_advances_cursor() {
        let mut h = harness(
            vec![Step::Page(page(
                vec![record("proj1", "approved"), record("proj0", "rejected")],
                Some(2_000),
            ))],
            DeliveryMode::Latest,
        );

        let tick = h.poll_loop.tick().await.unwrap();

        assert_eq!(tick, Tick::Idle { sent: 1 });
        assert_eq!(h.poll_loop.state(), LoopState::IdleSleep);
        assert_eq!(h.poll_loop.cursor(), Cursor::new(2_000));
        let messages = h.notifier.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("\"proj1\""));
        assert!(messages[0].ends_with(Verdict::Approved.text()));
        assert_eq!(h.sleeper.sleeps(), vec![POLL]);
    }

    #[tokio::test]
    async fn all_mode_sends_every_record_in_order() {
        let mut h = harness(
            vec![Step::Page(page(
                vec![record("proj2", "reviewing"), record("proj1", "approved")],
                Some(2_000),
            ))],
            DeliveryMode::All,
        );

        let tick = h.poll_loop.tick().await.unwrap();

        assert_eq!(tick, Tick::Idle { sent: 2 });
        let messages = h.notifier.messages();
        assert!(messages[0].contains("\"proj2\""));
        assert!(messages[1].contains("\"proj1\""));
    }

    #[tokio::test]
    async fn missing_current_date_keeps_cursor() {
        let mut h = harness(
            vec![Step::Page(page(vec![record("proj1", "reviewing")], None))],
            DeliveryMode::Latest,
        );

        h.poll_loop.tick().await.unwrap();

        assert_eq!(h.poll_loop.cursor(), Cursor::new(1_000));
        assert_eq!(h.notifier.len(), 1);
    }

    #[tokio::test]
    async fn unknown_status_is_reported_not_fatal() {
        let mut h = harness(
            vec![Step::Page(page(vec![record("proj2", "pending")], Some(2_000)))],
            DeliveryMode::Latest,
        );

        let tick = h.poll_loop.tick().await.unwrap();

        assert_eq!(tick, Tick::Idle { sent: 1 });
        assert!(h.notifier.messages()[0].contains("\"pending\""));
        assert_eq!(h.poll_loop.cursor(), Cursor::new(2_000));
    }

    #[tokio::test]
    async fn transport_failure_keeps_cursor_and_resumes() {
        let mut h = harness(
            vec![
                Step::TransportFailure,
                Step::Page(page(vec![record("proj1", "approved")], Some(2_000))),
            ],
            DeliveryMode::Latest,
        );

        let first = h.poll_loop.tick().await.unwrap();
        assert_eq!(first, Tick::Idle { sent: 0 });
        assert_eq!(h.poll_loop.cursor(), Cursor::new(1_000));
        assert_eq!(h.notifier.len(), 1);

        h.poll_loop.tick().await.unwrap();

        assert_eq!(
            h.source.cursors(),
            vec![Cursor::new(1_000), Cursor::new(1_000)]
        );
        assert_eq!(h.poll_loop.cursor(), Cursor::new(2_000));
        assert_eq!(h.sleeper.sleeps(), vec![RETRY, POLL, POLL]);
    }

    #[tokio::test]
    async fn delivery_failure_enters_recovery() {
        let mut h = harness(
            vec![Step::Page(page(vec![record("proj1", "approved")], Some(2_000)))],
            DeliveryMode::Latest,
        );
        h.notifier.fail_next(1);

        let tick = h.poll_loop.tick().await.unwrap();

        assert_eq!(tick, Tick::Recovered);
        assert_eq!(h.poll_loop.state(), LoopState::ErrorRecovery);
        assert_eq!(h.poll_loop.cursor(), Cursor::new(1_000));
        let messages = h.notifier.messages();
        assert_eq!(messages.len(), 2);
        assert!(messages[1].starts_with("Bot encountered an error"));
        assert_eq!(h.sleeper.sleeps(), vec![RETRY]);
    }

    #[tokio::test]
    async fn failed_error_alert_is_swallowed() {
        let mut h = harness(
            vec![Step::Page(page(vec![record("proj1", "approved")], Some(2_000)))],
            DeliveryMode::Latest,
        );
        h.notifier.fail_next(2);

        let tick = h.poll_loop.tick().await.unwrap();

        assert_eq!(tick, Tick::Recovered);
        assert_eq!(h.notifier.len(), 2);
        assert_eq!(h.sleeper.sleeps(), vec![RETRY]);
    }

    #[tokio::test]
    async fn quiet_polls_send_nothing() {
        let mut h = harness(vec![], DeliveryMode::Latest);

        for _ in 0..3 {
            assert_eq!(h.poll_loop.tick().await.unwrap(), Tick::Idle { sent: 0 });
        }

        assert!(h.notifier.is_empty());
        assert_eq!(h.poll_loop.cursor(), Cursor::new(1_000));
        assert_eq!(h.source.call_count(), 3);
    }

    #[test]
    fn settings_follow_config() {
        let settings = PollSettings::default();
        assert_eq!(settings.poll_interval, POLL);
        assert_eq!(settings.retry_delay, RETRY);
        assert_eq!(settings.delivery, DeliveryMode::Latest);
    }
}
