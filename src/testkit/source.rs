//! Mock [`StatusSource`] that replays a script.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::domain::transport_error;
use crate::domain::{Cursor, StatusPage};
use crate::error::Result;
use crate::port::StatusSource;

/// One scripted answer.
#[derive(Debug, Clone)]
pub enum Step {
    Page(StatusPage),
    TransportFailure,
}

/// A status source with a fixed queue of answers.
///
/// Each call pops the next step; once the queue is empty every call returns
/// an empty page. Every requested cursor is recorded.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    steps: Arc<Mutex<VecDeque<Step>>>,
    cursors: Arc<Mutex<Vec<Cursor>>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_steps(self, steps: Vec<Step>) -> Self {
        *self.steps.lock().expect("lock steps") = steps.into();
        self
    }

    /// Cursors passed to `statuses_since`, in call order.
    pub fn cursors(&self) -> Vec<Cursor> {
        self.cursors.lock().expect("lock cursors").clone()
    }

    pub fn call_count(&self) -> usize {
        self.cursors.lock().expect("lock cursors").len()
    }
}

#[async_trait]
impl StatusSource for ScriptedSource {
    async fn statuses_since(&self, from: Cursor) -> Result<StatusPage> {
        self.cursors.lock().expect("lock cursors").push(from);
        let step = self.steps.lock().expect("lock steps").pop_front();
        match step {
            Some(Step::Page(page)) => Ok(page),
            Some(Step::TransportFailure) => Err(transport_error()),
            None => Ok(StatusPage::default()),
        }
    }

    fn source_name(&self) -> &'static str {
        "Scripted"
    }
}
