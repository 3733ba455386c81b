//! Application layer - the status fetcher and the poll loop that drives it.

mod fetcher;
mod poll;

pub use fetcher::StatusFetcher;
pub use poll::{LoopState, PollLoop, PollSettings, Tick};
