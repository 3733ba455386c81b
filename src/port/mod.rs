//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the poll loop and the outside world.
//! Adapters implement them against real services; the `testkit` module
//! implements them with scripted fakes.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │        Poll loop        │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     │                         │                             │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │ Review  │            │   Sleeper   │              │ Notifier  │
//! │   API   │            │   (tokio)   │              │ (Telegram)│
//! └─────────┘            └─────────────┘              └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`StatusSource`] - Homework status lookups
//! - [`Notifier`] - Outbound chat messages
//! - [`Sleeper`] - Delays between polls and after failures

mod notifier;
mod sleeper;
mod source;

pub use notifier::Notifier;
pub use sleeper::{Sleeper, TokioSleeper};
pub use source::StatusSource;
