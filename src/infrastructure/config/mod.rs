//! Infrastructure configuration modules.

pub mod logging;
pub mod polling;
pub mod settings;
pub mod telegram;
