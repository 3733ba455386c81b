//! Homework review API adapter.

pub mod client;
