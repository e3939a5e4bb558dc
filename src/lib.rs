#![deny(clippy::unwrap_used)]
#![doc = include_str!("../README.md")]

#[doc(hidden)]
pub mod test_support;

pub mod config;
pub mod console;
pub mod engine;
pub mod fill;
pub mod input;
pub mod partition;
pub mod preview;
pub mod report;
pub mod run;
pub mod tally;
pub mod verify;
