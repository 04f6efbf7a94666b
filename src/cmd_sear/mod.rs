//! Subcommand modules for the `sear` binary.

pub mod evaluate;
pub mod generate;
pub mod search;
