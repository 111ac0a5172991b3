//! Subcommand modules for the `figg` binary.

pub mod adj;
pub mod dist;
pub mod freq;
pub mod utils;
pub mod workspace;
