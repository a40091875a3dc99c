//! conclusio-cli library root.
//!
//! Re-exports the command implementations and the answers-file form input
//! so that integration tests can drive them without spawning the binary.

pub mod answers;
pub mod commands;
