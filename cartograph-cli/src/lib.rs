//! Support library for the cartograph CLI binary.
//!
//! Exposes the command and logging modules so tests can drive the whole
//! planning run without spawning a subprocess.

pub mod cli;
pub mod logging;
