//! CLI interface for snifferx
//!
//! Argument parsing and text rendering for the `snifferx` binary; the
//! binary itself wires these to the capture and dissect crates.

pub mod args;
pub mod render;

pub use args::{Cli, Commands};
