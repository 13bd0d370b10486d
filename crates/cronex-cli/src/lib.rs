//! Cronex CLI library.
//!
//! Command implementations live here so they can be unit tested; the
//! `cronex` binary in `main.rs` only parses arguments and dispatches.

pub mod commands;
