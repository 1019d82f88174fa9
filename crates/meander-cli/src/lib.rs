//! Command-line front end for meander patterns
//!
//! The binary is a thin shell around this library: argument definitions live in
//! [`cli`], and [`commands`] turns a parsed command line into output on any
//! writer, which keeps both halves testable without spawning a process.

pub mod cli;
pub mod commands;
