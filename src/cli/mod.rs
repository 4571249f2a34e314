//! CLI module for productstore - command-line interface and subcommands.
//!
//! Drives the record store through its public operations and prints the outcome.

pub mod commands;

pub use commands::Cli;
