//! Command-line interface.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations and dispatch

pub mod args;
pub mod commands;

pub use args::{AllocateArgs, Cli, Commands, EvictArgs, ListArgs, LookupArgs};
pub use commands::{dispatch, EXIT_MISS, EXIT_OK};
