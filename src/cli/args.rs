//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// opmlcache - Date-stamped file cache for generated OPML feeds.
#[derive(Debug, Parser)]
#[command(name = "opmlcache")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Cache directory (overrides the platform default)
    #[arg(short, long, global = true, env = "OPMLCACHE_DIR")]
    pub dir: Option<PathBuf>,

    /// Entry file extension, leading dot included
    #[arg(short, long, global = true, default_value = ".opml")]
    pub ext: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the path of a fresh cached entry for a key
    Lookup(LookupArgs),

    /// Evict a key and print the path a new entry should be written to
    Allocate(AllocateArgs),

    /// Delete all entries for a key, fresh or stale
    Evict(EvictArgs),

    /// List cache entries with their ages
    List(ListArgs),
}

/// Arguments for the `lookup` command.
#[derive(Debug, Clone, clap::Args)]
pub struct LookupArgs {
    /// Logical key of the cached artifact
    pub key: String,
}

/// Arguments for the `allocate` command.
#[derive(Debug, Clone, clap::Args)]
pub struct AllocateArgs {
    /// Logical key of the cached artifact
    pub key: String,
}

/// Arguments for the `evict` command.
#[derive(Debug, Clone, clap::Args)]
pub struct EvictArgs {
    /// Logical key of the cached artifact
    pub key: String,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
