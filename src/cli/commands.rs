//! Command implementations.
//!
//! Each command opens the cache named by the global `--dir`/`--ext` flags
//! and returns a process exit code. A lookup miss exits 1 so scripts can
//! branch on freshness without parsing output.

use anyhow::Context;

use crate::cache::{default_cache_dir, DatedFileCache};
use crate::error::Result;

use super::args::{AllocateArgs, Cli, Commands, EvictArgs, ListArgs, LookupArgs};

/// Exit code for a successful command.
pub const EXIT_OK: u8 = 0;
/// Exit code for a lookup miss (the caller should regenerate).
pub const EXIT_MISS: u8 = 1;

/// Dispatch the parsed CLI to its command implementation.
pub fn dispatch(cli: &Cli) -> Result<u8> {
    let cache = open_cache(cli)?;

    match &cli.command {
        Commands::Lookup(args) => lookup(&cache, args),
        Commands::Allocate(args) => allocate(&cache, args),
        Commands::Evict(args) => evict(&cache, args),
        Commands::List(args) => list(&cache, args),
    }
}

/// Open the cache from the global flags.
fn open_cache(cli: &Cli) -> Result<DatedFileCache> {
    let dir = cli.dir.clone().unwrap_or_else(default_cache_dir);
    DatedFileCache::new(dir, &cli.ext)
}

fn lookup(cache: &DatedFileCache, args: &LookupArgs) -> Result<u8> {
    match cache.lookup(&args.key)? {
        Some(path) => {
            println!("{}", path.display());
            Ok(EXIT_OK)
        }
        None => {
            eprintln!("No fresh entry for '{}'", args.key);
            Ok(EXIT_MISS)
        }
    }
}

fn allocate(cache: &DatedFileCache, args: &AllocateArgs) -> Result<u8> {
    let path = cache.allocate(&args.key)?;
    println!("{}", path.display());
    Ok(EXIT_OK)
}

fn evict(cache: &DatedFileCache, args: &EvictArgs) -> Result<u8> {
    let removed = cache.evict(&args.key)?;
    println!("Evicted {} entries for '{}'", removed, args.key);
    Ok(EXIT_OK)
}

fn list(cache: &DatedFileCache, args: &ListArgs) -> Result<u8> {
    let entries = cache.entries()?;

    if args.json {
        let json = serde_json::to_string_pretty(&entries).context("Failed to serialize entries")?;
        println!("{json}");
        return Ok(EXIT_OK);
    }

    if entries.is_empty() {
        println!("Cache is empty ({})", cache.dir().display());
        return Ok(EXIT_OK);
    }

    for entry in entries {
        let status = if entry.fresh { "fresh" } else { "stale" };
        println!(
            "{:<30} {}  {:>4}d  {}  {}",
            entry.key,
            entry.date,
            entry.age_days,
            status,
            entry.path.display()
        );
    }
    Ok(EXIT_OK)
}
