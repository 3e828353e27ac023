//! Date-stamped file caching.
//!
//! This module provides a disk-based cache whose entries carry their
//! creation date in the file name. Entries dated today or yesterday are
//! served as-is; anything older is evicted on the next rotation.

pub mod name;
pub mod store;

pub use name::EntryName;
pub use store::{CacheEntryInfo, DatedFileCache};

/// Get the default cache directory.
pub fn default_cache_dir() -> std::path::PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("opmlcache")
        .join("feeds")
}
