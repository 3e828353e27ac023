//! opmlcache - Date-stamped file cache for generated OPML feeds.
//!
//! A feed generator that runs on a slow upstream wants to rebuild each OPML
//! document at most once a day. This crate keeps the generated files in a
//! single directory, encodes the production date in each file name, and
//! answers the only two questions that matter: "is there a fresh copy for
//! this key?" and "where should the replacement go?".
//!
//! # Modules
//!
//! - [`cache`] - Entry-name grammar and the dated file store
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```no_run
//! use opmlcache::cache::DatedFileCache;
//!
//! # fn main() -> opmlcache::Result<()> {
//! let cache = DatedFileCache::new("cache", ".opml")?;
//! if cache.lookup("state-CA")?.is_none() {
//!     let path = cache.allocate("state-CA")?;
//!     // generate the feed, then write it to `path`
//!     std::fs::write(&path, "<opml version=\"2.0\"/>")?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod cli;
pub mod error;

pub use error::{CacheError, Result};
