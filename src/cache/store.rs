//! Dated file cache storage.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::Local;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::name::EntryName;
use crate::error::{CacheError, Result};

/// Extension must be a single dot followed by word characters.
static EXTENSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\.\w+").expect("EXTENSION_REGEX must compile"));

/// A directory of date-stamped files serving as a cache.
///
/// Each entry is a plain file named `<key>--<date><ext>` (see
/// [`EntryName`]). An entry is fresh when its encoded date is today or
/// yesterday. The cache never writes file contents: [`allocate`] only
/// returns the path the caller should populate.
///
/// There is no coordination between concurrent callers. A lookup racing a
/// rotation for the same key may observe a transient miss, and two
/// concurrent rotations compute the identical path and race on writes;
/// callers that need single-writer-per-key semantics must lock above this
/// component.
///
/// [`allocate`]: DatedFileCache::allocate
#[derive(Debug)]
pub struct DatedFileCache {
    /// Directory holding all entries for this cache instance.
    dir: PathBuf,
    /// File extension of entries, leading dot included (e.g. `.opml`).
    extension: String,
}

/// A decoded cache entry with its on-disk location, for listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntryInfo {
    /// Logical key.
    pub key: String,
    /// Date encoded in the file name.
    pub date: chrono::NaiveDate,
    /// Whole days between today and the encoded date.
    pub age_days: i64,
    /// Whether the entry satisfies lookups (age at most one day).
    pub fresh: bool,
    /// Full path of the entry file.
    pub path: PathBuf,
}

impl DatedFileCache {
    /// Create a cache over `dir` holding files with the given `extension`.
    ///
    /// The directory is created (single level, no parents) when it does not
    /// exist. If the path exists but is not a directory, construction still
    /// succeeds and the failure surfaces on the first scan as
    /// [`CacheError::Io`].
    pub fn new(dir: impl Into<PathBuf>, extension: &str) -> Result<Self> {
        if !EXTENSION_REGEX.is_match(extension) {
            return Err(CacheError::InvalidExtension {
                extension: extension.to_string(),
            });
        }

        let dir = dir.into();
        if dir.as_os_str().is_empty() {
            return Err(CacheError::InvalidDirectory);
        }

        if !dir.exists() {
            fs::create_dir(&dir)?;
            tracing::debug!("Created cache directory {:?}", dir);
        }

        Ok(Self {
            dir,
            extension: extension.to_string(),
        })
    }

    /// Get the cache directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the configured entry extension, leading dot included.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Find a fresh cached file for `key`.
    ///
    /// Scans the directory in enumeration order and returns the first entry
    /// whose key matches and whose encoded date is today or yesterday.
    /// `Ok(None)` is a normal miss, the signal to regenerate. Never deletes
    /// anything.
    pub fn lookup(&self, key: &str) -> Result<Option<PathBuf>> {
        for (entry, path) in self.scan()? {
            if entry.key == key && entry.is_fresh() {
                tracing::debug!("Cache hit for {key:?} at {path:?}");
                return Ok(Some(path));
            }
        }
        tracing::debug!("Cache miss for {key:?}");
        Ok(None)
    }

    /// Evict every entry for `key`, stale or fresh, and allocate a path for
    /// its replacement.
    ///
    /// The returned path is `<dir>/<key>--<today><ext>` and is not created
    /// on disk; the caller owns writing content to it. Rotating the same key
    /// again on the same day evicts the previous file and returns the same
    /// path, so repeated regeneration never accumulates duplicates.
    pub fn allocate(&self, key: &str) -> Result<PathBuf> {
        self.evict(key)?;
        let name = EntryName::format(key, Local::now().date_naive(), &self.extension);
        Ok(self.dir.join(name))
    }

    /// Delete all entries for `key`, regardless of age.
    ///
    /// Returns the number of files removed. Deletion failures propagate;
    /// nothing is retried.
    pub fn evict(&self, key: &str) -> Result<usize> {
        let mut removed = 0;
        for (entry, path) in self.scan()? {
            if entry.key == key {
                fs::remove_file(&path)?;
                tracing::debug!("Evicted {path:?}");
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// List all decodable entries, newest first.
    pub fn entries(&self) -> Result<Vec<CacheEntryInfo>> {
        let mut entries: Vec<CacheEntryInfo> = self
            .scan()?
            .into_iter()
            .map(|(entry, path)| {
                let age_days = entry.age_days();
                CacheEntryInfo {
                    key: entry.key,
                    date: entry.date,
                    age_days,
                    fresh: age_days <= 1,
                    path,
                }
            })
            .collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }

    /// Scan the directory for decodable entries, in enumeration order.
    ///
    /// Directories, names that don't follow the entry convention, and
    /// shaped names with unparseable dates are all skipped; one corrupt
    /// file must not break the whole cache. IO errors propagate.
    fn scan(&self) -> Result<Vec<(EntryName, PathBuf)>> {
        let mut found = Vec::new();

        for dir_entry in fs::read_dir(&self.dir)? {
            let dir_entry = dir_entry?;
            if dir_entry.file_type()?.is_dir() {
                continue;
            }
            let file_name = dir_entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };

            match EntryName::parse(file_name, &self.extension) {
                Ok(Some(entry)) => found.push((entry, dir_entry.path())),
                Ok(None) => {}
                Err(CacheError::DateParse { .. }) => {
                    tracing::debug!("Skipping cache entry with unparseable date: {file_name}");
                }
                Err(e) => return Err(e),
            }
        }

        Ok(found)
    }
}
