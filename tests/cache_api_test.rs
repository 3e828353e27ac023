//! Library integration tests for the cache API.

use std::fs;

use chrono::{Days, Local};
use opmlcache::cache::{DatedFileCache, EntryName};
use opmlcache::CacheError;
use tempfile::TempDir;

#[test]
fn construction_succeeds_for_valid_arguments() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("funny");

    let cache = DatedFileCache::new(&dir, ".zoo").unwrap();
    assert!(dir.is_dir());
    assert_eq!(cache.extension(), ".zoo");
}

#[test]
fn construction_rejects_extension_without_dot() {
    let temp = TempDir::new().unwrap();
    let err = DatedFileCache::new(temp.path(), "no_dot").unwrap_err();
    assert!(matches!(err, CacheError::InvalidExtension { .. }));
}

#[test]
fn construction_rejects_empty_path() {
    let err = DatedFileCache::new("", ".dot").unwrap_err();
    assert!(matches!(err, CacheError::InvalidDirectory));
}

#[test]
fn parse_rejects_wrong_extension() {
    let parsed = EntryName::parse("pito-salas--feb-15-2009.car", ".zoo").unwrap();
    assert!(parsed.is_none());
}

#[test]
fn parse_rejects_name_without_date_delimiter() {
    let parsed = EntryName::parse("pito-salas.zoo", ".zoo").unwrap();
    assert!(parsed.is_none());
}

#[test]
fn parse_accepts_valid_entry_name() {
    let entry = EntryName::parse("pito-salas--12jan2009.zoo", ".zoo")
        .unwrap()
        .unwrap();
    assert_eq!(entry.key, "pito-salas");
    assert!(entry.age_days() > 0);
}

#[test]
fn allocate_round_trips_through_parse() {
    let temp = TempDir::new().unwrap();
    let cache = DatedFileCache::new(temp.path(), ".zoo").unwrap();

    let path = cache.allocate("pito-salas").unwrap();
    let basename = path.file_name().unwrap().to_str().unwrap();

    let entry = EntryName::parse(basename, ".zoo").unwrap().unwrap();
    assert_eq!(entry.key, "pito-salas");
    assert!(basename.ends_with(".zoo"));
}

#[test]
fn repeated_same_day_allocation_leaves_one_file_per_key() {
    let temp = TempDir::new().unwrap();
    let cache = DatedFileCache::new(temp.path(), ".opml").unwrap();

    let first = cache.allocate("state-CA").unwrap();
    fs::write(&first, "v1").unwrap();

    let second = cache.allocate("state-CA").unwrap();
    fs::write(&second, "v2").unwrap();

    let files: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(files.len(), 1);
    assert_eq!(fs::read_to_string(&files[0]).unwrap(), "v2");
}

#[test]
fn freshness_boundary_is_one_day() {
    let temp = TempDir::new().unwrap();
    let cache = DatedFileCache::new(temp.path(), ".opml").unwrap();
    let today = Local::now().date_naive();

    for (key, days_ago) in [("k-today", 0), ("k-yesterday", 1), ("k-older", 2)] {
        let date = today.checked_sub_days(Days::new(days_ago)).unwrap();
        let name = EntryName::format(key, date, ".opml");
        fs::write(temp.path().join(name), "<opml/>").unwrap();
    }

    assert!(cache.lookup("k-today").unwrap().is_some());
    assert!(cache.lookup("k-yesterday").unwrap().is_some());
    assert!(cache.lookup("k-older").unwrap().is_none());
}

#[test]
fn miss_allocate_write_hit_scenario() {
    let temp = TempDir::new().unwrap();
    let cache = DatedFileCache::new(temp.path(), ".opml").unwrap();

    assert!(cache.lookup("state-CA").unwrap().is_none());

    let path = cache.allocate("state-CA").unwrap();
    let basename = path.file_name().unwrap().to_str().unwrap();
    assert!(basename.starts_with("state-CA--"));
    assert!(basename.ends_with(".opml"));

    fs::write(&path, "<opml version=\"2.0\"><body/></opml>").unwrap();

    let hit = cache.lookup("state-CA").unwrap().unwrap();
    assert_eq!(hit, path);
}

#[test]
fn corrupt_entry_does_not_poison_other_keys() {
    let temp = TempDir::new().unwrap();
    let cache = DatedFileCache::new(temp.path(), ".opml").unwrap();

    fs::write(temp.path().join("broken--junkdate.opml"), "x").unwrap();

    let path = cache.allocate("state-CA").unwrap();
    fs::write(&path, "<opml/>").unwrap();
    assert!(cache.lookup("state-CA").unwrap().is_some());

    // Direct parsing still reports the corrupt name.
    let err = EntryName::parse("broken--junkdate.opml", ".opml").unwrap_err();
    assert!(matches!(err, CacheError::DateParse { .. }));
}
