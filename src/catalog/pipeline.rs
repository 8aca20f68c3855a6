//! Aggregation Pipeline
//!
//! Pure steps of the catalog build: merge and deduplicate the trending
//! lists, collect edition keys, split them into lookup batches, and join
//! page counts back onto the surviving works.

use std::collections::HashSet;

use crate::catalog::{BookRecord, EditionPageInfo, TrendingWork};

/// Prefix the trending API puts in front of edition identifiers.
pub const EDITION_PATH_PREFIX: &str = "/books/";

// == Merge & Dedup ==
/// Concatenates the lists in order and keeps the first work per identity.
///
/// All-time works must come first so they win over yearly duplicates.
pub fn merge_unique(alltime: Vec<TrendingWork>, yearly: Vec<TrendingWork>) -> Vec<TrendingWork> {
    let mut seen = HashSet::new();
    alltime
        .into_iter()
        .chain(yearly)
        .filter(|work| seen.insert(work.identity()))
        .collect()
}

// == Edition Keys ==
/// First edition key of every work that has one, in work order.
pub fn edition_keys(works: &[TrendingWork]) -> Vec<String> {
    works
        .iter()
        .filter_map(|work| work.edition_key())
        .map(str::to_string)
        .collect()
}

/// Strips the `/books/` prefix, leaving the bare edition id (`OL123M`).
pub fn bare_edition_id(key: &str) -> &str {
    key.strip_prefix(EDITION_PATH_PREFIX).unwrap_or(key)
}

// == Batching ==
/// Splits keys into lookup batches of at most `batch_size`.
pub fn batches(keys: &[String], batch_size: usize) -> Vec<&[String]> {
    keys.chunks(batch_size.max(1)).collect()
}

// == Page Join ==
/// Finds the page count for an edition key in the lookup results.
///
/// The two APIs format edition identifiers differently, so the first entry
/// whose identifier contains the bare id wins.
pub fn pages_for(edition_key: Option<&str>, lookup: &[EditionPageInfo]) -> Option<u32> {
    let id = bare_edition_id(edition_key?);
    if id.is_empty() {
        return None;
    }
    lookup
        .iter()
        .find(|info| info.edition.contains(id))
        .and_then(|info| info.pages)
}

/// Maps every work to a `BookRecord`, attaching resolved page counts.
pub fn build_records(works: &[TrendingWork], lookup: &[EditionPageInfo]) -> Vec<BookRecord> {
    works
        .iter()
        .map(|work| BookRecord::from_work(work, pages_for(work.edition_key(), lookup)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::{EditionDoc, EditionList};

    fn work(key: &str, title: &str, edition: Option<&str>) -> TrendingWork {
        TrendingWork {
            key: Some(key.to_string()),
            title: Some(title.to_string()),
            author_name: Some(vec!["Author".to_string()]),
            first_publish_year: Some(1990),
            editions: edition.map(|e| EditionList {
                docs: vec![EditionDoc {
                    key: Some(e.to_string()),
                }],
            }),
        }
    }

    #[test]
    fn test_merge_unique_prefers_alltime() {
        let alltime = vec![work("/works/A", "Alltime A", None), work("/works/B", "B", None)];
        let yearly = vec![work("/works/C", "C", None), work("/works/A", "Yearly A", None)];

        let merged = merge_unique(alltime, yearly);
        let titles: Vec<_> = merged.iter().map(|w| w.title.as_deref().unwrap()).collect();
        assert_eq!(titles, vec!["Alltime A", "B", "C"]);
    }

    #[test]
    fn test_merge_unique_dedups_within_one_list() {
        let alltime = vec![work("/works/A", "first", None), work("/works/A", "second", None)];
        let merged = merge_unique(alltime, Vec::new());
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].title.as_deref(), Some("first"));
    }

    #[test]
    fn test_edition_keys_skip_missing() {
        let works = vec![
            work("/works/A", "A", Some("/books/OL1M")),
            work("/works/B", "B", None),
            work("/works/C", "C", Some("/books/OL3M")),
        ];
        assert_eq!(edition_keys(&works), vec!["/books/OL1M", "/books/OL3M"]);
    }

    #[test]
    fn test_batches_cover_all_keys() {
        let keys: Vec<String> = (0..250).map(|i| format!("/books/OL{}M", i)).collect();
        let chunks = batches(&keys, 100);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks.iter().map(|c| c.len()).collect::<Vec<_>>(), vec![100, 100, 50]);
        assert!(batches(&[], 100).is_empty());
    }

    #[test]
    fn test_pages_for_matches_across_prefixes() {
        let lookup = vec![
            EditionPageInfo::new("OLID:OL999M", Some(100)),
            EditionPageInfo::new("OLID:OL123M", Some(412)),
        ];
        assert_eq!(pages_for(Some("/books/OL123M"), &lookup), Some(412));
        assert_eq!(pages_for(Some("OL123M"), &lookup), Some(412));
        assert_eq!(pages_for(Some("/books/OL555M"), &lookup), None);
        assert_eq!(pages_for(None, &lookup), None);
        assert_eq!(pages_for(Some("/books/"), &lookup), None);
    }

    #[test]
    fn test_build_records_without_edition_has_no_pages() {
        let works = vec![
            work("/works/A", "A", Some("/books/OL1M")),
            work("/works/B", "B", None),
        ];
        let lookup = vec![EditionPageInfo::new("OLID:OL1M", Some(200))];

        let records = build_records(&works, &lookup);
        assert_eq!(records[0].pages, Some(200));
        assert_eq!(records[1].pages, None);
        assert_eq!(records[1].title.as_deref(), Some("B"));
    }
}
