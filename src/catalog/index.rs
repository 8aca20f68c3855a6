//! Title lookup over the catalog, used to attach book metadata to
//! favorites and reviews that only carry a title.

use std::collections::HashMap;

use crate::catalog::BookRecord;

/// Maps a title to the first catalog record carrying it.
#[derive(Debug, Default)]
pub struct TitleIndex<'a> {
    by_title: HashMap<&'a str, &'a BookRecord>,
}

impl<'a> TitleIndex<'a> {
    pub fn build(books: &'a [BookRecord]) -> Self {
        let mut by_title = HashMap::with_capacity(books.len());
        for book in books {
            if let Some(title) = book.title.as_deref() {
                by_title.entry(title).or_insert(book);
            }
        }
        Self { by_title }
    }

    pub fn get(&self, title: &str) -> Option<&'a BookRecord> {
        self.by_title.get(title).copied()
    }

    pub fn len(&self) -> usize {
        self.by_title.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_title.is_empty()
    }
}
