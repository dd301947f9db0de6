//! Forward-only iteration over a buffer's entries.

use std::collections::HashMap;
use std::iter::FusedIterator;
use std::slice;

use crate::domain::entry::{Entry, Item};

/// Iterator over the [`Item`]s of a read buffer, in file order.
///
/// Created by [`ConfigBuffer::iter`](crate::ConfigBuffer::iter).  Each call to
/// `iter()` starts again from the first entry.
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    entries: slice::Iter<'a, Entry>,
    store: &'a HashMap<String, String>,
}

impl<'a> Entries<'a> {
    pub(crate) fn new(entries: &'a [Entry], store: &'a HashMap<String, String>) -> Self {
        Self {
            entries: entries.iter(),
            store,
        }
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = Item<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.next()?;
        Some(match entry {
            Entry::Key(key) => Item::Pair {
                key,
                value: self.store.get(key).map_or("", String::as_str),
            },
            Entry::Comment(text) => Item::Comment(text),
            Entry::BlankLines(count) => Item::BlankLines(*count),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl FusedIterator for Entries<'_> {}
