//! The canonical ordered book catalog and chapter references

use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// One book of the catalog: a stable lowercase-kebab abbreviation and its
/// chapter count
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookEntry {
    /// Stable identifier used in every lookup and URL (e.g. `"1-ne"`)
    pub abbreviation: String,

    /// Number of chapters, always at least 1
    pub chapter_count: u32,
}

impl BookEntry {
    /// Create a new book entry
    pub fn new(abbreviation: impl Into<String>, chapter_count: u32) -> Self {
        Self {
            abbreviation: abbreviation.into(),
            chapter_count,
        }
    }
}

/// Immutable ordered catalog of books.
///
/// The sequence order is the single source of truth for circular
/// previous/next adjacency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRegistry {
    books: Vec<BookEntry>,
}

impl BookRegistry {
    /// Build a registry, validating that every book has at least one chapter
    /// and that abbreviations are unique
    pub fn new(books: Vec<BookEntry>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for book in &books {
            if book.chapter_count == 0 {
                return Err(RegistryError::EmptyBook(book.abbreviation.clone()));
            }
            if !seen.insert(book.abbreviation.as_str()) {
                return Err(RegistryError::DuplicateAbbreviation(
                    book.abbreviation.clone(),
                ));
            }
        }
        Ok(Self { books })
    }

    /// The fixed 15-book Book of Mormon catalog in canonical order
    pub fn book_of_mormon() -> Self {
        let books = [
            ("1-ne", 22),
            ("2-ne", 33),
            ("jacob", 7),
            ("enos", 1),
            ("jarom", 1),
            ("omni", 1),
            ("w-of-m", 1),
            ("mosiah", 29),
            ("alma", 63),
            ("hel", 16),
            ("3-ne", 30),
            ("4-ne", 1),
            ("morm", 9),
            ("ether", 15),
            ("moro", 10),
        ]
        .into_iter()
        .map(|(abbr, count)| BookEntry::new(abbr, count))
        .collect();

        // The static catalog satisfies both invariants by construction.
        Self { books }
    }

    /// The ordered book sequence
    pub fn books(&self) -> &[BookEntry] {
        &self.books
    }

    /// Look up a book by abbreviation
    pub fn find(&self, abbreviation: &str) -> Option<&BookEntry> {
        self.books.iter().find(|b| b.abbreviation == abbreviation)
    }

    /// Position of a book in catalog order
    pub fn index_of(&self, abbreviation: &str) -> Option<usize> {
        self.books
            .iter()
            .position(|b| b.abbreviation == abbreviation)
    }

    /// Chapter count for a book, 0 when the book is unknown
    pub fn chapter_count(&self, abbreviation: &str) -> u32 {
        self.find(abbreviation).map_or(0, |b| b.chapter_count)
    }

    /// Number of books in the catalog
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// Identifies a single chapter by book abbreviation and 1-based chapter
/// number. Transient: recomputed per navigation action, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ChapterRef {
    pub book: String,
    pub chapter: u32,
}

impl ChapterRef {
    /// Create a chapter reference
    pub fn new(book: impl Into<String>, chapter: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
        }
    }

    /// Whether this reference names an existing chapter of the registry
    pub fn is_valid(&self, registry: &BookRegistry) -> bool {
        self.chapter >= 1 && self.chapter <= registry.chapter_count(&self.book)
    }
}

impl fmt::Display for ChapterRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.book, self.chapter)
    }
}
