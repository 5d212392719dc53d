//! Previous/next chapter arithmetic with circular wraparound over the
//! registry's book order.
//!
//! Both functions are total over any chapter reference. An unknown current
//! book is treated as chapter count 0 at index -1, which still produces a
//! deterministic target instead of failing.

use crate::registry::{BookRegistry, ChapterRef};

/// The chapter after `current`, advancing into the next book (chapter 1)
/// past the last chapter and wrapping from the last book to the first
pub fn next_ref(registry: &BookRegistry, current: &ChapterRef) -> ChapterRef {
    if current.chapter < registry.chapter_count(&current.book) {
        return ChapterRef::new(current.book.clone(), current.chapter + 1);
    }
    let Some(next) = step_book(registry, &current.book, 1) else {
        return current.clone();
    };
    ChapterRef::new(next.abbreviation.clone(), 1)
}

/// The chapter before `current`, moving into the previous book's final
/// chapter past chapter 1 and wrapping from the first book to the last
pub fn prev_ref(registry: &BookRegistry, current: &ChapterRef) -> ChapterRef {
    if current.chapter > 1 {
        return ChapterRef::new(current.book.clone(), current.chapter - 1);
    }
    let Some(prev) = step_book(registry, &current.book, -1) else {
        return current.clone();
    };
    ChapterRef::new(prev.abbreviation.clone(), prev.chapter_count)
}

/// Circular step through catalog order. Unknown books step from index -1;
/// `None` only for an empty registry.
fn step_book<'a>(
    registry: &'a BookRegistry,
    book: &str,
    delta: isize,
) -> Option<&'a crate::registry::BookEntry> {
    let len = registry.len() as isize;
    if len == 0 {
        return None;
    }
    let index = registry.index_of(book).map_or(-1, |i| i as isize);
    let stepped = (index + delta).rem_euclid(len) as usize;
    registry.books().get(stepped)
}
