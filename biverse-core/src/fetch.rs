//! The two concurrent join points of a page load.
//!
//! Verse content joins all-or-nothing: losing either language blocks
//! rendering. Chapter extras join with independent per-side fallback:
//! losing one language's optional metadata only omits its text. The
//! asymmetry is deliberate and must not be symmetrized.

use crate::error::FetchError;
use crate::service::{ChapterExtras, ContentService};

/// Fetch one chapter's verses in both languages concurrently.
///
/// Both requests start together; any failure fails the pair as a unit so
/// the caller never renders a single-language page.
pub async fn fetch_both(
    service: &dyn ContentService,
    book: &str,
    chapter: u32,
    main: &str,
    second: &str,
) -> Result<(Vec<String>, Vec<String>), FetchError> {
    let (main_content, second_content) = tokio::try_join!(
        service.chapter(book, chapter, main),
        service.chapter(book, chapter, second),
    )?;
    Ok((main_content.verses, second_content.verses))
}

/// Fetch chapter extras in both languages concurrently.
///
/// Each side falls back to empty strings on its own; a missing language
/// here is an acceptable partial result.
pub async fn fetch_extras_pair(
    service: &dyn ContentService,
    book: &str,
    chapter: u32,
    main: &str,
    second: &str,
) -> (ChapterExtras, ChapterExtras) {
    let (main_extras, second_extras) = tokio::join!(
        service.chapter_extras(book, chapter, main),
        service.chapter_extras(book, chapter, second),
    );
    (
        settle_extras(main_extras, main),
        settle_extras(second_extras, second),
    )
}

fn settle_extras(result: Result<ChapterExtras, FetchError>, language: &str) -> ChapterExtras {
    match result {
        Ok(extras) => extras,
        Err(err) => {
            tracing::debug!(language, %err, "extras fetch failed, omitting");
            ChapterExtras::default()
        }
    }
}
