//! The page engine: one load sequence that resolves labels, computes
//! navigation, joins the dual verse fetch and emits ordered display rows
//! through a row sink.
//!
//! Load phases: `Idle -> ResolvingLabels -> ComputingNav -> FetchingContent
//! -> {Failed | InjectingMeta -> Rendered}`. `Failed` is terminal for a
//! load; the user navigates again to retry.

use crate::config::EngineConfig;
use crate::fetch;
use crate::labels::{format_chapter_label, LabelResolver};
use crate::nav;
use crate::registry::{BookRegistry, ChapterRef};
use crate::service::ContentService;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// One display row of the merged bilingual page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderRow {
    /// Chapter-level annotation (introduction, book subtitle); always
    /// precedes all verse rows
    Meta { left: String, right: String },

    /// One aligned pair of verse texts; either side may be empty when the
    /// source documents differ in length
    Verse { left: String, right: String },

    /// Single explanatory row spanning both columns; the only row of a
    /// failed load
    Notice { message: String },
}

/// Output-row sink: the seam between the engine and a concrete layout
pub trait RowSink {
    /// Append a row after all existing rows
    fn append(&mut self, row: RenderRow);

    /// Insert a row before all existing rows
    fn insert_top(&mut self, row: RenderRow);
}

/// Plain buffering sink, used when rows must be held until the view is
/// admitted past the stale-load latch
#[derive(Debug, Default)]
pub struct RowBuffer {
    rows: Vec<RenderRow>,
}

impl RowBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[RenderRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<RenderRow> {
        self.rows
    }

    /// Replay the buffered rows into another sink, preserving order
    pub fn drain_into(self, sink: &mut dyn RowSink) {
        for row in self.rows {
            sink.append(row);
        }
    }
}

impl RowSink for RowBuffer {
    fn append(&mut self, row: RenderRow) {
        self.rows.push(row);
    }

    fn insert_top(&mut self, row: RenderRow) {
        self.rows.insert(0, row);
    }
}

/// Phase of a page load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    ResolvingLabels,
    ComputingNav,
    FetchingContent,
    InjectingMeta,
    Rendered,
    Failed,
}

/// Navigation parameters of one page view, as read from the query surface
#[derive(Debug, Clone)]
pub struct PageRequest {
    pub book: String,
    pub chapter: u32,

    /// Left-column language; config default when absent
    pub main: Option<String>,

    /// Right-column language; config default when absent
    pub second: Option<String>,
}

impl PageRequest {
    pub fn new(book: impl Into<String>, chapter: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            main: None,
            second: None,
        }
    }

    pub fn with_languages(
        mut self,
        main: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        self.main = Some(main.into());
        self.second = Some(second.into());
        self
    }
}

/// Header of the rendered page; always in the main language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHeader {
    pub book_name: String,
    pub chapter_label: String,
}

/// Target of the "back to book list" link, carrying the resolved language
/// pair so the list page keeps the same selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookListTarget {
    pub main: String,
    pub second: String,
}

/// Navigation targets of the rendered page. `None` targets are inert links,
/// produced when the current book is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTargets {
    pub prev: Option<ChapterRef>,
    pub next: Option<ChapterRef>,
    pub book_list: BookListTarget,
}

/// Result of one page load. Rows were emitted into the sink; everything
/// else a front-end needs is here.
#[derive(Debug, Clone)]
pub struct PageView {
    /// Monotonically increasing load sequence number, for stale-load
    /// discarding
    pub seq: u64,

    /// Terminal phase: `Rendered` or `Failed`
    pub phase: LoadPhase,

    pub header: PageHeader,
    pub nav: NavTargets,
    pub main_language: String,
    pub second_language: String,
}

impl PageView {
    pub fn is_failed(&self) -> bool {
        self.phase == LoadPhase::Failed
    }
}

/// Admits page views in load order and discards stale ones.
///
/// A new page load does not cancel an in-flight one; a slow older response
/// must not overwrite a newer page, so callers apply buffered rows only when
/// the view's sequence number is admitted.
#[derive(Debug, Default)]
pub struct ViewLatch {
    latest: AtomicU64,
}

impl ViewLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `seq` is newer than every previously admitted sequence
    pub fn admit(&self, seq: u64) -> bool {
        let mut current = self.latest.load(Ordering::Acquire);
        loop {
            if seq <= current {
                return false;
            }
            match self.latest.compare_exchange(
                current,
                seq,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return true,
                Err(observed) => current = observed,
            }
        }
    }
}

/// The bilingual chapter navigation and rendering engine.
///
/// Holds only immutable collaborators plus the load counter; every load is
/// an independent sequence with no shared mutable page state.
pub struct PageEngine {
    registry: BookRegistry,
    config: EngineConfig,
    service: Arc<dyn ContentService>,
    load_seq: AtomicU64,
}

impl PageEngine {
    pub fn new(
        registry: BookRegistry,
        config: EngineConfig,
        service: Arc<dyn ContentService>,
    ) -> Self {
        Self {
            registry,
            config,
            service,
            load_seq: AtomicU64::new(0),
        }
    }

    pub fn registry(&self) -> &BookRegistry {
        &self.registry
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one full page load, emitting rows into `sink`.
    ///
    /// On a verse-fetch failure the sink receives exactly one `Notice` row
    /// and the returned view is `Failed`; header and navigation targets are
    /// still populated so the page stays navigable.
    pub async fn load(&self, request: &PageRequest, sink: &mut dyn RowSink) -> PageView {
        let seq = self.load_seq.fetch_add(1, Ordering::Relaxed) + 1;
        let main = request
            .main
            .clone()
            .unwrap_or_else(|| self.config.default_main.clone());
        let second = request
            .second
            .clone()
            .unwrap_or_else(|| self.config.default_second.clone());
        let current = ChapterRef::new(request.book.clone(), request.chapter);

        tracing::debug!(seq, %current, %main, %second, "load: resolving labels");
        let resolver = LabelResolver::new(self.service.as_ref());
        let book_name = resolver.book_name(&current.book, &main).await;
        let template = resolver.chapter_label(&main).await;
        let header = PageHeader {
            book_name,
            chapter_label: format_chapter_label(&template, current.chapter),
        };

        tracing::debug!(seq, "load: computing navigation");
        let known_book = self.registry.find(&current.book).is_some();
        let nav = NavTargets {
            prev: known_book.then(|| nav::prev_ref(&self.registry, &current)),
            next: known_book.then(|| nav::next_ref(&self.registry, &current)),
            book_list: BookListTarget {
                main: main.clone(),
                second: second.clone(),
            },
        };

        tracing::debug!(seq, "load: fetching content");
        let fetched = fetch::fetch_both(
            self.service.as_ref(),
            &current.book,
            current.chapter,
            &main,
            &second,
        )
        .await;

        let (main_verses, second_verses) = match fetched {
            Ok(pair) => pair,
            Err(err) => {
                tracing::warn!(seq, %current, %err, "load: chapter fetch failed");
                sink.append(RenderRow::Notice {
                    message: failure_message(&header),
                });
                return PageView {
                    seq,
                    phase: LoadPhase::Failed,
                    header,
                    nav,
                    main_language: main,
                    second_language: second,
                };
            }
        };

        let row_count = main_verses.len().max(second_verses.len());
        for index in 0..row_count {
            sink.append(RenderRow::Verse {
                left: main_verses.get(index).cloned().unwrap_or_default(),
                right: second_verses.get(index).cloned().unwrap_or_default(),
            });
        }

        if self.is_front_chapter(&current) {
            tracing::debug!(seq, "load: injecting chapter metadata");
            let (main_extras, second_extras) = fetch::fetch_extras_pair(
                self.service.as_ref(),
                &current.book,
                current.chapter,
                &main,
                &second,
            )
            .await;
            // Subtitle goes to the top first, then the introduction above
            // it, so the final order is introduction, subtitle, verses.
            insert_meta(sink, main_extras.subtitle, second_extras.subtitle);
            insert_meta(sink, main_extras.introduction, second_extras.introduction);
        }

        tracing::debug!(seq, rows = row_count, "load: rendered");
        PageView {
            seq,
            phase: LoadPhase::Rendered,
            header,
            nav,
            main_language: main,
            second_language: second,
        }
    }

    /// The one chapter carrying subtitle/introduction metadata: the first
    /// chapter of the first registry book. The content source provides no
    /// such metadata for any other chapter.
    fn is_front_chapter(&self, current: &ChapterRef) -> bool {
        current.chapter == 1
            && self
                .registry
                .books()
                .first()
                .is_some_and(|b| b.abbreviation == current.book)
    }
}

fn insert_meta(sink: &mut dyn RowSink, left: String, right: String) {
    if left.trim().is_empty() && right.trim().is_empty() {
        return;
    }
    sink.insert_top(RenderRow::Meta { left, right });
}

fn failure_message(header: &PageHeader) -> String {
    format!(
        "Could not load {} {}. Please try again.",
        header.book_name, header.chapter_label
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_buffer_order() {
        let mut buffer = RowBuffer::new();
        buffer.append(RenderRow::Verse {
            left: "a".to_string(),
            right: "b".to_string(),
        });
        buffer.insert_top(RenderRow::Meta {
            left: "sub".to_string(),
            right: String::new(),
        });
        buffer.insert_top(RenderRow::Meta {
            left: "intro".to_string(),
            right: String::new(),
        });
        let rows = buffer.into_rows();
        assert!(matches!(&rows[0], RenderRow::Meta { left, .. } if left == "intro"));
        assert!(matches!(&rows[1], RenderRow::Meta { left, .. } if left == "sub"));
        assert!(matches!(&rows[2], RenderRow::Verse { .. }));
    }

    #[test]
    fn test_view_latch_discards_stale() {
        let latch = ViewLatch::new();
        assert!(latch.admit(1));
        assert!(latch.admit(3));
        // The older in-flight load settles late and is discarded
        assert!(!latch.admit(2));
        assert!(!latch.admit(3));
        assert!(latch.admit(4));
    }
}
