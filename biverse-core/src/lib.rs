//! Biverse Core Library
//!
//! The bilingual chapter navigation and rendering engine: a canonical book
//! registry, localized label resolution with multi-level fallback, circular
//! previous/next navigation, a concurrent dual-language verse fetch and a
//! row-sink renderer. Remote fetching and HTML parsing belong to the
//! external content service consumed through [`service::ContentService`].

pub mod config;
pub mod error;
pub mod fetch;
pub mod labels;
pub mod nav;
pub mod registry;
pub mod render;
pub mod script;
pub mod service;
pub mod sinks;

pub use config::EngineConfig;
pub use error::{BiverseError, FetchError, RegistryError, Result};
pub use registry::{BookEntry, BookRegistry, ChapterRef};
pub use render::{
    LoadPhase, NavTargets, PageEngine, PageHeader, PageRequest, PageView, RenderRow, RowBuffer,
    RowSink, ViewLatch,
};
pub use service::{ContentService, HttpContentService};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_and_navigation_agree() {
        let registry = BookRegistry::book_of_mormon();
        let last = registry.books().last().unwrap();
        let wrapped = nav::next_ref(
            &registry,
            &ChapterRef::new(last.abbreviation.clone(), last.chapter_count),
        );
        assert_eq!(wrapped.book, registry.books()[0].abbreviation);
        assert_eq!(wrapped.chapter, 1);
    }
}
