//! Localized display names and chapter-label vocabulary.
//!
//! Every failure in here degrades to a documented default; nothing on this
//! path ever aborts a page load.

use crate::script::{self, ScriptClass};
use crate::service::ContentService;

/// Label used when the vocabulary has no usable entry for a language
pub const DEFAULT_CHAPTER_LABEL: &str = "Chapter";

/// Names starting with this character are unrendered upstream placeholders
/// such as `<UNKNOWN>` and `<NOT AVAILABLE>`
const MARKUP_SENTINEL: char = '<';

/// A localized name usable for display: non-empty after trimming and not an
/// upstream placeholder
pub fn usable_display_name(name: &str) -> Option<&str> {
    let name = name.trim();
    if name.is_empty() || name.starts_with(MARKUP_SENTINEL) {
        None
    } else {
        Some(name)
    }
}

/// Resolves display names and chapter labels against the content service
pub struct LabelResolver<'a> {
    service: &'a dyn ContentService,
}

impl<'a> LabelResolver<'a> {
    pub fn new(service: &'a dyn ContentService) -> Self {
        Self { service }
    }

    /// Display name for a book in a language, falling back to the
    /// uppercased abbreviation when the name table is unreachable, lacks
    /// the entry, or carries a placeholder
    pub async fn book_name(&self, abbreviation: &str, language: &str) -> String {
        match self.service.book_names(language).await {
            Ok(names) => {
                let entry = names.books.iter().find(|b| b.abbr == abbreviation);
                if let Some(name) = entry.and_then(|e| usable_display_name(&e.name)) {
                    return name.to_string();
                }
                tracing::debug!(abbreviation, language, "no usable localized book name");
                abbreviation.to_uppercase()
            }
            Err(err) => {
                tracing::debug!(abbreviation, language, %err, "book name lookup failed");
                abbreviation.to_uppercase()
            }
        }
    }

    /// Chapter-label template for a language.
    ///
    /// Accepts the vocabulary entry only when it is non-empty after trimming
    /// and classifiable as word-like or CJK; numeric-only or symbol-only
    /// placeholder values keep the default.
    pub async fn chapter_label(&self, language: &str) -> String {
        let vocabulary = match self.service.chapter_vocabulary().await {
            Ok(vocabulary) => vocabulary,
            Err(err) => {
                tracing::debug!(language, %err, "vocabulary lookup failed");
                return DEFAULT_CHAPTER_LABEL.to_string();
            }
        };
        let Some(word) = vocabulary
            .get(language)
            .and_then(|entry| entry.chapter.as_deref())
        else {
            return DEFAULT_CHAPTER_LABEL.to_string();
        };
        let word = word.trim();
        if script::classify(word) == ScriptClass::Unclassified {
            tracing::debug!(language, word, "rejecting unusable chapter label");
            return DEFAULT_CHAPTER_LABEL.to_string();
        }
        word.to_string()
    }
}

/// Render a chapter heading from a label template and a chapter number.
///
/// CJK-classified templates are numeric affixes ("3章"); everything else is
/// a leading word ("Chapter 3"). Uses the same classifier as the acceptance
/// check in [`LabelResolver::chapter_label`].
pub fn format_chapter_label(template: &str, n: u32) -> String {
    let template = template.trim();
    match script::classify(template) {
        ScriptClass::CjkStyle => format!("{}{}", n, template),
        _ => format!("{} {}", template, n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::service::{BookNames, ChapterContent, ChapterExtras, ChapterVocabulary,
        LanguageVocabulary, NamedBook};
    use async_trait::async_trait;
    use std::collections::HashMap;

    /// Mock service with canned label responses
    #[derive(Default)]
    struct LabelFixture {
        names: Option<Vec<NamedBook>>,
        vocabulary: Option<HashMap<String, String>>,
    }

    #[async_trait]
    impl ContentService for LabelFixture {
        async fn book_names(&self, _language: &str) -> Result<BookNames, FetchError> {
            match &self.names {
                Some(books) => Ok(BookNames {
                    books: books.clone(),
                }),
                None => Err(FetchError::Status(500)),
            }
        }

        async fn chapter_vocabulary(&self) -> Result<ChapterVocabulary, FetchError> {
            match &self.vocabulary {
                Some(entries) => Ok(entries
                    .iter()
                    .map(|(lang, word)| {
                        (
                            lang.clone(),
                            LanguageVocabulary {
                                chapter: Some(word.clone()),
                            },
                        )
                    })
                    .collect()),
                None => Err(FetchError::Status(500)),
            }
        }

        async fn chapter(
            &self,
            _book: &str,
            _chapter: u32,
            _language: &str,
        ) -> Result<ChapterContent, FetchError> {
            Ok(ChapterContent::default())
        }

        async fn chapter_extras(
            &self,
            _book: &str,
            _chapter: u32,
            _language: &str,
        ) -> Result<ChapterExtras, FetchError> {
            Ok(ChapterExtras::default())
        }
    }

    fn named(abbr: &str, name: &str) -> NamedBook {
        NamedBook {
            abbr: abbr.to_string(),
            name: name.to_string(),
            chapters: None,
        }
    }

    #[tokio::test]
    async fn test_book_name_resolves() {
        let fixture = LabelFixture {
            names: Some(vec![named("1-ne", "1 Néfi")]),
            ..Default::default()
        };
        let resolver = LabelResolver::new(&fixture);
        assert_eq!(resolver.book_name("1-ne", "por").await, "1 Néfi");
    }

    #[tokio::test]
    async fn test_book_name_falls_back_on_fetch_failure() {
        let fixture = LabelFixture::default();
        let resolver = LabelResolver::new(&fixture);
        assert_eq!(resolver.book_name("w-of-m", "por").await, "W-OF-M");
    }

    #[tokio::test]
    async fn test_book_name_falls_back_on_missing_entry() {
        let fixture = LabelFixture {
            names: Some(vec![named("2-ne", "2 Néfi")]),
            ..Default::default()
        };
        let resolver = LabelResolver::new(&fixture);
        assert_eq!(resolver.book_name("1-ne", "por").await, "1-NE");
    }

    #[tokio::test]
    async fn test_book_name_rejects_markup_sentinel() {
        let fixture = LabelFixture {
            names: Some(vec![named("moro", "<NOT AVAILABLE>")]),
            ..Default::default()
        };
        let resolver = LabelResolver::new(&fixture);
        assert_eq!(resolver.book_name("moro", "por").await, "MORO");
    }

    #[tokio::test]
    async fn test_chapter_label_accepts_word() {
        let fixture = LabelFixture {
            vocabulary: Some(HashMap::from([("por".to_string(), "Capítulo".to_string())])),
            ..Default::default()
        };
        let resolver = LabelResolver::new(&fixture);
        assert_eq!(resolver.chapter_label("por").await, "Capítulo");
    }

    #[tokio::test]
    async fn test_chapter_label_rejects_numeric_placeholder() {
        let fixture = LabelFixture {
            vocabulary: Some(HashMap::from([("xxx".to_string(), "42".to_string())])),
            ..Default::default()
        };
        let resolver = LabelResolver::new(&fixture);
        assert_eq!(resolver.chapter_label("xxx").await, DEFAULT_CHAPTER_LABEL);
    }

    #[tokio::test]
    async fn test_chapter_label_defaults_on_missing_language() {
        let fixture = LabelFixture {
            vocabulary: Some(HashMap::new()),
            ..Default::default()
        };
        let resolver = LabelResolver::new(&fixture);
        assert_eq!(resolver.chapter_label("zzz").await, DEFAULT_CHAPTER_LABEL);
    }

    #[test]
    fn test_format_chapter_label() {
        assert_eq!(format_chapter_label("Chapter", 3), "Chapter 3");
        assert_eq!(format_chapter_label("Capítulo", 12), "Capítulo 12");
        assert_eq!(format_chapter_label("章", 5), "5章");
        assert_eq!(format_chapter_label("장", 1), "1장");
        // Purity: same input, same output
        assert_eq!(
            format_chapter_label("глава", 7),
            format_chapter_label("глава", 7)
        );
    }
}
