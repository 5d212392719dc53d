//! The consumed content-service contract.
//!
//! The remote service owns fetching and HTML parsing; this module only
//! models its four JSON endpoints behind a trait so the engine can be
//! exercised against a mock.

use crate::config::EngineConfig;
use crate::error::FetchError;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

/// One localized book entry from `/api/books`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NamedBook {
    pub abbr: String,
    pub name: String,

    /// Chapter count as reported by the service; informational only, the
    /// registry stays authoritative for navigation
    #[serde(default)]
    pub chapters: Option<u32>,
}

/// Response of `GET /api/books?lang=`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookNames {
    #[serde(default)]
    pub books: Vec<NamedBook>,
}

/// Response of `GET /api/chapter?book=&chapter=&lang=`.
///
/// A parsed body without `verses` deserializes to an empty sequence; the
/// upstream proxy reports its own errors as JSON bodies, which therefore
/// degrade to empty rather than raising.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChapterContent {
    #[serde(default)]
    pub verses: Vec<String>,
}

/// Response of `GET /api/intro?book=&chapter=&lang=`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ChapterExtras {
    #[serde(default)]
    pub subtitle: String,

    #[serde(default)]
    pub introduction: String,
}

impl ChapterExtras {
    /// Whether both fields are empty after trimming
    pub fn is_empty(&self) -> bool {
        self.subtitle.trim().is_empty() && self.introduction.trim().is_empty()
    }
}

/// Per-language vocabulary block of `GET /booksnames.json`.
///
/// The file also carries localized book titles per language; only the
/// `chapter` word is consumed here, the rest is ignored on deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguageVocabulary {
    #[serde(default)]
    pub chapter: Option<String>,
}

/// Full response of `GET /booksnames.json`, keyed by language code
pub type ChapterVocabulary = HashMap<String, LanguageVocabulary>;

/// Abstract content service.
///
/// Language codes are opaque identifiers passed through unvalidated.
#[async_trait]
pub trait ContentService: Send + Sync {
    /// Localized display names for the catalog
    async fn book_names(&self, language: &str) -> Result<BookNames, FetchError>;

    /// Language-keyed chapter-label vocabulary
    async fn chapter_vocabulary(&self) -> Result<ChapterVocabulary, FetchError>;

    /// Verse content for one chapter in one language
    async fn chapter(
        &self,
        book: &str,
        chapter: u32,
        language: &str,
    ) -> Result<ChapterContent, FetchError>;

    /// Optional subtitle/introduction metadata for one chapter
    async fn chapter_extras(
        &self,
        book: &str,
        chapter: u32,
        language: &str,
    ) -> Result<ChapterExtras, FetchError>;
}

/// HTTP client for the content service
pub struct HttpContentService {
    base_url: String,
    client: reqwest::Client,
}

impl HttpContentService {
    /// Build a client against the configured service root
    pub fn new(config: &EngineConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ContentService for HttpContentService {
    async fn book_names(&self, language: &str) -> Result<BookNames, FetchError> {
        let response = self
            .client
            .get(self.endpoint("/api/books"))
            .query(&[("lang", language)])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        response
            .json()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))
    }

    async fn chapter_vocabulary(&self) -> Result<ChapterVocabulary, FetchError> {
        let response = self
            .client
            .get(self.endpoint("/booksnames.json"))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        response
            .json()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))
    }

    async fn chapter(
        &self,
        book: &str,
        chapter: u32,
        language: &str,
    ) -> Result<ChapterContent, FetchError> {
        let chapter = chapter.to_string();
        let response = self
            .client
            .get(self.endpoint("/api/chapter"))
            .query(&[("book", book), ("chapter", chapter.as_str()), ("lang", language)])
            .send()
            .await?;
        // No status check: the proxy answers upstream failures with JSON
        // error bodies, and a body without `verses` is an empty chapter.
        // Only transport failures and non-JSON bodies raise, which is what
        // the all-or-nothing dual fetch joins on.
        response
            .json()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))
    }

    async fn chapter_extras(
        &self,
        book: &str,
        chapter: u32,
        language: &str,
    ) -> Result<ChapterExtras, FetchError> {
        let chapter = chapter.to_string();
        let response = self
            .client
            .get(self.endpoint("/api/intro"))
            .query(&[("book", book), ("chapter", chapter.as_str()), ("lang", language)])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        response
            .json()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))
    }
}
