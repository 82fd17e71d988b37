//! Keyword catalog: per-language tables served by language code.
//!
//! The whole source is loaded and every table built on the first lookup.
//! Concurrent first callers wait for that single build; later lookups only
//! read the published cache.

mod cache;
mod error;

use std::sync::{
    Arc,
    Mutex,
    OnceLock,
    PoisonError,
};

pub use cache::TranslationCache;
pub use error::{
    CatalogError,
    ConfigurationError,
    LookupError,
};

use crate::config::CatalogSettings;
use crate::input::source::{
    BundledSource,
    FileSource,
    KeywordSource,
};
use crate::ir::table::{
    LanguageTable,
    build_catalog,
};

/// Language of documents without a language directive.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Lookup service owning the keyword source and its translation cache.
#[derive(Debug)]
pub struct KeywordCatalog {
    /// Where the catalog is loaded from
    source: Box<dyn KeywordSource>,
    /// Language used when a document does not declare one
    default_language: String,
    /// Set once, after the whole catalog has been built
    cache: OnceLock<TranslationCache>,
    /// Serializes the build of `cache`
    build_lock: Mutex<()>,
}

impl KeywordCatalog {
    #[must_use]
    pub fn new(source: impl KeywordSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            default_language: DEFAULT_LANGUAGE.to_string(),
            cache: OnceLock::new(),
            build_lock: Mutex::new(()),
        }
    }

    /// Catalog backed by the bundled `gherkin-languages.json`.
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(BundledSource)
    }

    /// Catalog backed by the source and default language of `settings`.
    #[must_use]
    pub fn from_settings(settings: &CatalogSettings) -> Self {
        let catalog = match &settings.keyword_source {
            Some(path) => Self::new(FileSource::new(path)),
            None => Self::bundled(),
        };
        catalog.with_default_language(settings.default_language.clone())
    }

    #[must_use]
    pub fn with_default_language(mut self, code: impl Into<String>) -> Self {
        self.default_language = code.into();
        self
    }

    #[must_use]
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Name of the underlying keyword resource.
    #[must_use]
    pub fn resource(&self) -> &str {
        self.source.resource()
    }

    /// Whether the catalog has been built.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.cache.get().is_some()
    }

    /// Returns the keyword table of `code`, building the catalog on first use.
    ///
    /// # Errors
    /// - [`CatalogError::Configuration`]: the source could not be loaded or built
    /// - [`CatalogError::Lookup`]: `code` is not in the catalog
    pub fn get_language(&self, code: &str) -> Result<Arc<LanguageTable>, CatalogError> {
        let cache = self.cache()?;
        cache.get(code).cloned().ok_or_else(|| {
            tracing::warn!(code, resource = self.resource(), "No translation for language code");
            LookupError::new(code).into()
        })
    }

    /// Language codes of the catalog in sorted order, building it on first use.
    pub fn languages(&self) -> Result<Vec<&str>, ConfigurationError> {
        Ok(self.cache()?.languages().collect())
    }

    /// Returns the built cache, building it if no build has succeeded yet.
    ///
    /// A failed build leaves the cache unset so the next call builds again.
    fn cache(&self) -> Result<&TranslationCache, ConfigurationError> {
        if let Some(cache) = self.cache.get() {
            return Ok(cache);
        }

        let _guard = self.build_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(cache) = self.cache.get() {
            return Ok(cache);
        }

        tracing::debug!(resource = self.source.resource(), "Building keyword catalog");
        let translations = self.source.load()?;
        let cache = TranslationCache::new(build_catalog(&translations)?);
        tracing::info!(
            resource = self.source.resource(),
            languages = cache.len(),
            "Keyword catalog initialized"
        );

        Ok(self.cache.get_or_init(|| cache))
    }
}

impl Default for KeywordCatalog {
    fn default() -> Self {
        Self::bundled()
    }
}
