//! Keyword source input definitions.
//!
//! A keyword source is a JSON document keyed by language code, each value
//! holding the keyword lists of one language:
//!
//! ```json
//! {
//!   "en": {
//!     "name": "English",
//!     "feature": ["Feature", "Business Need"],
//!     "given": ["* ", "Given "]
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::{
    Path,
    PathBuf,
};
use std::sync::Arc;

use serde::Deserialize;

use crate::catalog::ConfigurationError;

/// Resource name of the catalog compiled into the crate.
pub const BUNDLED_RESOURCE: &str = "gherkin-languages.json";

/// Catalog compiled into the crate.
const BUNDLED_CATALOG: &str = include_str!("../../resources/gherkin-languages.json");

/// Raw decoded keyword source (language code → definition), sorted by code.
pub type TranslationSource = BTreeMap<String, LanguageDefinition>;

/// Keyword lists of one language as authored in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LanguageDefinition {
    /// English name of the language (e.g. "French").
    #[serde(default)]
    pub name: Option<String>,

    /// Native name of the language (e.g. "français").
    #[serde(default)]
    pub native: Option<String>,

    /// Keyword lists by source type name (`feature`, `scenarioOutline`, `given`, ...).
    #[serde(flatten)]
    pub keywords: BTreeMap<String, Vec<String>>,
}

impl LanguageDefinition {
    /// Keyword list for a source type name, if present.
    #[must_use]
    pub fn keywords(&self, type_name: &str) -> Option<&[String]> {
        self.keywords.get(type_name).map(Vec::as_slice)
    }
}

/// Loader of a [`TranslationSource`].
pub trait KeywordSource: fmt::Debug + Send + Sync {
    /// Name identifying the resource in errors and logs.
    fn resource(&self) -> &str;

    /// Loads and decodes the whole source.
    ///
    /// # Errors
    /// - The resource cannot be read
    /// - The resource is not UTF-8 or not a valid keyword catalog
    fn load(&self) -> Result<TranslationSource, ConfigurationError>;
}

impl<T: KeywordSource + ?Sized> KeywordSource for Arc<T> {
    fn resource(&self) -> &str {
        (**self).resource()
    }

    fn load(&self) -> Result<TranslationSource, ConfigurationError> {
        (**self).load()
    }
}

/// Decodes raw bytes of `resource` into a [`TranslationSource`].
pub fn parse_source(resource: &str, bytes: &[u8]) -> Result<TranslationSource, ConfigurationError> {
    let text = std::str::from_utf8(bytes).map_err(|source| ConfigurationError::InvalidUtf8 {
        resource: resource.to_string(),
        source,
    })?;

    let translations: TranslationSource = serde_json::from_str(text)
        .map_err(|source| ConfigurationError::Parse { resource: resource.to_string(), source })?;

    tracing::debug!(resource = %resource, languages = translations.len(), "Parsed keyword source");

    Ok(translations)
}

/// The `gherkin-languages.json` catalog shipped with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl KeywordSource for BundledSource {
    fn resource(&self) -> &str {
        BUNDLED_RESOURCE
    }

    fn load(&self) -> Result<TranslationSource, ConfigurationError> {
        tracing::debug!("Loading bundled keyword source");
        parse_source(BUNDLED_RESOURCE, BUNDLED_CATALOG.as_bytes())
    }
}

/// A keyword catalog read from the filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    resource: String,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let resource = path.display().to_string();
        Self { path, resource }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeywordSource for FileSource {
    fn resource(&self) -> &str {
        &self.resource
    }

    fn load(&self) -> Result<TranslationSource, ConfigurationError> {
        tracing::debug!("Loading keyword source from: {:?}", self.path);

        let bytes = std::fs::read(&self.path).map_err(|source| ConfigurationError::Io {
            resource: self.resource.clone(),
            source,
        })?;

        parse_source(&self.resource, &bytes)
    }
}

/// An in-memory keyword catalog.
#[derive(Debug, Clone)]
pub struct StaticSource {
    resource: String,
    content: String,
}

impl StaticSource {
    #[must_use]
    pub fn new(resource: impl Into<String>, content: impl Into<String>) -> Self {
        Self { resource: resource.into(), content: content.into() }
    }
}

impl KeywordSource for StaticSource {
    fn resource(&self) -> &str {
        &self.resource
    }

    fn load(&self) -> Result<TranslationSource, ConfigurationError> {
        parse_source(&self.resource, self.content.as_bytes())
    }
}
