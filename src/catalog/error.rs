use thiserror::Error;

/// The keyword source could not be turned into a complete catalog.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// The resource could not be read
    #[error("Failed to read keyword source '{resource}': {source}")]
    Io {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    /// The resource is not valid UTF-8 text
    #[error("Keyword source '{resource}' is not valid UTF-8: {source}")]
    InvalidUtf8 {
        resource: String,
        #[source]
        source: std::str::Utf8Error,
    },

    /// The resource is not a valid keyword catalog document
    #[error("Failed to parse keyword source '{resource}': {source}")]
    Parse {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    /// A language definition lacks one of the required keyword lists
    #[error("gherkin language definition for '{language}' is incomplete. it does not have '{type_name}'")]
    MissingType { language: String, type_name: &'static str },

    /// A language definition has no keyword at all for a required type
    #[error("gherkin language definition for '{language}' has no keyword for '{type_name}'")]
    EmptyType { language: String, type_name: &'static str },
}

/// The requested language is not part of the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no translation for language code '{code}'")]
pub struct LookupError {
    pub code: String,
}

impl LookupError {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// Errors returned by [`KeywordCatalog`](super::KeywordCatalog) lookups.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}
