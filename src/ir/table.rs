//! Per-language keyword tables.
//!
//! A [`LanguageTable`] lists every matchable prefix of one language in a fixed
//! type order. Consumers test entries in that order and take the first match,
//! so section keywords come before step keywords.

use std::collections::BTreeMap;

use crate::catalog::ConfigurationError;
use crate::input::source::{
    LanguageDefinition,
    TranslationSource,
};
use crate::types::{
    CanonicalType,
    KeywordEntry,
};

/// Prefix of tag lines in every language.
pub const TAG_PREFIX: &str = "@";

/// One source keyword list and how its keywords become table entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordType {
    /// Key of the list in the source definition.
    pub type_name: &'static str,
    pub kind: CanonicalType,
    /// Appended to each keyword to form the matchable prefix.
    pub separator: &'static str,
}

impl KeywordType {
    /// Creates a new `KeywordType`
    const fn new(type_name: &'static str, kind: CanonicalType, separator: &'static str) -> Self {
        Self { type_name, kind, separator }
    }
}

/// Source lists in table order.
pub const KEYWORD_TYPES: [KeywordType; 10] = [
    KeywordType::new("feature", CanonicalType::Feature, ": "),
    KeywordType::new("scenarioOutline", CanonicalType::ScenarioOutline, ": "),
    KeywordType::new("examples", CanonicalType::Examples, ":"),
    KeywordType::new("scenario", CanonicalType::Scenario, ": "),
    KeywordType::new("background", CanonicalType::Background, ":"),
    KeywordType::new("given", CanonicalType::Given, ""),
    KeywordType::new("when", CanonicalType::When, ""),
    KeywordType::new("then", CanonicalType::Then, ""),
    KeywordType::new("and", CanonicalType::UnknownContinuation, ""),
    KeywordType::new("but", CanonicalType::UnknownContinuation, ""),
];

/// Ordered keyword entries of one language. The first entry is always the tag marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTable {
    /// Tag marker first, then every keyword in `KEYWORD_TYPES` order
    entries: Vec<KeywordEntry>,
}

impl LanguageTable {
    #[must_use]
    pub fn entries(&self) -> &[KeywordEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeywordEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains_type(&self, kind: CanonicalType) -> bool {
        self.entries.iter().any(|entry| entry.kind == kind)
    }

    /// Finds the first entry whose prefix starts `line`, returning it with the rest of the line.
    #[must_use]
    pub fn match_line<'a>(&self, line: &'a str) -> Option<(&KeywordEntry, &'a str)> {
        self.entries.iter().find_map(|entry| entry.strip(line).map(|rest| (entry, rest)))
    }
}

impl<'a> IntoIterator for &'a LanguageTable {
    type Item = &'a KeywordEntry;
    type IntoIter = std::slice::Iter<'a, KeywordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Builds the table of `language` from its source definition.
///
/// # Errors
/// - A list of [`KEYWORD_TYPES`] is absent from the definition
/// - A required type has no keyword
pub fn build_language_table(
    language: &str,
    definition: &LanguageDefinition,
) -> Result<LanguageTable, ConfigurationError> {
    let mut entries = vec![KeywordEntry::new(TAG_PREFIX, CanonicalType::Tag)];

    for keyword_type in &KEYWORD_TYPES {
        let keywords = definition.keywords(keyword_type.type_name).ok_or_else(|| {
            ConfigurationError::MissingType {
                language: language.to_string(),
                type_name: keyword_type.type_name,
            }
        })?;

        if keywords.is_empty() && keyword_type.kind.is_required() {
            return Err(ConfigurationError::EmptyType {
                language: language.to_string(),
                type_name: keyword_type.type_name,
            });
        }

        entries.extend(keywords.iter().map(|keyword| {
            KeywordEntry::new(format!("{keyword}{}", keyword_type.separator), keyword_type.kind)
        }));
    }

    Ok(LanguageTable { entries })
}

/// Builds the table of every language in `source`. The first failing language aborts the build.
///
/// # Errors
/// See [`build_language_table`].
pub fn build_catalog(
    source: &TranslationSource,
) -> Result<BTreeMap<String, LanguageTable>, ConfigurationError> {
    source
        .iter()
        .map(|(language, definition)| {
            let table = build_language_table(language, definition)?;
            tracing::debug!(language = %language, entries = table.len(), "Built keyword table");
            Ok((language.clone(), table))
        })
        .collect()
}
