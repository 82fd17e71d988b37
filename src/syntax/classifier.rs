//! Line classification against a language's keyword table.

use std::sync::Arc;

use crate::catalog::{
    CatalogError,
    KeywordCatalog,
};
use crate::ir::table::LanguageTable;
use crate::types::CanonicalType;

use super::directive::resolve_language;

/// A line that starts with a keyword of the document language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    /// 1-based line number in the document
    pub line_number: usize,
    /// Resolved type; `And`/`But` carry the type of the step they continue
    pub kind: CanonicalType,
    /// Matched prefix, separator included
    pub keyword: String,
    /// Rest of the line after the prefix
    pub text: String,
}

/// Classified lines of a document and the language they were classified with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedDocument {
    pub language: String,
    pub lines: Vec<ClassifiedLine>,
}

/// Classifies lines one by one, remembering the last concrete step type.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    /// Table of the document language
    table: Arc<LanguageTable>,
    /// Type of the last `Given`/`When`/`Then` since the last section header
    previous_step: Option<CanonicalType>,
}

impl LineClassifier {
    #[must_use]
    pub const fn new(table: Arc<LanguageTable>) -> Self {
        Self { table, previous_step: None }
    }

    /// Classifies one line. Blank lines, comments and lines without a keyword yield `None`.
    ///
    /// Entries are tried in table order and the first matching prefix wins.
    pub fn classify(&mut self, line_number: usize, line: &str) -> Option<ClassifiedLine> {
        let line = line.trim_start();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let (entry, rest) = self.table.match_line(line)?;
        let kind = match entry.kind {
            CanonicalType::UnknownContinuation => {
                self.previous_step.unwrap_or(CanonicalType::UnknownContinuation)
            }
            kind if kind.is_concrete_step() => {
                self.previous_step = Some(kind);
                kind
            }
            kind if kind.is_section() => {
                self.previous_step = None;
                kind
            }
            kind => kind,
        };

        Some(ClassifiedLine {
            line_number,
            kind,
            keyword: entry.prefix.clone(),
            text: rest.trim().to_string(),
        })
    }
}

/// Classifies every line of `document` with the table of its declared language.
///
/// The language comes from a directive on the first line, or the catalog's default language.
///
/// # Errors
/// - [`CatalogError::Configuration`]: the catalog could not be built
/// - [`CatalogError::Lookup`]: the declared language is not in the catalog
pub fn classify_document(
    catalog: &KeywordCatalog,
    document: &str,
) -> Result<ClassifiedDocument, CatalogError> {
    let language = resolve_language(document, catalog.default_language());
    tracing::debug!(language, "Classifying document");

    let mut classifier = LineClassifier::new(catalog.get_language(language)?);
    let lines = document
        .lines()
        .enumerate()
        .filter_map(|(index, line)| classifier.classify(index + 1, line))
        .collect();

    Ok(ClassifiedDocument { language: language.to_string(), lines })
}
