//! Built keyword tables of every language.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::ir::table::LanguageTable;

/// Immutable mapping from language code to its keyword table.
#[derive(Debug, Clone, Default)]
pub struct TranslationCache {
    /// Tables by language code
    tables: BTreeMap<String, Arc<LanguageTable>>,
}

impl TranslationCache {
    #[must_use]
    pub fn new(tables: BTreeMap<String, LanguageTable>) -> Self {
        Self { tables: tables.into_iter().map(|(code, table)| (code, Arc::new(table))).collect() }
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Arc<LanguageTable>> {
        self.tables.get(code)
    }

    /// Language codes in sorted order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
