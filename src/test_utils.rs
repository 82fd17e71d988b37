//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use std::collections::BTreeMap;
use std::sync::atomic::{
    AtomicUsize,
    Ordering,
};

use crate::catalog::ConfigurationError;
use crate::input::source::{
    KeywordSource,
    LanguageDefinition,
    TranslationSource,
};
use crate::ir::table::KEYWORD_TYPES;

/// 全キーワード種別を持つ言語定義を作成する
///
/// 各種別のキーワードは 1 つずつ（例: `given` → `"GIVEN "`）
pub(crate) fn complete_definition() -> LanguageDefinition {
    let keywords = KEYWORD_TYPES
        .iter()
        .map(|keyword_type| {
            let keyword = match keyword_type.type_name {
                "scenarioOutline" => "OUTLINE",
                other => other,
            }
            .to_uppercase();
            let keyword = if keyword_type.separator.is_empty() { format!("{keyword} ") } else { keyword };
            (keyword_type.type_name.to_string(), vec![keyword])
        })
        .collect::<BTreeMap<_, _>>();

    LanguageDefinition { name: None, native: None, keywords }
}

/// 言語コードと定義の組から `TranslationSource` を作成する
pub(crate) fn synthetic_source<const N: usize>(
    languages: [(&str, LanguageDefinition); N],
) -> TranslationSource {
    languages.into_iter().map(|(code, definition)| (code.to_string(), definition)).collect()
}

/// `load` の呼び出し回数を数える `KeywordSource`
#[derive(Debug)]
pub(crate) struct CountingSource {
    /// 読み込み成功時に返すソース
    translations: TranslationSource,
    /// 残りの不完全な読み込み回数（`but` のない `yy` を追加して返す）
    failures: AtomicUsize,
    /// `load` の呼び出し回数
    loads: AtomicUsize,
}

impl CountingSource {
    /// 常に `translations` を返すソース
    pub(crate) const fn new(translations: TranslationSource) -> Self {
        Self::failing_first(translations, 0)
    }

    /// 最初の `failures` 回だけ `but` のない言語 `yy` を含むソース
    pub(crate) const fn failing_first(translations: TranslationSource, failures: usize) -> Self {
        Self { translations, failures: AtomicUsize::new(failures), loads: AtomicUsize::new(0) }
    }

    /// これまでの `load` 呼び出し回数
    pub(crate) fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl KeywordSource for CountingSource {
    fn resource(&self) -> &str {
        "counting"
    }

    fn load(&self) -> Result<TranslationSource, ConfigurationError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        let mut translations = self.translations.clone();
        if self.failures.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1)).is_ok() {
            let mut incomplete = complete_definition();
            incomplete.keywords.remove("but");
            translations.insert("yy".to_string(), incomplete);
        }
        Ok(translations)
    }
}
