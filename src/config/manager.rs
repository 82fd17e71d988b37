//! ワークスペース設定の保持とカタログ生成

use std::path::Path;

use super::{
    CatalogSettings,
    SettingsError,
    loader,
};
use crate::catalog::KeywordCatalog;

/// 検証済みのカタログ設定を保持する
///
/// 読み込みに失敗した場合は直前の設定がそのまま残る。
#[derive(Default, Debug, Clone)]
pub struct SettingsManager {
    /// 最後に読み込みと検証に成功した設定
    current_settings: CatalogSettings,
}

impl SettingsManager {
    /// デフォルト設定（同梱カタログ、`en`）で作成
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `workspace_root` の `.gherkin-i18n.json` を読み込んで検証する
    ///
    /// ファイルがなければデフォルト設定になる。
    ///
    /// # Errors
    /// - [`SettingsError::IoError`]: ファイル読み込みエラー
    /// - [`SettingsError::ParseError`]: JSON パースエラー
    /// - [`SettingsError::ValidationErrors`]: バリデーションエラー
    pub fn load_settings(&mut self, workspace_root: &Path) -> Result<&CatalogSettings, SettingsError> {
        let settings = loader::load_from_workspace(workspace_root)?.unwrap_or_default();
        settings.validate().map_err(SettingsError::ValidationErrors)?;

        tracing::debug!(
            workspace = %workspace_root.display(),
            default_language = %settings.default_language,
            keyword_source = ?settings.keyword_source,
            "Catalog settings loaded"
        );
        self.current_settings = settings;

        Ok(&self.current_settings)
    }

    /// 現在の設定
    #[must_use]
    pub const fn get_settings(&self) -> &CatalogSettings {
        &self.current_settings
    }

    /// 現在の設定のキーワードソースと既定言語を使うカタログ
    #[must_use]
    pub fn catalog(&self) -> KeywordCatalog {
        KeywordCatalog::from_settings(&self.current_settings)
    }
}
