//! 設定ファイルの読み込み関数

use std::path::Path;

use super::{
    CatalogSettings,
    SettingsError,
};

/// ワークスペースルートに置く設定ファイル名
pub const SETTINGS_FILE: &str = ".gherkin-i18n.json";

/// ワークスペースから設定を読み込む
///
/// `.gherkin-i18n.json` ファイルを探して読み込む。
/// `keywordSource` が相対パスの場合はワークスペースルートからのパスに解決する。
///
/// # Arguments
/// * `workspace_root` - ワークスペースのルートパス
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(SettingsError)`: ファイル読み込みまたはパースエラー
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
pub(super) fn load_from_workspace(
    workspace_root: &Path,
) -> Result<Option<CatalogSettings>, SettingsError> {
    let config_path = workspace_root.join(SETTINGS_FILE);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let mut settings: CatalogSettings = serde_json::from_str(&content)?;

    if let Some(source) = &settings.keyword_source
        && source.is_relative()
        && !source.as_os_str().is_empty()
    {
        settings.keyword_source = Some(workspace_root.join(source));
    }

    Ok(Some(settings))
}
