//! Catalog settings: types, validation and loading from a workspace.

/// Settings file loader
mod loader;
/// Settings manager
mod manager;
/// Settings types and validation
mod types;

pub use loader::SETTINGS_FILE;
pub use manager::SettingsManager;
pub use types::{
    CatalogSettings,
    SettingsError,
    ValidationError,
};
