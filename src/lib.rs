//! gherkin-i18n
//!
//! Gherkin のキーワード（"Given", "Lorsque", "假如" など）を、文書の言語ごとの
//! キーワードテーブルから正規の種別へ解決する。
//!
//! ```
//! use gherkin_i18n::{CanonicalType, KeywordCatalog};
//!
//! let catalog = KeywordCatalog::bundled();
//! let table = catalog.get_language("fr").unwrap();
//! let (entry, rest) = table.match_line("Lorsque je mange").unwrap();
//!
//! assert_eq!(entry.kind, CanonicalType::When);
//! assert_eq!(rest, "je mange");
//! ```

pub mod catalog;
pub mod config;
pub mod input;
pub mod ir;
pub mod syntax;
pub mod types;

mod test_utils;

pub use catalog::{
    CatalogError,
    ConfigurationError,
    KeywordCatalog,
    LookupError,
};
pub use ir::table::LanguageTable;
pub use types::{
    CanonicalType,
    KeywordEntry,
};
