//! 翻訳済みキーワードでの feature ファイル分類に関するテスト

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(clippy::indexing_slicing)]
#![allow(missing_docs)]

use std::fs;

use gherkin_i18n::config::{
    SETTINGS_FILE,
    SettingsManager,
};
use gherkin_i18n::syntax::classify_document;
use gherkin_i18n::{
    CanonicalType,
    CatalogError,
    KeywordCatalog,
    KeywordEntry,
};
use googletest::prelude::*;
use pretty_assertions::assert_eq;
use rstest::*;
use tempfile::TempDir;

#[fixture]
fn catalog() -> KeywordCatalog {
    KeywordCatalog::bundled()
}

fn kinds(document: &str, catalog: &KeywordCatalog) -> Vec<CanonicalType> {
    classify_document(catalog, document).unwrap().lines.iter().map(|line| line.kind).collect()
}

#[rstest]
fn test_invalid_lang(catalog: KeywordCatalog) {
    let err = catalog.get_language("spam").unwrap_err();

    assert!(matches!(err, CatalogError::Lookup(_)));
    assert_that!(err.to_string(), eq("no translation for language code 'spam'"));
}

#[rstest]
fn test_every_language_is_complete(catalog: KeywordCatalog) {
    for code in catalog.languages().unwrap() {
        let table = catalog.get_language(code).unwrap();

        assert_eq!(table.entries()[0], KeywordEntry::new("@", CanonicalType::Tag));
        for kind in CanonicalType::ALL.into_iter().filter(|kind| kind.is_required()) {
            assert!(table.contains_type(kind), "{code} has no {kind} keyword");
        }
    }
}

#[rstest]
#[case::korean("ko", "기능: ", "조건")]
#[case::arabic("ar", "خاصية: ", "بفرض ")]
#[case::polish("pl", "Właściwość: ", "Zakładając ")]
#[case::swedish("sv", "Egenskap: ", "Givet ")]
#[case::turkish("tr", "Özellik: ", "Diyelim ki ")]
fn test_bundled_upstream_languages(
    catalog: KeywordCatalog,
    #[case] code: &str,
    #[case] feature: &str,
    #[case] given: &str,
) {
    let table = catalog.get_language(code).unwrap();

    assert!(table.entries().contains(&KeywordEntry::new(feature, CanonicalType::Feature)));
    assert!(table.entries().contains(&KeywordEntry::new(given, CanonicalType::Given)));
}

#[rstest]
fn test_korean_document(catalog: KeywordCatalog) {
    let document = "# language: ko\n기능: 오이\n  시나리오: 먹기\n    조건 오이 12개\n    그리고 칼\n    만일 5개를 먹는다\n    그러면 7개가 남는다\n";

    let result = classify_document(&catalog, document).unwrap();

    assert_that!(result.language, eq("ko"));
    assert_eq!(
        kinds(document, &catalog),
        [
            CanonicalType::Feature,
            CanonicalType::Scenario,
            CanonicalType::Given,
            CanonicalType::Given,
            CanonicalType::When,
            CanonicalType::Then,
        ]
    );
    assert_that!(result.lines[2].text, eq("오이 12개"));
}

#[rstest]
fn test_bundled_catalog_language_count(catalog: KeywordCatalog) {
    let languages = catalog.languages().unwrap();

    assert_that!(languages, len(eq(78)));
    assert!(languages.contains(&"zh-TW"));
}

#[rstest]
fn test_translated_feature(catalog: KeywordCatalog) {
    let document = "\
# language: en-lol
OH HAI: lolcat language

    MISHUN: haz cheezburger
        I CAN HAZ ingredients
        WEN I make cheezburger
        DEN I haz cheezburger
";

    let result = classify_document(&catalog, document).unwrap();

    assert_that!(result.language, eq("en-lol"));
    assert_eq!(
        kinds(document, &catalog),
        [
            CanonicalType::Feature,
            CanonicalType::Scenario,
            CanonicalType::Given,
            CanonicalType::When,
            CanonicalType::Then,
        ]
    );
    assert_that!(result.lines[1].text, eq("haz cheezburger"));
    assert_that!(result.lines[2].text, eq("ingredients"));
}

#[rstest]
fn test_set_language_outside_header(catalog: KeywordCatalog) {
    let document = "\
Feature: random lang declaration

    # language: en-lol
    Scenario: lang setting outside header
        Given I set language outside header
        Then lang should fallback to default english
";

    let result = classify_document(&catalog, document).unwrap();

    assert_that!(result.language, eq("en"));
    assert_eq!(
        kinds(document, &catalog),
        [
            CanonicalType::Feature,
            CanonicalType::Scenario,
            CanonicalType::Given,
            CanonicalType::Then,
        ]
    );
}

#[rstest]
fn test_lolcat_keywords_on_third_line_use_english(catalog: KeywordCatalog) {
    let document = "\
OH HAI: x

# language: en-lol
MISHUN: y
I CAN HAZ z
";

    let result = classify_document(&catalog, document).unwrap();

    assert_that!(result.language, eq("en"));
    assert_that!(result.lines, is_empty());
}

#[rstest]
fn test_translated_with_spaces(catalog: KeywordCatalog) {
    let document = "\
#   language:en-lol
OH HAI: lol spaces

    MISHUN: haz cheezburger
        I CAN HAZ cheezburger
        DEN I eat cheezburger
";

    assert_eq!(
        kinds(document, &catalog),
        [
            CanonicalType::Feature,
            CanonicalType::Scenario,
            CanonicalType::Given,
            CanonicalType::Then,
        ]
    );
}

#[rstest]
fn test_workspace_keyword_source() {
    let temp_dir = TempDir::new().unwrap();
    let languages = r#"{
        "xx": {
            "feature": ["Fitur"], "scenarioOutline": ["Garis Besar Skenario"],
            "examples": ["Contoh"], "scenario": ["Skenario"], "background": ["Dasar"],
            "given": ["Dengan "], "when": ["Ketika "], "then": ["Maka "],
            "and": ["Dan "], "but": ["Tapi "]
        }
    }"#;
    fs::write(temp_dir.path().join("languages.json"), languages).unwrap();
    fs::write(
        temp_dir.path().join(SETTINGS_FILE),
        r#"{"keywordSource": "languages.json", "defaultLanguage": "xx"}"#,
    )
    .unwrap();

    let mut settings = SettingsManager::new();
    settings.load_settings(temp_dir.path()).unwrap();
    let catalog = settings.catalog();

    let document = "Fitur: x\n  Skenario: y\n    Dengan a\n    Dan b\n    Ketika c\n    Maka d\n";

    assert_eq!(
        kinds(document, &catalog),
        [
            CanonicalType::Feature,
            CanonicalType::Scenario,
            CanonicalType::Given,
            CanonicalType::Given,
            CanonicalType::When,
            CanonicalType::Then,
        ]
    );
    assert_that!(catalog.languages().unwrap(), eq(&vec!["xx"]));
}
