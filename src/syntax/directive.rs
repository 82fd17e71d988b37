//! `# language: xx` directive detection.

use std::sync::LazyLock;

use regex::Regex;

/// Case-insensitive directive pattern; the code is captured in `code`.
///
/// Only the first whitespace-free token after the colon is the code.
static LANGUAGE_DIRECTIVE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*#?\s*language:\s*(?P<code>[^\s]+)")
        .map_err(|e| tracing::error!("Failed to compile language directive pattern: {e}"))
        .ok()
});

/// Extracts the language code declared by `line`, if it is a language directive.
///
/// # Examples
/// ```
/// use gherkin_i18n::syntax::detect_language;
///
/// assert_eq!(detect_language("# language: en-lol"), Some("en-lol"));
/// assert_eq!(detect_language("#   LANGUAGE:fr"), Some("fr"));
/// assert_eq!(detect_language("Feature: no directive"), None);
/// ```
#[must_use]
pub fn detect_language(line: &str) -> Option<&str> {
    let pattern = LANGUAGE_DIRECTIVE.as_ref()?;
    pattern.captures(line)?.name("code").map(|code| code.as_str())
}

/// Language of `document`: the directive on its first line, or `default`.
///
/// Directives on any later line are ignored.
#[must_use]
pub fn resolve_language<'a>(document: &'a str, default: &'a str) -> &'a str {
    document.lines().next().and_then(detect_language).unwrap_or(default)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case::plain("# language: en-lol", Some("en-lol"))]
    #[case::no_space("#language:fr", Some("fr"))]
    #[case::extra_spaces("#   language:en-lol", Some("en-lol"))]
    #[case::indented("    # language: de", Some("de"))]
    #[case::uppercase("# LANGUAGE: zh-CN", Some("zh-CN"))]
    #[case::without_hash("language: ja", Some("ja"))]
    #[case::trailing_space("# language: fr   ", Some("fr"))]
    #[case::no_code("# language:", None)]
    #[case::comment("# just a comment", None)]
    #[case::trailing_text("# language: fr and more", Some("fr"))]
    #[case::space_before_colon("# language : fr", None)]
    #[case::feature("Feature: language: fr", None)]
    fn test_detect_language(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_that!(detect_language(line), eq(expected));
    }

    #[rstest]
    fn resolve_language_uses_first_line() {
        let document = "# language: en-lol\nOH HAI: lolcat language\n";

        assert_that!(resolve_language(document, "en"), eq("en-lol"));
    }

    #[rstest]
    fn resolve_language_ignores_later_lines() {
        let document = "Feature: random lang declaration\n\n    # language: en-lol\n";

        assert_that!(resolve_language(document, "en"), eq("en"));
    }

    #[rstest]
    fn resolve_language_empty_document() {
        assert_that!(resolve_language("", "fr"), eq("fr"));
    }
}
