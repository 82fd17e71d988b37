//! Core types used throughout the project.

use std::fmt;

/// Language-neutral classification of a Gherkin line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalType {
    /// `@`-prefixed tag line, independent of the document language.
    Tag,
    Feature,
    ScenarioOutline,
    Examples,
    Scenario,
    Background,
    Given,
    When,
    Then,
    /// `And` / `But`: takes the type of the preceding concrete step.
    UnknownContinuation,
}

impl CanonicalType {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Tag,
        Self::Feature,
        Self::ScenarioOutline,
        Self::Examples,
        Self::Scenario,
        Self::Background,
        Self::Given,
        Self::When,
        Self::Then,
        Self::UnknownContinuation,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tag => "tag",
            Self::Feature => "feature",
            Self::ScenarioOutline => "scenario outline",
            Self::Examples => "examples",
            Self::Scenario => "scenario",
            Self::Background => "background",
            Self::Given => "given",
            Self::When => "when",
            Self::Then => "then",
            Self::UnknownContinuation => "and/but",
        }
    }

    /// Concrete step types (`Given`, `When`, `Then`).
    #[must_use]
    pub const fn is_concrete_step(self) -> bool {
        matches!(self, Self::Given | Self::When | Self::Then)
    }

    /// Section headers that open a new block of steps.
    #[must_use]
    pub const fn is_section(self) -> bool {
        matches!(
            self,
            Self::Feature | Self::ScenarioOutline | Self::Examples | Self::Scenario | Self::Background
        )
    }

    /// Types that every language table must carry at least one keyword for.
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Tag | Self::UnknownContinuation)
    }
}

impl fmt::Display for CanonicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A matchable line prefix (`keyword + separator`) and the type it marks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeywordEntry {
    pub prefix: String,
    pub kind: CanonicalType,
}

impl KeywordEntry {
    #[must_use]
    pub fn new(prefix: impl Into<String>, kind: CanonicalType) -> Self {
        Self { prefix: prefix.into(), kind }
    }

    /// Returns the remainder of `line` when it starts with this entry's prefix.
    #[must_use]
    pub fn strip<'a>(&self, line: &'a str) -> Option<&'a str> {
        line.strip_prefix(self.prefix.as_str())
    }
}
