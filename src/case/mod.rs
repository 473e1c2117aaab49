pub mod joiner;
pub mod tokenizer;

use crate::Error;
use joiner::{join, JoinPolicy, TokenCase};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tokenizer::Tokens;

/// Output case styles. Each one is a fixed [`JoinPolicy`] over the shared tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseStyle {
    /// `fooBar1`
    Camel,
    /// `foo-bar-1`
    #[default]
    Kebab,
    /// `FOO-BAR-1`
    UpperKebab,
    /// `foo_bar_1`
    Snake,
    /// `FOO_BAR_1`
    UpperSnake,
}

const CAMEL: JoinPolicy = JoinPolicy::new("", TokenCase::Lower, TokenCase::Capitalize);
const KEBAB: JoinPolicy = JoinPolicy::new("-", TokenCase::Lower, TokenCase::Lower);
const UPPER_KEBAB: JoinPolicy = JoinPolicy::new("-", TokenCase::Upper, TokenCase::Upper);
const SNAKE: JoinPolicy = JoinPolicy::new("_", TokenCase::Lower, TokenCase::Lower);
const UPPER_SNAKE: JoinPolicy = JoinPolicy::new("_", TokenCase::Upper, TokenCase::Upper);

impl CaseStyle {
    pub const ALL: [CaseStyle; 5] = [
        CaseStyle::Camel,
        CaseStyle::Kebab,
        CaseStyle::UpperKebab,
        CaseStyle::Snake,
        CaseStyle::UpperSnake,
    ];

    pub fn policy(self) -> &'static JoinPolicy {
        match self {
            CaseStyle::Camel => &CAMEL,
            CaseStyle::Kebab => &KEBAB,
            CaseStyle::UpperKebab => &UPPER_KEBAB,
            CaseStyle::Snake => &SNAKE,
            CaseStyle::UpperSnake => &UPPER_SNAKE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CaseStyle::Camel => "camel",
            CaseStyle::Kebab => "kebab",
            CaseStyle::UpperKebab => "upper-kebab",
            CaseStyle::Snake => "snake",
            CaseStyle::UpperSnake => "upper-snake",
        }
    }

    pub fn convert(self, s: &str) -> String {
        log::trace!("converting {:?} to {} case", s, self);
        convert_with(s, self.policy())
    }
}

impl FromStr for CaseStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        CaseStyle::ALL
            .into_iter()
            .find(|style| style.name() == normalized)
            .ok_or_else(|| Error::UnknownCaseStyle(s.to_string()))
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tokenize `s` and join the tokens with a caller-supplied policy.
pub fn convert_with(s: &str, policy: &JoinPolicy) -> String {
    join(Tokens::new(s), policy)
}

pub fn convert_case(s: &str, style: CaseStyle) -> String {
    style.convert(s)
}

/// Convert to camelCase. Anything that is not a letter or digit is dropped.
///
/// ```
/// assert_eq!(strkit::to_camel_case("Foo-#1😄$_%^&*(1bar"), "foo11Bar");
/// ```
pub fn to_camel_case(s: &str) -> String {
    CaseStyle::Camel.convert(s)
}

/// Convert to kebab-case.
///
/// ```
/// assert_eq!(strkit::to_kebab_case("Foo-#1😄$_%^&*(1bar"), "foo-1-1-bar");
/// ```
pub fn to_kebab_case(s: &str) -> String {
    CaseStyle::Kebab.convert(s)
}

/// Convert to UPPER-KEBAB-CASE.
pub fn to_upper_kebab_case(s: &str) -> String {
    CaseStyle::UpperKebab.convert(s)
}

/// Convert to snake_case.
pub fn to_snake_case(s: &str) -> String {
    CaseStyle::Snake.convert(s)
}

/// Convert to UPPER_SNAKE_CASE.
pub fn to_upper_snake_case(s: &str) -> String {
    CaseStyle::UpperSnake.convert(s)
}
