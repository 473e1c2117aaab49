use super::tokenizer::WordToken;

/// Casing rule applied to a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCase {
    Lower,
    Upper,
    /// First code point uppercased, the remainder lowercased.
    Capitalize,
    /// Emit the token unchanged.
    Verbatim,
}

impl TokenCase {
    fn write(self, token: &str, out: &mut String) {
        match self {
            TokenCase::Lower => out.push_str(&token.to_lowercase()),
            TokenCase::Upper => out.push_str(&token.to_uppercase()),
            TokenCase::Capitalize => {
                let mut chars = token.chars();
                if let Some(first) = chars.next() {
                    out.extend(first.to_uppercase());
                    out.push_str(&chars.as_str().to_lowercase());
                }
            }
            TokenCase::Verbatim => out.push_str(token),
        }
    }
}

/// How a token sequence is turned back into one string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinPolicy {
    /// Placed between consecutive tokens, never before the first or after the last.
    pub separator: &'static str,
    /// Rule for the token at index 0.
    pub first: TokenCase,
    /// Rule for every later token.
    pub rest: TokenCase,
}

impl JoinPolicy {
    pub const fn new(separator: &'static str, first: TokenCase, rest: TokenCase) -> Self {
        Self {
            separator,
            first,
            rest,
        }
    }
}

/// Join `tokens` according to `policy`. An empty sequence yields an empty string.
pub fn join<'a, I>(tokens: I, policy: &JoinPolicy) -> String
where
    I: IntoIterator<Item = WordToken<'a>>,
{
    let mut out = String::new();

    for (i, token) in tokens.into_iter().enumerate() {
        if i == 0 {
            policy.first.write(token.text(), &mut out);
        } else {
            out.push_str(policy.separator);
            policy.rest.write(token.text(), &mut out);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::tokenizer::tokenize;

    const TITLE: JoinPolicy = JoinPolicy::new(" ", TokenCase::Capitalize, TokenCase::Capitalize);
    const RAW: JoinPolicy = JoinPolicy::new(".", TokenCase::Verbatim, TokenCase::Verbatim);

    #[test]
    fn test_separator_only_between_tokens() {
        assert_eq!(join(tokenize("one two three"), &RAW), "one.two.three");
        assert_eq!(join(tokenize("single"), &RAW), "single");
    }

    #[test]
    fn test_capitalize_is_per_token() {
        assert_eq!(join(tokenize("hELLO wORLD"), &TITLE), "Hello World");
    }

    #[test]
    fn test_first_and_rest_rules_differ() {
        let policy = JoinPolicy::new("", TokenCase::Upper, TokenCase::Lower);
        assert_eq!(join(tokenize("ab CD ef"), &policy), "ABcdef");
    }

    #[test]
    fn test_verbatim_keeps_case() {
        assert_eq!(join(tokenize("FooBar baz"), &RAW), "FooBar.baz");
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(join(tokenize(""), &TITLE), "");
        assert_eq!(join(tokenize("--- ***"), &RAW), "");
    }

    #[test]
    fn test_full_unicode_case_mapping() {
        let upper = JoinPolicy::new("-", TokenCase::Upper, TokenCase::Upper);
        assert_eq!(join(tokenize("straße"), &upper), "STRASSE");
        let lower = JoinPolicy::new("", TokenCase::Lower, TokenCase::Lower);
        assert_eq!(join(tokenize("ΟΔΟΣ"), &lower), "οδος");
    }

    #[test]
    fn test_capitalize_digit_token() {
        assert_eq!(join(tokenize("a 1b"), &TITLE), "A 1 B");
    }
}
