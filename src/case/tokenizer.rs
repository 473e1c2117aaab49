// Character-class tokenizer shared by every case style.
//
// Unlike the natural word splitter in `crate::words`, a token here is any
// maximal run of letters or of digits. Case changes inside a run are not
// boundaries, so "FooBar" stays a single token.

use std::iter::{FusedIterator, Peekable};
use std::str::CharIndices;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Letter,
    Digit,
    Other,
}

/// Classify a code point using the Unicode `Alphabetic` and numeric properties.
pub fn classify(c: char) -> CharClass {
    if c.is_alphabetic() {
        CharClass::Letter
    } else if c.is_numeric() {
        CharClass::Digit
    } else {
        CharClass::Other
    }
}

/// A maximal run of letters or digits, borrowed from the source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordToken<'a> {
    text: &'a str,
    class: CharClass,
}

impl<'a> WordToken<'a> {
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Either [`CharClass::Letter`] or [`CharClass::Digit`], never `Other`.
    pub fn class(&self) -> CharClass {
        self.class
    }
}

/// Lazy iterator over the tokens of a string. See [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Tokens<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = WordToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        // Other code points are separators and never part of a token
        let (start, class) = loop {
            let (idx, ch) = self.chars.next()?;
            let class = classify(ch);
            if class != CharClass::Other {
                break (idx, class);
            }
        };

        let mut end = self.source.len();
        while let Some(&(idx, ch)) = self.chars.peek() {
            if classify(ch) != class {
                end = idx;
                break;
            }
            self.chars.next();
        }

        Some(WordToken {
            text: &self.source[start..end],
            class,
        })
    }
}

impl FusedIterator for Tokens<'_> {}

/// Split `s` into letter runs and digit runs, discarding everything else.
///
/// Concatenating the returned tokens gives back exactly the letters and
/// digits of `s` in their original order.
pub fn tokenize(s: &str) -> Vec<WordToken<'_>> {
    Tokens::new(s).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(s: &str) -> Vec<&str> {
        tokenize(s).iter().map(|t| t.text()).collect()
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify('a'), CharClass::Letter);
        assert_eq!(classify('Ж'), CharClass::Letter);
        assert_eq!(classify('你'), CharClass::Letter);
        assert_eq!(classify('7'), CharClass::Digit);
        assert_eq!(classify('٣'), CharClass::Digit); // Arabic-Indic three
        assert_eq!(classify('-'), CharClass::Other);
        assert_eq!(classify(' '), CharClass::Other);
        assert_eq!(classify('😄'), CharClass::Other);
    }

    // Digit covers every numeric category, not only decimal digits. Letter
    // numbers such as Roman numerals are Alphabetic and so classify as Letter.
    #[test]
    fn test_classify_non_decimal_numbers() {
        assert_eq!(classify('²'), CharClass::Digit);
        assert_eq!(classify('½'), CharClass::Digit);
        assert_eq!(classify('Ⅻ'), CharClass::Letter);
        assert_eq!(texts("m²"), vec!["m", "²"]);
    }

    #[test]
    fn test_letter_digit_boundaries() {
        assert_eq!(texts("1bar"), vec!["1", "bar"]);
        assert_eq!(texts("bar1"), vec!["bar", "1"]);
        assert_eq!(texts("a1b2"), vec!["a", "1", "b", "2"]);
    }

    #[test]
    fn test_token_classes() {
        let tokens = tokenize("abc123");
        assert_eq!(tokens[0].class(), CharClass::Letter);
        assert_eq!(tokens[1].class(), CharClass::Digit);
    }

    #[test]
    fn test_case_change_is_not_a_boundary() {
        assert_eq!(texts("FooBar"), vec!["FooBar"]);
        assert_eq!(texts("XMLHttpRequest"), vec!["XMLHttpRequest"]);
    }

    #[test]
    fn test_separators_are_dropped() {
        assert_eq!(texts("Foo-#1😄$_%^&*(1bar"), vec!["Foo", "1", "1", "bar"]);
        assert_eq!(texts("don't-stop"), vec!["don", "t", "stop"]);
        assert_eq!(texts("  leading and trailing  "), vec!["leading", "and", "trailing"]);
    }

    #[test]
    fn test_empty_and_separator_only_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("-_ #$😄").is_empty());
    }

    #[test]
    fn test_mixed_scripts() {
        assert_eq!(texts("héllo мир 你好123"), vec!["héllo", "мир", "你好", "123"]);
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut tokens = Tokens::new("a");
        assert!(tokens.next().is_some());
        assert!(tokens.next().is_none());
        assert!(tokens.next().is_none());
    }
}
