// Natural-language word splitting.
//
// A word is a run of letters that may continue through `'` and `-`, so
// "don't" and "well-known" each count once. Digits are never part of a word.
// The case tokenizer in `crate::case` uses different boundaries.

use crate::case::tokenizer::{classify, CharClass};
use std::iter::{FusedIterator, Peekable};
use std::str::CharIndices;

fn is_letter(c: char) -> bool {
    classify(c) == CharClass::Letter
}

fn continues_word(c: char) -> bool {
    is_letter(c) || c == '\'' || c == '-'
}

/// Lazy iterator over the natural words of a string.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Words<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        // Only a letter opens a word; a leading ' or - is skipped like any separator
        let start = loop {
            let (idx, ch) = self.chars.next()?;
            if is_letter(ch) {
                break idx;
            }
        };

        let mut end = self.source.len();
        while let Some(&(idx, ch)) = self.chars.peek() {
            if !continues_word(ch) {
                end = idx;
                break;
            }
            self.chars.next();
        }

        Some(&self.source[start..end])
    }
}

impl FusedIterator for Words<'_> {}

/// Split `s` into natural words.
///
/// ```
/// assert_eq!(strkit::split_words("don't-stop me now"), vec!["don't-stop", "me", "now"]);
/// ```
pub fn split_words(s: &str) -> Vec<&str> {
    Words::new(s).collect()
}

/// Number of natural words in `s`; always equal to `split_words(s).len()`.
pub fn word_count(s: &str) -> usize {
    Words::new(s).count()
}
