// Positional padding.
//
// All lengths in this module (the source, the target size and the pattern)
// are measured in `char`s, i.e. Unicode scalar values, never bytes.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where padding is inserted relative to the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PadPosition {
    Start,
    End,
    /// Split the padding, with the odd char going to the end.
    #[default]
    Both,
}

impl FromStr for PadPosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "start" | "left" => Ok(PadPosition::Start),
            "end" | "right" => Ok(PadPosition::End),
            "both" => Ok(PadPosition::Both),
            _ => Err(Error::UnknownPadPosition(s.to_string())),
        }
    }
}

impl fmt::Display for PadPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PadPosition::Start => write!(f, "start"),
            PadPosition::End => write!(f, "end"),
            PadPosition::Both => write!(f, "both"),
        }
    }
}

/// Pad `source` to `size` chars by cycling `pattern`, truncating the last
/// repetition so the result is exactly `size` chars long.
///
/// Returns `source` unchanged if it is already at least `size` chars long or
/// if `pattern` is empty.
pub fn pad_at(source: &str, size: usize, pattern: &str, position: PadPosition) -> String {
    let len = source.chars().count();
    if len >= size || pattern.is_empty() {
        return source.to_string();
    }

    let need = size - len;
    let (left, right) = match position {
        PadPosition::Start => (need, 0),
        PadPosition::End => (0, need),
        PadPosition::Both => (need / 2, need - need / 2),
    };

    let mut padded = String::with_capacity(source.len().saturating_add(need));
    padded.extend(pattern.chars().cycle().take(left));
    padded.push_str(source);
    padded.extend(pattern.chars().cycle().take(right));
    padded
}

/// Pad on both sides. The left side gets `need / 2` chars, the right side the rest.
///
/// ```
/// assert_eq!(strkit::pad("ab", 10, "xyz"), "xyzxabxyzx");
/// ```
pub fn pad(source: &str, size: usize, pattern: &str) -> String {
    pad_at(source, size, pattern, PadPosition::Both)
}

/// Pad on the left side only.
pub fn pad_start(source: &str, size: usize, pattern: &str) -> String {
    pad_at(source, size, pattern, PadPosition::Start)
}

/// Pad on the right side only.
pub fn pad_end(source: &str, size: usize, pattern: &str) -> String {
    pad_at(source, size, pattern, PadPosition::End)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_both_truncates_pattern() {
        assert_eq!(pad("ab", 10, "xyz"), "xyzxabxyzx");
        assert_eq!(pad("abc", 8, "ab"), "ababcaba");
    }

    #[test]
    fn test_pad_both_odd_need_goes_right() {
        assert_eq!(pad("a", 2, "*"), "a*");
        assert_eq!(pad("a", 4, "-"), "-a--");
    }

    #[test]
    fn test_pad_start_and_end() {
        assert_eq!(pad_start("5", 3, "0"), "005");
        assert_eq!(pad_start("abc", 10, "12"), "1212121abc");
        assert_eq!(pad_end("abc", 10, "12"), "abc1212121");
    }

    #[test]
    fn test_no_op_cases() {
        assert_eq!(pad_start("abcdef", 3, "0"), "abcdef");
        assert_eq!(pad_end("abc", 3, "0"), "abc");
        assert_eq!(pad("abc", 0, "0"), "abc");
        assert_eq!(pad("abc", 10, ""), "abc");
    }

    #[test]
    fn test_boundary_one_short() {
        assert_eq!(pad_start("abc", 4, "xyz"), "xabc");
        assert_eq!(pad_end("abc", 4, "xyz"), "abcx");
        assert_eq!(pad("abc", 4, "xyz"), "abcx");
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(pad("", 5, "ab"), "ababa");
        assert_eq!(pad_start("", 3, "ab"), "aba");
    }

    #[test]
    fn test_lengths_are_counted_in_chars() {
        // "日本" is two chars but six bytes
        assert_eq!(pad_start("日本", 4, "·"), "··日本");
        assert_eq!(pad_end("😄", 3, "é"), "😄éé");
        assert_eq!(pad("ab", 7, "→←"), "→←ab→←→");
        assert_eq!(pad_start("日本語", 3, "x"), "日本語");
    }

    #[test]
    fn test_long_multibyte_padding() {
        let padded = pad_end("a", 1000, "é日");
        assert_eq!(padded.chars().count(), 1000);
        assert!(padded.starts_with("aé日é"));
        assert!(padded.ends_with("日é"));
    }

    #[test]
    fn test_position_from_str() {
        assert_eq!("start".parse::<PadPosition>().unwrap(), PadPosition::Start);
        assert_eq!("Right".parse::<PadPosition>().unwrap(), PadPosition::End);
        assert_eq!("both".parse::<PadPosition>().unwrap(), PadPosition::Both);
        assert!("middle".parse::<PadPosition>().is_err());
    }
}
