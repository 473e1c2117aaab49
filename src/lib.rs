// Every text operation is a pure, total function. Degenerate input (an empty
// source, delimiter or pattern) produces a defined fallback value instead of
// an error.

pub mod case;
pub mod cli;
pub mod config;
pub mod error;
pub mod pad;
pub mod split;
pub mod transform;
pub mod words;

pub use case::joiner::{join, JoinPolicy, TokenCase};
pub use case::tokenizer::{classify, tokenize, CharClass, Tokens, WordToken};
pub use case::{
    convert_case, convert_with, to_camel_case, to_kebab_case, to_snake_case,
    to_upper_kebab_case, to_upper_snake_case, CaseStyle,
};
pub use config::Config;
pub use error::{Error, Result};
pub use pad::{pad, pad_at, pad_end, pad_start, PadPosition};
pub use split::{after, after_last, before, before_last, split_ex};
pub use transform::{
    capitalize, lower_first, reverse, reverse_graphemes, unwrap, upper_first, wrap,
};
pub use words::{split_words, word_count, Words};
