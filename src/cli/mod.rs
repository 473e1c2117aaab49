pub mod input;
pub mod output;

use crate::{CaseStyle, PadPosition};
use output::{Outcome, Record, Report};

/// One library operation with its arguments bound, ready to apply to each input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Case(CaseStyle),
    Words,
    WordCount,
    Pad {
        size: usize,
        pattern: String,
        position: PadPosition,
    },
    Split {
        separator: String,
        remove_empty: bool,
    },
    Before(String),
    BeforeLast(String),
    After(String),
    AfterLast(String),
    Wrap(String),
    Unwrap(String),
    Capitalize,
    UpperFirst,
    LowerFirst,
    Reverse {
        graphemes: bool,
    },
}

impl Operation {
    pub fn name(&self) -> String {
        match self {
            Operation::Case(style) => format!("case:{}", style),
            Operation::Words => "words".to_string(),
            Operation::WordCount => "word-count".to_string(),
            Operation::Pad { position, .. } => format!("pad:{}", position),
            Operation::Split { .. } => "split".to_string(),
            Operation::Before(_) => "before".to_string(),
            Operation::BeforeLast(_) => "before-last".to_string(),
            Operation::After(_) => "after".to_string(),
            Operation::AfterLast(_) => "after-last".to_string(),
            Operation::Wrap(_) => "wrap".to_string(),
            Operation::Unwrap(_) => "unwrap".to_string(),
            Operation::Capitalize => "capitalize".to_string(),
            Operation::UpperFirst => "upper-first".to_string(),
            Operation::LowerFirst => "lower-first".to_string(),
            Operation::Reverse { graphemes: false } => "reverse".to_string(),
            Operation::Reverse { graphemes: true } => "reverse-graphemes".to_string(),
        }
    }

    pub fn apply(&self, input: &str) -> Outcome {
        match self {
            Operation::Case(style) => Outcome::Text(style.convert(input)),
            Operation::Words => Outcome::List(owned(crate::split_words(input))),
            Operation::WordCount => Outcome::Count(crate::word_count(input)),
            Operation::Pad {
                size,
                pattern,
                position,
            } => Outcome::Text(crate::pad_at(input, *size, pattern, *position)),
            Operation::Split {
                separator,
                remove_empty,
            } => Outcome::List(owned(crate::split_ex(input, separator, *remove_empty))),
            Operation::Before(delim) => Outcome::Text(crate::before(input, delim).to_string()),
            Operation::BeforeLast(delim) => {
                Outcome::Text(crate::before_last(input, delim).to_string())
            }
            Operation::After(delim) => Outcome::Text(crate::after(input, delim).to_string()),
            Operation::AfterLast(delim) => {
                Outcome::Text(crate::after_last(input, delim).to_string())
            }
            Operation::Wrap(token) => Outcome::Text(crate::wrap(input, token)),
            Operation::Unwrap(token) => Outcome::Text(crate::unwrap(input, token).to_string()),
            Operation::Capitalize => Outcome::Text(crate::capitalize(input)),
            Operation::UpperFirst => Outcome::Text(crate::upper_first(input)),
            Operation::LowerFirst => Outcome::Text(crate::lower_first(input)),
            Operation::Reverse { graphemes: false } => Outcome::Text(crate::reverse(input)),
            Operation::Reverse { graphemes: true } => {
                Outcome::Text(crate::reverse_graphemes(input))
            }
        }
    }
}

fn owned(items: Vec<&str>) -> Vec<String> {
    items.into_iter().map(str::to_string).collect()
}

/// Apply `operation` to every input, in order.
pub fn run(operation: &Operation, inputs: &[String]) -> Report {
    log::info!("running {} over {} inputs", operation.name(), inputs.len());

    let results = inputs
        .iter()
        .map(|input| Record {
            input: input.clone(),
            output: operation.apply(input),
        })
        .collect();

    Report {
        operation: operation.name(),
        results,
    }
}
