use thiserror::Error;

/// Errors raised when parsing user-supplied names into strkit's enums.
///
/// The text operations themselves are total and never fail; only the edges
/// that turn strings into [`CaseStyle`](crate::CaseStyle),
/// [`PadPosition`](crate::PadPosition) or an output format can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown case style '{0}' (expected camel, kebab, upper-kebab, snake or upper-snake)")]
    UnknownCaseStyle(String),

    #[error("unknown pad position '{0}' (expected start, end or both)")]
    UnknownPadPosition(String),

    #[error("unknown output format '{0}' (expected text or json)")]
    UnknownOutputFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_input() {
        let err = Error::UnknownCaseStyle("pascal".to_string());
        assert!(err.to_string().contains("'pascal'"));

        let err = Error::UnknownPadPosition("middle".to_string());
        assert_eq!(
            err.to_string(),
            "unknown pad position 'middle' (expected start, end or both)"
        );
    }
}
