use anyhow::{Context, Result};
use std::fs;
use std::io::BufRead;
use std::path::PathBuf;

/// Where the strings to transform come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Literal arguments from the command line.
    Args(Vec<String>),
    /// Every line of every file, in order.
    Files(Vec<PathBuf>),
    /// Every line of standard input.
    Stdin,
}

impl InputSource {
    /// Arguments win over files; with neither, read stdin.
    pub fn select(texts: Vec<String>, files: Vec<PathBuf>) -> Self {
        if !texts.is_empty() {
            InputSource::Args(texts)
        } else if !files.is_empty() {
            InputSource::Files(files)
        } else {
            InputSource::Stdin
        }
    }

    pub fn read(self) -> Result<Vec<String>> {
        match self {
            InputSource::Args(texts) => Ok(texts),
            InputSource::Files(files) => {
                let mut lines = Vec::new();
                for path in files {
                    let content = fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read file: {}", path.display()))?;
                    log::debug!("read {} bytes from {}", content.len(), path.display());
                    lines.extend(content.lines().map(str::to_string));
                }
                Ok(lines)
            }
            InputSource::Stdin => read_lines(std::io::stdin().lock()),
        }
    }
}

pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    reader
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to read input")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_select_prefers_args() {
        let source = InputSource::select(vec!["a".to_string()], vec![PathBuf::from("f.txt")]);
        assert_eq!(source, InputSource::Args(vec!["a".to_string()]));
        assert_eq!(
            InputSource::select(Vec::new(), vec![PathBuf::from("f.txt")]),
            InputSource::Files(vec![PathBuf::from("f.txt")])
        );
        assert_eq!(InputSource::select(Vec::new(), Vec::new()), InputSource::Stdin);
    }

    #[test]
    fn test_read_files_in_order() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("one.txt");
        let second = dir.path().join("two.txt");
        fs::write(&first, "alpha\nbeta\n").unwrap();
        fs::write(&second, "gamma").unwrap();

        let lines = InputSource::Files(vec![first, second]).read().unwrap();
        assert_eq!(lines, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = InputSource::Files(vec![PathBuf::from("/nonexistent/input.txt")])
            .read()
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/input.txt"));
    }

    #[test]
    fn test_read_lines() {
        let lines = read_lines(Cursor::new("one\r\ntwo\n\nthree")).unwrap();
        assert_eq!(lines, vec!["one", "two", "", "three"]);
    }
}
