use crate::Error;
use anyhow::{Context, Result};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::UnknownOutputFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Result of applying one operation to one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outcome {
    Text(String),
    List(Vec<String>),
    Count(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub input: String,
    pub output: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub operation: String,
    pub results: Vec<Record>,
}

pub fn print_report(report: &Report, format: OutputFormat, colored_output: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, report, format, colored_output)?;
    out.flush().context("Failed to flush output")
}

pub fn write_report<W: Write>(
    out: &mut W,
    report: &Report,
    format: OutputFormat,
    colored_output: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, report, colored_output),
        OutputFormat::Json => write_json(out, report),
    }
    .context("Failed to write output")
}

fn write_text<W: Write>(out: &mut W, report: &Report, colored_output: bool) -> Result<()> {
    let last = report.results.len().saturating_sub(1);
    for (idx, record) in report.results.iter().enumerate() {
        match &record.output {
            Outcome::Text(text) => writeln!(out, "{}", text)?,
            Outcome::Count(count) => {
                if colored_output {
                    writeln!(out, "{}", count.to_string().bold())?;
                } else {
                    writeln!(out, "{}", count)?;
                }
            }
            Outcome::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if colored_output {
                        writeln!(out, "{} {}", format!("{:>3}", i).dimmed(), item)?;
                    } else {
                        writeln!(out, "{}", item)?;
                    }
                }
                // blank line between lists of consecutive inputs
                if idx < last {
                    writeln!(out)?;
                }
            }
        }
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report).context("Failed to serialize report")?;
    writeln!(out)?;
    Ok(())
}
