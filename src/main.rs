use anyhow::Result;
use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use strkit::cli::input::InputSource;
use strkit::cli::output::{print_report, OutputFormat};
use strkit::cli::{self, Operation};
use strkit::{CaseStyle, Config, PadPosition};

#[derive(Parser, Debug)]
#[command(name = "strkit")]
#[command(version, about = "Unicode-aware case conversion, word splitting and padding", long_about = None)]
struct Cli {
    /// Output format (text, json)
    #[arg(short = 'o', long, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Configuration file, applied on top of the global and local ones
    #[arg(long, global = true, value_name = "PATH", env = "STRKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Strings to transform; read from --input files or stdin when omitted
    #[arg(value_name = "TEXT")]
    texts: Vec<String>,

    /// Read input lines from a file (repeatable)
    #[arg(short, long = "input", value_name = "FILE")]
    inputs: Vec<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert to a case style (camel, kebab, upper-kebab, snake, upper-snake)
    Case {
        /// Target style; defaults to the configured one
        #[arg(short, long)]
        style: Option<CaseStyle>,
        #[command(flatten)]
        input: InputArgs,
    },
    /// List the natural words of each input
    Words {
        /// Print the number of words instead
        #[arg(short, long)]
        count: bool,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Pad each input to SIZE chars
    Pad {
        size: usize,
        /// Pattern cycled to fill the padding
        #[arg(short, long, allow_hyphen_values = true)]
        pattern: Option<String>,
        /// Where to pad (start, end, both)
        #[arg(long)]
        position: Option<PadPosition>,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Split each input on SEP
    Split {
        #[arg(allow_hyphen_values = true)]
        sep: String,
        /// Drop empty segments
        #[arg(short, long, overrides_with = "keep_empty")]
        remove_empty: bool,
        /// Keep empty segments, even if the configuration removes them
        #[arg(short, long, overrides_with = "remove_empty")]
        keep_empty: bool,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Text before the first occurrence of DELIM
    Before {
        #[arg(allow_hyphen_values = true)]
        delim: String,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Text before the last occurrence of DELIM
    BeforeLast {
        #[arg(allow_hyphen_values = true)]
        delim: String,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Text after the first occurrence of DELIM
    After {
        #[arg(allow_hyphen_values = true)]
        delim: String,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Text after the last occurrence of DELIM
    AfterLast {
        #[arg(allow_hyphen_values = true)]
        delim: String,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Surround each input with TOKEN
    Wrap {
        #[arg(allow_hyphen_values = true)]
        token: String,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Strip a leading and trailing TOKEN
    Unwrap {
        #[arg(allow_hyphen_values = true)]
        token: String,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Uppercase the first char and lowercase the rest
    Capitalize {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Uppercase the first char
    UpperFirst {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Lowercase the first char
    LowerFirst {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Reverse each input
    Reverse {
        /// Reverse grapheme clusters instead of code points
        #[arg(short, long)]
        graphemes: bool,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the global configuration file path
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "strkit", &mut io::stdout());
        return Ok(());
    }

    let Some(command) = cli.command else {
        anyhow::bail!("No command specified. Use --help for usage information.");
    };

    let config = Config::load(cli.config.as_deref())?;
    log::debug!("effective config: {:?}", config);

    let (operation, input) = match resolve(command, &config) {
        Action::Transform(operation, input) => (operation, input),
        Action::Config(action) => return handle_config(action, &config),
    };

    let inputs = InputSource::select(input.texts, input.inputs).read()?;
    let report = cli::run(&operation, &inputs);

    let format = cli.format.unwrap_or(config.format);
    let use_color = config.color && !cli.no_color && io::stdout().is_terminal();
    if !use_color {
        colored::control::set_override(false);
    }

    print_report(&report, format, use_color)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

enum Action {
    Transform(Operation, InputArgs),
    Config(ConfigCommands),
}

/// Bind a subcommand's arguments, filling gaps from the configuration.
fn resolve(command: Commands, config: &Config) -> Action {
    let (operation, input) = match command {
        Commands::Case { style, input } => (
            Operation::Case(style.unwrap_or(config.default_style)),
            input,
        ),
        Commands::Words { count, input } => {
            let operation = if count {
                Operation::WordCount
            } else {
                Operation::Words
            };
            (operation, input)
        }
        Commands::Pad {
            size,
            pattern,
            position,
            input,
        } => (
            Operation::Pad {
                size,
                pattern: pattern.unwrap_or_else(|| config.pad_pattern.clone()),
                position: position.unwrap_or(config.pad_position),
            },
            input,
        ),
        Commands::Split {
            sep,
            remove_empty,
            keep_empty,
            input,
        } => (
            Operation::Split {
                separator: sep,
                remove_empty: flag_choice(remove_empty, keep_empty)
                    .unwrap_or(config.remove_empty),
            },
            input,
        ),
        Commands::Before { delim, input } => (Operation::Before(delim), input),
        Commands::BeforeLast { delim, input } => (Operation::BeforeLast(delim), input),
        Commands::After { delim, input } => (Operation::After(delim), input),
        Commands::AfterLast { delim, input } => (Operation::AfterLast(delim), input),
        Commands::Wrap { token, input } => (Operation::Wrap(token), input),
        Commands::Unwrap { token, input } => (Operation::Unwrap(token), input),
        Commands::Capitalize { input } => (Operation::Capitalize, input),
        Commands::UpperFirst { input } => (Operation::UpperFirst, input),
        Commands::LowerFirst { input } => (Operation::LowerFirst, input),
        Commands::Reverse { graphemes, input } => (Operation::Reverse { graphemes }, input),
        Commands::Config { action } => return Action::Config(action),
    };
    Action::Transform(operation, input)
}

/// Resolve an on/off flag pair; `None` when neither was given.
fn flag_choice(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn handle_config(action: ConfigCommands, config: &Config) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            print!("{}", config.to_toml()?);
        }
        ConfigCommands::Path => match Config::global_config_path() {
            Some(path) => println!("{}", path.display()),
            None => anyhow::bail!("Could not determine the configuration directory"),
        },
    }
    Ok(())
}
