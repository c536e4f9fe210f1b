// SPDX-FileCopyrightText: 2025 The textwarp authors
// SPDX-License-Identifier: GPL-3.0-or-later
//! Textwarp CLI - transform text from a file or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use similar::TextDiff;
use textwarp::replacement::{replace, replace_case, replace_regex};
use textwarp::{Command, CommandKind, Config, Options, warp_pipeline};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Transform text with context-aware casing, contraction expansion,
/// encodings and analysis.
#[derive(Parser, Debug)]
#[command(name = "textwarp")]
#[command(version, about, long_about = None)]
struct Args {
    /// Commands to apply in order (see --list).
    #[arg(value_name = "COMMAND")]
    commands: Vec<String>,

    /// Read input from a file.
    #[arg(short, long, value_name = "FILE", conflicts_with = "stdin")]
    file: Option<PathBuf>,

    /// Read input from stdin (the default when no file is given).
    #[arg(long)]
    stdin: bool,

    /// Path to a configuration file. By default .textwarp.toml is looked
    /// up from the current directory upwards.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Reading speed for time-to-read.
    #[arg(long, value_name = "N")]
    wpm: Option<u32>,

    /// Number of words listed by mfws.
    #[arg(long, value_name = "N")]
    mfw: Option<usize>,

    /// Replace every occurrence of FIND with WITH.
    #[arg(long, num_args = 2, value_names = ["FIND", "WITH"])]
    replace: Option<Vec<String>>,

    /// Replace every match of PATTERN with WITH ($1 refers to a group).
    #[arg(long, num_args = 2, value_names = ["PATTERN", "WITH"])]
    replace_regex: Option<Vec<String>>,

    /// Rewrite words written in case FROM into case TO.
    #[arg(long, num_args = 2, value_names = ["FROM", "TO"])]
    replace_case: Option<Vec<String>>,

    /// Print a unified diff of input and output instead of the output.
    #[arg(long)]
    diff: bool,

    /// List the available commands and exit.
    #[arg(long)]
    list: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.list {
        for command in Command::ALL {
            println!("{:<22}{}", command.name(), command.description());
        }
        return ExitCode::SUCCESS;
    }

    let options = match load_options(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            return ExitCode::FAILURE;
        }
    };

    let commands = match args
        .commands
        .iter()
        .map(|name| name.parse::<Command>())
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(commands) => commands,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let replacing =
        args.replace.is_some() || args.replace_regex.is_some() || args.replace_case.is_some();
    if commands.is_empty() && !replacing {
        eprintln!("Error: no command given (see --list)");
        return ExitCode::FAILURE;
    }

    let input = match read_input(&args) {
        Ok(input) => input,
        Err(message) => {
            eprintln!("Error: {}", message);
            return ExitCode::FAILURE;
        }
    };

    let pipeline = match warp_pipeline(&input, &commands, &options) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let output = match apply_replacements(pipeline.text, &args) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let rewrites_text = replacing || commands.iter().any(|c| c.kind() == CommandKind::Text);
    if args.diff {
        let diff = TextDiff::from_lines(input.as_str(), output.as_str());
        print!("{}", diff.unified_diff().header("input", "output"));
    } else if rewrites_text {
        print!("{}", output);
        if !output.is_empty() && !output.ends_with('\n') {
            println!();
        }
    }

    for (command, analysis) in &pipeline.analyses {
        debug!(%command, "printing analysis");
        println!("{}", analysis);
    }

    ExitCode::SUCCESS
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env("TEXTWARP_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Builds options from the configuration file, then applies flag overrides.
fn load_options(args: &Args) -> Result<Options, String> {
    let config = match &args.config {
        Some(path) => {
            let config = Config::from_file(path).map_err(|e| e.to_string())?;
            info!(path = %path.display(), "loaded configuration");
            config
        }
        None => {
            let cwd = std::env::current_dir()
                .map_err(|e| format!("cannot read current directory: {}", e))?;
            match Config::discover(&cwd).map_err(|e| e.to_string())? {
                Some((path, config)) => {
                    info!(path = %path.display(), "discovered configuration");
                    config
                }
                None => Config::default(),
            }
        }
    };

    let mut options = Options::from(&config);
    if let Some(wpm) = args.wpm {
        options.words_per_minute = wpm;
    }
    if let Some(mfw) = args.mfw {
        options.most_frequent_words = mfw;
    }
    Ok(options)
}

fn read_input(args: &Args) -> Result<String, String> {
    match &args.file {
        Some(file) if !args.stdin => fs::read_to_string(file)
            .map_err(|e| format!("cannot read {}: {}", file.display(), e)),
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .map_err(|e| format!("cannot read stdin: {}", e))?;
            Ok(input)
        }
    }
}

/// Runs the replacement flags, in the order substring, regex, case.
fn apply_replacements(text: String, args: &Args) -> Result<String, textwarp::WarpError> {
    let mut text = text;
    if let Some([find, with]) = args.replace.as_deref() {
        text = replace(&text, find, with)?;
    }
    if let Some([pattern, with]) = args.replace_regex.as_deref() {
        text = replace_regex(&text, pattern, with)?;
    }
    if let Some([from, to]) = args.replace_case.as_deref() {
        text = replace_case(&text, from, to)?;
    }
    Ok(text)
}
