//! Sign-up form validation CLI.
//!
//! Checks single values against the fixed field rules, or replays a recorded
//! sequence of UI events and prints what the form would show.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use formgate::core::engine::ValidationEngine;
use formgate::core::rules::EMPTY_MESSAGE;
use formgate::core::types::{FieldKind, FieldState, SubmitOutcome};
use formgate::exit_codes;
use formgate::io::config::{FormConfig, write_config};
use formgate::logging;
use formgate::replay::replay_from_paths;

#[derive(Parser)]
#[command(
    name = "formgate",
    version,
    about = "Interactive sign-up form validation"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate one value as if the field had been touched.
    Check {
        /// Field name: name, email, password or confirm-password.
        #[arg(value_parser = parse_field)]
        field: FieldKind,
        value: String,
        /// Current password, compared against confirm-password values.
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Replay an event script and print the resulting form.
    Replay {
        /// Script file (`.json` or `.toml`).
        script: PathBuf,
        /// Display config; defaults apply if the file is missing.
        #[arg(long, default_value = "formgate.toml")]
        config: PathBuf,
        /// Print the final state as JSON instead of a transcript.
        #[arg(long)]
        json: bool,
    },
    /// List the field rules and their messages.
    Rules,
    /// Write a default config file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
        #[arg(default_value = "formgate.toml")]
        path: PathBuf,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Check {
            field,
            value,
            password,
        } => Ok(cmd_check(field, value, &password)),
        Command::Replay {
            script,
            config,
            json,
        } => cmd_replay(&script, &config, json),
        Command::Rules => {
            cmd_rules();
            Ok(exit_codes::OK)
        }
        Command::InitConfig { force, path } => {
            cmd_init_config(&path, force)?;
            Ok(exit_codes::OK)
        }
    }
}

fn parse_field(raw: &str) -> Result<FieldKind, String> {
    FieldKind::from_label(raw).ok_or_else(|| {
        let labels: Vec<&str> = FieldKind::ALL.iter().map(|kind| kind.label()).collect();
        format!("unknown field '{}' (expected one of: {})", raw, labels.join(", "))
    })
}

fn cmd_check(field: FieldKind, value: String, password: &str) -> i32 {
    let state = FieldState {
        kind: field,
        value,
        touched: true,
    };
    let verdict = ValidationEngine::new().validate_field(&state, password);
    match verdict.message {
        Some(message) if !verdict.valid => {
            println!("{}", message);
            exit_codes::REJECTED
        }
        _ => {
            println!("ok");
            exit_codes::OK
        }
    }
}

fn cmd_replay(script: &Path, config: &Path, json: bool) -> Result<i32> {
    let (outcome, cfg) = replay_from_paths(script, config)?;
    if json {
        let payload = serde_json::to_string_pretty(&outcome).context("serialize replay outcome")?;
        println!("{}", payload);
    } else {
        print!("{}", outcome.surface.render(&cfg.display));
    }
    let code = match outcome.last_submit {
        Some(SubmitOutcome::Rejected) => exit_codes::REJECTED,
        _ => exit_codes::OK,
    };
    Ok(code)
}

fn cmd_rules() {
    let engine = ValidationEngine::new();
    println!("(all): {}", EMPTY_MESSAGE);
    for rule in engine.rules().iter() {
        println!("{}: {}", rule.kind.label(), rule.message);
    }
}

fn cmd_init_config(path: &Path, force: bool) -> Result<()> {
    if !force && path.exists() {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    write_config(path, &FormConfig::default()).with_context(|| format!("init {}", path.display()))
}
