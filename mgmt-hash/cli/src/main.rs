//! CLI for generating Pexip management node password hashes.
//!
//! ## Usage
//!
//! ```bash
//! # Prompt for both passwords (masked, with confirmation)
//! mgmt-hash
//!
//! # Non-interactive
//! mgmt-hash --web-password "web-secret" --admin-password "admin-secret"
//!
//! # Machine-readable output
//! mgmt-hash --json
//! mgmt-hash --tfvars >> terraform.tfvars
//!
//! # Generate shell completions
//! source <(COMPLETE=bash mgmt-hash)
//! ```

mod output;
mod prompt;

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::Shell;
use inquire::InquireError;
use mgmt_hash::{GenerateError, PasswordRole, generate};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::output::{OutputFormat, render};
use crate::prompt::prompt_password;

/// Generate Pexip management node password hashes
#[derive(Parser)]
#[command(name = "mgmt-hash", version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Web interface password (hashed with PBKDF2-SHA256)
    #[arg(long, value_name = "PASSWORD")]
    web_password: Option<String>,

    /// OS admin password (hashed with SHA-512 crypt)
    #[arg(long, value_name = "PASSWORD")]
    admin_password: Option<String>,

    /// Output in JSON format
    #[arg(long, conflicts_with = "tfvars")]
    json: bool,

    /// Output in Terraform tfvars format
    #[arg(long, conflicts_with = "json")]
    tfvars: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

const AFTER_HELP: &str = "\
INTERACTIVE MODE:
  When --web-password or --admin-password is omitted and stdin is a terminal,
  each missing password is prompted for (masked) and must be entered twice.
  Passwords must be at least 4 characters long.

SHELL COMPLETIONS:
  Bash (~/.bashrc):
    source <(COMPLETE=bash mgmt-hash)

  Zsh (~/.zshrc):
    source <(COMPLETE=zsh mgmt-hash)

  Fish (~/.config/fish/config.fish):
    COMPLETE=fish mgmt-hash | source

EXAMPLES:
  mgmt-hash                                        # Prompt for both passwords
  mgmt-hash --web-password w3b! --admin-password adm1n!
  mgmt-hash --json                                 # {\"web_hash\": ..., \"admin_hash\": ...}
  mgmt-hash --tfvars >> terraform.tfvars           # Terraform variables
";

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("--{flag} is required when stdin is not a terminal")]
    MissingPassword { flag: &'static str },

    #[error("password entry cancelled")]
    Cancelled,

    #[error("failed to read {role}: {source}")]
    Prompt {
        role: PasswordRole,
        #[source]
        source: InquireError,
    },

    #[error("failed to render JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    // Check for shell completion generation before parsing args
    if let Ok(shell_name) = std::env::var("COMPLETE") {
        return generate_completions(&shell_name);
    }

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "password hash generation failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let interactive = cli.web_password.is_none() || cli.admin_password.is_none();
    if interactive && io::stdin().is_terminal() {
        eprintln!("=== Pexip Management Node Password Generator ===\n");
    }

    let web_password = password_or_prompt(cli.web_password.as_deref(), PasswordRole::Web)?;
    let admin_password = password_or_prompt(cli.admin_password.as_deref(), PasswordRole::Admin)?;

    let hashes = generate(&web_password, &admin_password)?;
    let format = OutputFormat::from_flags(cli.json, cli.tfvars);
    tracing::debug!(?format, "rendering hashes");

    Ok(render(&hashes, format)?)
}

/// Uses the flag value when present, otherwise prompts on a terminal.
fn password_or_prompt(flag_value: Option<&str>, role: PasswordRole) -> Result<String, CliError> {
    if let Some(password) = flag_value {
        return Ok(password.to_string());
    }

    if !io::stdin().is_terminal() {
        return Err(CliError::MissingPassword {
            flag: flag_name(role),
        });
    }

    match prompt_password(role) {
        Ok(password) => Ok(password),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            Err(CliError::Cancelled)
        }
        Err(source) => Err(CliError::Prompt { role, source }),
    }
}

fn flag_name(role: PasswordRole) -> &'static str {
    match role {
        PasswordRole::Web => "web-password",
        PasswordRole::Admin => "admin-password",
    }
}

/// Sends logs to stderr so stdout only ever carries the rendered hashes.
///
/// `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Generate shell completions.
fn generate_completions(shell_name: &str) -> ExitCode {
    let shell = match shell_name.to_lowercase().as_str() {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "powershell" => Shell::PowerShell,
        "elvish" => Shell::Elvish,
        _ => {
            eprintln!(
                "Unknown shell: {shell_name}. Supported: bash, zsh, fish, powershell, elvish"
            );
            return ExitCode::FAILURE;
        }
    };

    clap_complete::generate(shell, &mut Cli::command(), "mgmt-hash", &mut io::stdout());
    ExitCode::SUCCESS
}
