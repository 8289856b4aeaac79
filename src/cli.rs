// src/cli.rs

//! CLI argument parsing using `clap`, plus the color-coded rendering of an
//! [`ExecutionResult`] for the terminal.
//!
//! The binary is a thin call-site of the library: every subcommand maps 1:1
//! onto a [`ProcessRunner`] operation.
//!
//! [`ProcessRunner`]: crate::exec::ProcessRunner

use std::collections::BTreeMap;

use clap::{Parser, Subcommand, ValueEnum};

use crate::color::{StyleFlags, Variant, paint};
use crate::errors::{Result, RuncmdError};
use crate::exec::ExecutionResult;

/// Command-line arguments for `runcmd`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "runcmd",
    version,
    about = "Run a command and get back a uniform result.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// If omitted, `Runcmd.toml` in the current working directory is used
    /// when present; built-in defaults otherwise.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Start the child detached from this process.
    #[arg(long)]
    pub detached: bool,

    /// Extra environment entry for the child, merged over the inherited
    /// environment (repeatable).
    #[arg(long, value_name = "KEY=VALUE")]
    pub env: Vec<String>,

    /// Working directory for the child.
    #[arg(long, value_name = "PATH")]
    pub cwd: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `RUNCMD_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// One subcommand per runner operation.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Launch a program with arguments, no shell.
    Run {
        /// Program to execute.
        program: String,
        /// Arguments passed to the program.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Run a full command line through the platform shell.
    Shell {
        /// The command line, quoted as a single argument.
        command_line: String,
    },
    /// Execute a file directly, verifying it exists first.
    File {
        /// Path to the executable file.
        path: String,
        /// Arguments passed to the file.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The `EnvFilter` directive for this level.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

/// Parse repeated `--env KEY=VALUE` flags into a map.
pub fn parse_env_pairs(pairs: &[String]) -> Result<BTreeMap<String, String>> {
    let mut env = BTreeMap::new();
    for pair in pairs {
        match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                env.insert(key.to_string(), value.to_string());
            }
            _ => {
                return Err(RuncmdError::InvalidArgument(format!(
                    "--env expects KEY=VALUE, got: {pair}"
                )));
            }
        }
    }
    Ok(env)
}

/// Render a result for the terminal, color-coded by outcome.
///
/// Read-only over the result; the exec core knows nothing about styling.
pub fn render_result(result: &ExecutionResult) -> String {
    let bold = StyleFlags {
        bold: true,
        ..StyleFlags::default()
    };
    let plain = StyleFlags::default();

    let header = if result.succeeded() {
        paint(
            Variant::Success,
            &format!("ok: '{}' (exit {})", result.command, result.exit_code),
            bold,
        )
    } else if result.killed {
        let cause = result.signal.as_deref().unwrap_or("cancelled");
        paint(
            Variant::Warn,
            &format!("killed: '{}' ({})", result.command, cause),
            bold,
        )
    } else {
        paint(
            Variant::Danger,
            &format!("failed: '{}' (exit {})", result.command, result.exit_code),
            bold,
        )
    };

    let mut lines = vec![header];
    for line in &result.stdout {
        lines.push(paint(Variant::Stdout, line, plain));
    }
    for line in &result.stderr {
        lines.push(paint(Variant::Stderr, line, plain));
    }
    if !result.succeeded() {
        lines.push(paint(Variant::Info, &result.message, plain));
        for line in &result.trace {
            lines.push(paint(Variant::Debug, line, plain));
        }
    }

    lines.join("\n")
}
