// src/lib.rs

pub mod cli;
pub mod color;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

pub use crate::exec::{
    CancelHandle, ExecutionResult, HistoryEntry, InvocationKind, ProcessRunner, RunnerConfig,
    SpawnOptions,
};

use crate::cli::{CliArgs, CliCommand};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (`Runcmd.toml`, when present)
/// - a [`ProcessRunner`] built from config + CLI overrides
/// - Ctrl-C → the runner's cancellation handle
/// - the requested operation, rendered color-coded to stdout
///
/// Returns the exit code for the binary: the child's exit code, or 1 when it
/// is unknown or negative.
pub async fn run(args: CliArgs) -> Result<i32> {
    let cfg = config::load_or_default(args.config.as_deref().map(Path::new))?;
    let runner = ProcessRunner::with_config(cfg.runner_config());

    // Ctrl-C → kill in-flight children via the shared handle.
    {
        let cancel = runner.cancel_handle();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            cancel.cancel();
        });
    }

    let env = cli::parse_env_pairs(&args.env)?;
    let options = SpawnOptions {
        detached: args.detached.then_some(true),
        env: (!env.is_empty()).then_some(env),
        cwd: args.cwd.as_ref().map(PathBuf::from),
    };

    let result = match &args.command {
        CliCommand::Run { program, args } => runner.spawn(program, args.clone(), options).await,
        CliCommand::Shell { command_line } => runner.exec(command_line, options).await,
        CliCommand::File { path, args } => runner.exec_file(path, args.clone(), options).await,
    };

    println!("{}", cli::render_result(&result));
    debug!(
        history_len = runner.history_len(),
        succeeded = result.succeeded(),
        "run complete"
    );

    Ok(exit_code_for(&result))
}

/// Map a result onto a process exit code.
fn exit_code_for(result: &ExecutionResult) -> i32 {
    if result.succeeded() {
        0
    } else if result.exit_code > 0 {
        result.exit_code
    } else {
        1
    }
}
