#![cfg(unix)]

use std::error::Error;

use runcmd::{ProcessRunner, SpawnOptions};

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn exec_echo_hello_is_the_canonical_happy_path() -> TestResult {
    let runner = ProcessRunner::new();

    let result = runner.exec("echo hello", SpawnOptions::default()).await;

    assert_eq!(result.stdout, vec!["hello"]);
    assert_eq!(result.exit_code, 0);
    assert_eq!(result.message, "success");
    assert!(result.succeeded());
    assert_eq!(result.command, "echo hello");
    assert!(result.args.is_empty());
    assert!(result.signal.is_none());

    Ok(())
}

#[tokio::test]
async fn exec_surfaces_shell_exit_codes() -> TestResult {
    let runner = ProcessRunner::new();

    let result = runner.exec("exit 42", SpawnOptions::default()).await;

    assert_eq!(result.exit_code, 42);
    assert!(!result.succeeded());
    assert_eq!(result.message, "exited with code 42");

    Ok(())
}

#[tokio::test]
async fn exec_unknown_command_resolves_with_shell_failure() -> TestResult {
    let runner = ProcessRunner::new();

    let result = runner
        .exec("definitely-not-a-real-binary", SpawnOptions::default())
        .await;

    // The shell itself starts fine and reports the lookup failure: 127.
    assert_eq!(result.exit_code, 127);
    assert!(!result.succeeded());
    assert!(!result.stderr.is_empty());

    Ok(())
}

#[tokio::test]
async fn exec_calls_on_one_runner_are_independent() -> TestResult {
    let runner = ProcessRunner::new();

    let (a, b) = tokio::join!(
        runner.exec("echo first", SpawnOptions::default()),
        runner.exec("echo second", SpawnOptions::default()),
    );

    assert!(a.succeeded());
    assert!(b.succeeded());
    assert_eq!(a.stdout, vec!["first"]);
    assert_eq!(b.stdout, vec!["second"]);
    assert_eq!(runner.history_len(), 2);

    Ok(())
}

#[tokio::test]
async fn exec_derives_text_views_from_stored_lines() -> TestResult {
    let runner = ProcessRunner::new();

    let result = runner
        .exec("printf 'x\\ny\\n'; printf 'e\\n' >&2", SpawnOptions::default())
        .await;

    assert_eq!(result.stdout_text(), "x\ny");
    assert_eq!(result.stderr_text(), "e");

    Ok(())
}
