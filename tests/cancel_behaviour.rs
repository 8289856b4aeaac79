#![cfg(unix)]

use std::error::Error;
use std::time::{Duration, Instant};

use runcmd::{ProcessRunner, SpawnOptions};

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn cancelling_kills_an_in_flight_call() -> TestResult {
    let runner = ProcessRunner::new();
    let handle = runner.cancel_handle();

    let start = Instant::now();
    let (result, ()) = tokio::join!(runner.exec("sleep 5", SpawnOptions::default()), async {
        tokio::time::sleep(Duration::from_millis(200)).await;
        handle.cancel();
    });

    assert!(result.killed);
    assert!(!result.succeeded());
    assert_eq!(result.signal.as_deref(), Some("SIGKILL"));
    assert!(
        start.elapsed() < Duration::from_secs(3),
        "cancelled call should settle well before the sleep finishes"
    );

    Ok(())
}

#[tokio::test]
async fn cancelling_affects_all_in_flight_calls_on_the_runner() -> TestResult {
    let runner = ProcessRunner::new();
    let handle = runner.cancel_handle();

    let (a, b, ()) = tokio::join!(
        runner.exec("sleep 5", SpawnOptions::default()),
        runner.spawn("sleep", ["5"], SpawnOptions::default()),
        async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            handle.cancel();
        }
    );

    assert!(a.killed);
    assert!(b.killed);

    Ok(())
}

#[tokio::test]
async fn calls_after_cancellation_resolve_killed_without_launching() -> TestResult {
    let runner = ProcessRunner::new();
    runner.cancel();
    assert!(runner.cancel_handle().is_cancelled());

    let start = Instant::now();
    let result = runner.exec("sleep 5", SpawnOptions::default()).await;

    assert!(result.killed);
    assert!(result.stdout.is_empty());
    assert_eq!(result.exit_code, -1);
    assert!(start.elapsed() < Duration::from_secs(1));

    Ok(())
}

#[tokio::test]
async fn cancel_is_idempotent_and_shared_across_clones() -> TestResult {
    let runner = ProcessRunner::new();
    let first = runner.cancel_handle();
    let second = runner.cancel_handle();

    first.cancel();
    first.cancel();

    assert!(second.is_cancelled());

    Ok(())
}
