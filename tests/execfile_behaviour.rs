#![cfg(unix)]

use std::error::Error;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;

use runcmd::{InvocationKind, ProcessRunner, SpawnOptions};

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn exec_file_runs_an_existing_executable() -> TestResult {
    let runner = ProcessRunner::new();

    let result = runner
        .exec_file("/bin/sh", ["-c", "echo from-file"], SpawnOptions::default())
        .await;

    assert!(result.succeeded());
    assert_eq!(result.stdout, vec!["from-file"]);
    assert_eq!(result.command, "/bin/sh");
    assert_eq!(result.args, vec!["-c", "echo from-file"]);

    Ok(())
}

#[tokio::test]
async fn exec_file_runs_a_script_written_to_disk() -> TestResult {
    let dir = tempfile::tempdir()?;
    let script = dir.path().join("hello.sh");
    {
        let mut file = std::fs::File::create(&script)?;
        writeln!(file, "#!/bin/sh")?;
        writeln!(file, "echo \"hi $1\"")?;
    }
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))?;

    let runner = ProcessRunner::new();
    let result = runner
        .exec_file(&script, ["there"], SpawnOptions::default())
        .await;

    assert!(result.succeeded());
    assert_eq!(result.stdout, vec!["hi there"]);

    Ok(())
}

#[tokio::test]
async fn exec_file_missing_path_resolves_with_stat_failure() -> TestResult {
    let runner = ProcessRunner::new();

    let result = runner
        .exec_file(
            "/no/such/file/anywhere",
            Vec::<String>::new(),
            SpawnOptions::default(),
        )
        .await;

    assert_ne!(result.exit_code, 0);
    assert!(!result.succeeded());
    assert!(!result.message.is_empty());
    assert!(!result.trace.is_empty());

    // The failed probe still counts as an execution.
    let history = runner.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].kind, InvocationKind::ExecFile);

    Ok(())
}
