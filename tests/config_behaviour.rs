use std::error::Error;
use std::fs;

use runcmd::config::{load_and_validate, load_or_default};
use runcmd::errors::RuncmdError;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn toml_defaults_drive_the_runner_config() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Runcmd.toml");
    fs::write(
        &path,
        format!(
            "[default]\ndetached = true\ncwd = \"{}\"\n\n[default.env]\nEXTRA_VAR = \"value\"\n",
            dir.path().display()
        ),
    )?;

    let cfg = load_and_validate(&path)?;
    assert_eq!(cfg.default.detached, Some(true));

    let runner_config = cfg.runner_config();
    assert!(runner_config.detached);
    assert_eq!(runner_config.cwd, dir.path());
    assert_eq!(
        runner_config.env.get("EXTRA_VAR").map(String::as_str),
        Some("value")
    );
    // Merged over the inherited snapshot, not replacing it.
    assert!(runner_config.env.contains_key("PATH"));

    Ok(())
}

#[test]
fn empty_file_is_a_valid_configuration() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Runcmd.toml");
    fs::write(&path, "")?;

    let cfg = load_and_validate(&path)?;
    assert_eq!(cfg.default.detached, None);
    assert!(cfg.default.env.is_empty());
    assert!(!cfg.runner_config().detached);

    Ok(())
}

#[test]
fn nonexistent_cwd_is_rejected() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Runcmd.toml");
    fs::write(&path, "[default]\ncwd = \"/no/such/dir/anywhere\"\n")?;

    let err = load_and_validate(&path).unwrap_err();
    assert!(matches!(err, RuncmdError::ConfigError(_)));

    Ok(())
}

#[test]
fn env_key_with_equals_sign_is_rejected() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Runcmd.toml");
    fs::write(&path, "[default.env]\n\"BAD=KEY\" = \"value\"\n")?;

    let err = load_and_validate(&path).unwrap_err();
    assert!(matches!(err, RuncmdError::ConfigError(_)));

    Ok(())
}

#[test]
fn invalid_toml_is_a_parse_error() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Runcmd.toml");
    fs::write(&path, "[default\ndetached = maybe")?;

    let err = load_and_validate(&path).unwrap_err();
    assert!(matches!(err, RuncmdError::TomlError(_)));

    Ok(())
}

#[test]
fn explicit_missing_path_is_an_error() -> TestResult {
    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("nope.toml");

    let err = load_or_default(Some(missing.as_path())).unwrap_err();
    assert!(matches!(err, RuncmdError::ConfigError(_)));

    Ok(())
}
