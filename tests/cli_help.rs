use std::process::Command;

#[test]
fn test_help_lists_commands() {
    let bin = env!("CARGO_BIN_EXE_embedgen");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["embed", "api-summary"] {
        assert!(
            stdout.contains(command),
            "help output should list '{}'; got:\n{}",
            command,
            stdout
        );
    }
}

#[test]
fn test_embed_help_lists_languages() {
    let bin = env!("CARGO_BIN_EXE_embedgen");

    let output = Command::new(bin).args(["embed", "--help"]).output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--language"), "got:\n{}", stdout);
    for language in ["cpp", "rust"] {
        assert!(
            stdout.contains(language),
            "embed help should list '{}'; got:\n{}",
            language,
            stdout
        );
    }
}

#[test]
fn test_missing_subcommand_is_usage_error() {
    let bin = env!("CARGO_BIN_EXE_embedgen");

    let output = Command::new(bin).output().unwrap();

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_version_flag() {
    let bin = env!("CARGO_BIN_EXE_embedgen");

    let output = Command::new(bin).arg("--version").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("embedgen "), "got:\n{}", stdout);
}
