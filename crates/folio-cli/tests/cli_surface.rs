use assert_cmd::Command;
use predicates::prelude::*;

fn folio() -> Command {
    Command::cargo_bin("folio").unwrap()
}

#[test]
fn test_no_args_prints_guidance() {
    folio()
        .assert()
        .success()
        .stdout(predicate::str::contains("folio view"))
        .stdout(predicate::str::contains("section list"));
}

#[test]
fn test_main_help_lists_subcommands() {
    folio()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("view"))
        .stdout(predicate::str::contains("section"))
        .stdout(predicate::str::contains("--theme"));
}

#[test]
fn test_section_help_lists_subcommands() {
    folio()
        .args(["section", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"));
}

#[test]
fn test_view_refuses_non_interactive_stdout() {
    folio()
        .arg("view")
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}

#[test]
fn test_unknown_theme_in_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("folio.toml");
    std::fs::write(&config, "theme = \"neon\"\n").unwrap();

    folio()
        .args(["--config", config.to_str().unwrap(), "section", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown theme"));
}

#[test]
fn test_theme_flag_wins_over_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("folio.toml");
    std::fs::write(&config, "theme = \"neon\"\n").unwrap();

    // The flag resolves before the config's bad name can matter
    folio()
        .args([
            "--config",
            config.to_str().unwrap(),
            "--theme",
            "aurora",
            "section",
            "list",
        ])
        .assert()
        .success();
}
