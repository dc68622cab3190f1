use assert_cmd::Command;
use predicates::prelude::*;

fn folio() -> Command {
    Command::cargo_bin("folio").unwrap()
}

#[test]
fn test_section_list_names_every_section() {
    let assert = folio().args(["section", "list"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    for name in ["home", "about", "education", "experience", "projects", "skills", "contact"] {
        assert!(stdout.contains(name), "missing {}", name);
    }
}

#[test]
fn test_section_list_json_is_an_array_of_seven() {
    let assert = folio()
        .args(["section", "list", "--format", "json"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 7);
}

#[test]
fn test_section_show_projects_prints_cards() {
    folio()
        .args(["section", "show", "projects"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spotify Track Data Analytics"))
        .stdout(predicate::str::contains("[Python]"))
        .stdout(predicate::str::contains("+2 more"));
}

#[test]
fn test_section_show_is_case_insensitive() {
    folio()
        .args(["section", "show", "Education"])
        .assert()
        .success()
        .stdout(predicate::str::contains("University of Ruhuna"));
}

#[test]
fn test_section_show_home_json_has_profile_fields() {
    let assert = folio()
        .args(["section", "show", "home", "--format", "json"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["name"], "Abdullah Unaiz");
    assert!(parsed["headlines"].is_array());
}

#[test]
fn test_section_show_unknown_name_fails_with_candidates() {
    folio()
        .args(["section", "show", "blog"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown section 'blog'"))
        .stderr(predicate::str::contains("projects"));
}

#[test]
fn test_piped_output_has_no_escape_codes() {
    let assert = folio().args(["section", "show", "about"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(!stdout.contains('\u{1b}'), "piped output must be plain");
}
