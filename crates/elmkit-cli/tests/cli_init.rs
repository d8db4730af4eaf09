use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn elmkit_cmd() -> Command {
    Command::cargo_bin("elmkit").unwrap()
}

#[test]
fn test_init_in_empty_directory_uses_defaults() {
    let tmp = TempDir::new().unwrap();

    elmkit_cmd()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created!"));

    let config = fs::read_to_string(tmp.path().join("elm-tooling.json")).unwrap();
    assert!(config.contains("./src/Main.elm"));
    assert!(config.contains("\"elm\""));
    assert!(config.ends_with('\n'));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("elm-tooling.json"), "{}\n").unwrap();

    elmkit_cmd()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let config = fs::read_to_string(tmp.path().join("elm-tooling.json")).unwrap();
    assert_eq!(config, "{}\n", "init must not touch the existing file");
}

#[test]
fn test_init_lists_discovered_entrypoints() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("elm.json"),
        r#"{ "type": "application", "source-directories": ["src"], "elm-version": "0.19.1" }"#,
    )
    .unwrap();
    fs::create_dir(tmp.path().join("src")).unwrap();
    fs::write(
        tmp.path().join("src/Main.elm"),
        "module Main exposing (main)\n\nmain =\n    text \"hi\"\n",
    )
    .unwrap();
    fs::write(tmp.path().join("src/Helper.elm"), "help = 42\n").unwrap();

    elmkit_cmd()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success();

    let config: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(tmp.path().join("elm-tooling.json")).unwrap())
            .unwrap();
    assert_eq!(
        config["entrypoints"],
        serde_json::json!(["./src/Main.elm"])
    );
    assert_eq!(config["tools"]["elm"], "0.19.1");
}

#[test]
fn test_init_omits_entrypoints_for_packages() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("elm.json"),
        r#"{ "type": "package", "elm-version": "0.19.0 <= v < 0.20.0" }"#,
    )
    .unwrap();

    elmkit_cmd()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success();

    let config: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(tmp.path().join("elm-tooling.json")).unwrap())
            .unwrap();
    assert!(config.get("entrypoints").is_none());
    assert_eq!(config["tools"]["elm"], "0.19.1");
}

#[test]
fn test_generated_file_is_valid_json_with_string_versions() {
    let tmp = TempDir::new().unwrap();

    elmkit_cmd()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success();

    let config: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(tmp.path().join("elm-tooling.json")).unwrap())
            .unwrap();
    let tools = config["tools"].as_object().unwrap();
    assert!(!tools.is_empty());
    for (name, version) in tools {
        assert!(
            version.is_string(),
            "tool {name} must map to a version string"
        );
    }
}
