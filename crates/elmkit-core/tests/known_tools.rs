use semver::Version;

use elmkit_core::known_tools::{is_known_version, latest_version, versions_of, KNOWN_TOOLS};

#[test]
fn tool_names_are_unique_and_ordered() {
    let names: Vec<&str> = KNOWN_TOOLS.iter().map(|(name, _)| *name).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(names, sorted, "catalog names must be unique and sorted");
}

#[test]
fn every_version_parses_as_semver() {
    for (name, versions) in KNOWN_TOOLS {
        for version in *versions {
            assert!(
                Version::parse(version).is_ok(),
                "{name} has unparseable version {version}"
            );
        }
    }
}

#[test]
fn version_lists_are_ascending() {
    for (name, versions) in KNOWN_TOOLS {
        let parsed: Vec<Version> = versions
            .iter()
            .map(|v| Version::parse(v).unwrap())
            .collect();
        for pair in parsed.windows(2) {
            assert!(pair[0] < pair[1], "{name} versions not ascending");
        }
    }
}

#[test]
fn versions_of_known_tool() {
    assert_eq!(versions_of("elm"), Some(["0.19.0", "0.19.1"].as_slice()));
    assert_eq!(versions_of("elm-python"), None);
}

#[test]
fn latest_version_is_last_entry() {
    assert_eq!(latest_version("elm"), Some("0.19.1"));
    assert_eq!(latest_version("elm-format"), Some("0.8.4"));
    assert_eq!(latest_version("elm-json"), Some("0.2.10"));
    assert_eq!(latest_version("elm-python"), None);
}

#[test]
fn known_version_lookup() {
    assert!(is_known_version("elm", "0.19.0"));
    assert!(!is_known_version("elm", "0.19.2"));
    assert!(!is_known_version("elm-python", "1.0.0"));
}
