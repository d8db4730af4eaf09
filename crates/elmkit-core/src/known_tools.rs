//! The static catalog of installable tools.
//!
//! Baked in at compile time and never mutated at runtime. The separate
//! installer knows how to fetch exactly these versions, so resolution
//! never invents a version outside this table.

/// Known tool names with their installable versions.
///
/// Names are listed in the order they appear in a generated
/// configuration; version lists are ascending, newest last.
pub const KNOWN_TOOLS: &[(&str, &[&str])] = &[
    ("elm", &["0.19.0", "0.19.1"]),
    ("elm-format", &["0.8.1", "0.8.2", "0.8.3", "0.8.4"]),
    ("elm-json", &["0.2.8", "0.2.10"]),
];

/// The versions known for `tool`, ascending, or `None` for an unknown tool.
pub fn versions_of(tool: &str) -> Option<&'static [&'static str]> {
    KNOWN_TOOLS
        .iter()
        .find(|(name, _)| *name == tool)
        .map(|(_, versions)| *versions)
}

/// The newest known version of `tool`.
pub fn latest_version(tool: &str) -> Option<&'static str> {
    versions_of(tool).and_then(|versions| versions.last().copied())
}

/// Whether `version` is an exact, installable version of `tool`.
pub fn is_known_version(tool: &str, version: &str) -> bool {
    versions_of(tool).is_some_and(|versions| versions.contains(&version))
}
