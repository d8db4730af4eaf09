//! Tool version resolution for the configuration's `"tools"` section.
//!
//! Resolution runs in tiers: versions detected in an installed
//! `node_modules` tree win over catalog defaults, and an `elm-version`
//! constraint from `elm.json` overrides the `elm` entry of either.
//! Every lookup failure inside a tier is soft; the only terminal
//! outcome is "no tools section".

use std::collections::BTreeMap;
use std::path::Path;

use semver::Version;
use serde::Deserialize;

use elmkit_core::elm_json::{ElmJson, ProjectType};
use elmkit_core::known_tools;
use elmkit_core::version::{self, VersionRange};
use elmkit_util::errors::ElmkitError;
use elmkit_util::platform;

/// Resolved tool name to version pairs, in catalog name order.
pub type ToolSelection = BTreeMap<String, String>;

/// Resolve the toolset for the project at `project_root`.
///
/// Returns `None` when the host platform is unsupported and no
/// manifest override applies; the caller omits the tools section.
pub fn resolve(project_root: &Path) -> Option<ToolSelection> {
    let detected = if platform::host_os().is_none() {
        None
    } else {
        from_installed_packages(project_root).or_else(|| Some(catalog_defaults()))
    };

    match elm_version_from_manifest(project_root) {
        Some(elm_version) => {
            let mut tools = detected.unwrap_or_default();
            tools.insert("elm".to_string(), elm_version);
            Some(tools)
        }
        None => detected,
    }
}

/// Versions found in the closest `node_modules` tree.
///
/// Returns `None` when no tree exists or no known tool resolves, which
/// sends resolution to the catalog defaults.
fn from_installed_packages(project_root: &Path) -> Option<ToolSelection> {
    let node_modules = elmkit_util::fs::find_ancestor_dir(project_root, "node_modules")?;

    let mut tools = ToolSelection::new();
    for (name, versions) in known_tools::KNOWN_TOOLS {
        if let Some(resolved) = resolve_installed(&node_modules, name, versions) {
            tools.insert((*name).to_string(), resolved);
        }
    }

    if tools.is_empty() {
        None
    } else {
        Some(tools)
    }
}

/// Match an installed package's declared version against the known set.
///
/// Tries an exact match, then the version with any build or pre-release
/// suffix stripped, then the newest same-major known version not older
/// than the installed one. Unreadable or unrecognized packages resolve
/// to `None` and are excluded from the selection.
fn resolve_installed(node_modules: &Path, name: &str, known: &[&str]) -> Option<String> {
    let manifest_path = node_modules.join(name).join("package.json");
    let content = std::fs::read_to_string(&manifest_path).ok()?;

    #[derive(Deserialize)]
    struct PackageJson {
        version: String,
    }

    let package: PackageJson = serde_json::from_str(&content).ok()?;

    if known.contains(&package.version.as_str()) {
        return Some(package.version);
    }

    let stripped = version::strip_suffix(&package.version);
    if known.contains(&stripped) {
        return Some(stripped.to_string());
    }

    let installed = Version::parse(&package.version).ok()?;
    let resolved = version::latest_compatible(&installed, known);
    if resolved.is_none() {
        tracing::debug!("no known {name} version compatible with installed {installed}");
    }
    resolved
}

/// Every known tool at its newest catalog version.
fn catalog_defaults() -> ToolSelection {
    known_tools::KNOWN_TOOLS
        .iter()
        .filter_map(|(name, versions)| {
            versions
                .last()
                .map(|version| ((*name).to_string(), (*version).to_string()))
        })
        .collect()
}

/// The manifest's `elm-version` constraint resolved against the catalog.
///
/// Any failure — missing manifest, missing field, unknown version,
/// unparseable or unsatisfiable range — abandons the override.
fn elm_version_from_manifest(project_root: &Path) -> Option<String> {
    match resolve_elm_constraint(project_root) {
        Ok(version) => Some(version),
        Err(error) => {
            tracing::debug!("elm-version override abandoned: {error}");
            None
        }
    }
}

fn resolve_elm_constraint(project_root: &Path) -> miette::Result<String> {
    let manifest = ElmJson::load(project_root)?;
    let constraint = manifest
        .elm_version
        .ok_or_else(|| ElmkitError::VersionConstraint {
            message: "Expected \"elm-version\" in elm.json".to_string(),
        })?;
    let known = known_tools::versions_of("elm").unwrap_or(&[]);

    match manifest.project_type {
        // Applications pin an exact version.
        ProjectType::Application => {
            if known.contains(&constraint.as_str()) {
                Ok(constraint)
            } else {
                Err(ElmkitError::VersionConstraint {
                    message: format!("Unknown or unsupported elm version: {constraint}"),
                }
                .into())
            }
        }
        // Packages declare a half-open range; resolve to the latest
        // known version inside it.
        ProjectType::Package => {
            let range = VersionRange::parse(&constraint)?;
            let mut known_versions: Vec<Version> = known
                .iter()
                .filter_map(|v| Version::parse(v).ok())
                .collect();
            known_versions.reverse();

            match range.latest_in(&known_versions) {
                Some(version) => Ok(version.to_string()),
                None => Err(ElmkitError::VersionConstraint {
                    message: format!("No known elm version satisfies: {constraint}"),
                }
                .into()),
            }
        }
    }
}
