//! Version range parsing and matching against the known-tools catalog.

use semver::Version;

use elmkit_util::errors::ElmkitError;

/// A half-open version range of the form `<lower> <= v < <upper>`,
/// as written in a package elm.json's `"elm-version"` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    pub lower_inclusive: Version,
    pub upper_exclusive: Version,
}

impl VersionRange {
    /// Parse a range expression like `0.19.0 <= v < 0.20.0`.
    ///
    /// Both bounds must be concrete versions and the bound variable must
    /// be a literal `v`.
    pub fn parse(spec: &str) -> miette::Result<Self> {
        let invalid = || ElmkitError::VersionConstraint {
            message: format!("Invalid version range: {spec}"),
        };

        let (lower, rest) = spec.split_once("<=").ok_or_else(invalid)?;
        let (var, upper) = rest.split_once('<').ok_or_else(invalid)?;
        if var.trim() != "v" {
            return Err(invalid().into());
        }
        let lower_inclusive = Version::parse(lower.trim()).map_err(|_| invalid())?;
        let upper_exclusive = Version::parse(upper.trim()).map_err(|_| invalid())?;

        Ok(Self {
            lower_inclusive,
            upper_exclusive,
        })
    }

    /// Check if a version falls inside this range.
    pub fn contains(&self, version: &Version) -> bool {
        *version >= self.lower_inclusive && *version < self.upper_exclusive
    }

    /// The first entry of a descending version list inside this range,
    /// i.e. the latest satisfying version.
    pub fn latest_in<'a>(&self, versions_descending: &'a [Version]) -> Option<&'a Version> {
        versions_descending.iter().find(|v| self.contains(v))
    }
}

/// Strip any build or pre-release suffix from a version string.
///
/// `0.19.1-3` and `0.19.1+abc` both become `0.19.1`.
pub fn strip_suffix(version: &str) -> &str {
    match version.find(['+', '-']) {
        Some(index) => &version[..index],
        None => version,
    }
}

/// The newest known version with the same major component as `installed`
/// that is not older than it (caret-range semantics).
///
/// `known_ascending` is a catalog version list, oldest first; entries
/// that do not parse as versions are skipped.
pub fn latest_compatible(installed: &Version, known_ascending: &[&str]) -> Option<String> {
    known_ascending.iter().rev().find_map(|candidate| {
        let version = Version::parse(candidate).ok()?;
        (version.major == installed.major && version >= *installed)
            .then(|| (*candidate).to_string())
    })
}
