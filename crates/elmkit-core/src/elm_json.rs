use serde::Deserialize;
use std::path::{Path, PathBuf};

use elmkit_util::errors::ElmkitError;

/// The parsed representation of a project's `elm.json` file.
///
/// Only the fields the scaffolder consumes are modeled; everything else
/// in the manifest (dependencies, test-dependencies, ...) is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ElmJson {
    #[serde(rename = "type")]
    pub project_type: ProjectType,

    #[serde(default, rename = "source-directories")]
    pub source_directories: Option<Vec<String>>,

    #[serde(default, rename = "elm-version")]
    pub elm_version: Option<String>,
}

/// The two project kinds an `elm.json` can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Application,
    Package,
}

impl ElmJson {
    /// Load and parse `elm.json` from the given project directory.
    pub fn load(project_root: &Path) -> miette::Result<Self> {
        let path = project_root.join("elm.json");
        let content = std::fs::read_to_string(&path).map_err(|e| ElmkitError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse(&content)
    }

    /// Parse an `elm.json` from a string.
    pub fn parse(content: &str) -> miette::Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            ElmkitError::Manifest {
                message: format!("Failed to parse elm.json: {e}"),
            }
            .into()
        })
    }

    /// The project's source directories, resolved against the manifest's
    /// own directory.
    ///
    /// Packages have none by definition. Applications must declare a
    /// `source-directories` list with at least one entry.
    pub fn resolved_source_directories(&self, project_root: &Path) -> miette::Result<Vec<PathBuf>> {
        match self.project_type {
            ProjectType::Package => Ok(Vec::new()),
            ProjectType::Application => {
                let declared =
                    self.source_directories
                        .as_ref()
                        .ok_or_else(|| ElmkitError::Manifest {
                            message: "Expected \"source-directories\" in an application elm.json"
                                .to_string(),
                        })?;
                let directories: Vec<PathBuf> =
                    declared.iter().map(|dir| project_root.join(dir)).collect();
                if directories.is_empty() {
                    return Err(ElmkitError::Manifest {
                        message: "Expected \"source-directories\" to contain at least one entry"
                            .to_string(),
                    }
                    .into());
                }
                Ok(directories)
            }
        }
    }
}
