//! Scaffold generation for the `elm-tooling.json` configuration file.
//!
//! Combines entrypoint discovery and tool version resolution into the
//! configuration object written by `elmkit init`. Generation never
//! fails: every detection error falls back to a documented default so
//! the user always gets an editable starting point.

pub mod entrypoints;
pub mod tools;

use std::path::Path;

use serde::Serialize;

use crate::tools::ToolSelection;

/// Entrypoint guessed when discovery fails outright.
pub const DEFAULT_ENTRYPOINT: &str = "./src/Main.elm";

/// The generated configuration, serialized as `elm-tooling.json`.
///
/// Absent fields are omitted from the serialized object entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scaffold {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrypoints: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolSelection>,
}

/// Assemble a scaffold for the project at `project_root`.
///
/// Entrypoint discovery errors of any kind substitute the single
/// default entrypoint; an empty discovery result (a package project)
/// omits the field. Tool resolution yielding nothing omits the tools
/// field.
pub async fn build(project_root: &Path) -> Scaffold {
    let entrypoints = match entrypoints::scan(project_root).await {
        Ok(paths) if paths.is_empty() => None,
        Ok(paths) => Some(paths),
        Err(error) => {
            tracing::debug!("entrypoint discovery failed, using default: {error}");
            Some(vec![DEFAULT_ENTRYPOINT.to_string()])
        }
    };

    let tools = tools::resolve(project_root);

    Scaffold { entrypoints, tools }
}
