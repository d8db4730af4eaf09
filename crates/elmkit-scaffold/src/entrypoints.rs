//! Program entrypoint discovery.
//!
//! Walks the source directories declared in `elm.json` and classifies
//! each `.elm` file by whether it defines a top-level `main`.

use std::path::{Path, PathBuf};

use futures_util::future::join_all;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

use elmkit_core::elm_json::ElmJson;
use elmkit_util::errors::ElmkitError;

/// Discover program entrypoints under the project's source directories.
///
/// Returns paths relative to the manifest's directory, `/`-separated
/// and prefixed with `./`, sorted lexicographically. An empty list
/// means the project is a package (packages are scaffolded without
/// entrypoints); finding nothing in an application's source
/// directories is a [`ElmkitError::NoEntrypoints`] error so the caller
/// can substitute a default instead of emitting an empty list.
pub async fn scan(project_root: &Path) -> miette::Result<Vec<String>> {
    let manifest = ElmJson::load(project_root)?;
    let directories = manifest.resolved_source_directories(project_root)?;
    if directories.is_empty() {
        return Ok(Vec::new());
    }

    let mut candidates: Vec<PathBuf> = Vec::new();
    for directory in &directories {
        candidates.extend(list_elm_files(directory).await?);
    }

    let scans = candidates.into_iter().map(|file| async move {
        match is_main_file(&file).await {
            Ok(true) => Some(file),
            // Unreadable candidates are treated the same as files
            // without a main definition.
            Ok(false) | Err(_) => None,
        }
    });

    let mut entrypoints: Vec<String> = join_all(scans)
        .await
        .into_iter()
        .flatten()
        .map(|file| elmkit_util::fs::relative_display(&file, project_root))
        .collect();
    entrypoints.sort();

    if entrypoints.is_empty() {
        return Err(ElmkitError::NoEntrypoints {
            message: "Expected at least 1 entrypoint but got 0".to_string(),
        }
        .into());
    }
    Ok(entrypoints)
}

/// Files directly inside `directory` (non-recursive) named `*.elm`.
async fn list_elm_files(directory: &Path) -> miette::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut entries = tokio::fs::read_dir(directory)
        .await
        .map_err(ElmkitError::Io)?;
    while let Some(entry) = entries.next_entry().await.map_err(ElmkitError::Io)? {
        let file_type = entry.file_type().await.map_err(ElmkitError::Io)?;
        if file_type.is_file() && entry.file_name().to_string_lossy().ends_with(".elm") {
            files.push(entry.path());
        }
    }
    Ok(files)
}

/// Stream lines until a top-level `main` definition is seen.
///
/// Reading stops at the first match; dropping the reader releases the
/// file on every exit path.
async fn is_main_file(file: &Path) -> std::io::Result<bool> {
    let handle = File::open(file).await?;
    let mut lines = BufReader::new(handle).lines();
    while let Some(line) = lines.next_line().await? {
        if is_main_line(&line) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Whether a line is `main`, optionally indented, followed by `=`.
fn is_main_line(line: &str) -> bool {
    match line.trim_start().strip_prefix("main") {
        Some(tail) => tail.trim_start().starts_with('='),
        None => false,
    }
}
