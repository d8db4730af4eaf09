use std::path::{Path, PathBuf};

/// Walk up from `start` looking for a directory named `dirname`.
/// Returns the path to that directory, or `None`.
pub fn find_ancestor_dir(start: &Path, dirname: &str) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(dirname);
        if candidate.is_dir() {
            return Some(candidate);
        }
        current = current.parent()?;
    }
}

/// Express `file` relative to `base` as a `/`-separated string prefixed
/// with `./`, independent of host path conventions.
///
/// Pure path arithmetic, no filesystem access. Neither path is
/// canonicalized, so symlinked trees keep their spelled-out form.
pub fn relative_display(file: &Path, base: &Path) -> String {
    let rel = relative_to(file, base);
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    format!("./{}", parts.join("/"))
}

fn relative_to(file: &Path, base: &Path) -> PathBuf {
    let mut file_components = file.components().peekable();
    let mut base_components = base.components().peekable();

    while let (Some(a), Some(b)) = (file_components.peek(), base_components.peek()) {
        if a != b {
            break;
        }
        file_components.next();
        base_components.next();
    }

    let mut rel = PathBuf::new();
    for _ in base_components {
        rel.push("..");
    }
    for component in file_components {
        rel.push(component.as_os_str());
    }
    rel
}
