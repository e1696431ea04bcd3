//! Path rules for migration assemblies and their project directories.

use std::path::{Component, Path, PathBuf};

/// Extensions treated as an already compiled assembly.
pub const ARTIFACT_EXTENSIONS: [&str; 2] = ["dll", "exe"];

/// Extension of the assembly produced by a project build.
pub const BUILD_OUTPUT_EXTENSION: &str = "dll";

/// Whether `path` names a compiled assembly rather than a project directory.
pub fn is_compiled_artifact(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ARTIFACT_EXTENSIONS.iter().any(|known| known.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Resolve a user path against `base`. Absolute inputs keep their own root.
/// The result is normalized lexically; the filesystem is not consulted.
pub fn resolve_against(base: &Path, raw: Option<&Path>) -> PathBuf {
    match raw {
        None => normalize_lexically(base),
        Some(path) if path.is_absolute() => normalize_lexically(path),
        Some(path) => normalize_lexically(&base.join(path)),
    }
}

/// Fold `.` and `..` components and drop trailing separators.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` above the root stays at the root
                if !normalized.pop() && !normalized.has_root() {
                    normalized.push(Component::ParentDir);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Conventional location of the assembly a project build produces:
/// `<project>/bin/<configuration>/<framework>/<project name>.dll`.
pub fn expected_build_output(project_dir: &Path, configuration: &str, framework: &str) -> PathBuf {
    let name = project_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    project_dir
        .join("bin")
        .join(configuration)
        .join(framework)
        .join(format!("{name}.{BUILD_OUTPUT_EXTENSION}"))
}
