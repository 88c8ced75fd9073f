//! Path-string normalization for the host platform.
//!
//! The simulator stores every path as a plain string and rewrites
//! separators instead of round-tripping through `PathBuf`, because the
//! same strings are later handed verbatim to the script engine.

#[cfg(windows)]
pub const DIRECTORY_SEPARATOR: char = '\\';
#[cfg(not(windows))]
pub const DIRECTORY_SEPARATOR: char = '/';

/// Placeholder in a script path that stands for the project directory.
pub const WORKDIR_TOKEN: &str = "$WORKDIR";

/// Rewrites every `/` and `\` in `path` to `separator`.
pub fn normalize_with(path: &str, separator: char) -> String {
    path.chars()
        .map(|ch| if ch == '/' || ch == '\\' { separator } else { ch })
        .collect()
}

/// Rewrites every separator in `path` to the platform-canonical one.
pub fn normalize(path: &str) -> String {
    normalize_with(path, DIRECTORY_SEPARATOR)
}

/// Returns `path` with exactly one trailing platform separator.
///
/// An empty path stays empty so an unset project directory is not
/// silently turned into the filesystem root.
pub fn ensure_trailing_separator(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    let trimmed = path.trim_end_matches(['/', '\\']);
    let mut out = String::with_capacity(trimmed.len() + 1);
    out.push_str(trimmed);
    out.push(DIRECTORY_SEPARATOR);
    out
}

/// Resolves a leading [`WORKDIR_TOKEN`] in `script_file` against
/// `project_dir` and normalizes the result.
pub fn resolve_workdir(script_file: &str, project_dir: &str) -> String {
    let Some(rest) = script_file.strip_prefix(WORKDIR_TOKEN) else {
        return normalize(script_file);
    };
    let rest = rest.trim_start_matches(['/', '\\']);
    if project_dir.is_empty() {
        return normalize(rest);
    }
    let mut out = ensure_trailing_separator(project_dir);
    out.push_str(rest);
    normalize(&out)
}
