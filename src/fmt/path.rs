//! Project-relative shortening of source file paths.

/// Cuts everything through `root` and its trailing separator out of `path`.
///
/// The root folder name has to occur past the start of the path; a path
/// that already begins with it, or does not contain it, comes back
/// unchanged. Only the first occurrence counts, and a match at the very
/// end leaves an empty remainder.
#[must_use]
pub fn truncate_path<'a>(path: &'a str, root: Option<&str>) -> &'a str {
    let Some(root) = root else { return path };
    match path.find(root) {
        Some(idx) if idx > 0 => path.get(idx + root.len() + 1..).unwrap_or(""),
        _ => path,
    }
}
