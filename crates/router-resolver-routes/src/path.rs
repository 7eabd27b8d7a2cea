/// Path utilities for validation and normalization.
///
/// All functions are pure: same input, same output, no side effects.
use std::borrow::Cow;

/// Checks whether a path is already in canonical form.
///
/// Rules: non-empty, starts with `/`, no `//`, no trailing `/` (except
/// the root path itself).
///
/// # Examples
///
/// ```
/// use router_resolver_routes::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/users/123"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("users"));
/// assert!(!is_valid_path("/users/"));
/// assert!(!is_valid_path("/users//123"));
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }
    if path.contains("//") {
        return false;
    }
    path == "/" || !path.ends_with('/')
}

/// Normalizes a path to canonical form.
///
/// Returns `Cow::Borrowed` when the input is already valid, so the
/// common case allocates nothing. Otherwise the path is rebuilt from its
/// non-empty segments:
/// - `source` → `/source`
/// - `/path/` → `/path`
/// - `/path//to` → `/path/to`
///
/// # Examples
///
/// ```
/// use router_resolver_routes::path::normalize_path;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_path("/about"), Cow::Borrowed("/about")));
/// assert_eq!(normalize_path("source"), "/source");
/// assert_eq!(normalize_path("/path//to/"), "/path/to");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_paths() {
        assert!(is_valid_path("/"));
        assert!(is_valid_path("/about"));
        assert!(is_valid_path("/users/123"));

        assert!(!is_valid_path(""));
        assert!(!is_valid_path("about"));
        assert!(!is_valid_path("/about/"));
        assert!(!is_valid_path("/about//page"));
    }

    #[test]
    fn normalize_is_zero_copy_for_valid_input() {
        assert!(matches!(normalize_path("/about"), Cow::Borrowed("/about")));
        assert!(matches!(normalize_path("/"), Cow::Borrowed("/")));
    }

    #[test]
    fn normalize_repairs_common_mistakes() {
        assert_eq!(normalize_path("source"), "/source");
        assert_eq!(normalize_path("/about/"), "/about");
        assert_eq!(normalize_path("/path///to//page"), "/path/to/page");
        assert_eq!(normalize_path(""), "/");
    }
}
