//! Path normalization module
//!
//! Request paths are matched case-insensitively and without a trailing
//! slash; replacements are used verbatim and never pass through here.

/// Normalize a request path for matching
///
/// Lower-cases the path and strips one trailing slash. Total: any string in,
/// a matchable path out.
pub fn normalize(path: &str) -> String {
    strip_trailing_slash(&path.to_lowercase()).to_string()
}

/// Strip exactly one trailing slash, leaving the root path untouched
///
/// Shared with origin-path handling, which keeps its casing.
pub fn strip_trailing_slash(path: &str) -> &str {
    if path == "/" {
        return path;
    }
    path.strip_suffix('/').unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("/A/B"), "/a/b");
        assert_eq!(normalize("/Old-Blog"), "/old-blog");
    }

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(normalize("/a/b/"), "/a/b");
        assert_eq!(normalize("/a/b/"), normalize("/a/b"));
    }

    #[test]
    fn test_normalize_root_unchanged() {
        assert_eq!(normalize("/"), "/");
    }

    #[test]
    fn test_normalize_strips_only_one_slash() {
        // Repeated trailing slashes shrink one per pass, not all at once
        assert_eq!(normalize("/a//"), "/a/");
        assert_eq!(normalize("/a/"), "/a");
        assert_eq!(strip_trailing_slash("//"), "/");
    }

    #[test]
    fn test_normalize_idempotent() {
        // Holds for any path without repeated trailing slashes; see
        // test_normalize_strips_only_one_slash for the multi-slash case
        for path in ["/", "/A/B/", "/already-clean", ""] {
            let once = normalize(path);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_strip_trailing_slash_edge_inputs() {
        assert_eq!(strip_trailing_slash(""), "");
        assert_eq!(strip_trailing_slash("/"), "/");
        assert_eq!(strip_trailing_slash("no-slash"), "no-slash");
        // Casing is preserved here, unlike full normalization
        assert_eq!(strip_trailing_slash("/Files/"), "/Files");
    }
}
