//! Path resolution
//!
//! Joins relative targets onto a base path and normalizes the result.
//! Every function here is pure and total: malformed input degrades to the
//! closest normalized path instead of failing.

/// Resolve `target` against `base`.
///
/// A target starting with `/` is absolute and ignores `base`. Otherwise it
/// is joined to `base` with a `/`. The joined path is then normalized:
///
/// - repeated slashes collapse into one
/// - `.` segments are dropped
/// - `..` removes the previous segment (a no-op at the root)
/// - a trailing slash is removed, except for the root path itself
///
/// # Example
///
/// ```
/// use glob_navigator::resolve;
///
/// assert_eq!(resolve("/", "///unnecessary///slashes"), "/unnecessary/slashes");
/// assert_eq!(resolve("/settings/user", ".."), "/settings");
/// assert_eq!(resolve("/news", "/weather"), "/weather");
/// ```
pub fn resolve(base: &str, target: &str) -> String {
    let mut stack: Vec<&str> = Vec::new();

    let sources: [&str; 2] = if target.starts_with('/') {
        ["", target]
    } else {
        [base, target]
    };

    for segment in sources.iter().flat_map(|s| s.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            segment => stack.push(segment),
        }
    }

    if stack.is_empty() {
        return "/".to_string();
    }

    let mut resolved = String::with_capacity(stack.iter().map(|s| s.len() + 1).sum());
    for segment in stack {
        resolved.push('/');
        resolved.push_str(segment);
    }
    resolved
}

/// Normalize a path on its own, treating it as relative to the root.
pub fn normalize(path: &str) -> String {
    resolve("/", path)
}

/// Iterate over the non-empty segments of a path.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// The parent of a normalized path, `/` for top-level paths and the root.
pub fn parent(path: &str) -> &str {
    match path.trim_end_matches('/').rfind('/') {
        Some(0) | None => "/",
        Some(pos) => &path[..pos],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_collapses_slashes() {
        assert_eq!(resolve("/", "///unnecessary///slashes"), "/unnecessary/slashes");
    }

    #[test]
    fn test_resolve_relative_target() {
        assert_eq!(resolve("/", "non/absolute"), "/non/absolute");
        assert_eq!(resolve("/news", "article/1"), "/news/article/1");
    }

    #[test]
    fn test_resolve_strips_trailing_slash() {
        assert_eq!(resolve("/", "home//"), "/home");
        assert_eq!(resolve("/", "/"), "/");
        assert_eq!(resolve("/", ""), "/");
    }

    #[test]
    fn test_resolve_absolute_target_ignores_base() {
        assert_eq!(resolve("/news/article", "/settings/user"), "/settings/user");
    }

    #[test]
    fn test_resolve_dot_segments() {
        assert_eq!(resolve("/settings/user", ".."), "/settings");
        assert_eq!(resolve("/settings/user", "../profile"), "/settings/profile");
        assert_eq!(resolve("/settings", "./user/."), "/settings/user");
    }

    #[test]
    fn test_resolve_parent_of_root_is_root() {
        assert_eq!(resolve("/", ".."), "/");
        assert_eq!(resolve("/a", "../../../b"), "/b");
    }

    #[test]
    fn test_resolve_relative_base() {
        assert_eq!(resolve("news", "today"), "/news/today");
        assert_eq!(resolve("", ""), "/");
    }

    #[test]
    fn test_parent() {
        assert_eq!(parent("/"), "/");
        assert_eq!(parent("/movies"), "/");
        assert_eq!(parent("/movies/genres"), "/movies");
        assert_eq!(parent("/a/b/c"), "/a/b");
    }

    #[test]
    fn test_segments_skip_empty() {
        let collected: Vec<&str> = segments("//a/b//c/").collect();
        assert_eq!(collected, vec!["a", "b", "c"]);
        assert_eq!(segments("/").count(), 0);
    }
}
