//! Route glob compilation and matching
//!
//! A glob is split once into segments:
//!
//! - `users` - static text that must match a path segment exactly
//! - `:id` - a parameter capturing one non-empty path segment
//! - `:id?` - an optional parameter capturing zero or one segment
//! - a trailing `*` (alone or as `/*`) accepting any remainder, even none
//!
//! Matching is segment-based and case-sensitive, so `/movie` never matches
//! `/movies`. Each path gets a single left-to-right pass; there is no
//! backtracking.

use crate::error::PatternError;
use crate::params::RouteParams;
use crate::{error_log, trace_log};

/// A single segment in a compiled glob
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Static text that must match exactly
    Static(String),
    /// Parameter that captures a value
    Param {
        /// Parameter name, without the `:` and `?` markers
        name: String,
        /// Whether the segment may be absent
        optional: bool,
    },
}

impl Segment {
    /// Parse a segment of `glob`
    ///
    /// - "users" -> Static("users")
    /// - ":id" -> Param { name: "id", optional: false }
    /// - ":id?" -> Param { name: "id", optional: true }
    fn parse(glob: &str, raw: &str) -> Result<Self, PatternError> {
        let Some(rest) = raw.strip_prefix(':') else {
            return Ok(Segment::Static(raw.to_string()));
        };

        let (name, optional) = match rest.strip_suffix('?') {
            Some(name) => (name, true),
            None => (rest, false),
        };
        validate_parameter_name(glob, name)?;

        Ok(Segment::Param {
            name: name.to_string(),
            optional,
        })
    }
}

/// A parameter name starts with a letter and is alphanumeric.
///
/// Letters and digits are the Unicode ones, so `:café` is accepted.
fn validate_parameter_name(glob: &str, name: &str) -> Result<(), PatternError> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(PatternError::EmptyParameterName {
            glob: glob.to_string(),
        });
    };

    let offending = if first.is_alphabetic() {
        chars.find(|c| !c.is_alphanumeric())
    } else {
        Some(first)
    };

    match offending {
        Some(offending) => Err(PatternError::BadParameterName {
            glob: glob.to_string(),
            name: name.to_string(),
            offending,
        }),
        None => Ok(()),
    }
}

/// Result of matching a path against a glob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// Parameters present in the path
    pub params: RouteParams,
    /// The path prefix consumed by the static and parameter segments,
    /// excluding anything a wildcard accepted
    pub matched_path: String,
    /// Whether a wildcard accepted at least one extra segment
    pub has_remainder: bool,
}

/// An immutable, compiled route glob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    source: String,
    segments: Vec<Segment>,
    wildcard: bool,
}

impl CompiledPattern {
    /// Compile a glob
    ///
    /// Fails when a declared parameter name is empty, does not start with a
    /// letter, or contains a non-alphanumeric character.
    ///
    /// # Example
    ///
    /// ```
    /// use glob_navigator::CompiledPattern;
    ///
    /// let pattern = CompiledPattern::compile("/user/:id/*").unwrap();
    /// let matched = pattern.matches("/user/5/settings").unwrap();
    ///
    /// assert_eq!(matched.params.get("id"), Some("5"));
    /// assert_eq!(matched.matched_path, "/user/5");
    ///
    /// assert!(CompiledPattern::compile("/:user-id").is_err());
    /// ```
    pub fn compile(glob: &str) -> Result<Self, PatternError> {
        let (body, wildcard) = match glob.strip_suffix('*') {
            Some(body) => (body, true),
            None => (glob, false),
        };

        let segments = match body
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|raw| Segment::parse(glob, raw))
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(segments) => segments,
            Err(err) => {
                error_log!("Failed to compile glob: {}", err);
                return Err(err);
            }
        };

        trace_log!(
            "Compiled glob '{}' into {} segments (wildcard: {})",
            glob,
            segments.len(),
            wildcard
        );

        Ok(Self {
            source: glob.to_string(),
            segments,
            wildcard,
        })
    }

    /// The glob this pattern was compiled from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Compiled segments, excluding the wildcard
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the glob ends with a wildcard
    pub fn has_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Names of all declared parameters, in glob order
    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param { name, .. } => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Match this pattern against a path
    ///
    /// Returns `None` when the path does not match. Paths must be absolute.
    /// The root glob `/` only matches the path `/`. Otherwise trailing
    /// slashes are ignored, so `/hello/` and `/hello//` behave like `/hello`.
    /// Empty segments inside the path are kept and never fill a parameter.
    pub fn matches(&self, path: &str) -> Option<PatternMatch> {
        let trimmed = path.strip_prefix('/')?;

        if self.segments.is_empty() && !self.wildcard {
            return trimmed.is_empty().then(|| PatternMatch {
                params: RouteParams::new(),
                matched_path: "/".to_string(),
                has_remainder: false,
            });
        }

        let trimmed = trimmed.trim_end_matches('/');
        let path_segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        let mut params = RouteParams::new();
        let mut consumed = 0;

        for segment in &self.segments {
            let next = path_segments.get(consumed).copied();

            match segment {
                Segment::Static(expected) => {
                    if next != Some(expected.as_str()) {
                        return None;
                    }
                    consumed += 1;
                }
                Segment::Param { name, optional } => match next {
                    Some(value) if !value.is_empty() => {
                        params.insert(name.clone(), value.to_string());
                        consumed += 1;
                    }
                    _ if *optional => {}
                    _ => return None,
                },
            }
        }

        let remainder = &path_segments[consumed..];
        if !self.wildcard && !remainder.is_empty() {
            return None;
        }

        Some(PatternMatch {
            params,
            matched_path: format!("/{}", path_segments[..consumed].join("/")),
            has_remainder: remainder.iter().any(|s| !s.is_empty()),
        })
    }
}

/// Matcher owning a single-entry cache of the last compiled glob
///
/// One matcher is meant to live at one call site, where the glob rarely
/// changes between calls. Asking for a different glob replaces the cached
/// pattern.
#[derive(Debug, Clone, Default)]
pub struct GlobMatcher {
    cached: Option<CompiledPattern>,
    compilations: usize,
}

impl GlobMatcher {
    /// Create a matcher with an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `glob`, reusing the cached pattern when the source is equal
    ///
    /// A failed compilation keeps the previously cached pattern.
    pub fn compile(&mut self, glob: &str) -> Result<&CompiledPattern, PatternError> {
        let pattern = match self.cached.take() {
            Some(pattern) if pattern.source() == glob => {
                trace_log!("Glob cache hit for '{}'", glob);
                pattern
            }
            previous => {
                trace_log!("Glob cache miss for '{}'", glob);
                match CompiledPattern::compile(glob) {
                    Ok(pattern) => {
                        self.compilations += 1;
                        pattern
                    }
                    Err(err) => {
                        self.cached = previous;
                        return Err(err);
                    }
                }
            }
        };

        let pattern: &CompiledPattern = self.cached.insert(pattern);
        Ok(pattern)
    }

    /// Compile `glob` through the cache and match it against `path`
    pub fn match_path(
        &mut self,
        glob: &str,
        path: &str,
    ) -> Result<Option<PatternMatch>, PatternError> {
        Ok(self.compile(glob)?.matches(path))
    }

    /// The currently cached pattern, if any
    pub fn cached(&self) -> Option<&CompiledPattern> {
        self.cached.as_ref()
    }

    /// Number of times this matcher actually compiled a glob
    pub fn compilations(&self) -> usize {
        self.compilations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> RouteParams {
        pairs.iter().copied().collect()
    }

    fn matched(glob: &str, path: &str) -> Option<PatternMatch> {
        CompiledPattern::compile(glob).unwrap().matches(path)
    }

    #[test]
    fn test_segment_parsing() {
        assert_eq!(
            Segment::parse("/users", "users").unwrap(),
            Segment::Static("users".to_string())
        );
        assert_eq!(
            Segment::parse("/:id", ":id").unwrap(),
            Segment::Param {
                name: "id".to_string(),
                optional: false
            }
        );
        assert_eq!(
            Segment::parse("/:id?", ":id?").unwrap(),
            Segment::Param {
                name: "id".to_string(),
                optional: true
            }
        );
    }

    #[test]
    fn test_root_matching() {
        let result = matched("/", "/").unwrap();
        assert!(result.params.is_empty());
        assert_eq!(result.matched_path, "/");

        assert!(matched("/", "/hello").is_none());
    }

    #[test]
    fn test_root_only_matches_single_slash() {
        assert!(matched("/", "").is_none());
        assert!(matched("/", "//").is_none());
        assert!(matched("/", "///").is_none());
    }

    #[test]
    fn test_relative_path_never_matches() {
        assert!(matched("/*", "").is_none());
        assert!(matched("/:id?", "").is_none());
        assert!(matched("/hello", "hello").is_none());
    }

    #[test]
    fn test_repeated_trailing_slashes_are_ignored() {
        for path in ["/hello", "/hello/", "/hello//"] {
            let result = matched("/hello", path).unwrap_or_else(|| panic!("{path}"));
            assert_eq!(result.matched_path, "/hello");
        }

        let result = matched("/:id", "/hello//").unwrap();
        assert_eq!(result.params, params(&[("id", "hello")]));
        assert!(!matched("/files/*", "/files//").unwrap().has_remainder);
    }

    #[test]
    fn test_wildcard_matching() {
        let result = matched("/*", "/hello/world").unwrap();
        assert!(result.params.is_empty());
        assert_eq!(result.matched_path, "/");
        assert!(result.has_remainder);

        assert!(matched("*", "/").is_some());
        assert!(!matched("/*", "/").unwrap().has_remainder);
    }

    #[test]
    fn test_single_parameter() {
        let result = matched("/:id", "/hello").unwrap();
        assert_eq!(result.params, params(&[("id", "hello")]));
        assert_eq!(result.matched_path, "/hello");

        assert!(matched("/:id", "/").is_none());
        assert!(matched("/:id", "/hello/world").is_none());
    }

    #[test]
    fn test_optional_parameter_absent() {
        let result = matched("/:id?", "/").unwrap();
        assert!(result.params.is_empty());
        assert!(!result.params.contains("id"));
        assert_eq!(result.matched_path, "/");
    }

    #[test]
    fn test_optional_parameter_present() {
        let result = matched("/:id?", "/hello").unwrap();
        assert_eq!(result.params, params(&[("id", "hello")]));
    }

    #[test]
    fn test_multiple_parameters() {
        let result = matched("/:foo/:bar", "/hello/world").unwrap();
        assert_eq!(result.params, params(&[("foo", "hello"), ("bar", "world")]));
    }

    #[test]
    fn test_parameter_with_wildcard_reports_consumed_prefix() {
        let result = matched("/user/:id/*", "/user/5/settings").unwrap();
        assert_eq!(result.params, params(&[("id", "5")]));
        assert_eq!(result.matched_path, "/user/5");
        assert!(result.has_remainder);

        let result = matched("/news/*", "/news/article/1").unwrap();
        assert_eq!(result.matched_path, "/news");
    }

    #[test]
    fn test_non_matching_paths() {
        assert!(matched("/hello", "/world").is_none());
        assert!(matched("/movie", "/movies").is_none());
        assert!(matched("/movie/*", "/movies").is_none());
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(matched("/Movies", "/movies").is_none());
    }

    #[test]
    fn test_trailing_slash_is_absent_optional() {
        let result = matched("/:foo/:bar?", "/hello/").unwrap();
        assert_eq!(result.params, params(&[("foo", "hello")]));
        assert_eq!(result.matched_path, "/hello");
    }

    #[test]
    fn test_empty_inner_segment_does_not_fill_parameter() {
        assert!(matched("/a/:id", "/a//b").is_none());
    }

    #[test]
    fn test_compile_errors() {
        assert_eq!(
            CompiledPattern::compile("/:0abc").unwrap_err(),
            PatternError::BadParameterName {
                glob: "/:0abc".to_string(),
                name: "0abc".to_string(),
                offending: '0',
            }
        );
        assert_eq!(
            CompiledPattern::compile("/:user-id").unwrap_err(),
            PatternError::BadParameterName {
                glob: "/:user-id".to_string(),
                name: "user-id".to_string(),
                offending: '-',
            }
        );
        assert!(matches!(
            CompiledPattern::compile("/users/:?"),
            Err(PatternError::EmptyParameterName { .. })
        ));
    }

    #[test]
    fn test_unicode_parameter_names() {
        let result = matched("/:café", "/crème").unwrap();
        assert_eq!(result.params, params(&[("café", "crème")]));
        assert!(CompiledPattern::compile("/:名前2").is_ok());

        assert!(matches!(
            CompiledPattern::compile("/:٣abc"),
            Err(PatternError::BadParameterName { offending: '٣', .. })
        ));
    }

    #[test]
    fn test_valid_globs_compile() {
        for glob in ["/:id", "/:id?", "/:a/:b?", "/", "*", "/files/*"] {
            assert!(CompiledPattern::compile(glob).is_ok(), "{glob}");
        }

        let pattern = CompiledPattern::compile("/:a/static/:b?/*").unwrap();
        assert_eq!(pattern.parameter_names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(pattern.has_wildcard());
    }

    #[test]
    fn test_matcher_reuses_cached_pattern() {
        let mut matcher = GlobMatcher::new();

        assert!(matcher.match_path("/:id", "/a").unwrap().is_some());
        assert!(matcher.match_path("/:id", "/b").unwrap().is_some());
        assert_eq!(matcher.compilations(), 1);

        assert!(matcher.match_path("/users/:id", "/a").unwrap().is_none());
        assert_eq!(matcher.compilations(), 2);
        assert_eq!(matcher.cached().unwrap().source(), "/users/:id");
    }

    #[test]
    fn test_matcher_keeps_cache_on_error() {
        let mut matcher = GlobMatcher::new();
        matcher.compile("/:id").unwrap();

        assert!(matcher.compile("/:user-id").is_err());
        assert_eq!(matcher.cached().unwrap().source(), "/:id");
        assert_eq!(matcher.compilations(), 1);
    }
}
