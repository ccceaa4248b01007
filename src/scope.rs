//! Nested route scopes
//!
//! Routes declared inside a matched route are relative to the part of the
//! path the parent consumed. A [`RouteScope`] carries that base: a glob is
//! resolved against it, matched against the full current path, and the
//! consumed prefix becomes the base of the child scope.
//!
//! ```
//! use glob_navigator::{GlobMatcher, RouteScope};
//!
//! let mut users = GlobMatcher::new();
//! let mut profile = GlobMatcher::new();
//!
//! let path = "/users/42/profile";
//! let parent = RouteScope::root()
//!     .route(&mut users, "users/:id/*", path)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(parent.scope.base(), "/users/42");
//!
//! let child = parent.scope.route(&mut profile, "profile", path).unwrap();
//! assert!(child.is_some());
//! ```

use crate::error::PatternError;
use crate::matcher::{CompiledPattern, GlobMatcher, PatternMatch};
use crate::resolve::resolve;
use crate::trace_log;

/// Base path that relative globs are resolved against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteScope {
    base: String,
}

/// A match produced inside a scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedMatch {
    /// The underlying glob match
    pub matched: PatternMatch,
    /// Scope for routes nested inside the matched route
    pub scope: RouteScope,
}

impl RouteScope {
    /// The top-level scope, based at `/`
    pub fn root() -> Self {
        Self {
            base: "/".to_string(),
        }
    }

    /// A scope based at `base`, normalized against the root
    pub fn new(base: &str) -> Self {
        Self {
            base: resolve("/", base),
        }
    }

    /// The base path of this scope
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Resolve a glob relative to this scope
    ///
    /// Absolute globs are kept as they are (apart from normalization).
    pub fn resolve_glob(&self, glob: &str) -> String {
        resolve(&self.base, glob)
    }

    /// Resolve `glob` against this scope, then match it against `path`
    /// through `matcher`'s cache
    pub fn route(
        &self,
        matcher: &mut GlobMatcher,
        glob: &str,
        path: &str,
    ) -> Result<Option<ScopedMatch>, PatternError> {
        let resolved = self.resolve_glob(glob);
        let matched = matcher.match_path(&resolved, path)?;
        Ok(matched.map(|matched| self.child(&resolved, matched)))
    }

    /// Match `path` against `globs` in order; the first match wins
    ///
    /// Returns the index of the winning glob along with its match. All globs
    /// up to the winner are compiled, so a malformed one fails the lookup.
    pub fn first_match(
        &self,
        globs: &[&str],
        path: &str,
    ) -> Result<Option<(usize, ScopedMatch)>, PatternError> {
        for (index, glob) in globs.iter().enumerate() {
            let resolved = self.resolve_glob(glob);
            if let Some(matched) = CompiledPattern::compile(&resolved)?.matches(path) {
                return Ok(Some((index, self.child(&resolved, matched))));
            }
        }
        Ok(None)
    }

    fn child(&self, resolved: &str, matched: PatternMatch) -> ScopedMatch {
        trace_log!(
            "Glob '{}' matched in scope '{}', child scope '{}'",
            resolved,
            self.base,
            matched.matched_path
        );
        ScopedMatch {
            scope: RouteScope {
                base: matched.matched_path.clone(),
            },
            matched,
        }
    }
}

impl Default for RouteScope {
    fn default() -> Self {
        Self::root()
    }
}
