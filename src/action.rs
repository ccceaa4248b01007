//! Classified navigation events
//!
//! Every state change of a [`History`](crate::History) is recorded as a
//! [`NavigationAction`]: what kind of operation caused it, and where the new
//! path sits relative to the previous one. Callers driving transition
//! animations typically only look at the [`NavigationDirection`].

use crate::resolve::{parent, segments};

/// The operation that produced a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationKind {
    /// `navigate`, including replace navigations
    Push,
    /// `go_back`
    Back,
    /// `go_forward`
    Forward,
}

/// Position of the new path relative to the previous path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationDirection {
    /// The new path is nested below the previous one
    Deeper,
    /// Same depth, same parent
    Sideways,
    /// Anything else: an ancestor or an unrelated branch
    Higher,
}

impl NavigationDirection {
    /// Classify a move from `previous` to `current`.
    ///
    /// Both paths are expected to be normalized (see [`resolve()`](crate::resolve())).
    ///
    /// # Example
    ///
    /// ```
    /// use glob_navigator::NavigationDirection;
    ///
    /// assert_eq!(NavigationDirection::classify("/", "/hello"), NavigationDirection::Deeper);
    /// assert_eq!(NavigationDirection::classify("/hello", "/world"), NavigationDirection::Sideways);
    /// assert_eq!(NavigationDirection::classify("/hello", "/"), NavigationDirection::Higher);
    /// ```
    pub fn classify(previous: &str, current: &str) -> Self {
        if current.len() > previous.len() && is_descendant(previous, current) {
            return NavigationDirection::Deeper;
        }

        if segments(previous).count() == segments(current).count()
            && parent(previous) == parent(current)
        {
            return NavigationDirection::Sideways;
        }

        NavigationDirection::Higher
    }
}

fn is_descendant(ancestor: &str, path: &str) -> bool {
    if ancestor == "/" {
        return true;
    }
    path.strip_prefix(ancestor)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// A recorded navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationAction {
    /// Operation that caused the navigation
    pub kind: NavigationKind,
    /// Position of `current_path` relative to `previous_path`
    pub direction: NavigationDirection,
    /// Path before the navigation
    pub previous_path: String,
    /// Path after the navigation
    pub current_path: String,
}

impl NavigationAction {
    /// Record a navigation, classifying its direction.
    pub fn new(kind: NavigationKind, previous_path: String, current_path: String) -> Self {
        Self {
            kind,
            direction: NavigationDirection::classify(&previous_path, &current_path),
            previous_path,
            current_path,
        }
    }
}
