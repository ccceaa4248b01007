//! Navigation history management
//!
//! Manages a branching navigation history with:
//! - Back/forward stacks
//! - Relative target resolution against the current path
//! - Forward branch discarded on every new navigation
//! - Configurable history limits
//! - A classified record of the last navigation

use crate::action::{NavigationAction, NavigationKind};
use crate::resolve::{normalize, resolve};
use crate::{debug_log, trace_log, warn_log};

/// Default maximum number of entries on the history stack
pub const DEFAULT_MAX_SIZE: usize = 1000;

/// Navigation history stack
///
/// The history stack is never empty and its last element is the current
/// path.
///
/// # Example
///
/// ```
/// use glob_navigator::History;
///
/// let mut history = History::new("/");
/// history.navigate("news", false);
/// history.navigate("/settings/user", false);
/// history.navigate("..", false);
/// assert_eq!(history.path(), "/settings");
///
/// history.go_back(1);
/// assert_eq!(history.path(), "/settings/user");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    /// Visited paths, oldest first
    history_stack: Vec<String>,
    /// Paths available for forward navigation, most recently left last
    forward_stack: Vec<String>,
    /// Last recorded navigation
    last_action: Option<NavigationAction>,
    /// Maximum history size (0 = unlimited)
    max_size: usize,
}

impl History {
    /// Create a new history seeded with `initial_path`
    pub fn new(initial_path: impl AsRef<str>) -> Self {
        Self::with_max_size(initial_path, DEFAULT_MAX_SIZE)
    }

    /// Create with custom max size
    pub fn with_max_size(initial_path: impl AsRef<str>, max_size: usize) -> Self {
        Self {
            history_stack: vec![normalize(initial_path.as_ref())],
            forward_stack: Vec::new(),
            last_action: None,
            max_size,
        }
    }

    /// Get current path
    pub fn path(&self) -> &str {
        self.history_stack
            .last()
            .map(String::as_str)
            .unwrap_or("/")
    }

    /// Navigate to `target`, resolved against the current path
    ///
    /// With `replace` the current entry is overwritten instead of pushing a
    /// new one. Navigating to the current path does nothing and returns
    /// `None`.
    pub fn navigate(&mut self, target: &str, replace: bool) -> Option<&NavigationAction> {
        let previous = self.path().to_string();
        let resolved = resolve(&previous, target);

        if resolved == previous {
            #[cfg(debug_assertions)]
            warn_log!("Navigation to '{}' ignored: already the current path", resolved);
            return None;
        }

        debug_log!(
            "Navigating from '{}' to '{}' (replace: {})",
            previous,
            resolved,
            replace
        );

        self.forward_stack.clear();
        if replace {
            self.history_stack.pop();
        }
        self.history_stack.push(resolved.clone());
        self.enforce_size_limit();

        self.record(NavigationKind::Push, previous, resolved)
    }

    /// Go back `count` entries
    ///
    /// `count` is clamped so the oldest entry always remains. Does nothing
    /// and returns `None` when there is nothing to go back to.
    pub fn go_back(&mut self, count: usize) -> Option<&NavigationAction> {
        let count = count.min(self.history_stack.len() - 1);
        if count == 0 {
            trace_log!("go_back ignored: no previous entry");
            return None;
        }

        let previous = self.path().to_string();
        for _ in 0..count {
            if let Some(path) = self.history_stack.pop() {
                self.forward_stack.push(path);
            }
        }
        let current = self.path().to_string();

        debug_log!("Went back {} from '{}' to '{}'", count, previous, current);
        self.record(NavigationKind::Back, previous, current)
    }

    /// Go forward `count` entries
    ///
    /// `count` is clamped to the forward stack size. Does nothing and
    /// returns `None` when there is nothing to go forward to.
    pub fn go_forward(&mut self, count: usize) -> Option<&NavigationAction> {
        let count = count.min(self.forward_stack.len());
        if count == 0 {
            trace_log!("go_forward ignored: no forward entry");
            return None;
        }

        let previous = self.path().to_string();
        for _ in 0..count {
            if let Some(path) = self.forward_stack.pop() {
                self.history_stack.push(path);
            }
        }
        let current = self.path().to_string();

        debug_log!("Went forward {} from '{}' to '{}'", count, previous, current);
        self.record(NavigationKind::Forward, previous, current)
    }

    /// Collapse the history to the current path
    ///
    /// Drops the forward stack and the last action.
    pub fn clear(&mut self) {
        let excess = self.history_stack.len() - 1;
        self.history_stack.drain(..excess);
        self.forward_stack.clear();
        self.last_action = None;
        trace_log!("Cleared history, current path '{}'", self.path());
    }

    /// Check if can go back
    pub fn can_go_back(&self) -> bool {
        self.history_stack.len() > 1
    }

    /// Check if can go forward
    pub fn can_go_forward(&self) -> bool {
        !self.forward_stack.is_empty()
    }

    /// Last recorded navigation, `None` before any navigation or after `clear`
    pub fn last_action(&self) -> Option<&NavigationAction> {
        self.last_action.as_ref()
    }

    /// Visited paths, oldest first; the last one is the current path
    pub fn history_stack(&self) -> &[String] {
        &self.history_stack
    }

    /// Paths available for forward navigation, next one last
    pub fn forward_stack(&self) -> &[String] {
        &self.forward_stack
    }

    /// Maximum history size (0 = unlimited)
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Get history length
    pub fn len(&self) -> usize {
        self.history_stack.len()
    }

    /// Always false: the history is seeded with an initial path
    pub fn is_empty(&self) -> bool {
        self.history_stack.is_empty()
    }

    fn record(
        &mut self,
        kind: NavigationKind,
        previous: String,
        current: String,
    ) -> Option<&NavigationAction> {
        let action = NavigationAction::new(kind, previous, current);
        trace_log!("Recorded {:?} navigation ({:?})", action.kind, action.direction);
        let action: &NavigationAction = self.last_action.insert(action);
        Some(action)
    }

    /// Enforce maximum size limit
    fn enforce_size_limit(&mut self) {
        if self.max_size > 0 && self.history_stack.len() > self.max_size {
            // Remove oldest entries; the current path is last and survives
            let excess = self.history_stack.len() - self.max_size;
            self.history_stack.drain(..excess);
            trace_log!("Dropped {} oldest history entries", excess);
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new("/")
    }
}
