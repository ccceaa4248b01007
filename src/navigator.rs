//! Shared navigator handle
//!
//! A [`Navigator`] is created once by a routing root and cloned into every
//! component that needs to read or change the current path. All clones point
//! to the same [`History`]; listeners registered with
//! [`Navigator::subscribe`] are told about every state change.
//!
//! The handle is single-threaded (`Rc`-based). Code that needs a history
//! across threads should put a [`History`] behind its own lock instead.

use crate::action::NavigationAction;
use crate::history::{History, DEFAULT_MAX_SIZE};
use crate::resolve::normalize;
use crate::{info_log, trace_log};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// Event delivered to listeners after a state change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteChangeEvent {
    /// Current path after the change
    pub path: String,
    /// The recorded navigation, `None` after `clear`
    pub action: Option<NavigationAction>,
}

/// Identifier returned by [`Navigator::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&RouteChangeEvent)>;

/// Navigator configuration
///
/// # Example
///
/// ```
/// use glob_navigator::{Navigator, NavigatorConfig};
///
/// let navigator = NavigatorConfig::new()
///     .initial_path("/dashboard")
///     .max_history(50)
///     .build();
///
/// assert_eq!(navigator.path(), "/dashboard");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorConfig {
    /// Path the history is seeded with
    pub initial_path: String,
    /// Maximum history size (0 = unlimited)
    pub max_history: usize,
}

impl NavigatorConfig {
    /// Create a configuration starting at `/`
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial path; it is normalized
    pub fn initial_path(mut self, path: impl AsRef<str>) -> Self {
        self.initial_path = normalize(path.as_ref());
        self
    }

    /// Set the maximum history size
    pub fn max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history;
        self
    }

    /// Build a navigator from this configuration
    pub fn build(self) -> Navigator {
        Navigator::with_config(self)
    }
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            initial_path: "/".to_string(),
            max_history: DEFAULT_MAX_SIZE,
        }
    }
}

struct Shared {
    history: RefCell<History>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
    /// Events waiting for delivery, oldest first
    pending: RefCell<VecDeque<RouteChangeEvent>>,
    /// Set while listeners are being called
    notifying: Cell<bool>,
}

/// Cloneable handle over a shared navigation history
#[derive(Clone)]
pub struct Navigator {
    shared: Rc<Shared>,
}

impl Navigator {
    /// Create a navigator seeded with `initial_path`
    pub fn new(initial_path: impl AsRef<str>) -> Self {
        NavigatorConfig::new().initial_path(initial_path).build()
    }

    /// Create a navigator from a configuration
    pub fn with_config(config: NavigatorConfig) -> Self {
        info_log!(
            "Creating navigator at '{}' (max history: {})",
            config.initial_path,
            config.max_history
        );
        Self {
            shared: Rc::new(Shared {
                history: RefCell::new(History::with_max_size(
                    &config.initial_path,
                    config.max_history,
                )),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                pending: RefCell::new(VecDeque::new()),
                notifying: Cell::new(false),
            }),
        }
    }

    /// Navigate to `path`, resolved against the current path
    ///
    /// Returns the recorded action, or `None` when `path` resolves to the
    /// current path.
    pub fn navigate(&self, path: &str, replace: bool) -> Option<NavigationAction> {
        let action = self
            .shared
            .history
            .borrow_mut()
            .navigate(path, replace)
            .cloned();
        self.notify_if(action)
    }

    /// Navigate by pushing a new entry
    pub fn push(&self, path: &str) -> Option<NavigationAction> {
        self.navigate(path, false)
    }

    /// Navigate by replacing the current entry
    pub fn replace(&self, path: &str) -> Option<NavigationAction> {
        self.navigate(path, true)
    }

    /// Go back `count` entries (clamped)
    pub fn go_back(&self, count: usize) -> Option<NavigationAction> {
        let action = self.shared.history.borrow_mut().go_back(count).cloned();
        self.notify_if(action)
    }

    /// Go forward `count` entries (clamped)
    pub fn go_forward(&self, count: usize) -> Option<NavigationAction> {
        let action = self.shared.history.borrow_mut().go_forward(count).cloned();
        self.notify_if(action)
    }

    /// Collapse the history to the current path
    pub fn clear(&self) {
        self.shared.history.borrow_mut().clear();
        self.notify(None);
    }

    /// Get current path
    pub fn path(&self) -> String {
        self.shared.history.borrow().path().to_string()
    }

    /// Check if can go back
    pub fn can_go_back(&self) -> bool {
        self.shared.history.borrow().can_go_back()
    }

    /// Check if can go forward
    pub fn can_go_forward(&self) -> bool {
        self.shared.history.borrow().can_go_forward()
    }

    /// Last recorded navigation
    pub fn last_action(&self) -> Option<NavigationAction> {
        self.shared.history.borrow().last_action().cloned()
    }

    /// Snapshot of the underlying history
    pub fn history(&self) -> History {
        self.shared.history.borrow().clone()
    }

    /// Register a listener called after every state change
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&RouteChangeEvent) + 'static,
    {
        let id = SubscriptionId(self.shared.next_id.get());
        self.shared.next_id.set(id.0 + 1);

        self.shared
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        trace_log!("Registered navigation listener {:?}", id);
        id
    }

    /// Remove a listener; returns whether it was registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.shared.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        before != listeners.len()
    }

    /// Whether two handles share the same history
    pub fn ptr_eq(&self, other: &Navigator) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }

    fn notify_if(&self, action: Option<NavigationAction>) -> Option<NavigationAction> {
        if action.is_some() {
            self.notify(action.clone());
        }
        action
    }

    fn notify(&self, action: Option<NavigationAction>) {
        self.shared.pending.borrow_mut().push_back(RouteChangeEvent {
            path: self.path(),
            action,
        });

        // A listener navigating again lands here while a round is running.
        // Its event is queued behind the current one so every listener sees
        // the changes in the order they happened.
        if self.shared.notifying.replace(true) {
            trace_log!("Queued nested navigation event");
            return;
        }

        while let Some(event) = self.next_pending() {
            // Listeners may navigate or subscribe, so none of the cells stay
            // borrowed while they run.
            let listeners: Vec<Listener> = self
                .shared
                .listeners
                .borrow()
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect();

            for listener in listeners {
                listener(&event);
            }
        }

        self.shared.notifying.set(false);
    }

    fn next_pending(&self) -> Option<RouteChangeEvent> {
        self.shared.pending.borrow_mut().pop_front()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::with_config(NavigatorConfig::default())
    }
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("history", &*self.shared.history.borrow())
            .field("listeners", &self.shared.listeners.borrow().len())
            .finish()
    }
}
