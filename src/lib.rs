//! # glob-navigator
//!
//! The UI-independent core of a declarative router:
//!
//! - **Path Resolution** - Join relative targets onto a base and normalize them
//! - **Glob Matching** - `/user/:id/*` style patterns with optional parameters
//!   and trailing wildcards, compiled once and cached per call site
//! - **Navigation History** - Branching back/forward stacks with a bounded size
//! - **Navigation Direction** - Every navigation classified as deeper,
//!   sideways or higher, ready to drive transition animations
//! - **Shared Navigator** - One history per routing root, shared by handle,
//!   with change listeners
//! - **Nested Scopes** - Relative routes resolved against what the parent
//!   route consumed
//!
//! Rendering, view composition and widgets are left to the embedding UI
//! framework, which calls into this crate.
//!
//! # Quick Start
//!
//! ```
//! use glob_navigator::{GlobMatcher, Navigator, NavigationDirection};
//!
//! let navigator = Navigator::new("/");
//! let mut matcher = GlobMatcher::new();
//!
//! navigator.push("users/42");
//! let matched = matcher.match_path("/users/:id", &navigator.path()).unwrap().unwrap();
//! assert_eq!(matched.params.get("id"), Some("42"));
//!
//! let action = navigator.push("settings").unwrap();
//! assert_eq!(action.current_path, "/users/42/settings");
//! assert_eq!(action.direction, NavigationDirection::Deeper);
//!
//! navigator.go_back(1);
//! assert_eq!(navigator.path(), "/users/42");
//! ```
//!
//! # Feature Flags
//!
//! - `log` (default) - Uses the standard `log` crate for logging
//! - `tracing` - Uses the `tracing` crate for structured logging (mutually exclusive with `log`)

#![cfg_attr(docsrs, feature(doc_cfg))]
// Lints are configured in Cargo.toml [lints] section

// Logging abstraction
pub mod logging;

// Core modules
pub mod action;
pub mod history;
pub mod matcher;
pub mod navigator;
pub mod params;
pub mod resolve;
pub mod scope;

// Error handling
pub mod error;

// Re-export main types for convenient access
pub use action::{NavigationAction, NavigationDirection, NavigationKind};
pub use error::PatternError;
pub use history::{History, DEFAULT_MAX_SIZE};
pub use matcher::{CompiledPattern, GlobMatcher, PatternMatch, Segment};
pub use navigator::{Navigator, NavigatorConfig, RouteChangeEvent, SubscriptionId};
pub use params::RouteParams;
pub use resolve::{normalize, resolve};
pub use scope::{RouteScope, ScopedMatch};
