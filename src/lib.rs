//! # Validity
//!
//! Declarative, rule-based field validation run at form-submission time.
//!
//! A [`Configuration`] maps field selectors to ordered rule lists. On every
//! submission the [`SubmissionController`] walks those selectors in order,
//! runs each field's rules in order, and stops at the first failure, both
//! within a field and across fields. At most one error is ever reported per
//! attempt.
//!
//! The host supplies the live form through the [`Form`] and
//! [`FieldAdapter`] traits and, optionally, a [`Notifier`] for alerts. The
//! engine itself never touches a document.
//!
//! ## Quick Example
//!
//! ```rust
//! use validity::prelude::*;
//!
//! let controller = SubmissionController::from_config(
//!     Configuration::new()
//!         .field("#search", [Rule::required().with_message("Type something first.")])
//!         .field("#email", [Rule::required(), Rule::email()])
//!         .show_alerts(false),
//!     &RuleRegistry::new(),
//! )
//! .expect("all rules resolve");
//!
//! let mut form = MemoryForm::new("newsletter")
//!     .with_field("#search", MemoryField::with_default("search", "Search"))
//!     .with_field("#email", MemoryField::new("email", "a@b.co"));
//!
//! let outcome = controller.run(&mut form);
//! assert!(!outcome.status());
//! assert_eq!(outcome.errors().message(), Some("Type something first."));
//!
//! // the untouched field still shows its placeholder
//! assert_eq!(form.value("#search"), Some("Search"));
//! ```
//!
//! ## Custom rules
//!
//! Any `Fn(&FieldSnapshot) -> bool` is a rule:
//!
//! ```rust
//! use validity::prelude::*;
//!
//! let config = Configuration::new().field(
//!     "#login",
//!     [Rule::predicate(|f: &FieldSnapshot| f.value == "Secret key")
//!         .with_message("Invalid secret key.")],
//! );
//! assert!(config.resolve(&RuleRegistry::new()).is_ok());
//! ```
//!
//! ## Features
//!
//! - `tracing`: debug/trace events from the engine and controller, plus
//!   [`notify::TracingNotifier`].
//! - `serde`: declarative configuration documents via
//!   [`serde_impl::ConfigSpec`], and `Serialize`/`Deserialize` for errors and
//!   snapshots.
//! - `proptest`: strategies and an `Arbitrary` impl in [`testing`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod field;
pub mod form;
pub mod notify;
pub mod predicate;
pub mod registry;
pub mod rule;
pub mod session;
pub mod state;
pub mod testing;

#[cfg(feature = "serde")]
pub mod serde_impl;

// Re-exports
pub use config::{Configuration, Options, ValidationPlan};
pub use controller::SubmissionController;
pub use engine::ValidationEngine;
pub use error::ConfigError;
pub use field::{FieldAdapter, FieldSnapshot, MemoryField};
pub use form::{Form, MemoryForm};
pub use notify::{NoopNotifier, Notifier};
pub use predicate::{Predicate, PredicateExt};
pub use registry::{Messages, RuleRegistry};
pub use rule::{Rule, RuleKind};
pub use session::{Phase, Submission};
pub use state::{ErrorState, FieldError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Configuration, Options, ValidationPlan};
    pub use crate::controller::SubmissionController;
    pub use crate::engine::ValidationEngine;
    pub use crate::error::ConfigError;
    pub use crate::field::{FieldAdapter, FieldSnapshot, MemoryField};
    pub use crate::form::{Form, MemoryForm};
    pub use crate::notify::{NoopNotifier, Notifier};
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::registry::{Messages, RuleRegistry};
    pub use crate::rule::{Rule, RuleKind};
    pub use crate::session::{Phase, Submission};
    pub use crate::state::{ErrorState, FieldError};
}
