//! Configuration errors
//!
//! A failing rule is never an error in this sense; it is recorded in the
//! [`ErrorState`](crate::state::ErrorState) and reported through callbacks.
//! `ConfigError` covers configurations that cannot be run at all, and is
//! raised while resolving rules, before any field is touched.

use std::fmt;

/// Error returned when a configuration cannot be resolved.
///
/// # Examples
///
/// ```rust
/// use validity::prelude::*;
///
/// let err = Configuration::new()
///     .field("#name", [Rule::named("bogus")])
///     .resolve(&RuleRegistry::new())
///     .unwrap_err();
///
/// assert_eq!(
///     err,
///     ConfigError::UnknownRule {
///         selector: Some("#name".to_string()),
///         index: 0,
///         name: "bogus".to_string(),
///     }
/// );
/// assert_eq!(err.to_string(), "unknown rule 'bogus' (rule 0 of '#name')");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A named rule has no registered predicate.
    UnknownRule {
        /// Selector whose rule set referenced the name, if resolved as part
        /// of a configuration.
        selector: Option<String>,
        /// Position of the rule within its rule set.
        index: usize,
        /// The unresolvable identifier.
        name: String,
    },
    /// A named rule with an empty identifier.
    EmptyRuleName {
        /// Selector whose rule set contained the rule, if any.
        selector: Option<String>,
        /// Position of the rule within its rule set.
        index: usize,
    },
    /// The same selector was configured more than once.
    DuplicateSelector {
        /// The repeated selector.
        selector: String,
    },
}

impl ConfigError {
    /// Attach the selector a rule set belongs to.
    pub(crate) fn for_selector(self, key: &str) -> Self {
        match self {
            ConfigError::UnknownRule {
                selector: None,
                index,
                name,
            } => ConfigError::UnknownRule {
                selector: Some(key.to_owned()),
                index,
                name,
            },
            ConfigError::EmptyRuleName {
                selector: None,
                index,
            } => ConfigError::EmptyRuleName {
                selector: Some(key.to_owned()),
                index,
            },
            other => other,
        }
    }
}

struct Location<'a>(&'a Option<String>, usize);

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(selector) => write!(f, "rule {} of '{}'", self.1, selector),
            None => write!(f, "rule {}", self.1),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownRule {
                selector,
                index,
                name,
            } => write!(
                f,
                "unknown rule '{}' ({})",
                name,
                Location(selector, *index)
            ),
            ConfigError::EmptyRuleName { selector, index } => {
                write!(f, "empty rule name ({})", Location(selector, *index))
            }
            ConfigError::DuplicateSelector { selector } => {
                write!(f, "selector '{}' is configured more than once", selector)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
