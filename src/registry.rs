//! Named rule registry and default messages
//!
//! The registry maps rule identifiers to predicates and carries the default
//! message reported for each. It starts out with `required` and `email`;
//! hosts may register more.
//!
//! ```rust
//! use validity::field::FieldSnapshot;
//! use validity::registry::RuleRegistry;
//! use validity::rule::Rule;
//!
//! let mut registry = RuleRegistry::new();
//! registry.register_with_message(
//!     "zip",
//!     |f: &FieldSnapshot| f.value.len() == 5 && f.value.bytes().all(|b| b.is_ascii_digit()),
//!     "Enter a five digit ZIP code.",
//! );
//!
//! let resolved = registry.resolve(&Rule::named("zip")).unwrap();
//! assert!(resolved.check(&FieldSnapshot::new("90210")));
//! assert_eq!(registry.default_message("zip"), Some("Enter a five digit ZIP code."));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::ConfigError;
use crate::predicate::{Email, Predicate, Required};
use crate::rule::{ResolvedRule, Rule, RuleKind, SharedPredicate};

/// Identifier of the built-in non-empty rule.
pub const REQUIRED: &str = "required";

/// Identifier of the built-in email rule.
pub const EMAIL: &str = "email";

/// Default message for [`REQUIRED`].
pub const REQUIRED_MESSAGE: &str = "This field is required when submitting.";

/// Default message for [`EMAIL`].
pub const EMAIL_MESSAGE: &str = "The email address you entered is invalid.\n\nPlease reenter your email address. Example: name@example.com";

/// Rule name to message lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Messages(HashMap<String, String>);

impl Messages {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the built-in defaults.
    pub fn builtin() -> Self {
        let mut messages = Self::new();
        messages.insert(REQUIRED, REQUIRED_MESSAGE);
        messages.insert(EMAIL, EMAIL_MESSAGE);
        messages
    }

    /// Set the message for `rule`, returning the previous one.
    pub fn insert(&mut self, rule: impl Into<String>, message: impl Into<String>) -> Option<String> {
        self.0.insert(rule.into(), message.into())
    }

    /// Message for `rule`.
    pub fn get(&self, rule: &str) -> Option<&str> {
        self.0.get(rule).map(String::as_str)
    }

    /// Copy of `self` with `overrides` taking precedence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validity::registry::Messages;
    ///
    /// let mut overrides = Messages::new();
    /// overrides.insert("required", "Fill this in.");
    ///
    /// let merged = Messages::builtin().layered(&overrides);
    /// assert_eq!(merged.get("required"), Some("Fill this in."));
    /// assert!(merged.get("email").is_some());
    /// ```
    pub fn layered(&self, overrides: &Messages) -> Messages {
        let mut merged = self.clone();
        merged
            .0
            .extend(overrides.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(rule, message)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Messages {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Messages(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Registry of named rule predicates.
#[derive(Clone)]
pub struct RuleRegistry {
    rules: HashMap<String, SharedPredicate>,
    messages: Messages,
}

impl RuleRegistry {
    /// Registry with the built-in `required` and `email` rules.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_with_message(REQUIRED, Required, REQUIRED_MESSAGE);
        registry.register_with_message(EMAIL, Email, EMAIL_MESSAGE);
        registry
    }

    /// Registry with no rules at all.
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
            messages: Messages::new(),
        }
    }

    /// Register `predicate` under `name`, returning any predicate it replaces.
    pub fn register<P: Predicate + 'static>(
        &mut self,
        name: impl Into<String>,
        predicate: P,
    ) -> Option<SharedPredicate> {
        self.rules.insert(name.into(), Arc::new(predicate))
    }

    /// Register `predicate` under `name` along with its default message.
    pub fn register_with_message<P: Predicate + 'static>(
        &mut self,
        name: impl Into<String>,
        predicate: P,
        message: impl Into<String>,
    ) -> Option<SharedPredicate> {
        let name = name.into();
        self.messages.insert(name.clone(), message);
        self.register(name, predicate)
    }

    /// Set the default message for `name`.
    pub fn set_default_message(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(name, message);
    }

    /// Predicate registered under `name`.
    pub fn get(&self, name: &str) -> Option<&SharedPredicate> {
        self.rules.get(name)
    }

    /// True if `name` resolves.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Default message for `name`.
    pub fn default_message(&self, name: &str) -> Option<&str> {
        self.messages.get(name)
    }

    /// All default messages.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Resolve one rule. Inline predicates pass through untouched.
    pub fn resolve(&self, rule: &Rule) -> Result<ResolvedRule, ConfigError> {
        self.resolve_at(rule, 0)
    }

    /// Resolve a whole rule set, failing on the first unresolvable rule.
    pub fn resolve_all(&self, rules: &[Rule]) -> Result<Vec<ResolvedRule>, ConfigError> {
        rules
            .iter()
            .enumerate()
            .map(|(index, rule)| self.resolve_at(rule, index))
            .collect()
    }

    fn resolve_at(&self, rule: &Rule, index: usize) -> Result<ResolvedRule, ConfigError> {
        let message = rule.message().map(str::to_owned);
        match rule.kind() {
            RuleKind::Predicate(predicate) => {
                Ok(ResolvedRule::new(None, Arc::clone(predicate), message))
            }
            RuleKind::Named(name) if name.is_empty() => Err(ConfigError::EmptyRuleName {
                selector: None,
                index,
            }),
            RuleKind::Named(name) => match self.rules.get(name) {
                Some(predicate) => Ok(ResolvedRule::new(
                    Some(name.clone()),
                    Arc::clone(predicate),
                    message,
                )),
                None => Err(ConfigError::UnknownRule {
                    selector: None,
                    index,
                    name: name.clone(),
                }),
            },
        }
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("RuleRegistry")
            .field("rules", &names)
            .field("messages", &self.messages)
            .finish()
    }
}
