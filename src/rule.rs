//! Rules and rule sets
//!
//! A [`Rule`] is either a name looked up in the
//! [`RuleRegistry`](crate::registry::RuleRegistry) or an inline predicate,
//! plus an optional message that overrides the configured default.
//! Resolution turns rules into [`ResolvedRule`]s once, up front, so a
//! misspelled name is caught before a form is ever validated.

use std::fmt;
use std::sync::Arc;

use crate::field::FieldSnapshot;
use crate::predicate::Predicate;
use crate::registry::{EMAIL, REQUIRED};

/// Shared, type-erased predicate.
pub type SharedPredicate = Arc<dyn Predicate>;

/// What a rule checks.
#[derive(Clone)]
pub enum RuleKind {
    /// Identifier resolved against the registry.
    Named(String),
    /// Inline predicate used as is.
    Predicate(SharedPredicate),
}

impl fmt::Debug for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Named(name) => f.debug_tuple("Named").field(name).finish(),
            RuleKind::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// One entry of a field's rule list.
///
/// # Example
///
/// ```rust
/// use validity::field::FieldSnapshot;
/// use validity::rule::Rule;
///
/// let rules = vec![
///     Rule::required().with_message("Tell us who you are."),
///     Rule::predicate(|f: &FieldSnapshot| f.value.len() <= 40),
/// ];
/// assert_eq!(rules[0].name(), Some("required"));
/// assert_eq!(rules[1].name(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Rule {
    kind: RuleKind,
    message: Option<String>,
}

impl Rule {
    /// Rule referring to a registered predicate by name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::Named(name.into()),
            message: None,
        }
    }

    /// Rule running an inline predicate.
    pub fn predicate<P: Predicate + 'static>(predicate: P) -> Self {
        Self {
            kind: RuleKind::Predicate(Arc::new(predicate)),
            message: None,
        }
    }

    /// Rule running an already shared predicate.
    pub fn shared(predicate: SharedPredicate) -> Self {
        Self {
            kind: RuleKind::Predicate(predicate),
            message: None,
        }
    }

    /// The `required` named rule.
    pub fn required() -> Self {
        Self::named(REQUIRED)
    }

    /// The `email` named rule.
    pub fn email() -> Self {
        Self::named(EMAIL)
    }

    /// Override the message reported when this rule fails.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// What this rule checks.
    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// Name of a named rule.
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            RuleKind::Named(name) => Some(name),
            RuleKind::Predicate(_) => None,
        }
    }

    /// Override message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Ordered rules for one selector. Evaluation follows this order.
pub type FieldRuleSet = Vec<Rule>;

/// A rule whose predicate has been looked up.
#[derive(Clone)]
pub struct ResolvedRule {
    name: Option<String>,
    predicate: SharedPredicate,
    message: Option<String>,
}

impl ResolvedRule {
    pub(crate) fn new(
        name: Option<String>,
        predicate: SharedPredicate,
        message: Option<String>,
    ) -> Self {
        Self {
            name,
            predicate,
            message,
        }
    }

    /// Name the rule was configured with, `None` for inline predicates.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Override message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Run the predicate.
    #[inline]
    pub fn check(&self, field: &FieldSnapshot) -> bool {
        self.predicate.check(field)
    }

    /// Name for diagnostics.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<custom>")
    }
}

impl fmt::Debug for ResolvedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedRule")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_rule_has_name_and_no_message() {
        let rule = Rule::named("zip");
        assert_eq!(rule.name(), Some("zip"));
        assert_eq!(rule.message(), None);
        assert!(matches!(rule.kind(), RuleKind::Named(n) if n == "zip"));
    }

    #[test]
    fn predicate_rule_is_anonymous() {
        let rule = Rule::predicate(|_: &FieldSnapshot| true).with_message("nope");
        assert_eq!(rule.name(), None);
        assert_eq!(rule.message(), Some("nope"));
        assert_eq!(format!("{:?}", rule.kind()), "Predicate(..)");
    }

    #[test]
    fn shortcuts_use_builtin_names() {
        assert_eq!(Rule::required().name(), Some("required"));
        assert_eq!(Rule::email().name(), Some("email"));
    }

    #[test]
    fn shared_predicate_keeps_identity() {
        let p: SharedPredicate = Arc::new(|f: &FieldSnapshot| f.value == "x");
        let rule = Rule::shared(Arc::clone(&p));
        match rule.kind() {
            RuleKind::Predicate(inner) => assert!(Arc::ptr_eq(inner, &p)),
            RuleKind::Named(_) => panic!("expected predicate rule"),
        }
    }

    #[test]
    fn resolved_rule_label() {
        let p: SharedPredicate = Arc::new(|_: &FieldSnapshot| true);
        let named = ResolvedRule::new(Some("required".into()), Arc::clone(&p), None);
        let custom = ResolvedRule::new(None, p, None);
        assert_eq!(named.label(), "required");
        assert_eq!(custom.label(), "<custom>");
        assert!(custom.check(&FieldSnapshot::new("")));
    }
}
