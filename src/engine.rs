//! Per-field rule evaluation
//!
//! [`ValidationEngine`] runs one field's rules in declaration order and stops
//! at the first failure. Around the rules it does the placeholder
//! bookkeeping: an untouched field is cleared before evaluation, and a field
//! left empty by a failure gets its placeholder back.
//!
//! # Example
//!
//! ```rust
//! use validity::prelude::*;
//!
//! let registry = RuleRegistry::new();
//! let engine = ValidationEngine::new(registry.messages());
//! let mut state = ErrorState::new();
//!
//! let mut field = MemoryField::with_default("q", "Search");
//! let ok = engine
//!     .evaluate(&registry, Some(&mut field), "#q", &[Rule::required()], &mut state)
//!     .unwrap();
//!
//! assert!(!ok);
//! assert_eq!(state.message(), Some("This field is required when submitting."));
//! assert_eq!(field.value(), "Search");
//! ```

use crate::error::ConfigError;
use crate::field::FieldAdapter;
use crate::registry::{Messages, RuleRegistry};
use crate::rule::{ResolvedRule, Rule};
use crate::state::{ErrorState, FieldError};

/// Evaluates rule sets against single fields.
#[derive(Debug, Clone, Copy)]
pub struct ValidationEngine<'a> {
    messages: &'a Messages,
}

impl<'a> ValidationEngine<'a> {
    /// Engine reporting fallback messages from `messages`.
    pub fn new(messages: &'a Messages) -> Self {
        Self { messages }
    }

    /// Resolve `rules` against `registry`, then evaluate them.
    ///
    /// Every rule is resolved before the field is touched, so an unknown
    /// name leaves the field exactly as it was.
    pub fn evaluate(
        &self,
        registry: &RuleRegistry,
        field: Option<&mut dyn FieldAdapter>,
        selector: &str,
        rules: &[Rule],
        state: &mut ErrorState,
    ) -> Result<bool, ConfigError> {
        let resolved = registry
            .resolve_all(rules)
            .map_err(|err| err.for_selector(selector))?;
        Ok(self.evaluate_resolved(field, selector, &resolved, state))
    }

    /// Evaluate already resolved rules.
    ///
    /// `None` means the selector matched nothing, which passes vacuously.
    /// On failure the error is written to `state` and `false` is returned
    /// without running the remaining rules.
    pub fn evaluate_resolved(
        &self,
        field: Option<&mut dyn FieldAdapter>,
        selector: &str,
        rules: &[ResolvedRule],
        state: &mut ErrorState,
    ) -> bool {
        let Some(field) = field else {
            #[cfg(feature = "tracing")]
            tracing::trace!(selector, "no matching field, skipping");
            return true;
        };

        field.normalize_before_eval();
        let snapshot = field.snapshot();

        for rule in rules {
            #[cfg(feature = "tracing")]
            tracing::trace!(selector, rule = rule.label(), "checking rule");

            if !rule.check(&snapshot) {
                field.restore_placeholder_if_empty();
                let message = self.message_for(rule);

                #[cfg(feature = "tracing")]
                tracing::debug!(
                    selector,
                    field = field.name(),
                    rule = rule.label(),
                    "rule failed"
                );

                state.record(FieldError::new(selector, field.name(), message));
                return false;
            }
        }

        true
    }

    /// Rule override, then the catalog entry for its name, then empty.
    fn message_for(&self, rule: &ResolvedRule) -> String {
        rule.message()
            .or_else(|| rule.name().and_then(|name| self.messages.get(name)))
            .unwrap_or_default()
            .to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldSnapshot, MemoryField};
    use crate::registry::{EMAIL_MESSAGE, REQUIRED_MESSAGE};
    use crate::testing::SpyPredicate;

    fn run(field: &mut MemoryField, rules: &[Rule], state: &mut ErrorState) -> bool {
        let registry = RuleRegistry::new();
        let engine = ValidationEngine::new(registry.messages());
        engine
            .evaluate(&registry, Some(field), "#f", rules, state)
            .unwrap()
    }

    #[test]
    fn required_fails_on_empty_with_default_message() {
        let mut field = MemoryField::new("f", "");
        let mut state = ErrorState::new();
        assert!(!run(&mut field, &[Rule::required()], &mut state));
        assert_eq!(
            state.current(),
            Some(&FieldError::new("#f", "f", REQUIRED_MESSAGE))
        );
    }

    #[test]
    fn override_message_wins() {
        let mut field = MemoryField::new("f", "");
        let mut state = ErrorState::new();
        let rules = [Rule::required().with_message("Who are you?")];
        assert!(!run(&mut field, &rules, &mut state));
        assert_eq!(state.message(), Some("Who are you?"));
    }

    #[test]
    fn custom_predicate_without_message_reports_empty_string() {
        let mut field = MemoryField::new("f", "x");
        let mut state = ErrorState::new();
        let rules = [Rule::predicate(|_: &FieldSnapshot| false)];
        assert!(!run(&mut field, &rules, &mut state));
        assert_eq!(state.message(), Some(""));
    }

    #[test]
    fn first_failure_stops_the_rule_set() {
        let first = SpyPredicate::returning(false);
        let second = SpyPredicate::returning(true);
        let rules = [Rule::predicate(first.clone()), Rule::predicate(second.clone())];

        let mut field = MemoryField::new("f", "x");
        let mut state = ErrorState::new();
        assert!(!run(&mut field, &rules, &mut state));
        assert_eq!(first.calls(), 1);
        assert_eq!(second.calls(), 0);
    }

    #[test]
    fn all_rules_run_when_passing() {
        let first = SpyPredicate::returning(true);
        let second = SpyPredicate::returning(true);
        let rules = [Rule::predicate(first.clone()), Rule::predicate(second.clone())];

        let mut field = MemoryField::new("f", "x");
        let mut state = ErrorState::new();
        assert!(run(&mut field, &rules, &mut state));
        assert_eq!((first.calls(), second.calls()), (1, 1));
        assert!(state.is_empty());
    }

    #[test]
    fn email_failure_reports_email_message() {
        let mut field = MemoryField::new("email", "not-an-email");
        let mut state = ErrorState::new();
        assert!(!run(&mut field, &[Rule::required(), Rule::email()], &mut state));
        assert_eq!(state.message(), Some(EMAIL_MESSAGE));
        assert_eq!(field.value(), "not-an-email");
    }

    #[test]
    fn placeholder_text_counts_as_empty() {
        let mut field = MemoryField::with_default("q", "Search");
        let mut state = ErrorState::new();
        assert!(!run(&mut field, &[Rule::required()], &mut state));
        assert_eq!(field.value(), "Search");
    }

    #[test]
    fn empty_field_gets_placeholder_back_on_failure() {
        let mut field = MemoryField::with_default("q", "Search").value_of("");
        let mut state = ErrorState::new();
        assert!(!run(&mut field, &[Rule::required()], &mut state));
        assert_eq!(field.value(), "Search");
    }

    #[test]
    fn untouched_field_stays_cleared_after_pass() {
        let mut field = MemoryField::with_default("q", "Search");
        let mut state = ErrorState::new();
        let rules = [Rule::predicate(|f: &FieldSnapshot| f.value.is_empty())];
        assert!(run(&mut field, &rules, &mut state));
        assert_eq!(field.value(), "");
    }

    #[test]
    fn passing_twice_is_idempotent() {
        let mut field = MemoryField::with_default("email", "you@example.com").value_of("a@b.co");
        let before = field.clone();
        let mut state = ErrorState::new();
        let rules = [Rule::required(), Rule::email()];

        assert!(run(&mut field, &rules, &mut state));
        assert!(run(&mut field, &rules, &mut state));
        assert_eq!(field, before);
        assert!(state.is_empty());
    }

    #[test]
    fn missing_field_passes_vacuously() {
        let registry = RuleRegistry::new();
        let engine = ValidationEngine::new(registry.messages());
        let mut state = ErrorState::new();
        let ok = engine
            .evaluate(&registry, None, "#gone", &[Rule::required()], &mut state)
            .unwrap();
        assert!(ok);
        assert!(state.is_empty());
    }

    #[test]
    fn unknown_rule_errors_before_mutation() {
        let registry = RuleRegistry::new();
        let engine = ValidationEngine::new(registry.messages());
        let spy = SpyPredicate::returning(false);
        let mut field = MemoryField::with_default("q", "Search");
        let mut state = ErrorState::new();

        let err = engine
            .evaluate(
                &registry,
                Some(&mut field),
                "#q",
                &[Rule::predicate(spy.clone()), Rule::named("bogus")],
                &mut state,
            )
            .unwrap_err();

        assert_eq!(
            err,
            ConfigError::UnknownRule {
                selector: Some("#q".to_string()),
                index: 1,
                name: "bogus".to_string(),
            }
        );
        assert_eq!(spy.calls(), 0);
        assert_eq!(field.value(), "Search");
        assert!(state.is_empty());
    }

    #[test]
    fn catalog_message_used_for_custom_named_rule() {
        let mut registry = RuleRegistry::new();
        registry.register("zip", |f: &FieldSnapshot| f.value.len() == 5);
        let mut messages = registry.messages().clone();
        messages.insert("zip", "Bad ZIP");
        let engine = ValidationEngine::new(&messages);

        let mut field = MemoryField::new("zip", "123");
        let mut state = ErrorState::new();
        let ok = engine
            .evaluate(&registry, Some(&mut field), "#zip", &[Rule::named("zip")], &mut state)
            .unwrap();
        assert!(!ok);
        assert_eq!(state.message(), Some("Bad ZIP"));
    }

    #[cfg(feature = "tracing")]
    mod logging {
        use super::*;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn failure_is_logged() {
            let mut field = MemoryField::new("f", "");
            let mut state = ErrorState::new();
            run(&mut field, &[Rule::required()], &mut state);
            assert!(logs_contain("rule failed"));
        }
    }
}
