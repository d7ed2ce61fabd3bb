//! Validation configuration
//!
//! A [`Configuration`] is the declarative plan for one form: selectors in
//! the order they should be checked, each with its ordered rules, plus the
//! reporting options. It is built once and then resolved against a
//! [`RuleRegistry`] into a [`ValidationPlan`], which is what the
//! [`SubmissionController`](crate::controller::SubmissionController) runs.
//!
//! # Example
//!
//! ```rust
//! use validity::prelude::*;
//!
//! let plan = Configuration::new()
//!     .field("#name", [Rule::required()])
//!     .field("#email", [Rule::required(), Rule::email()])
//!     .show_alerts(false)
//!     .message("required", "Please fill in every field.")
//!     .resolve(&RuleRegistry::new())
//!     .unwrap();
//!
//! assert_eq!(plan.selectors().collect::<Vec<_>>(), ["#name", "#email"]);
//! assert_eq!(plan.messages().get("required"), Some("Please fill in every field."));
//! ```

use std::collections::HashSet;
use std::fmt;

use crate::error::ConfigError;
use crate::form::Form;
use crate::registry::{Messages, RuleRegistry};
use crate::rule::{FieldRuleSet, ResolvedRule, Rule};
use crate::state::ErrorState;

/// Invoked once with the form and the error when a field fails.
pub type ErrorCallback = Box<dyn Fn(&dyn Form, &ErrorState) + Send + Sync>;

/// Invoked once at the end of every attempt with the form, the overall
/// status and the error state.
pub type CompletionCallback = Box<dyn Fn(&dyn Form, bool, &ErrorState) + Send + Sync>;

/// Scalar reporting options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Surface the failing message through the notifier.
    pub show_alerts: bool,
    /// Fallback messages per rule name, layered over the registry defaults.
    pub messages: Messages,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            show_alerts: true,
            messages: Messages::new(),
        }
    }
}

/// Builder for a form's validation plan.
#[derive(Default)]
pub struct Configuration {
    fields: Vec<(String, FieldRuleSet)>,
    options: Options,
    on_error: Option<ErrorCallback>,
    callback: Option<CompletionCallback>,
}

impl Configuration {
    /// Empty configuration with alerts enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `selector` with its rules. Fields are checked in the order
    /// they are added.
    pub fn field(
        mut self,
        selector: impl Into<String>,
        rules: impl IntoIterator<Item = Rule>,
    ) -> Self {
        self.fields
            .push((selector.into(), rules.into_iter().collect()));
        self
    }

    /// Enable or disable the notifier.
    pub fn show_alerts(mut self, show: bool) -> Self {
        self.options.show_alerts = show;
        self
    }

    /// Fallback message for a rule name.
    pub fn message(mut self, rule: impl Into<String>, message: impl Into<String>) -> Self {
        self.options.messages.insert(rule, message);
        self
    }

    /// Replace all options at once.
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Hook run on the first failure.
    pub fn on_error<F>(mut self, f: F) -> Self
    where
        F: Fn(&dyn Form, &ErrorState) + Send + Sync + 'static,
    {
        self.on_error = Some(Box::new(f));
        self
    }

    /// Hook run at the end of every attempt.
    pub fn callback<F>(mut self, f: F) -> Self
    where
        F: Fn(&dyn Form, bool, &ErrorState) + Send + Sync + 'static,
    {
        self.callback = Some(Box::new(f));
        self
    }

    /// Configured selectors and rule sets in check order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &[Rule])> {
        self.fields
            .iter()
            .map(|(selector, rules)| (selector.as_str(), rules.as_slice()))
    }

    /// Current options.
    pub fn get_options(&self) -> &Options {
        &self.options
    }

    /// Resolve every named rule and freeze the configuration.
    ///
    /// Fails on the first unknown or empty rule name, or on a selector that
    /// appears twice.
    pub fn resolve(self, registry: &RuleRegistry) -> Result<ValidationPlan, ConfigError> {
        let mut seen = HashSet::with_capacity(self.fields.len());
        let mut fields = Vec::with_capacity(self.fields.len());

        for (selector, rules) in self.fields {
            if !seen.insert(selector.clone()) {
                return Err(ConfigError::DuplicateSelector { selector });
            }
            let rules = registry
                .resolve_all(&rules)
                .map_err(|err| err.for_selector(&selector))?;
            fields.push(PlannedField { selector, rules });
        }

        Ok(ValidationPlan {
            fields,
            show_alerts: self.options.show_alerts,
            messages: registry.messages().layered(&self.options.messages),
            on_error: self.on_error,
            callback: self.callback,
        })
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("fields", &self.fields)
            .field("options", &self.options)
            .field("on_error", &self.on_error.is_some())
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

/// One selector with its resolved rules.
#[derive(Debug, Clone)]
pub struct PlannedField {
    selector: String,
    rules: Vec<ResolvedRule>,
}

impl PlannedField {
    /// Selector used to locate the field.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[ResolvedRule] {
        &self.rules
    }
}

/// A configuration whose rules have all been resolved.
pub struct ValidationPlan {
    fields: Vec<PlannedField>,
    show_alerts: bool,
    messages: Messages,
    on_error: Option<ErrorCallback>,
    pub(crate) callback: Option<CompletionCallback>,
}

impl ValidationPlan {
    /// Planned fields in check order.
    pub fn fields(&self) -> &[PlannedField] {
        &self.fields
    }

    /// Selectors in check order.
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(PlannedField::selector)
    }

    /// Whether failures are surfaced through the notifier.
    pub fn show_alerts(&self) -> bool {
        self.show_alerts
    }

    /// Registry defaults with configured messages layered on top.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub(crate) fn on_error(&self) -> Option<&ErrorCallback> {
        self.on_error.as_ref()
    }

    pub(crate) fn callback(&self) -> Option<&CompletionCallback> {
        self.callback.as_ref()
    }
}

impl fmt::Debug for ValidationPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationPlan")
            .field("fields", &self.fields)
            .field("show_alerts", &self.show_alerts)
            .field("messages", &self.messages)
            .field("on_error", &self.on_error.is_some())
            .field("callback", &self.callback.is_some())
            .finish()
    }
}
