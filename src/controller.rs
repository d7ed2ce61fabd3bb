//! Submission controller
//!
//! Runs a [`ValidationPlan`] against a form once per submission attempt.
//! Fields are checked in plan order; the first failing field ends the
//! attempt. The error hook and the notifier fire only on failure, the
//! completion callback fires on every attempt.
//!
//! # Example
//!
//! ```rust
//! use validity::prelude::*;
//!
//! let controller = SubmissionController::from_config(
//!     Configuration::new().field("#email", [Rule::email()]),
//!     &RuleRegistry::new(),
//! )
//! .unwrap();
//!
//! let mut form = MemoryForm::new("newsletter")
//!     .with_field("#email", MemoryField::new("email", "not-an-email"));
//! assert!(!controller.run_validation(&mut form));
//!
//! form.field_mut("#email").unwrap().set_value("a@b.co".to_string());
//! assert!(controller.run_validation(&mut form));
//! ```

use std::fmt;

use crate::config::{Configuration, ValidationPlan};
use crate::engine::ValidationEngine;
use crate::error::ConfigError;
use crate::form::Form;
use crate::notify::{NoopNotifier, Notifier};
use crate::registry::RuleRegistry;
use crate::session::Submission;
use crate::state::ErrorState;

/// Drives validation for one form.
pub struct SubmissionController {
    plan: ValidationPlan,
    notifier: Box<dyn Notifier>,
}

impl SubmissionController {
    /// Controller for an already resolved plan. Alerts go nowhere until a
    /// notifier is attached with [`with_notifier`](Self::with_notifier).
    pub fn new(plan: ValidationPlan) -> Self {
        Self {
            plan,
            notifier: Box::new(NoopNotifier),
        }
    }

    /// Resolve `config` against `registry` and build a controller.
    pub fn from_config(
        config: Configuration,
        registry: &RuleRegistry,
    ) -> Result<Self, ConfigError> {
        config.resolve(registry).map(Self::new)
    }

    /// Use `notifier` to surface messages when alerts are enabled.
    pub fn with_notifier<N: Notifier + 'static>(mut self, notifier: N) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    /// Completion callback taking precedence over the configured one.
    pub fn with_callback<F>(mut self, f: F) -> Self
    where
        F: Fn(&dyn Form, bool, &ErrorState) + Send + Sync + 'static,
    {
        self.plan.callback = Some(Box::new(f));
        self
    }

    /// The plan being run.
    pub fn plan(&self) -> &ValidationPlan {
        &self.plan
    }

    /// Validate `form` and report whether the submission may proceed.
    pub fn run_validation(&self, form: &mut dyn Form) -> bool {
        self.run(form).status()
    }

    /// Validate `form` and return the full outcome of the attempt.
    pub fn run(&self, form: &mut dyn Form) -> Submission {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("submission", form = form.id()).entered();

        let engine = ValidationEngine::new(self.plan.messages());
        let mut session = Submission::begin();

        for (index, planned) in self.plan.fields().iter().enumerate() {
            session.validating(index);

            let passed = engine.evaluate_resolved(
                form.find(planned.selector()),
                planned.selector(),
                planned.rules(),
                session.errors_mut(),
            );

            if !passed {
                session.fail(index);
                self.report_failure(&*form, session.errors());
                break;
            }
        }

        session.finish();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            status = session.status(),
            fields_checked = session.fields_checked(),
            "validation finished"
        );

        if let Some(callback) = self.plan.callback() {
            callback(&*form, session.status(), session.errors());
        }

        session
    }

    fn report_failure(&self, form: &dyn Form, errors: &ErrorState) {
        if let Some(on_error) = self.plan.on_error() {
            on_error(form, errors);
        }
        if self.plan.show_alerts() {
            self.notifier.notify(errors.message().unwrap_or_default());
        }
    }
}

impl fmt::Debug for SubmissionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionController")
            .field("plan", &self.plan)
            .finish_non_exhaustive()
    }
}
