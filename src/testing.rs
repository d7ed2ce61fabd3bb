//! Testing utilities for validation plans
//!
//! Spies, recorders and assertion macros for exercising a
//! [`SubmissionController`](crate::controller::SubmissionController) headlessly.
//!
//! # Examples
//!
//! ## Spying on rules
//!
//! ```rust
//! use validity::prelude::*;
//! use validity::testing::SpyPredicate;
//!
//! let never = SpyPredicate::returning(true);
//! let controller = SubmissionController::from_config(
//!     Configuration::new()
//!         .field("#a", [Rule::required()])
//!         .field("#b", [Rule::predicate(never.clone())]),
//!     &RuleRegistry::new(),
//! )
//! .unwrap();
//!
//! let mut form = MemoryForm::new("f")
//!     .with_field("#a", MemoryField::new("a", ""))
//!     .with_field("#b", MemoryField::new("b", "x"));
//! controller.run(&mut form);
//!
//! assert_eq!(never.calls(), 0);
//! ```
//!
//! ## Assertion macros
//!
//! ```rust
//! use validity::prelude::*;
//! use validity::{assert_fails, assert_fails_with, assert_passes};
//!
//! let controller = SubmissionController::from_config(
//!     Configuration::new().field("#email", [Rule::email().with_message("bad email")]),
//!     &RuleRegistry::new(),
//! )
//! .unwrap();
//!
//! let mut good = MemoryForm::new("f").with_field("#email", MemoryField::new("e", "a@b.co"));
//! assert_passes!(controller.run(&mut good));
//!
//! let mut bad = MemoryForm::new("f").with_field("#email", MemoryField::new("e", "nope"));
//! assert_fails!(controller.run(&mut bad));
//! assert_fails_with!(controller.run(&mut bad), "#email", "bad email");
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::field::FieldSnapshot;
use crate::notify::Notifier;
use crate::predicate::Predicate;

/// Predicate with a fixed answer that counts how often it is asked.
///
/// Clones share the counter.
#[derive(Debug, Clone)]
pub struct SpyPredicate {
    result: bool,
    calls: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<FieldSnapshot>>>,
}

impl SpyPredicate {
    /// Spy that always answers `result`.
    pub fn returning(result: bool) -> Self {
        Self {
            result,
            calls: Arc::new(AtomicUsize::new(0)),
            seen: Arc::default(),
        }
    }

    /// Number of times the predicate ran.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Snapshots the predicate was called with, oldest first.
    pub fn seen(&self) -> Vec<FieldSnapshot> {
        self.seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Predicate for SpyPredicate {
    fn check(&self, field: &FieldSnapshot) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(field.clone());
        self.result
    }
}

/// Notifier that keeps every message it is given.
///
/// Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.to_owned());
    }
}

/// Assert that a submission passed.
///
/// # Example
///
/// ```rust
/// use validity::prelude::*;
/// use validity::assert_passes;
///
/// let controller = SubmissionController::new(
///     Configuration::new().resolve(&RuleRegistry::new()).unwrap(),
/// );
/// assert_passes!(controller.run(&mut MemoryForm::new("empty")));
/// ```
#[macro_export]
macro_rules! assert_passes {
    ($submission:expr) => {
        match $submission {
            ref submission if submission.status() => {}
            ref submission => {
                panic!(
                    "Expected submission to pass, got failure: {:?}",
                    submission.errors().current()
                );
            }
        }
    };
}

/// Assert that a submission failed.
#[macro_export]
macro_rules! assert_fails {
    ($submission:expr) => {
        match $submission {
            ref submission if !submission.status() => {}
            _ => {
                panic!("Expected submission to fail, got success");
            }
        }
    };
}

/// Assert that a submission failed on `selector` with `message`.
#[macro_export]
macro_rules! assert_fails_with {
    ($submission:expr, $selector:expr, $message:expr) => {
        match $submission {
            ref submission if !submission.status() => {
                let error = submission
                    .errors()
                    .current()
                    .expect("failed submission carries an error");
                assert_eq!(error.selector, $selector);
                assert_eq!(error.message, $message);
            }
            _ => {
                panic!(
                    "Expected submission to fail on {:?} with {:?}, got success",
                    $selector, $message
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// Strategy producing addresses the `email` rule accepts.
#[cfg(feature = "proptest")]
pub fn valid_email() -> impl Strategy<Value = String> {
    "[a-z0-9_~-]{1,8}(\\.[a-z0-9_~-]{1,8}){0,2}@([a-z0-9]{1,6}\\.){1,3}[a-zA-Z]{2,4}"
}

/// Strategy producing strings without an `@`, which the `email` rule rejects.
#[cfg(feature = "proptest")]
pub fn email_without_at() -> impl Strategy<Value = String> {
    "[a-z0-9._~-]{0,24}"
}

#[cfg(feature = "proptest")]
impl Arbitrary for FieldSnapshot {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let placeholder = || prop_oneof![Just(String::new()), "[A-Za-z ]{1,12}"];
        // half the cases are untouched fields, which the engine treats specially
        prop_oneof![
            (any::<String>(), placeholder())
                .prop_map(|(value, default)| FieldSnapshot::with_default(value, default)),
            placeholder().prop_map(|default| FieldSnapshot::with_default(default.clone(), default)),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;
    use crate::controller::SubmissionController;
    use crate::field::MemoryField;
    use crate::form::MemoryForm;
    use crate::registry::RuleRegistry;
    use crate::rule::Rule;

    fn email_controller() -> SubmissionController {
        SubmissionController::from_config(
            Configuration::new().field("#email", [Rule::email().with_message("bad")]),
            &RuleRegistry::new(),
        )
        .unwrap()
    }

    #[test]
    fn spy_counts_and_records() {
        let spy = SpyPredicate::returning(false);
        let shared = spy.clone();
        assert!(!shared.check(&FieldSnapshot::new("a")));
        assert!(!shared.check(&FieldSnapshot::new("b")));
        assert_eq!(spy.calls(), 2);
        assert_eq!(
            spy.seen(),
            vec![FieldSnapshot::new("a"), FieldSnapshot::new("b")]
        );
    }

    #[test]
    fn recorder_keeps_messages_in_order() {
        let recorder = RecordingNotifier::new();
        recorder.clone().notify("one");
        recorder.notify("two");
        assert_eq!(recorder.messages(), vec!["one", "two"]);
    }

    #[test]
    fn assert_passes_macro() {
        let mut form = MemoryForm::new("f").with_field("#email", MemoryField::new("e", "a@b.co"));
        assert_passes!(email_controller().run(&mut form));
    }

    #[test]
    fn assert_fails_with_macro() {
        let mut form = MemoryForm::new("f").with_field("#email", MemoryField::new("e", "x"));
        assert_fails_with!(email_controller().run(&mut form), "#email", "bad");
    }

    #[test]
    #[should_panic(expected = "Expected submission to pass")]
    fn assert_passes_panics_on_failure() {
        let mut form = MemoryForm::new("f").with_field("#email", MemoryField::new("e", "x"));
        assert_passes!(email_controller().run(&mut form));
    }

    #[test]
    #[should_panic(expected = "Expected submission to fail")]
    fn assert_fails_panics_on_success() {
        let mut form = MemoryForm::new("f").with_field("#email", MemoryField::new("e", "a@b.co"));
        assert_fails!(email_controller().run(&mut form));
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use crate::predicate::is_email;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn valid_email_strategy_matches_rule(addr in valid_email()) {
                prop_assert!(is_email(&addr));
            }

            #[test]
            fn email_without_at_strategy_fails_rule(addr in email_without_at()) {
                prop_assert!(!is_email(&addr));
            }

            #[test]
            fn arbitrary_snapshot_required_matches_emptiness(snap in any::<FieldSnapshot>()) {
                use crate::predicate::{required, Predicate};
                prop_assert_eq!(required().check(&snap), !snap.value.is_empty());
            }
        }
    }
}
