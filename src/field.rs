//! Field access for the validation engine
//!
//! The engine never talks to a live document. Hosts hand it a
//! [`FieldAdapter`] per matched selector, and predicates only ever see an
//! owned [`FieldSnapshot`] read from it at evaluation time.
//!
//! # Placeholder bookkeeping
//!
//! Form inputs often carry pre-filled hint text ("Search", "you@example.com").
//! A value equal to that default is treated as *nothing entered*:
//!
//! - [`FieldAdapter::normalize_before_eval`] clears an untouched field before
//!   any rule runs, so `required` rejects the hint text.
//! - [`FieldAdapter::restore_placeholder_if_empty`] puts the hint back when a
//!   rule fails and the field is left empty.
//!
//! ```rust
//! use validity::field::{FieldAdapter, MemoryField};
//!
//! let mut field = MemoryField::with_default("q", "Search");
//! assert!(field.is_untouched());
//!
//! field.normalize_before_eval();
//! assert_eq!(field.value(), "");
//!
//! field.restore_placeholder_if_empty();
//! assert_eq!(field.value(), "Search");
//! ```

/// Owned view of a field handed to predicates.
///
/// `value` is the current value *after* placeholder normalization, so an
/// untouched field shows up here as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldSnapshot {
    /// Current value of the field.
    pub value: String,
    /// Placeholder/default value of the field.
    pub default_value: String,
}

impl FieldSnapshot {
    /// Create a snapshot with no placeholder.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validity::field::FieldSnapshot;
    ///
    /// let snap = FieldSnapshot::new("a@b.co");
    /// assert_eq!(snap.value, "a@b.co");
    /// assert!(snap.default_value.is_empty());
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            default_value: String::new(),
        }
    }

    /// Create a snapshot carrying a placeholder value.
    pub fn with_default(value: impl Into<String>, default_value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            default_value: default_value.into(),
        }
    }

    /// True when nothing has been entered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Host-provided access to one form field.
///
/// Implementors supply the four accessors; the placeholder helpers used by
/// the engine are provided on top of them.
pub trait FieldAdapter {
    /// Identifier of the field reported in errors (an id or name attribute).
    fn name(&self) -> &str;

    /// Current value.
    fn value(&self) -> &str;

    /// Replace the current value.
    fn set_value(&mut self, value: String);

    /// Read-only placeholder/default value.
    fn default_value(&self) -> &str;

    /// True iff the current value equals the placeholder value.
    fn is_untouched(&self) -> bool {
        self.value() == self.default_value()
    }

    /// Read a snapshot for predicates.
    fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            value: self.value().to_owned(),
            default_value: self.default_value().to_owned(),
        }
    }

    /// Clear an untouched field so rules see "nothing entered".
    ///
    /// Returns `true` if the value was changed.
    fn normalize_before_eval(&mut self) -> bool {
        if self.is_untouched() && !self.value().is_empty() {
            self.set_value(String::new());
            true
        } else {
            false
        }
    }

    /// Put the placeholder back into a field left empty.
    ///
    /// Returns `true` if the value was changed.
    fn restore_placeholder_if_empty(&mut self) -> bool {
        if self.value().is_empty() && !self.default_value().is_empty() {
            let restored = self.default_value().to_owned();
            self.set_value(restored);
            true
        } else {
            false
        }
    }
}

/// In-memory [`FieldAdapter`] for headless hosts and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryField {
    name: String,
    value: String,
    default_value: String,
}

impl MemoryField {
    /// Create a field holding `value` with no placeholder.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            default_value: String::new(),
        }
    }

    /// Create an untouched field showing its placeholder.
    pub fn with_default(name: impl Into<String>, default_value: impl Into<String>) -> Self {
        let default_value = default_value.into();
        Self {
            name: name.into(),
            value: default_value.clone(),
            default_value,
        }
    }

    /// Builder-style value override.
    pub fn value_of(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

impl FieldAdapter for MemoryField {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
    }

    fn default_value(&self) -> &str {
        &self.default_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_when_value_equals_default() {
        let field = MemoryField::with_default("search", "Search");
        assert!(field.is_untouched());

        let field = field.value_of("rust");
        assert!(!field.is_untouched());
    }

    #[test]
    fn normalize_clears_placeholder_text() {
        let mut field = MemoryField::with_default("search", "Search");
        assert!(field.normalize_before_eval());
        assert_eq!(field.value(), "");
    }

    #[test]
    fn normalize_leaves_entered_value_alone() {
        let mut field = MemoryField::with_default("search", "Search").value_of("rust");
        assert!(!field.normalize_before_eval());
        assert_eq!(field.value(), "rust");
    }

    #[test]
    fn normalize_is_noop_without_placeholder() {
        let mut field = MemoryField::new("email", "");
        assert!(!field.normalize_before_eval());
        assert_eq!(field.value(), "");
    }

    #[test]
    fn restore_only_touches_empty_fields() {
        let mut field = MemoryField::with_default("search", "Search").value_of("");
        assert!(field.restore_placeholder_if_empty());
        assert_eq!(field.value(), "Search");

        let mut field = MemoryField::with_default("search", "Search").value_of("x");
        assert!(!field.restore_placeholder_if_empty());
        assert_eq!(field.value(), "x");
    }

    #[test]
    fn restore_without_placeholder_keeps_empty() {
        let mut field = MemoryField::new("email", "");
        assert!(!field.restore_placeholder_if_empty());
        assert_eq!(field.value(), "");
    }

    #[test]
    fn snapshot_copies_both_values() {
        let field = MemoryField::with_default("q", "Search").value_of("abc");
        assert_eq!(field.snapshot(), FieldSnapshot::with_default("abc", "Search"));
    }

    #[test]
    fn whitespace_is_not_empty() {
        assert!(!FieldSnapshot::new("  ").is_empty());
        assert!(FieldSnapshot::new("").is_empty());
    }
}
