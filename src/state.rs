//! Single-slot error state
//!
//! Each submission attempt starts with an empty [`ErrorState`]. A failing
//! rule writes into it, replacing whatever was there; nothing accumulates.

use std::fmt;

/// The failure recorded for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldError {
    /// Selector the field was located with.
    pub selector: String,
    /// Name of the field as reported by its adapter.
    pub field: String,
    /// Message to show the user. May be empty.
    pub message: String,
}

impl FieldError {
    /// Create a field error.
    pub fn new(
        selector: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            selector: selector.into(),
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}: invalid", self.selector)
        } else {
            write!(f, "{}: {}", self.selector, self.message)
        }
    }
}

/// Holder for at most one [`FieldError`].
///
/// # Example
///
/// ```rust
/// use validity::state::{ErrorState, FieldError};
///
/// let mut state = ErrorState::new();
/// assert!(state.is_empty());
///
/// state.record(FieldError::new("#a", "a", "first"));
/// state.record(FieldError::new("#b", "b", "second"));
///
/// // the slot is overwritten, never appended to
/// assert_eq!(state.message(), Some("second"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorState {
    current: Option<FieldError>,
}

impl ErrorState {
    /// Empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `error`, replacing any previous one.
    pub fn record(&mut self, error: FieldError) {
        self.current = Some(error);
    }

    /// The recorded error.
    pub fn current(&self) -> Option<&FieldError> {
        self.current.as_ref()
    }

    /// Message of the recorded error.
    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|e| e.message.as_str())
    }

    /// Field name of the recorded error.
    pub fn field(&self) -> Option<&str> {
        self.current.as_ref().map(|e| e.field.as_str())
    }

    /// True when nothing has failed.
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Drop the recorded error.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Take the recorded error out, leaving the slot empty.
    pub fn take(&mut self) -> Option<FieldError> {
        self.current.take()
    }

    /// Consume the state.
    pub fn into_inner(self) -> Option<FieldError> {
        self.current
    }
}

impl From<FieldError> for ErrorState {
    fn from(error: FieldError) -> Self {
        Self {
            current: Some(error),
        }
    }
}
