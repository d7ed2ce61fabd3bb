//! Form scope: the host capability that locates fields
//!
//! Selectors are resolved only inside the bound form, never document-wide,
//! and each lookup yields zero or one field. How a selector is matched is
//! up to the host; [`MemoryForm`] matches selector keys exactly.

use crate::field::{FieldAdapter, MemoryField};

/// A form (or any scoped container) that can resolve selectors to fields.
pub trait Form {
    /// Identifier of the form passed back to callbacks.
    fn id(&self) -> &str;

    /// Locate the field matching `selector`, if any.
    ///
    /// When several fields match, hosts return the first one.
    fn find(&mut self, selector: &str) -> Option<&mut dyn FieldAdapter>;
}

/// In-memory form holding [`MemoryField`]s keyed by selector.
///
/// # Example
///
/// ```rust
/// use validity::field::{FieldAdapter, MemoryField};
/// use validity::form::{Form, MemoryForm};
///
/// let mut form = MemoryForm::new("signup")
///     .with_field("#email", MemoryField::new("email", "a@b.co"));
///
/// assert!(form.find("#email").is_some());
/// assert!(form.find("#missing").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryForm {
    id: String,
    fields: Vec<(String, MemoryField)>,
}

impl MemoryForm {
    /// Create an empty form.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field reachable through `selector`.
    pub fn with_field(mut self, selector: impl Into<String>, field: MemoryField) -> Self {
        self.fields.push((selector.into(), field));
        self
    }

    /// Borrow the first field registered under `selector`.
    pub fn field(&self, selector: &str) -> Option<&MemoryField> {
        self.fields
            .iter()
            .find(|(key, _)| key == selector)
            .map(|(_, field)| field)
    }

    /// Mutably borrow the first field registered under `selector`.
    pub fn field_mut(&mut self, selector: &str) -> Option<&mut MemoryField> {
        self.fields
            .iter_mut()
            .find(|(key, _)| key == selector)
            .map(|(_, field)| field)
    }

    /// Current value of the field under `selector`.
    pub fn value(&self, selector: &str) -> Option<&str> {
        self.field(selector).map(|field| field.value())
    }
}

impl Form for MemoryForm {
    fn id(&self) -> &str {
        &self.id
    }

    fn find(&mut self, selector: &str) -> Option<&mut dyn FieldAdapter> {
        self.field_mut(selector)
            .map(|field| field as &mut dyn FieldAdapter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_match_only() {
        let mut form = MemoryForm::new("f")
            .with_field("input", MemoryField::new("first", "1"))
            .with_field("input", MemoryField::new("second", "2"));

        let field = form.find("input").map(|f| f.name().to_owned());
        assert_eq!(field.as_deref(), Some("first"));
    }

    #[test]
    fn find_is_scoped_to_registered_selectors() {
        let mut form = MemoryForm::new("f").with_field("#email", MemoryField::new("email", ""));
        assert!(form.find("#email").is_some());
        assert!(form.find("email").is_none());
    }

    #[test]
    fn writes_through_find_are_visible() {
        let mut form = MemoryForm::new("f").with_field("#q", MemoryField::new("q", "old"));
        if let Some(field) = form.find("#q") {
            field.set_value("new".to_string());
        }
        assert_eq!(form.value("#q"), Some("new"));
    }
}
