//! Declarative configuration from serialized data (feature-gated)
//!
//! [`ConfigSpec`] is the data-only half of a
//! [`Configuration`]: selectors, named rules, messages and the alert flag.
//! Field order in the source document is preserved, since it decides the
//! order fields are checked in. Inline predicates and callbacks cannot be
//! serialized; add them to the configuration after conversion.
//!
//! # Example
//!
//! ```rust
//! use validity::prelude::*;
//! use validity::serde_impl::ConfigSpec;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let spec: ConfigSpec = serde_json::from_str(r##"{
//!     "fields": {
//!         "#search": [{ "rule": "required", "message": "Type something to search for." }],
//!         "#email": [{ "rule": "required" }, { "rule": "email" }]
//!     },
//!     "showAlerts": false
//! }"##)?;
//!
//! let controller = SubmissionController::from_config(spec.into(), &RuleRegistry::new())?;
//!
//! let mut form = MemoryForm::new("newsletter")
//!     .with_field("#search", MemoryField::new("search", "rust"))
//!     .with_field("#email", MemoryField::new("email", "reader@example.com"));
//! assert!(controller.run_validation(&mut form));
//! assert_eq!(
//!     controller.plan().selectors().collect::<Vec<_>>(),
//!     ["#search", "#email"]
//! );
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::{Configuration, Options};
use crate::registry::Messages;
use crate::rule::Rule;

/// One named rule as written in a configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Registry identifier.
    pub rule: String,
    /// Override message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<RuleSpec> for Rule {
    fn from(spec: RuleSpec) -> Self {
        let rule = Rule::named(spec.rule);
        match spec.message {
            Some(message) => rule.with_message(message),
            None => rule,
        }
    }
}

/// Selector to rule list mapping that keeps document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedFields(pub Vec<(String, Vec<RuleSpec>)>);

impl Serialize for OrderedFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

impl<'de> Deserialize<'de> for OrderedFields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldsVisitor;

        impl<'de> Visitor<'de> for FieldsVisitor {
            type Value = OrderedFields;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of selectors to rule lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut fields = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((selector, rules)) = map.next_entry::<String, Vec<RuleSpec>>()? {
                    fields.push((selector, rules));
                }
                Ok(OrderedFields(fields))
            }
        }

        deserializer.deserialize_map(FieldsVisitor)
    }
}

fn default_show_alerts() -> bool {
    true
}

/// Serializable configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSpec {
    /// Validation plan in check order.
    #[serde(default)]
    pub fields: OrderedFields,
    /// Surface messages through the notifier.
    #[serde(default = "default_show_alerts", alias = "show_alerts")]
    pub show_alerts: bool,
    /// Fallback messages per rule name.
    #[serde(default)]
    pub messages: HashMap<String, String>,
}

impl Default for ConfigSpec {
    fn default() -> Self {
        Self {
            fields: OrderedFields::default(),
            show_alerts: default_show_alerts(),
            messages: HashMap::new(),
        }
    }
}

impl ConfigSpec {
    /// Build a [`Configuration`] from this document.
    pub fn into_configuration(self) -> Configuration {
        let options = Options {
            show_alerts: self.show_alerts,
            messages: self.messages.into_iter().collect::<Messages>(),
        };
        self.fields
            .0
            .into_iter()
            .fold(Configuration::new().options(options), |config, (selector, rules)| {
                config.field(selector, rules.into_iter().map(Rule::from))
            })
    }
}

impl From<ConfigSpec> for Configuration {
    fn from(spec: ConfigSpec) -> Self {
        spec.into_configuration()
    }
}
