//! Rule predicates
//!
//! Every rule, named or custom, boils down to a [`Predicate`] over a
//! [`FieldSnapshot`](crate::field::FieldSnapshot). Closures implement the
//! trait directly, so a custom rule is usually a one-liner:
//!
//! ```rust
//! use validity::field::FieldSnapshot;
//! use validity::predicate::*;
//!
//! let secret_key = |f: &FieldSnapshot| f.value == "Secret key";
//! assert!(secret_key.check(&FieldSnapshot::new("Secret key")));
//!
//! // Built-ins compose with custom predicates
//! let work_email = email().and(|f: &FieldSnapshot| !f.value.ends_with("@gmail.com"));
//! assert!(work_email.check(&FieldSnapshot::new("jo@acme.com")));
//! assert!(!work_email.check(&FieldSnapshot::new("jo@gmail.com")));
//! ```

mod combinators;
mod string;

pub use combinators::{And, Not, Or, Predicate, PredicateExt};
pub use string::{email, is_email, required, Email, Required};
