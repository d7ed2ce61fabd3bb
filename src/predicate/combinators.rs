//! Core predicate trait and logical combinators
//!
//! A predicate decides whether one field snapshot satisfies a rule. Custom
//! rules are plain closures thanks to the blanket impl; built-ins are unit
//! structs.

use crate::field::FieldSnapshot;

/// A rule predicate over a field snapshot.
///
/// # Example
///
/// ```rust
/// use validity::field::FieldSnapshot;
/// use validity::predicate::*;
///
/// let secret = |f: &FieldSnapshot| f.value == "open sesame";
/// assert!(secret.check(&FieldSnapshot::new("open sesame")));
/// assert!(!required().and(secret).check(&FieldSnapshot::new("")));
/// ```
pub trait Predicate: Send + Sync {
    /// Check whether `field` satisfies this predicate.
    fn check(&self, field: &FieldSnapshot) -> bool;
}

// Blanket impl for closures
impl<F> Predicate for F
where
    F: Fn(&FieldSnapshot) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, field: &FieldSnapshot) -> bool {
        self(field)
    }
}

/// Extension trait for combining predicates.
pub trait PredicateExt: Predicate + Sized {
    /// Both predicates must hold. `other` is skipped when `self` fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validity::field::FieldSnapshot;
    /// use validity::predicate::*;
    ///
    /// let corporate = email().and(|f: &FieldSnapshot| f.value.ends_with("@acme.com"));
    /// assert!(corporate.check(&FieldSnapshot::new("jo@acme.com")));
    /// assert!(!corporate.check(&FieldSnapshot::new("jo@other.com")));
    /// ```
    fn and<P: Predicate>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Either predicate may hold.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validity::field::FieldSnapshot;
    /// use validity::predicate::*;
    ///
    /// let optional_email = required().not().or(email());
    /// assert!(optional_email.check(&FieldSnapshot::new("")));
    /// assert!(!optional_email.check(&FieldSnapshot::new("nope")));
    /// ```
    fn or<P: Predicate>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<P: Predicate> PredicateExt for P {}

/// AND combinator.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<P1: Predicate, P2: Predicate> Predicate for And<P1, P2> {
    #[inline]
    fn check(&self, field: &FieldSnapshot) -> bool {
        self.0.check(field) && self.1.check(field)
    }
}

/// OR combinator.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<P1: Predicate, P2: Predicate> Predicate for Or<P1, P2> {
    #[inline]
    fn check(&self, field: &FieldSnapshot) -> bool {
        self.0.check(field) || self.1.check(field)
    }
}

/// NOT combinator.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<P: Predicate> Predicate for Not<P> {
    #[inline]
    fn check(&self, field: &FieldSnapshot) -> bool {
        !self.0.check(field)
    }
}
