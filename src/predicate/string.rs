//! Built-in string predicates
//!
//! These back the `required` and `email` named rules.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use super::combinators::Predicate;
use crate::field::FieldSnapshot;

/// Approximate RFC 5322 address: dot-separated local-part atoms, `@`, one or
/// more DNS labels each followed by a dot, then a 2 to 4 letter final label.
const EMAIL_PATTERN: &str = r"^[a-z0-9^_`{|}~-]+(?:\.[a-z0-9^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+(?:[a-z]{2,4})$";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(EMAIL_PATTERN)
        .case_insensitive(true)
        // ASCII-only folding, so `[a-z]` never admits `ſ` or the Kelvin sign
        .unicode(false)
        .build()
        .expect("email pattern is a valid regex")
});

/// Predicate that fails on an empty value.
///
/// Whitespace counts as a value; nothing is trimmed.
#[derive(Clone, Copy, Default, Debug)]
pub struct Required;

impl Predicate for Required {
    #[inline]
    fn check(&self, field: &FieldSnapshot) -> bool {
        !field.value.is_empty()
    }
}

/// Create the `required` predicate.
///
/// # Example
///
/// ```rust
/// use validity::field::FieldSnapshot;
/// use validity::predicate::*;
///
/// assert!(required().check(&FieldSnapshot::new("x")));
/// assert!(required().check(&FieldSnapshot::new(" ")));
/// assert!(!required().check(&FieldSnapshot::new("")));
/// ```
pub fn required() -> Required {
    Required
}

/// Predicate that accepts permissive, approximate email addresses.
#[derive(Clone, Copy, Default, Debug)]
pub struct Email;

impl Predicate for Email {
    #[inline]
    fn check(&self, field: &FieldSnapshot) -> bool {
        is_email(&field.value)
    }
}

/// Create the `email` predicate.
///
/// # Example
///
/// ```rust
/// use validity::field::FieldSnapshot;
/// use validity::predicate::*;
///
/// assert!(email().check(&FieldSnapshot::new("name@example.com")));
/// assert!(!email().check(&FieldSnapshot::new("not-an-email")));
/// ```
pub fn email() -> Email {
    Email
}

/// Match a raw string against the email grammar.
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn required_rejects_only_empty() {
        assert!(!Required.check(&FieldSnapshot::new("")));
        assert!(Required.check(&FieldSnapshot::new("\t")));
        assert!(Required.check(&FieldSnapshot::new("0")));
    }

    #[test]
    fn email_accepts_common_addresses() {
        for ok in [
            "a@b.co",
            "name@example.com",
            "first.last@mail.example.org",
            "x-y_z@sub-domain.example.info",
            "odd^`{|}~@example.net",
            "UPPER@EXAMPLE.COM",
            "digits123@123.example.io",
        ] {
            assert!(is_email(ok), "expected {ok:?} to be accepted");
        }
    }

    #[test]
    fn email_rejects_non_ascii_lookalikes() {
        for bad in [
            "\u{17F}@example.com",
            "a@example.\u{212A}\u{212A}",
            "j\u{F6}rg@example.com",
            "name@b\u{FC}cher.de",
        ] {
            assert!(!is_email(bad), "expected {bad:?} to be rejected");
            assert!(!Email.check(&FieldSnapshot::new(bad)));
        }
        assert!(is_email("NAME@EXAMPLE.COM"));
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        for bad in [
            "",
            "not-an-email",
            "@example.com",
            "name@",
            "name@example",
            "name@example.c",
            "name@example.museum",
            "name@example.c0m",
            "first..last@example.com",
            ".first@example.com",
            "first.@example.com",
            "name@-example.com",
            "name@example-.com",
            "name@.example.com",
            "name@@example.com",
            "na me@example.com",
            "name@example.com ",
            "name+tag@example.com",
        ] {
            assert!(!is_email(bad), "expected {bad:?} to be rejected");
        }
    }

    proptest! {
        #[test]
        fn prop_grammar_strings_pass(
            addr in "[a-z0-9_~-]{1,8}(\\.[a-z0-9_~-]{1,8}){0,2}@([a-z0-9]{1,6}\\.){1,3}[a-zA-Z]{2,4}"
        ) {
            prop_assert!(is_email(&addr));
        }

        #[test]
        fn prop_missing_at_fails(addr in "[a-z0-9._~-]{0,24}") {
            prop_assert!(!is_email(&addr));
        }

        #[test]
        fn prop_long_final_label_fails(
            addr in "[a-z0-9]{1,8}@[a-z0-9]{1,8}\\.[a-z]{5,10}"
        ) {
            prop_assert!(!is_email(&addr));
        }

        #[test]
        fn prop_short_final_label_fails(addr in "[a-z0-9]{1,8}@[a-z0-9]{1,8}\\.[a-z]") {
            prop_assert!(!is_email(&addr));
        }
    }
}
