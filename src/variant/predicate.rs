//! Predicates over prop bags.

use super::props::{PropBag, PropValue};

/// A pure boolean test over a [`PropBag`], kept as data.
///
/// A predicate compares one prop against an expected string value. The
/// `match_when_absent` form additionally holds when the prop is missing
/// entirely, which is how a table encodes a default variant. A prop that
/// is present with a different value, or with a non-string value, never
/// matches, default or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    prop: String,
    value: String,
    when_absent: bool,
}

impl Predicate {
    /// Matches when `prop` is present with exactly `value`.
    pub fn eq(prop: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            prop: prop.into(),
            value: value.into(),
            when_absent: false,
        }
    }

    /// Matches when `prop` equals `value`, or when `prop` is absent.
    ///
    /// This is the default-variant form: an unset axis falls back to the
    /// entry, while an unknown or wrong-typed value falls through to
    /// nothing.
    pub fn eq_or_absent(prop: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            prop: prop.into(),
            value: value.into(),
            when_absent: true,
        }
    }

    /// Evaluates the predicate against a prop bag.
    pub fn matches(&self, props: &PropBag) -> bool {
        match props.get(&self.prop) {
            None => self.when_absent,
            Some(PropValue::Str(s)) => s == &self.value,
            Some(_) => false,
        }
    }

    /// The prop name this predicate inspects.
    pub fn prop(&self) -> &str {
        &self.prop
    }

    /// The value this predicate expects.
    pub fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_matches_exact_value() {
        let pred = Predicate::eq("as", "h2");
        assert!(pred.matches(&PropBag::new().with("as", "h2")));
        assert!(!pred.matches(&PropBag::new().with("as", "h3")));
    }

    #[test]
    fn test_eq_does_not_match_absent() {
        let pred = Predicate::eq("as", "h2");
        assert!(!pred.matches(&PropBag::new()));
    }

    #[test]
    fn test_eq_or_absent_matches_missing_prop() {
        let pred = Predicate::eq_or_absent("type", "vertical");
        assert!(pred.matches(&PropBag::new()));
        assert!(pred.matches(&PropBag::new().with("type", "vertical")));
    }

    #[test]
    fn test_eq_or_absent_rejects_other_value() {
        let pred = Predicate::eq_or_absent("type", "vertical");
        assert!(!pred.matches(&PropBag::new().with("type", "horizontal")));
        assert!(!pred.matches(&PropBag::new().with("type", "upside-down")));
    }

    #[test]
    fn test_wrong_type_never_matches() {
        let eq = Predicate::eq("type", "horizontal");
        let with_default = Predicate::eq_or_absent("type", "vertical");
        let props = PropBag::new().with("type", true);
        assert!(!eq.matches(&props));
        assert!(!with_default.matches(&props));
    }
}
