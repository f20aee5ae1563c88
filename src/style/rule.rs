//! Ordered style rules.

use super::declaration::{parse_declaration_list, Declaration};
use super::error::StyleParseError;

/// An ordered sequence of [`Declaration`]s.
///
/// A rule is immutable once defined; the builder methods consume and
/// return the rule so construction reads as a chain. Rules can splice
/// other rules, which is how shared fragments are reused across variant
/// entries.
///
/// # Example
///
/// ```rust
/// use oasis_ui::StyleRule;
///
/// let emphasis = StyleRule::parse("font-weight: 600;");
/// let rule = StyleRule::parse("font-size: 2rem;").splice(&emphasis);
/// assert_eq!(rule.get("font-weight"), Some("600"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRule {
    decls: Vec<Declaration>,
}

impl StyleRule {
    /// Creates an empty rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a rule from literal CSS declaration text, leniently.
    ///
    /// Malformed declarations are dropped and parsing continues after the
    /// next `;`, the standard stylesheet error-recovery behavior. This is
    /// total: any input produces a rule.
    pub fn parse(src: &str) -> Self {
        // Lenient parsing cannot fail by construction.
        let decls = parse_declaration_list(src, false).unwrap_or_default();
        Self { decls }
    }

    /// Parses a rule strictly, rejecting the first malformed declaration.
    ///
    /// This is the authoring-time counterpart of [`StyleRule::parse`] for
    /// early error detection.
    ///
    /// # Errors
    ///
    /// Returns [`StyleParseError::InvalidDeclaration`] with the offending
    /// source text.
    pub fn checked(src: &str) -> Result<Self, StyleParseError> {
        let decls = parse_declaration_list(src, true)?;
        Ok(Self { decls })
    }

    /// Appends one declaration, returning the extended rule.
    pub fn declaration(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.decls.push(Declaration::new(property, value));
        self
    }

    /// Splices another rule's declarations onto the end of this one.
    pub fn splice(mut self, other: &StyleRule) -> Self {
        self.decls.extend(other.decls.iter().cloned());
        self
    }

    /// Returns the declarations in source order.
    pub fn declarations(&self) -> &[Declaration] {
        &self.decls
    }

    /// Looks up the effective value for a property within this rule.
    ///
    /// The last declaration for the property wins, per cascade order.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.decls
            .iter()
            .rev()
            .find(|d| d.property() == property)
            .map(|d| d.value())
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    /// True if the rule has no declarations.
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

impl From<Vec<Declaration>> for StyleRule {
    fn from(decls: Vec<Declaration>) -> Self {
        Self { decls }
    }
}

impl std::fmt::Display for StyleRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, decl) in self.decls.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", decl)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_order() {
        let rule = StyleRule::parse("font-size: 3rem; font-weight: 600;");
        let props: Vec<&str> = rule.declarations().iter().map(|d| d.property()).collect();
        assert_eq!(props, vec!["font-size", "font-weight"]);
    }

    #[test]
    fn test_parse_is_total_on_garbage() {
        let rule = StyleRule::parse("!!! not a declaration @@@");
        assert!(rule.is_empty());
    }

    #[test]
    fn test_checked_rejects_what_parse_drops() {
        let src = "color red; font-weight: 500;";
        assert_eq!(StyleRule::parse(src).len(), 1);
        assert!(StyleRule::checked(src).is_err());
    }

    #[test]
    fn test_builder_declaration() {
        let rule = StyleRule::new()
            .declaration("display", "flex")
            .declaration("gap", "1.6rem");
        assert_eq!(rule.len(), 2);
        assert_eq!(rule.get("display"), Some("flex"));
    }

    #[test]
    fn test_splice_appends_in_order() {
        let shared = StyleRule::parse("font-weight: 500;");
        let rule = StyleRule::parse("font-size: 1.4rem;").splice(&shared);
        assert_eq!(rule.len(), 2);
        assert_eq!(rule.declarations()[1].property(), "font-weight");
    }

    #[test]
    fn test_get_last_wins_within_rule() {
        let rule = StyleRule::parse("color: red; color: blue;");
        assert_eq!(rule.get("color"), Some("blue"));
    }

    #[test]
    fn test_get_unknown_property() {
        let rule = StyleRule::parse("color: red;");
        assert_eq!(rule.get("background"), None);
    }

    #[test]
    fn test_display_round_trip() {
        let rule = StyleRule::parse("font-size: 2rem; font-weight: 500;");
        assert_eq!(rule.to_string(), "font-size: 2rem; font-weight: 500;");
    }
}
