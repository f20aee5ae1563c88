//! Variant tables and the resolution algorithm.

use log::trace;

use crate::style::{Declaration, StyleRule};

use super::predicate::Predicate;
use super::props::PropBag;

/// One conditional entry in a [`VariantTable`].
///
/// The name doubles as the class-name modifier contributed when the entry
/// matches (`button--secondary`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantEntry {
    name: String,
    predicate: Predicate,
    rule: StyleRule,
}

impl VariantEntry {
    /// The entry's modifier name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The predicate guarding the entry.
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// The rule contributed when the predicate matches.
    pub fn rule(&self) -> &StyleRule {
        &self.rule
    }
}

/// An ordered predicate → rule mapping for one component kind.
///
/// Entry order is significant twice over: matching entries contribute
/// their rules in declared order, and the later contribution wins direct
/// declaration conflicts in the cascade. Matching is non-exclusive: a
/// bag selecting on two independent axes activates both entries.
///
/// # Example
///
/// ```rust
/// use oasis_ui::{Predicate, PropBag, StyleRule, VariantTable};
///
/// let table = VariantTable::builder("badge")
///     .base(StyleRule::parse("border-radius: 999px;"))
///     .entry("quiet", Predicate::eq("tone", "quiet"), StyleRule::parse("opacity: 0.6;"))
///     .build();
///
/// let resolved = table.resolve(&PropBag::new().with("tone", "quiet"));
/// assert_eq!(resolved.class_name(), "badge--quiet");
/// assert_eq!(resolved.declaration("opacity"), Some("0.6"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantTable {
    base_class: String,
    base: StyleRule,
    entries: Vec<VariantEntry>,
}

impl VariantTable {
    /// Starts building a table for the given base class name.
    pub fn builder(base_class: impl Into<String>) -> VariantTableBuilder {
        VariantTableBuilder {
            base_class: base_class.into(),
            base: StyleRule::new(),
            entries: Vec::new(),
        }
    }

    /// The kind's base class name.
    pub fn base_class(&self) -> &str {
        &self.base_class
    }

    /// The unconditional base rule.
    pub fn base(&self) -> &StyleRule {
        &self.base
    }

    /// The conditional entries, in declared order.
    pub fn entries(&self) -> &[VariantEntry] {
        &self.entries
    }

    /// Resolves the table against a prop bag.
    ///
    /// The base rule always comes first; every entry whose predicate holds
    /// contributes its rule after it, in table order. This is a pure,
    /// total function: any bag, including wrong-typed or unknown values,
    /// produces a result, worst case the base rule alone.
    pub fn resolve(&self, props: &PropBag) -> Resolved<'_> {
        let mut modifiers = Vec::new();
        let mut rules = vec![&self.base];
        for entry in &self.entries {
            if entry.predicate.matches(props) {
                modifiers.push(entry.name.as_str());
                rules.push(&entry.rule);
            }
        }
        trace!(
            "resolved '{}' with modifiers {:?} from {} props",
            self.base_class,
            modifiers,
            props.len()
        );
        Resolved {
            base_class: &self.base_class,
            modifiers,
            rules,
        }
    }
}

/// Builder for [`VariantTable`].
#[derive(Debug, Clone)]
pub struct VariantTableBuilder {
    base_class: String,
    base: StyleRule,
    entries: Vec<VariantEntry>,
}

impl VariantTableBuilder {
    /// Sets the unconditional base rule.
    pub fn base(mut self, rule: StyleRule) -> Self {
        self.base = rule;
        self
    }

    /// Appends a conditional entry.
    pub fn entry(
        mut self,
        name: impl Into<String>,
        predicate: Predicate,
        rule: StyleRule,
    ) -> Self {
        self.entries.push(VariantEntry {
            name: name.into(),
            predicate,
            rule,
        });
        self
    }

    /// Finishes the table.
    pub fn build(self) -> VariantTable {
        VariantTable {
            base_class: self.base_class,
            base: self.base,
            entries: self.entries,
        }
    }
}

/// The outcome of resolving a [`VariantTable`] against a prop bag.
///
/// Holds the matched modifier names and the contributing rules in cascade
/// order (base first). Borrows from the table, so it is cheap to produce
/// and compare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<'a> {
    base_class: &'a str,
    modifiers: Vec<&'a str>,
    rules: Vec<&'a StyleRule>,
}

impl<'a> Resolved<'a> {
    /// The kind's base class name.
    pub fn base_class(&self) -> &'a str {
        self.base_class
    }

    /// Modifier names of the matched entries, in table order.
    pub fn modifiers(&self) -> &[&'a str] {
        &self.modifiers
    }

    /// The contributing rules: base first, then matched entries in table
    /// order.
    pub fn rules(&self) -> &[&'a StyleRule] {
        &self.rules
    }

    /// The class name carried by the rendered element: the base class
    /// joined with each matched modifier (`button--secondary--small`).
    pub fn class_name(&self) -> String {
        if self.modifiers.is_empty() {
            return self.base_class.to_string();
        }
        let mut name = self.base_class.to_string();
        for modifier in &self.modifiers {
            name.push_str("--");
            name.push_str(modifier);
        }
        name
    }

    /// Collapses the contributing rules into one effective rule.
    ///
    /// Later contributions override earlier ones per property; a
    /// property keeps its first-seen position.
    pub fn cascade(&self) -> StyleRule {
        let mut decls: Vec<Declaration> = Vec::new();
        for rule in &self.rules {
            for decl in rule.declarations() {
                match decls.iter_mut().find(|d| d.property() == decl.property()) {
                    Some(existing) => *existing = decl.clone(),
                    None => decls.push(decl.clone()),
                }
            }
        }
        StyleRule::from(decls)
    }

    /// The effective value of one property across the cascade.
    pub fn declaration(&self, property: &str) -> Option<&'a str> {
        self.rules.iter().rev().find_map(|rule| {
            rule.declarations()
                .iter()
                .rev()
                .find(|d| d.property() == property)
                .map(|d| d.value())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn sample_table() -> VariantTable {
        VariantTable::builder("button")
            .base(StyleRule::parse("border: none; cursor: pointer;"))
            .entry(
                "secondary",
                Predicate::eq("variation", "secondary"),
                StyleRule::parse("background: white; font-weight: 400;"),
            )
            .entry(
                "small",
                Predicate::eq("size", "small"),
                StyleRule::parse("font-size: 1.2rem; font-weight: 600;"),
            )
            .build()
    }

    #[test]
    fn test_resolve_no_match_returns_base_only() {
        let table = sample_table();
        let resolved = table.resolve(&PropBag::new());
        assert_eq!(resolved.rules().len(), 1);
        assert_eq!(resolved.rules()[0], table.base());
        assert_eq!(resolved.class_name(), "button");
    }

    #[test]
    fn test_resolve_unknown_value_returns_base_only() {
        let table = sample_table();
        let resolved = table.resolve(&PropBag::new().with("variation", "sparkly"));
        assert_eq!(resolved.rules().len(), 1);
        assert!(resolved.modifiers().is_empty());
    }

    #[test]
    fn test_resolve_orthogonal_axes_both_contribute() {
        let table = sample_table();
        let props = PropBag::new()
            .with("variation", "secondary")
            .with("size", "small");
        let resolved = table.resolve(&props);
        assert_eq!(resolved.modifiers(), &["secondary", "small"]);
        assert_eq!(resolved.rules().len(), 3);
        assert_eq!(resolved.class_name(), "button--secondary--small");
    }

    #[test]
    fn test_resolve_later_entry_wins_conflicts() {
        let table = sample_table();
        let props = PropBag::new()
            .with("variation", "secondary")
            .with("size", "small");
        let resolved = table.resolve(&props);
        // Both entries declare font-weight; the later table entry wins.
        assert_eq!(resolved.declaration("font-weight"), Some("600"));
        assert_eq!(resolved.cascade().get("font-weight"), Some("600"));
    }

    #[test]
    fn test_cascade_keeps_first_seen_position() {
        let table = sample_table();
        let props = PropBag::new()
            .with("variation", "secondary")
            .with("size", "small");
        let cascade = table.resolve(&props).cascade();
        let props_order: Vec<&str> = cascade
            .declarations()
            .iter()
            .map(|d| d.property())
            .collect();
        assert_eq!(
            props_order,
            vec!["border", "cursor", "background", "font-weight", "font-size"]
        );
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let table = sample_table();
        let props = PropBag::new().with("size", "small");
        assert_eq!(table.resolve(&props), table.resolve(&props));
    }

    #[test]
    fn test_resolve_does_not_mutate_props() {
        let table = sample_table();
        let props = PropBag::new().with("size", "small");
        let before = props.clone();
        table.resolve(&props);
        assert_eq!(props, before);
    }

    #[test]
    fn test_declaration_falls_back_to_base() {
        let table = sample_table();
        let resolved = table.resolve(&PropBag::new().with("size", "small"));
        assert_eq!(resolved.declaration("cursor"), Some("pointer"));
        assert_eq!(resolved.declaration("nonexistent"), None);
    }
}
