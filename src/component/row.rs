//! Layout rows.

use once_cell::sync::Lazy;

use crate::render::{Element, RenderContext};
use crate::style::StyleRule;
use crate::variant::{Predicate, PropBag, VariantTable};

static TABLE: Lazy<VariantTable> = Lazy::new(|| {
    VariantTable::builder("row")
        .base(StyleRule::parse("display: flex;"))
        .entry(
            "horizontal",
            Predicate::eq("type", "horizontal"),
            StyleRule::parse("justify-content: space-between; align-items: center;"),
        )
        .entry(
            "vertical",
            Predicate::eq_or_absent("type", "vertical"),
            StyleRule::parse("flex-direction: column; gap: 1.6rem;"),
        )
        .build()
});

pub(crate) fn table() -> &'static VariantTable {
    &TABLE
}

/// The row's flow direction. Vertical is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowDirection {
    Horizontal,
    #[default]
    Vertical,
}

impl RowDirection {
    fn as_prop(self) -> &'static str {
        match self {
            RowDirection::Horizontal => "horizontal",
            RowDirection::Vertical => "vertical",
        }
    }
}

/// A flex layout row holding already-rendered children.
///
/// Vertical rows stack their children with a gap; horizontal rows spread
/// them with space between.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    direction: RowDirection,
    children: Vec<Element>,
}

impl Row {
    /// Creates an empty vertical row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the flow direction.
    pub fn direction(mut self, direction: RowDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Appends a child element.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// The prop bag this instance resolves with.
    pub fn props(&self) -> PropBag {
        PropBag::new().with("type", self.direction.as_prop())
    }

    /// Resolves the row's styles and renders it into `ctx`.
    pub fn render(&self, ctx: &mut RenderContext) -> Element {
        let resolved = TABLE.resolve(&self.props());
        let class = resolved.class_name();
        ctx.insert_class(&class, resolved.cascade());
        let mut el = Element::new("div").class(class);
        for child in &self.children {
            el = el.child(child.clone());
        }
        el
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{resolve, ComponentKind};

    #[test]
    fn test_horizontal_spreads_children() {
        let resolved = resolve(ComponentKind::Row, &PropBag::new().with("type", "horizontal"));
        assert_eq!(resolved.declaration("justify-content"), Some("space-between"));
        assert_eq!(resolved.declaration("align-items"), Some("center"));
        assert_eq!(resolved.declaration("flex-direction"), None);
    }

    #[test]
    fn test_missing_type_equals_vertical() {
        let implicit = resolve(ComponentKind::Row, &PropBag::new());
        let explicit = resolve(ComponentKind::Row, &PropBag::new().with("type", "vertical"));
        assert_eq!(implicit, explicit);
        assert_eq!(implicit.declaration("flex-direction"), Some("column"));
        assert_eq!(implicit.declaration("gap"), Some("1.6rem"));
    }

    #[test]
    fn test_three_distinct_results() {
        let horizontal = resolve(ComponentKind::Row, &PropBag::new().with("type", "horizontal"));
        let vertical = resolve(ComponentKind::Row, &PropBag::new());
        let wrong_type = resolve(ComponentKind::Row, &PropBag::new().with("type", true));
        assert_ne!(horizontal, vertical);
        assert_ne!(horizontal, wrong_type);
        assert_ne!(vertical, wrong_type);
    }

    #[test]
    fn test_wrong_typed_prop_gets_base_only() {
        let resolved = resolve(ComponentKind::Row, &PropBag::new().with("type", true));
        assert_eq!(resolved.rules().len(), 1);
        assert_eq!(resolved.class_name(), "row");
        assert_eq!(resolved.declaration("display"), Some("flex"));
    }

    #[test]
    fn test_render_nests_children_in_order() {
        let mut ctx = RenderContext::default();
        let el = Row::new()
            .direction(RowDirection::Horizontal)
            .child(Element::new("p").text("first"))
            .child(Element::new("p").text("second"))
            .render(&mut ctx);
        assert_eq!(el.class_name(), Some("row--horizontal"));
        assert_eq!(el.children().len(), 2);
        assert_eq!(el.children()[0].text_content(), Some("first"));
    }
}
