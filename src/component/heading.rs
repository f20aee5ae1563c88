//! Page headings.

use once_cell::sync::Lazy;

use crate::render::{Element, RenderContext};
use crate::style::StyleRule;
use crate::variant::{Predicate, PropBag, VariantTable};

static TABLE: Lazy<VariantTable> = Lazy::new(|| {
    VariantTable::builder("heading")
        .base(StyleRule::parse("line-height: 1.4;"))
        .entry(
            "h1",
            Predicate::eq("as", "h1"),
            StyleRule::parse("font-size: 3rem; font-weight: 600;"),
        )
        .entry(
            "h2",
            Predicate::eq("as", "h2"),
            StyleRule::parse("font-size: 2rem; font-weight: 600;"),
        )
        .entry(
            "h3",
            Predicate::eq("as", "h3"),
            StyleRule::parse("font-size: 2rem; font-weight: 500;"),
        )
        .build()
});

pub(crate) fn table() -> &'static VariantTable {
    &TABLE
}

/// The heading level, selecting both the rendered tag and the size/weight
/// pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    fn as_prop(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
        }
    }
}

/// A styled heading.
///
/// Without a level only the base line-height applies and the element
/// renders as `h1`.
///
/// # Example
///
/// ```rust
/// use oasis_ui::{Heading, HeadingLevel};
///
/// let heading = Heading::new("All cabins").level(HeadingLevel::H1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    text: String,
    level: Option<HeadingLevel>,
}

impl Heading {
    /// Creates a heading with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: None,
        }
    }

    /// Sets the heading level.
    pub fn level(mut self, level: HeadingLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// The prop bag this instance resolves with.
    pub fn props(&self) -> PropBag {
        match self.level {
            Some(level) => PropBag::new().with("as", level.as_prop()),
            None => PropBag::new(),
        }
    }

    /// Resolves the heading's styles and renders it into `ctx`.
    pub fn render(&self, ctx: &mut RenderContext) -> Element {
        let resolved = TABLE.resolve(&self.props());
        let class = resolved.class_name();
        ctx.insert_class(&class, resolved.cascade());
        Element::new(self.tag()).class(class).text(self.text.as_str())
    }

    fn tag(&self) -> &'static str {
        match self.level {
            Some(level) => level.as_prop(),
            None => "h1",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{resolve, ComponentKind};

    #[test]
    fn test_h1_size_and_weight() {
        let resolved = resolve(ComponentKind::Heading, &PropBag::new().with("as", "h1"));
        assert_eq!(resolved.declaration("font-size"), Some("3rem"));
        assert_eq!(resolved.declaration("font-weight"), Some("600"));
    }

    #[test]
    fn test_h2_size_and_weight() {
        let resolved = resolve(ComponentKind::Heading, &PropBag::new().with("as", "h2"));
        assert_eq!(resolved.declaration("font-size"), Some("2rem"));
        assert_eq!(resolved.declaration("font-weight"), Some("600"));
    }

    #[test]
    fn test_h3_size_and_weight() {
        let resolved = resolve(ComponentKind::Heading, &PropBag::new().with("as", "h3"));
        assert_eq!(resolved.declaration("font-size"), Some("2rem"));
        assert_eq!(resolved.declaration("font-weight"), Some("500"));
    }

    #[test]
    fn test_no_level_gets_base_line_height_only() {
        let resolved = resolve(ComponentKind::Heading, &PropBag::new());
        assert_eq!(resolved.declaration("line-height"), Some("1.4"));
        assert_eq!(resolved.declaration("font-size"), None);
        assert_eq!(resolved.declaration("font-weight"), None);
    }

    #[test]
    fn test_unrecognized_level_gets_base_only() {
        let resolved = resolve(ComponentKind::Heading, &PropBag::new().with("as", "h7"));
        assert_eq!(resolved.rules().len(), 1);
        assert_eq!(resolved.class_name(), "heading");
    }

    #[test]
    fn test_render_tag_follows_level() {
        let mut ctx = RenderContext::default();
        let el = Heading::new("Form").level(HeadingLevel::H3).render(&mut ctx);
        assert_eq!(el.tag(), "h3");
        assert_eq!(el.class_name(), Some("heading--h3"));
    }

    #[test]
    fn test_render_without_level_defaults_to_h1_tag() {
        let mut ctx = RenderContext::default();
        let el = Heading::new("Untitled").render(&mut ctx);
        assert_eq!(el.tag(), "h1");
        assert_eq!(el.class_name(), Some("heading"));
    }
}
