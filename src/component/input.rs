//! Form inputs.

use once_cell::sync::Lazy;

use crate::render::{Element, RenderContext};
use crate::style::StyleRule;
use crate::variant::{PropBag, VariantTable};

static TABLE: Lazy<VariantTable> = Lazy::new(|| {
    VariantTable::builder("input")
        .base(StyleRule::parse(
            "border: 1px solid var(--color-grey-300); background-color: var(--color-grey-0); \
             border-radius: var(--border-radius-sm); padding: 0.8rem 1.2rem; \
             box-shadow: var(--shadow-sm);",
        ))
        .build()
});

pub(crate) fn table() -> &'static VariantTable {
    &TABLE
}

/// A form input.
///
/// Inputs have no variant axes; the base chrome always applies and the
/// `type`/`placeholder` attributes pass through to the element untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    input_type: Option<String>,
    placeholder: Option<String>,
}

impl Input {
    /// Creates an input with no attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `type` attribute.
    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }

    /// Sets the `placeholder` attribute.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// The prop bag this instance resolves with.
    pub fn props(&self) -> PropBag {
        PropBag::new()
    }

    /// Resolves the input's styles and renders it into `ctx`.
    pub fn render(&self, ctx: &mut RenderContext) -> Element {
        let resolved = TABLE.resolve(&self.props());
        let class = resolved.class_name();
        ctx.insert_class(&class, resolved.cascade());
        let mut el = Element::new("input").class(class);
        if let Some(input_type) = &self.input_type {
            el = el.attr("type", input_type);
        }
        if let Some(placeholder) = &self.placeholder {
            el = el.attr("placeholder", placeholder);
        }
        el
    }
}
