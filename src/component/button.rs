//! Action buttons.

use once_cell::sync::Lazy;

use crate::render::{Element, RenderContext};
use crate::style::StyleRule;
use crate::variant::{Predicate, PropBag, VariantTable};

static TABLE: Lazy<VariantTable> = Lazy::new(|| {
    VariantTable::builder("button")
        .base(StyleRule::parse(
            "border: none; border-radius: var(--border-radius-sm); \
             box-shadow: var(--shadow-sm); cursor: pointer;",
        ))
        // Variation axis first, size axis second: size declarations win
        // direct conflicts in the cascade.
        .entry(
            "primary",
            Predicate::eq("variation", "primary"),
            StyleRule::parse(
                "color: var(--color-brand-50); background-color: var(--color-brand-600);",
            ),
        )
        .entry(
            "secondary",
            Predicate::eq("variation", "secondary"),
            StyleRule::parse(
                "color: var(--color-grey-600); background: var(--color-grey-0); \
                 border: 1px solid var(--color-grey-200);",
            ),
        )
        .entry(
            "danger",
            Predicate::eq("variation", "danger"),
            StyleRule::parse(
                "color: var(--color-red-100); background-color: var(--color-red-700);",
            ),
        )
        .entry(
            "small",
            Predicate::eq("size", "small"),
            StyleRule::parse(
                "font-size: 1.2rem; padding: 0.4rem 0.8rem; text-transform: uppercase; \
                 font-weight: 600; text-align: center;",
            ),
        )
        .entry(
            "medium",
            Predicate::eq("size", "medium"),
            StyleRule::parse("font-size: 1.4rem; padding: 1.2rem 1.6rem; font-weight: 500;"),
        )
        .entry(
            "large",
            Predicate::eq("size", "large"),
            StyleRule::parse("font-size: 1.6rem; padding: 1.2rem 2.4rem; font-weight: 500;"),
        )
        .build()
});

pub(crate) fn table() -> &'static VariantTable {
    &TABLE
}

/// The button's variation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariation {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariation {
    fn as_prop(self) -> &'static str {
        match self {
            ButtonVariation::Primary => "primary",
            ButtonVariation::Secondary => "secondary",
            ButtonVariation::Danger => "danger",
        }
    }
}

/// The button's size axis, independent of the variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    fn as_prop(self) -> &'static str {
        match self {
            ButtonSize::Small => "small",
            ButtonSize::Medium => "medium",
            ButtonSize::Large => "large",
        }
    }
}

/// A styled button that forwards activation to a caller-supplied handler.
///
/// The two variant axes are orthogonal; both contribute style rules. The
/// button itself holds no state: `press` calls the handler exactly once
/// per activation, synchronously, with no arguments, and what the handler
/// does is entirely the caller's concern.
///
/// # Example
///
/// ```rust
/// use oasis_ui::{Button, ButtonSize, ButtonVariation};
///
/// let button = Button::new("Check in")
///     .variation(ButtonVariation::Primary)
///     .size(ButtonSize::Medium)
///     .on_press(|| println!("check in"));
/// button.press();
/// ```
pub struct Button {
    label: String,
    variation: ButtonVariation,
    size: ButtonSize,
    on_press: Option<Box<dyn Fn()>>,
}

impl Button {
    /// Creates a button with the default variation (primary) and size
    /// (medium).
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variation: ButtonVariation::default(),
            size: ButtonSize::default(),
            on_press: None,
        }
    }

    /// Sets the variation axis.
    pub fn variation(mut self, variation: ButtonVariation) -> Self {
        self.variation = variation;
        self
    }

    /// Sets the size axis.
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Supplies the activation handler.
    pub fn on_press(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_press = Some(Box::new(handler));
        self
    }

    /// The button's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Forwards one activation to the handler, if any.
    pub fn press(&self) {
        if let Some(handler) = &self.on_press {
            handler();
        }
    }

    /// The prop bag this instance resolves with. Both axes are always
    /// set, so the defaults are explicit at resolution time.
    pub fn props(&self) -> PropBag {
        PropBag::new()
            .with("variation", self.variation.as_prop())
            .with("size", self.size.as_prop())
    }

    /// Resolves the button's styles and renders it into `ctx`.
    pub fn render(&self, ctx: &mut RenderContext) -> Element {
        let resolved = TABLE.resolve(&self.props());
        let class = resolved.class_name();
        ctx.insert_class(&class, resolved.cascade());
        Element::new("button").class(class).text(self.label.as_str())
    }
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("variation", &self.variation)
            .field("size", &self.size)
            .field("has_handler", &self.on_press.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{resolve, ComponentKind};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_both_axes_contribute() {
        let props = PropBag::new()
            .with("variation", "secondary")
            .with("size", "small");
        let resolved = resolve(ComponentKind::Button, &props);
        assert_eq!(resolved.modifiers(), &["secondary", "small"]);
        assert_eq!(resolved.declaration("background"), Some("var(--color-grey-0)"));
        assert_eq!(resolved.declaration("font-size"), Some("1.2rem"));
    }

    #[test]
    fn test_size_entry_wins_weight_conflict() {
        // Secondary sets no weight, small sets 600; with danger + large
        // the large entry's 500 is the only weight. Either way the later
        // size entry owns font-weight.
        let props = PropBag::new()
            .with("variation", "danger")
            .with("size", "large");
        let resolved = resolve(ComponentKind::Button, &props);
        assert_eq!(resolved.declaration("font-weight"), Some("500"));
    }

    #[test]
    fn test_unknown_variation_contributes_nothing() {
        let resolved = resolve(
            ComponentKind::Button,
            &PropBag::new().with("variation", "unknown"),
        );
        assert_eq!(resolved.rules().len(), 1);
        assert_eq!(resolved.class_name(), "button");
    }

    #[test]
    fn test_empty_bag_gets_base_only() {
        let resolved = resolve(ComponentKind::Button, &PropBag::new());
        assert_eq!(resolved.rules().len(), 1);
        assert_eq!(resolved.declaration("border"), Some("none"));
    }

    #[test]
    fn test_component_defaults_are_explicit_props() {
        let button = Button::new("Check in");
        let props = button.props();
        assert_eq!(props.str_value("variation"), Some("primary"));
        assert_eq!(props.str_value("size"), Some("medium"));
    }

    #[test]
    fn test_render_class_carries_both_modifiers() {
        let mut ctx = RenderContext::default();
        let el = Button::new("Delete")
            .variation(ButtonVariation::Danger)
            .size(ButtonSize::Small)
            .render(&mut ctx);
        assert_eq!(el.class_name(), Some("button--danger--small"));
        assert!(ctx.stylesheet().contains(".button--danger--small"));
    }

    #[test]
    fn test_press_invokes_handler_once_per_activation() {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let button = Button::new("Check in").on_press(move || seen.set(seen.get() + 1));

        button.press();
        assert_eq!(count.get(), 1);
        button.press();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_press_without_handler_is_a_no_op() {
        Button::new("Noop").press();
    }
}
