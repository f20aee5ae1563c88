//! The presentational component kinds.
//!
//! Four kinds ([`Heading`], [`Button`], [`Input`], [`Row`]), each a thin
//! binding over the variant core: the kind owns one static
//! [`VariantTable`](crate::VariantTable), builds a prop bag from its typed
//! variant axes, resolves, and renders an [`Element`](crate::Element)
//! carrying the resolved class. Components hold no state and perform no
//! business logic; [`Button`] additionally forwards activation to a
//! caller-supplied handler.

mod button;
mod heading;
mod input;
mod row;

pub use button::{Button, ButtonSize, ButtonVariation};
pub use heading::{Heading, HeadingLevel};
pub use input::Input;
pub use row::{Row, RowDirection};

use crate::variant::{PropBag, Resolved, VariantTable};

/// The closed set of component kinds.
///
/// Each kind owns exactly one variant table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Heading,
    Button,
    Input,
    Row,
}

impl ComponentKind {
    /// The kind's variant table.
    pub fn table(self) -> &'static VariantTable {
        match self {
            ComponentKind::Heading => heading::table(),
            ComponentKind::Button => button::table(),
            ComponentKind::Input => input::table(),
            ComponentKind::Row => row::table(),
        }
    }

    /// The kind's base class name.
    pub fn base_class(self) -> &'static str {
        self.table().base_class()
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.base_class())
    }
}

/// Resolves a kind's variant table against a prop bag.
///
/// Pure and total: repeated calls with the same inputs yield the same
/// result, and any bag (empty, unknown values, wrong-typed values) is
/// a legal input.
///
/// # Example
///
/// ```rust
/// use oasis_ui::{resolve, ComponentKind, PropBag};
///
/// let resolved = resolve(ComponentKind::Row, &PropBag::new().with("type", "horizontal"));
/// assert_eq!(resolved.declaration("justify-content"), Some("space-between"));
/// ```
pub fn resolve(kind: ComponentKind, props: &PropBag) -> Resolved<'static> {
    kind.table().resolve(props)
}
