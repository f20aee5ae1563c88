#![forbid(unsafe_code)]

//! Variant-driven style composition for HTML admin interfaces.
//!
//! `oasis-ui` renders a small set of presentational components (headings,
//! buttons, inputs, rows) whose look is selected by declarative variant
//! props. Each component kind owns an ordered [`VariantTable`] of
//! predicate/rule pairs; at render time the table is resolved against the
//! component's prop bag and every matching entry contributes its style
//! rule, in table order, on top of the kind's base rule. Conflicting
//! declarations resolve by standard cascade order (last contribution wins),
//! never by predicate specificity.
//!
//! This crate provides:
//!
//! - [`StyleRule`] and [`Declaration`]: immutable, ordered style primitives
//! - [`VariantTable`], [`Predicate`], [`PropBag`]: the resolution core
//! - [`Heading`], [`Button`], [`Input`], [`Row`]: the component kinds
//! - [`Page`]: the composition root that mounts a component tree and
//!   installs the process-wide global reset exactly once
//!
//! # Example
//!
//! ```rust
//! use oasis_ui::{Button, ButtonVariation, Page};
//!
//! let page = Page::new("All cabins")
//!     .note("Filter / Sort")
//!     .action(Button::new("Check in").on_press(|| println!("check in")))
//!     .action(Button::new("Check out").variation(ButtonVariation::Secondary));
//!
//! let mounted = page.mount().unwrap();
//! let html = mounted.to_html().unwrap();
//! assert!(html.contains("All cabins"));
//! assert!(html.contains("box-sizing: border-box"));
//! ```
//!
//! Resolution itself is a pure function and can be used without rendering:
//!
//! ```rust
//! use oasis_ui::{resolve, ComponentKind, PropBag};
//!
//! let resolved = resolve(ComponentKind::Heading, &PropBag::new().with("as", "h2"));
//! assert_eq!(resolved.declaration("font-size"), Some("2rem"));
//! ```

pub mod component;
pub mod global;
pub mod page;
pub mod render;
pub mod style;
pub mod variant;

pub use component::{
    resolve, Button, ButtonSize, ButtonVariation, ComponentKind, Heading, HeadingLevel, Input,
    Row, RowDirection,
};
pub use page::{MountedPage, Page};
pub use render::{with_context, ConfigurationError, Element, RenderContext};
pub use style::{Declaration, StyleParseError, StyleRule};
pub use variant::{Predicate, PropBag, PropValue, Resolved, VariantEntry, VariantTable};
