//! The variant resolution core.
//!
//! This module provides:
//!
//! - [`PropBag`] and [`PropValue`]: the read-only per-render prop map
//! - [`Predicate`]: a pure boolean test over a prop bag, kept as data
//! - [`VariantTable`] and [`VariantEntry`]: an ordered predicate → rule
//!   mapping for one component kind
//! - [`Resolved`]: the outcome of resolving a table against a prop bag
//!
//! Resolution is non-exclusive: every entry whose predicate holds
//! contributes its rule, in declared table order, after the kind's base
//! rule. Overlapping declarations are settled by cascade order (the later
//! contribution wins), never by predicate specificity. Resolution is a
//! pure, total function of the table and the prop bag: unknown prop
//! values and wrong-typed props simply match nothing.

mod predicate;
mod props;
mod table;

pub use predicate::Predicate;
pub use props::{PropBag, PropValue};
pub use table::{Resolved, VariantEntry, VariantTable, VariantTableBuilder};
