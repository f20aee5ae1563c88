//! Prop bags: the per-render component inputs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single prop value.
///
/// Props carry either a string (variant keys, attribute passthrough) or a
/// boolean flag. The untagged representation lets prop bags round-trip
/// through plain JSON objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Str(String),
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Str(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

/// The full set of props passed to a component instance at render time.
///
/// The engine never mutates a prop bag; resolution is a pure function of
/// the bag's contents. Missing props, unknown values, and wrong-typed
/// values are all legal inputs.
///
/// # Example
///
/// ```rust
/// use oasis_ui::PropBag;
///
/// let props = PropBag::new().with("as", "h2").with("disabled", true);
/// assert_eq!(props.str_value("as"), Some("h2"));
/// assert_eq!(props.str_value("disabled"), None); // wrong type, not a str
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropBag {
    props: BTreeMap<String, PropValue>,
}

impl PropBag {
    /// Creates an empty prop bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a prop, returning the updated bag for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    /// Returns the raw value of a prop, if present.
    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.props.get(name)
    }

    /// Returns the string value of a prop.
    ///
    /// `None` both when the prop is absent and when it holds a non-string
    /// value; callers that must distinguish the two use [`PropBag::get`].
    pub fn str_value(&self, name: &str) -> Option<&str> {
        match self.props.get(name) {
            Some(PropValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// Number of props in the bag.
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// True if the bag carries no props.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}
