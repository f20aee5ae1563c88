//! Rendering: the element tree and the process-wide style sink.
//!
//! This module provides:
//!
//! - [`Element`]: a plain markup tree node with HTML serialization
//! - [`RenderContext`]: the stylesheet sink components inject resolved
//!   class rules into; one process-wide instance backs [`with_context`]
//! - [`ConfigurationError`]: the crate's only fatal error, raised when
//!   the process-wide context is unusable

mod context;
mod element;

pub use context::{with_context, ConfigurationError, RenderContext};
pub use element::Element;
