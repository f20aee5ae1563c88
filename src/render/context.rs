//! The process-wide style sink.

use once_cell::sync::Lazy;
use std::sync::Mutex;

use log::debug;

use crate::style::StyleRule;

/// Error returned when the process-wide render context is unusable.
///
/// This is the crate's only fatal error: styling cannot proceed without
/// the context, so it surfaces to the composition root rather than being
/// absorbed like resolution fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The global context lock was poisoned by a panicking thread.
    ContextUnavailable,
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationError::ContextUnavailable => {
                write!(f, "global render context is unavailable")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// The stylesheet sink components render into.
///
/// A context holds two ordered sections: the global reset (installed at
/// most once, guarded by an explicit initialized flag) and one rule block
/// per distinct resolved class, in first-insertion order. Re-inserting a
/// class is a no-op: resolution is pure, so a class name always maps to
/// the same declarations.
///
/// One process-wide instance backs [`with_context`]; standalone contexts
/// can be created directly for isolated rendering.
#[derive(Debug, Default)]
pub struct RenderContext {
    initialized: bool,
    reset: Vec<(String, StyleRule)>,
    classes: Vec<(String, StyleRule)>,
}

impl RenderContext {
    /// Creates an empty, uninitialized context.
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the global reset has been installed.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Installs the reset section, once.
    ///
    /// Returns `true` on the installing call and `false` on every call
    /// after it; the later calls change nothing.
    pub(crate) fn install_reset(&mut self, blocks: Vec<(String, StyleRule)>) -> bool {
        if self.initialized {
            return false;
        }
        self.initialized = true;
        self.reset = blocks;
        true
    }

    /// Inserts one resolved class rule, deduplicated by class name.
    pub fn insert_class(&mut self, class: &str, rule: StyleRule) {
        if self.classes.iter().any(|(name, _)| name == class) {
            return;
        }
        debug!("injecting style block for .{}", class);
        self.classes.push((class.to_string(), rule));
    }

    /// Number of distinct class rule blocks.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Serializes the sheet: reset blocks first, then class blocks in
    /// insertion order.
    pub fn stylesheet(&self) -> String {
        let mut out = String::new();
        for (selector, rule) in &self.reset {
            write_block(&mut out, selector, rule);
        }
        for (class, rule) in &self.classes {
            let selector = format!(".{}", class);
            write_block(&mut out, &selector, rule);
        }
        out
    }
}

fn write_block(out: &mut String, selector: &str, rule: &StyleRule) {
    out.push_str(selector);
    out.push_str(" {\n");
    for decl in rule.declarations() {
        out.push_str("  ");
        out.push_str(&decl.to_string());
        out.push('\n');
    }
    out.push_str("}\n\n");
}

static CONTEXT: Lazy<Mutex<RenderContext>> = Lazy::new(|| Mutex::new(RenderContext::new()));

/// Runs `f` with exclusive access to the process-wide render context.
///
/// # Errors
///
/// Returns [`ConfigurationError::ContextUnavailable`] if the context lock
/// was poisoned by a panicking thread.
pub fn with_context<T>(f: impl FnOnce(&mut RenderContext) -> T) -> Result<T, ConfigurationError> {
    let mut guard = CONTEXT
        .lock()
        .map_err(|_| ConfigurationError::ContextUnavailable)?;
    Ok(f(&mut guard))
}
