//! The global reset and base styles.
//!
//! Installed into a render context at most once: [`initialize`] is
//! idempotent and is invoked from the composition root, never from leaf
//! components. The reset normalizes box sizing, zeroes margins and
//! padding, sets the base font and line-height, and defines the `:root`
//! color and radius/shadow variables the component rules consume.

use log::debug;

use crate::render::RenderContext;
use crate::style::StyleRule;

/// Installs the global reset into `ctx`, once.
///
/// Calling this again on an initialized context has no additional
/// effect. It cannot fail: obtaining the context is the caller's step,
/// and that is where an unusable context surfaces.
pub fn initialize(ctx: &mut RenderContext) {
    if ctx.install_reset(reset_blocks()) {
        debug!("global reset installed");
    }
}

fn reset_blocks() -> Vec<(String, StyleRule)> {
    vec![
        (
            ":root".to_string(),
            StyleRule::parse(
                "--color-brand-50: #eef2ff; \
                 --color-brand-600: #4f46e5; \
                 --color-brand-700: #4338ca; \
                 --color-grey-0: #fff; \
                 --color-grey-50: #f9fafb; \
                 --color-grey-200: #e5e7eb; \
                 --color-grey-300: #d1d5db; \
                 --color-grey-600: #4b5563; \
                 --color-grey-700: #374151; \
                 --color-red-100: #fee2e2; \
                 --color-red-700: #b91c1c; \
                 --color-red-800: #991b1b; \
                 --border-radius-sm: 5px; \
                 --shadow-sm: 0 1px 2px rgba(0, 0, 0, 0.04);",
            ),
        ),
        (
            "*, *::before, *::after".to_string(),
            StyleRule::parse("box-sizing: border-box; margin: 0; padding: 0;"),
        ),
        (
            "html".to_string(),
            StyleRule::parse("font-size: 62.5%;"),
        ),
        (
            "body".to_string(),
            StyleRule::parse(
                "font-family: \"Poppins\", sans-serif; color: var(--color-grey-700); \
                 font-size: 1.6rem; line-height: 1.5; min-height: 100vh;",
            ),
        ),
    ]
}
