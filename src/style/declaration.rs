//! Single style declarations.

use cssparser::{Delimiter, Parser, ParserInput};
use log::debug;

use super::error::StyleParseError;

/// A single `property: value` pair.
///
/// Declarations are immutable once created. Both sides are kept as raw
/// strings; the crate composes and emits declarations but does not
/// interpret property values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    property: String,
    value: String,
}

impl Declaration {
    /// Creates a declaration from a property name and value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use oasis_ui::Declaration;
    ///
    /// let decl = Declaration::new("font-size", "3rem");
    /// assert_eq!(decl.property(), "font-size");
    /// assert_eq!(decl.value(), "3rem");
    /// ```
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }

    /// Returns the property name.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Returns the raw value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Declaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// Parses a `;`-separated declaration list.
///
/// In lenient mode (`strict = false`) malformed declarations are dropped
/// and parsing continues at the next `;`, matching stylesheet error
/// recovery. In strict mode the first malformed declaration aborts with
/// its source text.
pub(crate) fn parse_declaration_list(
    src: &str,
    strict: bool,
) -> Result<Vec<Declaration>, StyleParseError> {
    let mut input = ParserInput::new(src);
    let mut parser = Parser::new(&mut input);
    let mut decls = Vec::new();

    while !parser.is_exhausted() {
        let segment_start = parser.position();
        let parsed = parser.parse_until_after(Delimiter::Semicolon, parse_one_declaration);
        match parsed {
            Ok(Some(decl)) => decls.push(decl),
            // Empty segment between semicolons; nothing to record.
            Ok(None) => {}
            Err(_) => {
                let offending = parser
                    .slice_from(segment_start)
                    .trim()
                    .trim_end_matches(';')
                    .trim()
                    .to_string();
                if strict {
                    return Err(StyleParseError::InvalidDeclaration { offending });
                }
                debug!("dropping malformed declaration: '{}'", offending);
            }
        }
    }

    Ok(decls)
}

fn parse_one_declaration<'i>(
    parser: &mut Parser<'i, '_>,
) -> Result<Option<Declaration>, cssparser::ParseError<'i, ()>> {
    if parser.is_exhausted() {
        return Ok(None);
    }

    let property = parser.expect_ident_cloned()?.to_string();
    parser.expect_colon()?;

    // The value is everything up to the delimiter, kept verbatim. At least
    // one token is required; the rest is consumed without interpretation.
    let value_start = parser.position();
    parser.next()?;
    while parser.next().is_ok() {}
    let value = parser.slice_from(value_start).trim().to_string();

    Ok(Some(Declaration::new(property, value)))
}
