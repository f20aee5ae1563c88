//! Markup tree nodes.

/// A rendered markup element.
///
/// Elements are plain data: a tag, an optional class, attributes, text,
/// and children. Styling lives entirely in the stylesheet; an element
/// only carries the class name its resolution produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    class: Option<String>,
    attrs: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

/// Tags serialized without a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input"];

impl Element {
    /// Creates an element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Sets the class attribute.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Appends an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Sets the text content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Appends a child element.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// The element's tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The element's class, if any.
    pub fn class_name(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// The element's text content, if any.
    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Looks up an attribute value.
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The element's children.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Serializes the subtree to HTML.
    ///
    /// Text and attribute values are escaped; tag and class names are
    /// engine-generated and emitted as-is.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if let Some(class) = &self.class {
            out.push_str(" class=\"");
            out.push_str(&escape_attr(class));
            out.push('"');
        }
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        if VOID_TAGS.contains(&self.tag.as_str()) {
            out.push_str(" />");
            return;
        }
        out.push('>');
        if let Some(text) = &self.text {
            out.push_str(&escape_text(text));
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
