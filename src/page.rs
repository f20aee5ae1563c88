//! The composition root.
//!
//! [`Page`] assembles the global reset and a tree of presentational
//! components into a renderable admin page: a horizontal header row with
//! the title, a note, and the action buttons; an optional form section;
//! and a vertical body row with one row per data record. Mounting
//! initializes the global styles (once per process) and renders the
//! tree; the mounted page serializes to a stylesheet plus markup and
//! dispatches activations to the buttons' handlers.

use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::component::{Button, Heading, HeadingLevel, Input, Row, RowDirection};
use crate::global;
use crate::render::{with_context, ConfigurationError, Element, RenderContext};

/// A page under construction.
///
/// # Example
///
/// ```rust
/// use oasis_ui::{Button, ButtonVariation, Input, Page};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Cabin {
///     name: String,
///     capacity: u32,
/// }
///
/// let cabins = vec![Cabin { name: "001".into(), capacity: 4 }];
///
/// let page = Page::new("All cabins")
///     .note("Filter / Sort")
///     .action(Button::new("Check in"))
///     .action(Button::new("Check out").variation(ButtonVariation::Secondary))
///     .field(Input::new().input_type("number").placeholder("Number Of Guests"))
///     .records(&cabins);
///
/// let mounted = page.mount().unwrap();
/// assert!(mounted.to_html().unwrap().contains("All cabins"));
/// ```
#[derive(Debug, Default)]
pub struct Page {
    title: String,
    note: Option<String>,
    actions: Vec<Button>,
    form_heading: Option<String>,
    fields: Vec<Input>,
    records: Vec<Value>,
}

impl Page {
    /// Creates a page with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the header note, rendered next to the title.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Appends an action button to the header row.
    pub fn action(mut self, button: Button) -> Self {
        self.actions.push(button);
        self
    }

    /// Sets the heading above the form section.
    pub fn form_heading(mut self, heading: impl Into<String>) -> Self {
        self.form_heading = Some(heading.into());
        self
    }

    /// Appends a form input.
    pub fn field(mut self, input: Input) -> Self {
        self.fields.push(input);
        self
    }

    /// Appends data records, one body row each.
    ///
    /// Rows are serialized to JSON values; their exact shape is the data
    /// source's concern. A record that fails to serialize is skipped.
    pub fn records<T: Serialize>(mut self, rows: &[T]) -> Self {
        for row in rows {
            match serde_json::to_value(row) {
                Ok(value) => self.records.push(value),
                Err(err) => debug!("skipping unserializable record: {}", err),
            }
        }
        self
    }

    /// Mounts the page: installs the global styles (once per process)
    /// and renders the component tree into the process-wide context.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the render context is
    /// unavailable. This is fatal: there is no styled output without
    /// the context.
    pub fn mount(self) -> Result<MountedPage, ConfigurationError> {
        let root = with_context(|ctx| {
            global::initialize(ctx);
            self.render_tree(ctx)
        })?;
        Ok(MountedPage {
            root,
            actions: self.actions,
        })
    }

    fn render_tree(&self, ctx: &mut RenderContext) -> Element {
        let mut header = Row::new()
            .direction(RowDirection::Horizontal)
            .child(Heading::new(self.title.as_str()).level(HeadingLevel::H1).render(ctx));
        if let Some(note) = &self.note {
            header = header.child(Element::new("p").text(note.as_str()));
        }
        for button in &self.actions {
            header = header.child(button.render(ctx));
        }

        let mut root = Element::new("main").child(header.render(ctx));

        if !self.fields.is_empty() {
            let mut form = Row::new();
            if let Some(heading) = &self.form_heading {
                form = form.child(Heading::new(heading.as_str()).level(HeadingLevel::H3).render(ctx));
            }
            for field in &self.fields {
                form = form.child(field.render(ctx));
            }
            root = root.child(form.render(ctx));
        }

        if !self.records.is_empty() {
            let mut body = Row::new();
            for record in &self.records {
                body = body.child(record_row(record).render(ctx));
            }
            root = root.child(body.render(ctx));
        }

        root
    }
}

/// One body row per record: each of the record's values becomes a cell,
/// spread horizontally.
fn record_row(record: &Value) -> Row {
    let mut row = Row::new().direction(RowDirection::Horizontal);
    match record {
        Value::Object(fields) => {
            for value in fields.values() {
                row = row.child(cell(value));
            }
        }
        other => {
            row = row.child(cell(other));
        }
    }
    row
}

fn cell(value: &Value) -> Element {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    };
    Element::new("p").text(text)
}

/// A mounted page: the rendered tree plus the activatable buttons.
#[derive(Debug)]
pub struct MountedPage {
    root: Element,
    actions: Vec<Button>,
}

impl MountedPage {
    /// The rendered root element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// The page's action buttons, in header order.
    pub fn actions(&self) -> &[Button] {
        &self.actions
    }

    /// Forwards one activation to the first button with the given label.
    ///
    /// Returns `false` when no button matches; the handler is invoked
    /// exactly once when one does.
    pub fn press(&self, label: &str) -> bool {
        match self.actions.iter().find(|b| b.label() == label) {
            Some(button) => {
                button.press();
                true
            }
            None => false,
        }
    }

    /// The current process-wide stylesheet.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the render context is
    /// unavailable.
    pub fn stylesheet(&self) -> Result<String, ConfigurationError> {
        with_context(|ctx| ctx.stylesheet())
    }

    /// Serializes the page: a `<style>` element followed by the markup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the render context is
    /// unavailable.
    pub fn to_html(&self) -> Result<String, ConfigurationError> {
        let sheet = self.stylesheet()?;
        Ok(format!("<style>\n{}</style>\n{}\n", sheet, self.root.to_html()))
    }
}
