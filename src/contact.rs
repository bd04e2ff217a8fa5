//! The contact form.
//!
//! A placeholder: three free-text fields and a send action that answers with
//! a fixed acknowledgment. Nothing is validated and nothing leaves the
//! process. Delivery goes through [`ContactSink`] so a real submission
//! service can be plugged in later.

/// Reply shown after every submission.
pub const ACKNOWLEDGMENT: &str = "Thanks! I will get back to you.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "Your name",
            ContactField::Email => "you@example.com",
            ContactField::Message => "Tell me about your project...",
        }
    }

    /// Whether Enter inserts a newline instead of leaving the field.
    pub fn is_multiline(self) -> bool {
        matches!(self, ContactField::Message)
    }

    pub fn next(self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    pub fn prev(self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Message => ContactField::Email,
        }
    }
}

/// What the visitor typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }
}

/// Where submitted messages go.
pub trait ContactSink {
    /// Take a message and return the text to show the visitor.
    fn submit(&mut self, message: &ContactMessage) -> String;
}

/// Sink that keeps nothing and always acknowledges.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcknowledgeOnly;

impl ContactSink for AcknowledgeOnly {
    fn submit(&mut self, _message: &ContactMessage) -> String {
        ACKNOWLEDGMENT.to_string()
    }
}

/// Form state: field contents, focus, and the pending acknowledgment.
#[derive(Debug, Clone)]
pub struct ContactForm {
    values: ContactMessage,
    focus: ContactField,
    editing: bool,
    acknowledgment: Option<String>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            values: ContactMessage::default(),
            focus: ContactField::Name,
            editing: false,
            acknowledgment: None,
        }
    }

    pub fn values(&self) -> &ContactMessage {
        &self.values
    }

    pub fn value(&self, field: ContactField) -> &str {
        self.values.field(field)
    }

    pub fn focus(&self) -> ContactField {
        self.focus
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn acknowledgment(&self) -> Option<&str> {
        self.acknowledgment.as_deref()
    }

    pub fn focus_field(&mut self, field: ContactField) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn begin_edit(&mut self) {
        self.editing = true;
    }

    pub fn end_edit(&mut self) {
        self.editing = false;
    }

    pub fn insert_char(&mut self, c: char) {
        self.values.field_mut(self.focus).push(c);
    }

    pub fn backspace(&mut self) {
        self.values.field_mut(self.focus).pop();
    }

    /// Enter while editing: newline in the message, otherwise move on.
    pub fn enter(&mut self) {
        if self.focus.is_multiline() {
            self.insert_char('\n');
        } else {
            self.focus_next();
        }
    }

    /// Hand the current values to `sink` and hold its reply for display.
    ///
    /// Field contents are kept as typed.
    pub fn submit(&mut self, sink: &mut dyn ContactSink) {
        self.editing = false;
        let reply = sink.submit(&self.values);
        tracing::info!("contact form submitted");
        self.acknowledgment = Some(reply);
    }

    pub fn dismiss_acknowledgment(&mut self) {
        self.acknowledgment = None;
    }
}
