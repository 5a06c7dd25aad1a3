// src/application/forms/schema.rs
use serde::Serialize;

/// Named rich-text editor preset used for long-form fields.
pub const RICH_TEXT_PRESET: &str = "custom";

const REQUIRED_MESSAGE: &str = "This field is required.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Char { max_length: usize },
    Text,
}

/// Presentation hint for a field. Never affects cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Widget {
    TextInput,
    Textarea,
    RichText { preset: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub widget: Widget,
}

impl FieldSpec {
    pub fn char(name: &'static str, label: &'static str, max_length: usize) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Char { max_length },
            required: true,
            widget: Widget::TextInput,
        }
    }

    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            required: true,
            widget: Widget::Textarea,
        }
    }

    pub fn with_widget(mut self, widget: Widget) -> Self {
        self.widget = widget;
        self
    }

    pub fn max_length(&self) -> Option<usize> {
        match self.kind {
            FieldKind::Char { max_length } => Some(max_length),
            FieldKind::Text => None,
        }
    }

    /// Normalise a raw submitted value. Absent and blank values are the same
    /// thing here: both clean to the empty string.
    pub fn clean(&self, raw: Option<&str>) -> Result<String, String> {
        let value = raw.unwrap_or_default().trim();

        if value.is_empty() {
            return if self.required {
                Err(REQUIRED_MESSAGE.to_string())
            } else {
                Ok(String::new())
            };
        }

        if let Some(max_length) = self.max_length() {
            let length = value.chars().count();
            if length > max_length {
                return Err(format!(
                    "Ensure this value has at most {max_length} characters (it has {length})."
                ));
            }
        }

        Ok(value.to_string())
    }
}

/// Ordered, declarative description of the fields a form accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Override whether a field must be filled in. Unknown names are ignored.
    pub fn with_required(mut self, name: &str, required: bool) -> Self {
        if let Some(field) = self.fields.iter_mut().find(|field| field.name == name) {
            field.required = required;
        }
        self
    }
}
