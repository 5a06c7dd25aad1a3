// src/application/forms/comment.rs
use std::collections::BTreeMap;

use serde::Serialize;

use super::{
    data::FormData,
    schema::{FieldSpec, FormSchema, RICH_TEXT_PRESET, Widget},
};
use crate::{
    application::{
        commands::articles::{ArticleCommandService, CreateArticleCommand},
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleTitle,
};

pub const TITLE_FIELD: &str = "title";
pub const TEXT_FIELD: &str = "text";

/// User-editable projection of an article. `text` is optional even though
/// the stored column has no such relaxation of its own.
pub fn comment_schema() -> FormSchema {
    FormSchema::new(vec![
        FieldSpec::char(TITLE_FIELD, "Title", ArticleTitle::MAX_LENGTH),
        FieldSpec::text(TEXT_FIELD, "Text").with_widget(Widget::RichText {
            preset: RICH_TEXT_PRESET,
        }),
    ])
    .with_required(TEXT_FIELD, false)
}

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    fn add(&mut self, field: &str, message: String) {
        self.0.entry(field.to_string()).or_default().push(message);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn for_field(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub errors: Vec<String>,
    pub has_errors: bool,
    pub required: bool,
    pub max_length: Option<usize>,
    pub widget: Widget,
    pub multiline: bool,
    pub rich_text: bool,
    pub preset: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub bound: bool,
    pub valid: bool,
    pub fields: Vec<FieldView>,
}

#[derive(Debug, Clone)]
pub struct CommentForm {
    schema: FormSchema,
    bound: bool,
    values: BTreeMap<&'static str, String>,
    errors: FormErrors,
}

impl Default for CommentForm {
    fn default() -> Self {
        Self::unbound()
    }
}

impl CommentForm {
    /// A blank form with nothing submitted yet.
    pub fn unbound() -> Self {
        Self {
            schema: comment_schema(),
            bound: false,
            values: BTreeMap::new(),
            errors: FormErrors::default(),
        }
    }

    /// Bind submitted data and clean every declared field. Keys the schema
    /// does not declare are ignored.
    pub fn bind(data: &FormData) -> Self {
        let schema = comment_schema();
        let mut values = BTreeMap::new();
        let mut errors = FormErrors::default();

        for field in schema.fields() {
            let raw = data.get(field.name);
            match field.clean(raw) {
                Ok(cleaned) => {
                    values.insert(field.name, cleaned);
                }
                Err(message) => {
                    // Echo what the user typed so the field can be corrected.
                    values.insert(field.name, raw.unwrap_or_default().to_string());
                    errors.add(field.name, message);
                }
            }
        }

        Self {
            schema,
            bound: true,
            values,
            errors,
        }
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Only a bound form without errors is valid.
    pub fn is_valid(&self) -> bool {
        self.bound && self.errors.is_empty()
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn field_errors(&self, name: &str) -> &[String] {
        self.errors.for_field(name)
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn to_command(&self) -> Option<CreateArticleCommand> {
        if !self.is_valid() {
            return None;
        }
        Some(CreateArticleCommand {
            title: self.value(TITLE_FIELD).unwrap_or_default().to_string(),
            text: self.value(TEXT_FIELD).unwrap_or_default().to_string(),
        })
    }

    /// Persist a new article from the cleaned values.
    pub async fn save(&self, commands: &ArticleCommandService) -> ApplicationResult<ArticleDto> {
        let command = self
            .to_command()
            .ok_or_else(|| ApplicationError::validation("cannot save an invalid form"))?;
        commands.create_article(command).await
    }

    pub fn view(&self) -> FormView {
        let fields = self
            .schema
            .fields()
            .iter()
            .map(|field| {
                let errors = self.field_errors(field.name).to_vec();
                let preset = match field.widget {
                    Widget::RichText { preset } => Some(preset),
                    Widget::TextInput | Widget::Textarea => None,
                };
                FieldView {
                    name: field.name,
                    label: field.label,
                    value: self.value(field.name).unwrap_or_default().to_string(),
                    has_errors: !errors.is_empty(),
                    errors,
                    required: field.required,
                    max_length: field.max_length(),
                    widget: field.widget,
                    multiline: !matches!(field.widget, Widget::TextInput),
                    rich_text: preset.is_some(),
                    preset,
                }
            })
            .collect();

        FormView {
            bound: self.bound,
            valid: self.is_valid(),
            fields,
        }
    }
}
