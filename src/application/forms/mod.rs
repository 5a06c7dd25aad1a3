// src/application/forms/mod.rs
mod comment;
mod data;
mod schema;

pub use comment::{CommentForm, FieldView, FormErrors, FormView, TEXT_FIELD, TITLE_FIELD, comment_schema};
pub use data::FormData;
pub use schema::{FieldKind, FieldSpec, FormSchema, RICH_TEXT_PRESET, Widget};
