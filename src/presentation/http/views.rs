// src/presentation/http/views.rs
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
    forms::{CommentForm, FormView},
};
use handlebars::Handlebars;
use serde::Serialize;

const INDEX_TEMPLATE_NAME: &str = "index";
const INDEX_TEMPLATE: &str = include_str!("../../../templates/index.hbs");

/// Context handed to the listing page.
#[derive(Debug, Serialize)]
pub struct IndexContext<'a> {
    pub form: FormView,
    pub obj: &'a [ArticleDto],
}

pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, handlebars::TemplateError> {
        let mut registry = Handlebars::new();
        // Referencing a value missing from the context is an error, not "".
        registry.set_strict_mode(true);
        registry.register_template_string(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)?;
        Ok(Self { registry })
    }

    pub fn render_index(
        &self,
        form: &CommentForm,
        articles: &[ArticleDto],
    ) -> ApplicationResult<String> {
        let context = IndexContext {
            form: form.view(),
            obj: articles,
        };
        self.registry
            .render(INDEX_TEMPLATE_NAME, &context)
            .map_err(|err| ApplicationError::infrastructure(format!("failed to render page: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::forms::FormData;

    fn sample_articles() -> Vec<ArticleDto> {
        vec![
            ArticleDto {
                id: 1,
                title: "First".into(),
                text: "Opening words".into(),
            },
            ArticleDto {
                id: 2,
                title: "<b>Second</b>".into(),
                text: String::new(),
            },
        ]
    }

    #[test]
    fn renders_listing_and_blank_form() {
        let renderer = PageRenderer::new().unwrap();
        let html = renderer
            .render_index(&CommentForm::unbound(), &sample_articles())
            .unwrap();

        assert!(html.contains("id=\"article-1\""));
        assert!(html.contains("Opening words"));
        assert!(html.contains("name=\"title\""));
        assert!(html.contains("data-editor-config=\"custom\""));
        assert!(!html.contains("errorlist"));
    }

    #[test]
    fn escapes_stored_markup() {
        let renderer = PageRenderer::new().unwrap();
        let html = renderer
            .render_index(&CommentForm::unbound(), &sample_articles())
            .unwrap();

        assert!(html.contains("&lt;b&gt;Second&lt;/b&gt;"));
        assert!(!html.contains("<b>Second</b>"));
    }

    #[test]
    fn renders_field_errors_for_bound_form() {
        let renderer = PageRenderer::new().unwrap();
        let form = CommentForm::bind(&FormData::from([("text", "kept")]));
        let html = renderer.render_index(&form, &[]).unwrap();

        assert!(html.contains("This field is required."));
        assert!(html.contains("kept"));
        assert!(html.contains("No articles yet."));
    }
}
