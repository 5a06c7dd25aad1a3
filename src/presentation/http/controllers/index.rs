// src/presentation/http/controllers/index.rs
use crate::application::forms::{CommentForm, FormData};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::routes::INDEX_PATH;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    body::Bytes,
    response::{Html, IntoResponse, Redirect, Response},
};

/// Listing page with a blank comment form.
pub async fn index(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    render_listing(&state, &CommentForm::unbound()).await
}

/// Accept a comment submission. A valid form is saved and answered with a
/// redirect back to the listing so a refresh cannot resubmit it; an invalid
/// one re-renders the page with the bound form.
pub async fn submit_comment(
    Extension(state): Extension<HttpState>,
    body: Bytes,
) -> HttpResult<Response> {
    let form = CommentForm::bind(&FormData::parse(&body));

    if form.is_valid() {
        form.save(&state.services.article_commands)
            .await
            .into_http()?;
        return Ok(Redirect::to(INDEX_PATH).into_response());
    }

    tracing::debug!(
        fields = ?form.errors().fields().collect::<Vec<_>>(),
        "comment form rejected"
    );
    let page = render_listing(&state, &form).await?;
    Ok(page.into_response())
}

// The listing is loaded on every rendering path, including rejected posts.
async fn render_listing(state: &HttpState, form: &CommentForm) -> HttpResult<Html<String>> {
    let articles = state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()?;
    let page = state.renderer.render_index(form, &articles).into_http()?;
    Ok(Html(page))
}
