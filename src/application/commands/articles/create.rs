// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleText, ArticleTitle, NewArticle},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateArticleCommand {
    pub title: String,
    pub text: String,
}

impl ArticleCommandService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let text = ArticleText::new(command.text);

        let created = self.write_repo.insert(NewArticle::new(title, text)).await?;
        tracing::info!(article_id = %created.id, "article created");
        Ok(created.into())
    }
}
