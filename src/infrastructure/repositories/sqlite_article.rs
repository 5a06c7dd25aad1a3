use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleText, ArticleTitle, ArticleWriteRepository,
    NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteArticleRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    text: Option<String>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            text: ArticleText::from(row.text),
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle { title, text } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, text) VALUES (?, ?) RETURNING id, title, text",
        )
        .bind(title.as_str())
        .bind(text.as_str())
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleRepository {
    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, text FROM articles ORDER BY id ASC",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
