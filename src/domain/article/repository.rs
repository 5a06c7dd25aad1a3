use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    /// Every stored article, oldest first.
    async fn list_all(&self) -> DomainResult<Vec<Article>>;
}
