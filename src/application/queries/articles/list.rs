use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

impl ArticleQueryService {
    /// Load the full listing. No filtering or pagination is applied.
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self.read_repo.list_all().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
