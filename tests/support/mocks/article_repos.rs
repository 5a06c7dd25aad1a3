// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use news_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleWriteRepository, NewArticle,
};
use news_core::domain::errors::{DomainError, DomainResult};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/* -------------------------------- InMemoryArticleRepo -------------------------------- */

/// メモリ上で記事を保持するリポジトリ（読み書き両対応）
#[derive(Default)]
pub struct InMemoryArticleRepo {
    articles: Mutex<Vec<Article>>,
    inserts: AtomicUsize,
    lists: AtomicUsize,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存の記事で初期化する（挿入回数には数えない）
    pub fn seeded(articles: Vec<Article>) -> Self {
        Self {
            articles: Mutex::new(articles),
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> Vec<Article> {
        self.articles.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.articles.lock().unwrap().len()
    }

    pub fn insert_calls(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.lists.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        let mut articles = self.articles.lock().unwrap();
        let next_id = articles.iter().map(|a| a.id.0).max().unwrap_or(0) + 1;
        let created = article.into_article(ArticleId::new(next_id)?);
        articles.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        self.lists.fetch_add(1, Ordering::SeqCst);
        Ok(self.snapshot())
    }
}

/* -------------------------------- FailingArticleRepo -------------------------------- */

/// 常に永続化エラーを返すリポジトリ
pub struct FailingArticleRepo;

#[async_trait]
impl ArticleWriteRepository for FailingArticleRepo {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        Err(DomainError::Persistence("store unavailable".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for FailingArticleRepo {
    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        Err(DomainError::Persistence("store unavailable".into()))
    }
}
