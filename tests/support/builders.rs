// tests/support/builders.rs
use news_core::domain::article::{Article, ArticleId, ArticleText, ArticleTitle};

pub struct ArticleBuilder {
    id: i64,
    title: String,
    text: String,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Article".into(),
            text: "Test text".into(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).expect("builder id must be positive"),
            title: ArticleTitle::new(self.title).expect("builder title must be valid"),
            text: ArticleText::new(self.text),
        }
    }
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
