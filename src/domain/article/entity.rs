// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleText, ArticleTitle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub text: ArticleText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub text: ArticleText,
}

impl NewArticle {
    pub fn new(title: ArticleTitle, text: ArticleText) -> Self {
        Self { title, text }
    }

    /// Attach the identifier handed out by the store.
    pub fn into_article(self, id: ArticleId) -> Article {
        Article {
            id,
            title: self.title,
            text: self.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_article_keeps_values() {
        let new = NewArticle::new(ArticleTitle::new("title").unwrap(), ArticleText::new("body"));
        let article = new.into_article(ArticleId::new(4).unwrap());
        assert_eq!(article.id, ArticleId(4));
        assert_eq!(article.title.as_str(), "title");
        assert_eq!(article.text.as_str(), "body");
    }
}
