// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub user_id: UserId,
    pub title: String,
    pub body: String,
}

impl Article {
    pub fn from_new(id: ArticleId, new_article: NewArticle) -> Self {
        Self {
            id,
            user_id: new_article.user_id,
            title: new_article.title,
            body: new_article.body,
        }
    }

    /// Replace the mutable content; id and owner stay as they are.
    pub fn replace_content(&mut self, replacement: ArticleReplacement) {
        self.title = replacement.title;
        self.body = replacement.body;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub user_id: UserId,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleReplacement {
    pub title: String,
    pub body: String,
}
