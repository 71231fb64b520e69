use crate::domain::article::{Article, ArticleId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    #[serde(rename = "articleID")]
    pub article_id: i64,
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            article_id: article.id.into(),
            user_id: article.user_id.into(),
            title: article.title,
            body: article.body,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedArticleDto {
    #[serde(rename = "articleID")]
    pub article_id: i64,
}

impl From<ArticleId> for CreatedArticleDto {
    fn from(id: ArticleId) -> Self {
        Self {
            article_id: id.into(),
        }
    }
}
