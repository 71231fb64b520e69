use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::UserId,
};

pub struct ListArticlesByUserQuery {
    pub user_id: UserId,
}

impl ArticleQueryService {
    /// Articles owned by a user. No match is an empty list, not an error.
    pub fn list_articles_by_user(
        &self,
        query: ListArticlesByUserQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self.store.list_by_user(query.user_id)?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
