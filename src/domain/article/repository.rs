use crate::domain::article::entity::{Article, ArticleReplacement, NewArticle};
use crate::domain::article::value_objects::{ArticleId, UserId};
use crate::domain::errors::DomainResult;

/// Synchronous key/value storage for articles.
///
/// Implementations must be safe to call from many worker threads at once;
/// the bulk engine drives one call per blocking worker.
///
/// Single-item operations call the store inline on the request task, so an
/// implementation must not wait on I/O. One that does has to be wrapped in
/// `spawn_blocking` by its callers.
pub trait ArticleStore: Send + Sync {
    fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// All articles ordered by ascending id.
    fn list_all(&self) -> DomainResult<Vec<Article>>;
    fn list_by_user(&self, user_id: UserId) -> DomainResult<Vec<Article>>;
    /// Insert and return the freshly assigned id.
    fn insert(&self, article: NewArticle) -> DomainResult<ArticleId>;
    /// Fails with `DomainError::NotFound` when `id` is absent.
    fn replace(&self, id: ArticleId, replacement: ArticleReplacement) -> DomainResult<Article>;
    /// Fails with `DomainError::NotFound` when `id` is absent.
    fn delete(&self, id: ArticleId) -> DomainResult<()>;
}
