// tests/support/mocks/article_stores.rs
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use article_service::domain::article::{
    Article, ArticleId, ArticleReplacement, ArticleStore, NewArticle, UserId,
};
use article_service::domain::errors::{DomainError, DomainResult};
use article_service::infrastructure::repositories::InMemoryArticleStore;

/* -------------------------------- BrokenArticleStore -------------------------------- */

pub const BROKEN_STORE_SECRET: &str = "replica eu-west-2 refused connection";

/// Every call fails with a persistence error carrying internal detail.
pub struct BrokenArticleStore;

fn broken<T>() -> DomainResult<T> {
    Err(DomainError::Persistence(BROKEN_STORE_SECRET.into()))
}

impl ArticleStore for BrokenArticleStore {
    fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        broken()
    }

    fn list_all(&self) -> DomainResult<Vec<Article>> {
        broken()
    }

    fn list_by_user(&self, _user_id: UserId) -> DomainResult<Vec<Article>> {
        broken()
    }

    fn insert(&self, _article: NewArticle) -> DomainResult<ArticleId> {
        broken()
    }

    fn replace(&self, _id: ArticleId, _replacement: ArticleReplacement) -> DomainResult<Article> {
        broken()
    }

    fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        broken()
    }
}

/* -------------------------------- DelayedArticleStore -------------------------------- */

/// In-memory store whose lookups sleep for a per-id delay and count calls.
#[derive(Default)]
pub struct DelayedArticleStore {
    inner: InMemoryArticleStore,
    delays: HashMap<i64, Duration>,
    lookups: AtomicUsize,
}

impl DelayedArticleStore {
    pub fn new(delays: &[(i64, u64)]) -> Self {
        Self {
            inner: InMemoryArticleStore::new(),
            delays: delays
                .iter()
                .map(|(id, millis)| (*id, Duration::from_millis(*millis)))
                .collect(),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl ArticleStore for DelayedArticleStore {
    fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(&i64::from(id)) {
            std::thread::sleep(*delay);
        }
        self.inner.find_by_id(id)
    }

    fn list_all(&self) -> DomainResult<Vec<Article>> {
        self.inner.list_all()
    }

    fn list_by_user(&self, user_id: UserId) -> DomainResult<Vec<Article>> {
        self.inner.list_by_user(user_id)
    }

    fn insert(&self, article: NewArticle) -> DomainResult<ArticleId> {
        self.inner.insert(article)
    }

    fn replace(&self, id: ArticleId, replacement: ArticleReplacement) -> DomainResult<Article> {
        self.inner.replace(id, replacement)
    }

    fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.inner.delete(id)
    }
}
