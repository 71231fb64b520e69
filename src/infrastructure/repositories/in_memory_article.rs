// src/infrastructure/repositories/in_memory_article.rs
use crate::domain::{
    article::{Article, ArticleId, ArticleReplacement, ArticleStore, NewArticle, UserId},
    errors::{DomainError, DomainResult},
};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{PoisonError, RwLock};

/// Process-lifetime article table. Ids come from a counter owned by the
/// instance, so two stores never share an id sequence.
///
/// Every operation holds the lock for one map access and never waits on
/// I/O, so calling it from an async task is fine.
pub struct InMemoryArticleStore {
    articles: RwLock<BTreeMap<ArticleId, Article>>,
    next_id: AtomicI64,
}

impl Default for InMemoryArticleStore {
    fn default() -> Self {
        Self {
            articles: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&self) -> DomainResult<ArticleId> {
        ArticleId::new(self.next_id.fetch_add(1, Ordering::SeqCst))
    }
}

fn poisoned<T>(_: PoisonError<T>) -> DomainError {
    DomainError::Persistence("article table lock poisoned".into())
}

fn not_found(id: ArticleId) -> DomainError {
    DomainError::NotFound(format!("article {id} not found"))
}

impl ArticleStore for InMemoryArticleStore {
    fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let guard = self.articles.read().map_err(poisoned)?;
        Ok(guard.get(&id).cloned())
    }

    fn list_all(&self) -> DomainResult<Vec<Article>> {
        let guard = self.articles.read().map_err(poisoned)?;
        Ok(guard.values().cloned().collect())
    }

    fn list_by_user(&self, user_id: UserId) -> DomainResult<Vec<Article>> {
        let guard = self.articles.read().map_err(poisoned)?;
        Ok(guard
            .values()
            .filter(|article| article.user_id == user_id)
            .cloned()
            .collect())
    }

    fn insert(&self, article: NewArticle) -> DomainResult<ArticleId> {
        let mut guard = self.articles.write().map_err(poisoned)?;
        let id = self.allocate_id()?;
        guard.insert(id, Article::from_new(id, article));
        Ok(id)
    }

    fn replace(&self, id: ArticleId, replacement: ArticleReplacement) -> DomainResult<Article> {
        let mut guard = self.articles.write().map_err(poisoned)?;
        let article = guard.get_mut(&id).ok_or_else(|| not_found(id))?;
        article.replace_content(replacement);
        Ok(article.clone())
    }

    fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut guard = self.articles.write().map_err(poisoned)?;
        guard.remove(&id).map(|_| ()).ok_or_else(|| not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_article(user: i64, title: &str) -> NewArticle {
        NewArticle {
            user_id: UserId::new(user),
            title: title.into(),
            body: format!("{title} body"),
        }
    }

    #[test]
    fn insert_assigns_increasing_ids() {
        let store = InMemoryArticleStore::new();
        let first = store.insert(new_article(7, "a")).unwrap();
        let second = store.insert(new_article(7, "b")).unwrap();
        assert_eq!(i64::from(first), 1);
        assert!(second > first);
    }

    #[test]
    fn separate_stores_have_separate_counters() {
        let left = InMemoryArticleStore::new();
        let right = InMemoryArticleStore::new();
        left.insert(new_article(1, "a")).unwrap();
        left.insert(new_article(1, "b")).unwrap();
        assert_eq!(i64::from(right.insert(new_article(1, "c")).unwrap()), 1);
    }

    #[test]
    fn empty_article_is_found_not_mistaken_for_absent() {
        let store = InMemoryArticleStore::new();
        let id = store
            .insert(NewArticle {
                user_id: UserId::new(0),
                title: String::new(),
                body: String::new(),
            })
            .unwrap();
        let found = store.find_by_id(id).unwrap();
        assert!(found.is_some());
        assert!(store.find_by_id(ArticleId::new(99).unwrap()).unwrap().is_none());
    }

    #[test]
    fn list_by_user_filters_and_returns_empty_when_none_match() {
        let store = InMemoryArticleStore::new();
        store.insert(new_article(1, "a")).unwrap();
        store.insert(new_article(2, "b")).unwrap();
        store.insert(new_article(1, "c")).unwrap();

        let titles: Vec<String> = store
            .list_by_user(UserId::new(1))
            .unwrap()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, vec!["a".to_string(), "c".to_string()]);
        assert!(store.list_by_user(UserId::new(42)).unwrap().is_empty());
    }

    #[test]
    fn list_all_is_ordered_by_id() {
        let store = InMemoryArticleStore::new();
        for title in ["x", "y", "z"] {
            store.insert(new_article(1, title)).unwrap();
        }
        let ids: Vec<i64> = store
            .list_all()
            .unwrap()
            .into_iter()
            .map(|a| i64::from(a.id))
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn replace_and_delete_report_missing_ids() {
        let store = InMemoryArticleStore::new();
        let missing = ArticleId::new(5).unwrap();
        let replacement = ArticleReplacement {
            title: "t".into(),
            body: "b".into(),
        };
        assert!(matches!(
            store.replace(missing, replacement),
            Err(DomainError::NotFound(_))
        ));
        assert!(matches!(store.delete(missing), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn replace_then_delete_round_trip() {
        let store = InMemoryArticleStore::new();
        let id = store.insert(new_article(4, "old")).unwrap();
        let updated = store
            .replace(
                id,
                ArticleReplacement {
                    title: "new".into(),
                    body: "fresh".into(),
                },
            )
            .unwrap();
        assert_eq!(updated.user_id, UserId::new(4));
        assert_eq!(updated.title, "new");

        store.delete(id).unwrap();
        assert!(store.find_by_id(id).unwrap().is_none());
    }

    #[test]
    fn concurrent_inserts_never_reuse_ids() {
        let store = Arc::new(InMemoryArticleStore::new());
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..25)
                        .map(|i| store.insert(new_article(n, &format!("{n}-{i}"))).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<ArticleId> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 200);
        assert_eq!(store.list_all().unwrap().len(), 200);
    }
}
