//! Process-local `WebinarRepository` used for local runs and tests.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{WebinarRepository, WebinarRepositoryError};
use crate::domain::{Webinar, WebinarId};

/// In-memory webinar store.
///
/// Honours the same revision contract as the PostgreSQL adapter: an update is
/// applied only when the stored revision equals the caller's, and bumps it.
#[derive(Debug, Default)]
pub struct InMemoryWebinarRepository {
    webinars: RwLock<HashMap<WebinarId, Webinar>>,
}

impl InMemoryWebinarRepository {
    /// Create a store seeded with `webinars`, keyed by their ids.
    pub fn new(webinars: impl IntoIterator<Item = Webinar>) -> Self {
        let webinars = webinars
            .into_iter()
            .map(|webinar| (webinar.id().clone(), webinar))
            .collect();
        Self {
            webinars: RwLock::new(webinars),
        }
    }

    /// Insert or replace a webinar as-is, revision included.
    pub fn insert(&self, webinar: Webinar) {
        self.webinars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(webinar.id().clone(), webinar);
    }

    /// Synchronous read of the stored state, for assertions and seeding checks.
    pub fn snapshot(&self, id: &WebinarId) -> Option<Webinar> {
        self.webinars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> WebinarRepositoryError {
    WebinarRepositoryError::query("webinar store lock poisoned")
}

#[async_trait]
impl WebinarRepository for InMemoryWebinarRepository {
    async fn find_by_id(
        &self,
        id: &WebinarId,
    ) -> Result<Option<Webinar>, WebinarRepositoryError> {
        let webinars = self.webinars.read().map_err(poisoned)?;
        Ok(webinars.get(id).cloned())
    }

    async fn update(&self, webinar: &Webinar) -> Result<(), WebinarRepositoryError> {
        let mut webinars = self.webinars.write().map_err(poisoned)?;
        let Some(stored) = webinars.get_mut(webinar.id()) else {
            return Err(WebinarRepositoryError::missing(webinar.id().as_ref()));
        };

        let expected = webinar.revision();
        let actual = stored.revision();
        if actual != expected {
            return Err(WebinarRepositoryError::revision_mismatch(expected, actual));
        }

        *stored = webinar.clone().with_revision(actual.saturating_add(1));
        Ok(())
    }
}
