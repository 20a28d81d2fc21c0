use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db_storage::PersonStorage;
use crate::errors::AppError;
use crate::models::EnrichedPerson;

/// In-process storage with the same semantics as `PgPersonStorage`.
/// Ids start at 1 and are never reused.
#[derive(Default)]
pub struct InMemoryPersonStorage {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, EnrichedPerson>,
}

impl InMemoryPersonStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl PersonStorage for InMemoryPersonStorage {
    async fn create(&self, person: &EnrichedPerson) -> Result<i64, AppError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let id = inner.next_id;
        inner.rows.insert(id, person.clone());
        Ok(id)
    }

    async fn get_by_id(&self, id: i64) -> Result<EnrichedPerson, AppError> {
        self.inner
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Person not found".to_string()))
    }

    async fn update(&self, id: i64, person: &EnrichedPerson) -> Result<u64, AppError> {
        let mut inner = self.inner.write().await;
        match inner.rows.get_mut(&id) {
            Some(row) => {
                *row = person.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let removed = self.inner.write().await.rows.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}
