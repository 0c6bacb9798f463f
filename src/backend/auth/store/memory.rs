/**
 * In-Memory User Store
 *
 * A `HashMap` keyed by username behind a `tokio::sync::RwLock`. Ids come from
 * a counter that only moves forward.
 */

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::UserStore;
use crate::backend::auth::users::{UserRecord, UserRecordDraft};
use crate::backend::error::CredentialError;

#[derive(Debug, Default)]
struct Table {
    last_id: i64,
    by_username: HashMap<String, UserRecord>,
}

/// User store that lives for the lifetime of the process
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    table: RwLock<Table>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.table.read().await.by_username.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, CredentialError> {
        Ok(self.table.read().await.by_username.get(username).cloned())
    }

    async fn insert(&self, draft: UserRecordDraft) -> Result<UserRecord, CredentialError> {
        let mut table = self.table.write().await;

        if table.by_username.contains_key(&draft.username) {
            return Err(CredentialError::DuplicateUsername(draft.username));
        }

        table.last_id += 1;
        let record = draft.into_record(table.last_id);
        table
            .by_username
            .insert(record.username.clone(), record.clone());

        Ok(record)
    }
}
