// backend/src/session/mod.rs

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::models::EmployeeView;

/// Data loaded once per page load and reused for every re-render.
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub loaded_at: DateTime<Utc>,
    pub total_employees: i64,
    pub view: Vec<EmployeeView>,
}

impl Session {
    fn expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        // a clock step backwards counts as age zero
        (now - self.loaded_at).to_std().map_or(false, |age| age >= ttl)
    }
}

/// In-memory registry of loaded sessions. Sessions never share data; a
/// reload creates a new one and the old one ages out after `ttl`.
#[derive(Debug, Clone)]
pub struct SessionStore {
    ttl: Duration,
    inner: Arc<RwLock<HashMap<Uuid, Arc<Session>>>>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, inner: Arc::default() }
    }

    pub async fn open(&self, view: Vec<EmployeeView>, total_employees: i64) -> Arc<Session> {
        self.open_at(view, total_employees, Utc::now()).await
    }

    async fn open_at(
        &self,
        view: Vec<EmployeeView>,
        total_employees: i64,
        now: DateTime<Utc>,
    ) -> Arc<Session> {
        let session = Arc::new(Session {
            id: Uuid::new_v4(),
            loaded_at: now,
            total_employees,
            view,
        });

        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.expired(now, self.ttl));
        if sessions.len() < before {
            debug!(evicted = before - sessions.len(), "dropped expired sessions");
        }
        sessions.insert(session.id, session.clone());
        session
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<Session>> {
        self.get_at(id, Utc::now()).await
    }

    async fn get_at(&self, id: Uuid, now: DateTime<Utc>) -> Option<Arc<Session>> {
        self.inner
            .read()
            .await
            .get(&id)
            .filter(|s| !s.expired(now, self.ttl))
            .cloned()
    }

    pub async fn close(&self, id: Uuid) -> bool {
        self.inner.write().await.remove(&id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
