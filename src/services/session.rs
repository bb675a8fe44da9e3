use crate::models::UserSession;
use async_trait::async_trait;
use moka::future::Cache;
use std::time::Duration;

/// Keyed store for per-user conversational state
///
/// Callers remember a user's last shared position and chosen category so a
/// follow-up request can omit either. Implementations must be safe for
/// concurrent use; there is deliberately no module-level global state.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, user_id: &str) -> Option<UserSession>;
    async fn put(&self, user_id: &str, session: UserSession);
    async fn remove(&self, user_id: &str);
}

/// In-memory TTL-bounded session store
pub struct InMemorySessionStore {
    sessions: Cache<String, UserSession>,
}

impl InMemorySessionStore {
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let sessions = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { sessions }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, user_id: &str) -> Option<UserSession> {
        self.sessions.get(user_id).await
    }

    async fn put(&self, user_id: &str, session: UserSession) {
        self.sessions.insert(user_id.to_string(), session).await;
    }

    async fn remove(&self, user_id: &str) {
        self.sessions.invalidate(user_id).await;
    }
}
