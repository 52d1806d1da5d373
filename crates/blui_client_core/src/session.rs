//! In-memory login session. Clones share state, so every handle of an
//! `ApiClient` sees a login performed through any other.

use crate::ids::UserId;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Clone, Debug, Default)]
struct SessionData {
    token: Option<String>,
    user_id: Option<UserId>,
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    inner: Arc<RwLock<SessionData>>,
}

impl Session {
    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::default();
        session.set_token(token);
        session
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionData> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionData> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        self.write().token = (!token.is_empty()).then_some(token);
    }

    /// Token and user id are replaced together under one write lock.
    pub fn start(&self, token: impl Into<String>, user_id: UserId) {
        let token = token.into();
        let mut data = self.write();
        data.token = (!token.is_empty()).then_some(token);
        data.user_id = Some(user_id);
    }

    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.read().user_id.clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.read().token.is_some()
    }

    pub fn clear(&self) {
        *self.write() = SessionData::default();
    }
}
