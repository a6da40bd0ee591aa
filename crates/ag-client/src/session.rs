//! Process-wide session state: the bearer credential plus cached principal.

use crate::store::SessionStore;
use ag_core::{Principal, Result};
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;

/// Storage key holding the raw token string.
pub const TOKEN_KEY: &str = "admin_token";
/// Storage key holding the principal/session metadata blob.
pub const PRINCIPAL_KEY: &str = "admin_info";

/// Derived authentication state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticated,
}

/// View over an injected [`SessionStore`]. At most one session per store;
/// the two keys are always written and removed together.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Store or clear the credential. `Some(token)` persists it and folds the
    /// token into the principal blob; `None` removes both keys.
    pub fn set_credential(&self, token: Option<&str>) -> Result<()> {
        match token {
            Some(token) => {
                self.store.set(TOKEN_KEY, token)?;
                let mut info = self.principal_blob()?;
                if let Some(obj) = info.as_object_mut() {
                    obj.insert("token".into(), Value::String(token.into()));
                    obj.insert("saved_at".into(), Value::String(Utc::now().to_rfc3339()));
                }
                self.store.set(PRINCIPAL_KEY, &info.to_string())
            }
            None => self.clear(),
        }
    }

    /// Currently stored credential, read fresh from the store. Storage
    /// failures propagate: a broken store must not silently downgrade a
    /// request to anonymous.
    pub fn credential(&self) -> Result<Option<String>> {
        self.store.get(TOKEN_KEY)
    }

    pub fn has_credential(&self) -> bool {
        matches!(self.credential(), Ok(Some(_)))
    }

    /// Cache actor metadata alongside the credential.
    pub fn set_principal(&self, payload: &Value) -> Result<()> {
        let mut info = payload.clone();
        if let Some(obj) = info.as_object_mut() {
            if let Some(token) = self.credential()? {
                obj.insert("token".into(), Value::String(token));
            }
            obj.insert("saved_at".into(), Value::String(Utc::now().to_rfc3339()));
        }
        self.store.set(PRINCIPAL_KEY, &info.to_string())
    }

    pub fn principal(&self) -> Result<Option<Principal>> {
        match self.store.get(PRINCIPAL_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw).ok().map(Principal)),
            None => Ok(None),
        }
    }

    /// Remove credential and principal together.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(TOKEN_KEY)?;
        self.store.remove(PRINCIPAL_KEY)
    }

    pub fn state(&self) -> AuthState {
        if self.has_credential() {
            AuthState::Authenticated
        } else {
            AuthState::Anonymous
        }
    }

    // Existing blob, or a fresh object when absent or unparsable. Store
    // failures propagate.
    fn principal_blob(&self) -> Result<Value> {
        let blob = self
            .store
            .get(PRINCIPAL_KEY)?
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_else(|| Value::Object(Default::default()));
        Ok(blob)
    }
}
