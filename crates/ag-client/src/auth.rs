//! Login, registration, and logout on top of the gateway client.

use crate::client::GatewayClient;
use ag_core::{LoginOutcome, RequestDescriptor, Result};
use serde_json::{json, Value};
use tracing::debug;

impl GatewayClient {
    /// Exchange credentials for a session. On success the issued token is
    /// persisted and the response payload cached as the principal, so callers
    /// never persist it themselves. A failed login leaves prior state intact
    /// (the login route is on the 401 exemption list).
    pub async fn login(&self, credentials: Value) -> Result<LoginOutcome> {
        let path = self.config.login_path.clone();
        let payload = self
            .request(RequestDescriptor::post(path, credentials))
            .await?;
        let outcome = LoginOutcome::from_payload(payload);
        self.adopt(&outcome)?;
        Ok(outcome)
    }

    /// Register a new admin account. Servers that issue a token on
    /// registration get the same adoption behavior as login.
    pub async fn register(&self, account: Value) -> Result<LoginOutcome> {
        let path = self.config.register_path.clone();
        let payload = self
            .request(RequestDescriptor::post(path, account))
            .await?;
        let outcome = LoginOutcome::from_payload(payload);
        self.adopt(&outcome)?;
        Ok(outcome)
    }

    /// End the session. Local state is cleared whatever happens on the wire;
    /// a network failure on the notification is absorbed (the server was
    /// unreachable, the session is gone locally regardless), but a server
    /// rejection still propagates after clearing.
    pub async fn logout(&self) -> Result<()> {
        if !self.session.has_credential() {
            return self.session.clear();
        }
        let path = self.config.logout_path.clone();
        let result = self.request(RequestDescriptor::post(path, json!({}))).await;
        self.session.clear()?;
        match result {
            Err(err) if err.is_network() => {
                debug!(error = %err, "logout notification failed; session cleared locally");
                Ok(())
            }
            Err(err) => Err(err),
            Ok(_) => Ok(()),
        }
    }

    fn adopt(&self, outcome: &LoginOutcome) -> Result<()> {
        if let Some(token) = &outcome.token {
            self.session.set_credential(Some(token))?;
            self.session.set_principal(&outcome.payload)?;
        }
        Ok(())
    }
}
