//! The gateway client: uniform authenticated transport plus the single
//! 401-clears-session policy.

use crate::session::Session;
use crate::store::SessionStore;
use crate::transport::{HttpTransport, PreparedRequest, Transport};
use ag_core::{GatewayConfig, GatewayError, RawResponse, RequestDescriptor, Result};
use reqwest::Url;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct GatewayClient {
    pub(crate) config: GatewayConfig,
    pub(crate) session: Session,
    pub(crate) transport: Arc<dyn Transport>,
}

impl GatewayClient {
    /// Build a client over the real HTTP transport.
    pub fn new(config: GatewayConfig, store: Arc<dyn SessionStore>) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(Self::with_transport(config, store, transport))
    }

    /// Build a client over an injected transport. Tests use this with mocks.
    pub fn with_transport(
        config: GatewayConfig,
        store: Arc<dyn SessionStore>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            config,
            session: Session::new(store),
            transport,
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Gate for navigation before attempting privileged calls.
    pub fn has_credential(&self) -> bool {
        self.session.has_credential()
    }

    /// Before-send hook: resolve the absolute URL and attach the bearer
    /// credential read from the store at send time. Callers never set the
    /// Authorization header themselves.
    pub fn before_send(&self, descriptor: &RequestDescriptor) -> Result<PreparedRequest> {
        let base = Url::parse(&self.config.base_url)
            .map_err(|e| GatewayError::InvalidUrl(format!("{}: {e}", self.config.base_url)))?;
        let mut url = base
            .join(&descriptor.path)
            .map_err(|e| GatewayError::InvalidUrl(format!("{}: {e}", descriptor.path)))?;
        if !descriptor.query.is_empty() {
            url.query_pairs_mut().extend_pairs(
                descriptor.query.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            );
        }

        let mut headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        if let Some(token) = self.session.credential()? {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        Ok(PreparedRequest {
            method: descriptor.method,
            url: url.into(),
            headers,
            body: descriptor.body.clone(),
        })
    }

    /// After-receive hook: a 401 from a non-exempt route means the stored
    /// credential is dead, so it is cleared before the error propagates.
    pub fn after_receive(&self, path: &str, response: &RawResponse) {
        if response.status != 401 || self.config.is_auth_exempt(path) {
            return;
        }
        warn!(path, "credential rejected by server; clearing session");
        if let Err(err) = self.session.clear() {
            warn!(error = %err, "failed to clear session after 401");
        }
    }

    /// Send one request through both hooks. No retries, no caching.
    pub async fn request(&self, descriptor: RequestDescriptor) -> Result<Value> {
        let prepared = self.before_send(&descriptor)?;
        debug!(method = %descriptor.method, path = %descriptor.path, "dispatching");
        let response = self.transport.execute(prepared).await?;
        self.after_receive(&descriptor.path, &response);
        if response.is_success() {
            Ok(response.body)
        } else {
            debug!(status = response.status, path = %descriptor.path, "request rejected");
            Err(GatewayError::Status {
                status: response.status,
                message: response.message().map(String::from),
            })
        }
    }

    pub async fn get(&self, path: &str) -> Result<Value> {
        self.request(RequestDescriptor::get(path)).await
    }

    pub async fn get_with_query(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        let mut descriptor = RequestDescriptor::get(path);
        for (key, value) in query {
            descriptor = descriptor.with_query(*key, *value);
        }
        self.request(descriptor).await
    }

    pub async fn post(&self, path: &str, body: Value) -> Result<Value> {
        self.request(RequestDescriptor::post(path, body)).await
    }

    pub async fn put(&self, path: &str, body: Value) -> Result<Value> {
        self.request(RequestDescriptor::put(path, body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.request(RequestDescriptor::delete(path)).await
    }

    /// Canonical fetch-by-id: `{api_prefix}{resource}/{id}`, with the slash
    /// elided when the resource prefix already ends in one.
    pub async fn view(&self, resource: &str, id: &str) -> Result<Value> {
        let path = if resource.ends_with('/') {
            format!("{}{resource}{id}", self.config.api_prefix)
        } else {
            format!("{}{resource}/{id}", self.config.api_prefix)
        };
        self.get(&path).await
    }
}
