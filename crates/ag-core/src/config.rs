use serde::{Deserialize, Serialize};

/// Client configuration: remote origin, timeout, and the auth-exemption
/// allow-list consulted by the 401 handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Root of the remote API origin.
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Route patterns exempt from 401-driven session clearing.
    ///
    /// Matched as substrings of the request path. A 401 from an exempt route
    /// (a failed login attempt, a rejected registration) does not mean the
    /// stored session died, so it must not wipe it.
    pub auth_exempt: Vec<String>,
    /// Prefix prepended by the fetch-by-id helper.
    pub api_prefix: String,
    /// Route the login operation posts to.
    pub login_path: String,
    /// Route the register operation posts to.
    pub register_path: String,
    /// Route the logout operation posts to.
    pub logout_path: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "https://bacola.onrender.com".into(),
            timeout_ms: 30_000,
            auth_exempt: vec!["/login".into(), "/register".into()],
            api_prefix: "/api".into(),
            login_path: "/api/admin/login".into(),
            register_path: "/api/admin/register".into(),
            logout_path: "/api/admin/logout".into(),
        }
    }
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_auth_exempt(mut self, patterns: Vec<String>) -> Self {
        self.auth_exempt = patterns;
        self
    }

    /// Whether a 401 from `path` is exempt from session clearing.
    pub fn is_auth_exempt(&self, path: &str) -> bool {
        self.auth_exempt.iter().any(|p| path.contains(p.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        let cfg = GatewayConfig::default();
        assert_eq!(cfg.timeout_ms, 30_000);
    }

    #[test]
    fn test_default_exemptions() {
        let cfg = GatewayConfig::default();
        assert!(cfg.is_auth_exempt("/api/admin/login"));
        assert!(cfg.is_auth_exempt("/api/admin/register"));
        assert!(!cfg.is_auth_exempt("/api/categories"));
        assert!(!cfg.is_auth_exempt("/api/admin/users"));
    }

    #[test]
    fn test_custom_exemptions() {
        let cfg = GatewayConfig::new("https://example.test")
            .with_auth_exempt(vec!["/auth/token".into()]);
        assert!(cfg.is_auth_exempt("/auth/token"));
        assert!(!cfg.is_auth_exempt("/api/admin/login"));
    }

    #[test]
    fn test_builder() {
        let cfg = GatewayConfig::new("https://example.test").with_timeout_ms(5_000);
        assert_eq!(cfg.base_url, "https://example.test");
        assert_eq!(cfg.timeout_ms, 5_000);
    }

    #[test]
    fn test_serde_roundtrip() {
        let cfg = GatewayConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: GatewayConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.base_url, cfg.base_url);
        assert_eq!(back.auth_exempt, cfg.auth_exempt);
    }
}
