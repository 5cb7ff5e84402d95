use serde::{Deserialize, Serialize};

pub const DEFAULT_IDENTITY_URL: &str = "https://auth.sbanken.no/identityserver/connect/token";
pub const DEFAULT_API_BASE: &str = "https://publicapi.sbanken.no/apibeta/api/v1";
pub const DEFAULT_USER_AGENT: &str = concat!("sbanken-client/", env!("CARGO_PKG_VERSION"));

/// Client credentials issued by the bank's developer portal.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub apikey: String,
    pub secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("apikey", &self.apikey)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Endpoints and HTTP settings for an [`ApiConnection`](crate::ApiConnection).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub identity_url: String,
    pub api_base: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            identity_url: DEFAULT_IDENTITY_URL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 10,
        }
    }
}

impl ApiConfig {
    /// Absolute URL for a resource path like `Transactions/123`.
    pub fn resource_url(&self, target: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            target.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_url_joins_single_slash() {
        let mut cfg = ApiConfig::default();
        assert_eq!(
            cfg.resource_url("Accounts"),
            "https://publicapi.sbanken.no/apibeta/api/v1/Accounts"
        );

        cfg.api_base = "http://localhost:8080/api/".to_string();
        assert_eq!(cfg.resource_url("/Cards"), "http://localhost:8080/api/Cards");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let cred = Credentials {
            apikey: "key".to_string(),
            secret: "hunter2".to_string(),
        };
        let dbg = format!("{cred:?}");
        assert!(dbg.contains("key"));
        assert!(!dbg.contains("hunter2"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let cfg: ApiConfig = serde_json::from_str(r#"{"timeout_secs": 30}"#).unwrap();
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.api_base, DEFAULT_API_BASE);
    }
}
