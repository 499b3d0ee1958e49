//! Environment-driven configuration.

use std::time::Duration;

use aliexpress_api::{Currency, Language};

use crate::error::AliexpressError;

pub const ENV_APP_KEY: &str = "ALIEXPRESS_APP_KEY";
pub const ENV_APP_SECRET: &str = "ALIEXPRESS_APP_SECRET";
pub const ENV_TRACKING_ID: &str = "ALIEXPRESS_TRACKING_ID";
pub const ENV_LANGUAGE: &str = "ALIEXPRESS_LANGUAGE";
pub const ENV_CURRENCY: &str = "ALIEXPRESS_CURRENCY";
pub const ENV_ACCESS_TOKEN: &str = "ALIEXPRESS_ACCESS_TOKEN";
pub const ENV_SANDBOX: &str = "ALIEXPRESS_SANDBOX";

/// How long fetched categories are reused when the caller opts into the cache.
pub const DEFAULT_CATEGORY_TTL: Duration = Duration::from_secs(6 * 60 * 60);

/// Settings for [`crate::AliexpressApi`]. Read-only once the facade is built.
#[derive(Clone)]
pub struct ApiConfig {
    pub app_key: String,
    pub app_secret: String,
    pub language: Language,
    pub currency: Currency,
    /// Required for affiliate links; optional elsewhere.
    pub tracking_id: Option<String>,
    /// Session token for dropshipping calls.
    pub access_token: Option<String>,
    pub sandbox: bool,
    pub category_ttl: Duration,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("app_key", &self.app_key)
            .field("app_secret", &"***")
            .field("language", &self.language)
            .field("currency", &self.currency)
            .field("tracking_id", &self.tracking_id)
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .field("sandbox", &self.sandbox)
            .finish()
    }
}

impl ApiConfig {
    pub fn new(app_key: &str, app_secret: &str) -> Self {
        Self {
            app_key: app_key.to_string(),
            app_secret: app_secret.to_string(),
            language: Language::default(),
            currency: Currency::default(),
            tracking_id: None,
            access_token: None,
            sandbox: false,
            category_ttl: DEFAULT_CATEGORY_TTL,
        }
    }

    /// Loads `.env` (when present) and reads the `ALIEXPRESS_*` variables.
    pub fn from_env() -> Result<Self, AliexpressError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("Failed to load .env file: {}", e);
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AliexpressError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AliexpressError::Config(format!("{} is not set", key)))
        };
        let optional = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::new(&required(ENV_APP_KEY)?, &required(ENV_APP_SECRET)?);
        config.tracking_id = optional(ENV_TRACKING_ID);
        config.access_token = optional(ENV_ACCESS_TOKEN);
        config.sandbox = optional(ENV_SANDBOX).map(|v| is_truthy(&v)).unwrap_or(false);
        if let Some(lang) = optional(ENV_LANGUAGE) {
            config.language = lang.parse().map_err(|_| {
                AliexpressError::Config(format!("unsupported language '{}' in {}", lang, ENV_LANGUAGE))
            })?;
        }
        if let Some(cur) = optional(ENV_CURRENCY) {
            config.currency = cur.parse().map_err(|_| {
                AliexpressError::Config(format!("unsupported currency '{}' in {}", cur, ENV_CURRENCY))
            })?;
        }
        Ok(config)
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_tracking_id(mut self, tracking_id: &str) -> Self {
        self.tracking_id = Some(tracking_id.to_string());
        self
    }

    pub fn with_access_token(mut self, access_token: &str) -> Self {
        self.access_token = Some(access_token.to_string());
        self
    }

    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    pub fn with_category_ttl(mut self, ttl: Duration) -> Self {
        self.category_ttl = ttl;
        self
    }
}

pub(crate) fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_all_settings() {
        let config = ApiConfig::from_lookup(lookup(&[
            (ENV_APP_KEY, "12345678"),
            (ENV_APP_SECRET, "secret"),
            (ENV_TRACKING_ID, "trk"),
            (ENV_LANGUAGE, "ES"),
            (ENV_CURRENCY, "eur"),
            (ENV_SANDBOX, "yes"),
        ]))
        .unwrap();
        assert_eq!(config.app_key, "12345678");
        assert_eq!(config.tracking_id.as_deref(), Some("trk"));
        assert_eq!(config.language, Language::Es);
        assert_eq!(config.currency, Currency::Eur);
        assert!(config.sandbox);
        assert!(config.access_token.is_none());
    }

    #[test]
    fn missing_secret_is_a_config_error() {
        let err = ApiConfig::from_lookup(lookup(&[(ENV_APP_KEY, "k")])).unwrap_err();
        assert!(matches!(err, AliexpressError::Config(ref m) if m.contains(ENV_APP_SECRET)));
    }

    #[test]
    fn blank_values_count_as_missing() {
        let config = ApiConfig::from_lookup(lookup(&[
            (ENV_APP_KEY, "k"),
            (ENV_APP_SECRET, "s"),
            (ENV_TRACKING_ID, "  "),
        ]))
        .unwrap();
        assert!(config.tracking_id.is_none());
        assert!(!config.sandbox);
    }

    #[test]
    fn unknown_language_is_rejected() {
        let err = ApiConfig::from_lookup(lookup(&[
            (ENV_APP_KEY, "k"),
            (ENV_APP_SECRET, "s"),
            (ENV_LANGUAGE, "klingon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, AliexpressError::Config(_)));
    }

    #[test]
    fn debug_hides_secrets() {
        let rendered = format!("{:?}", ApiConfig::new("k", "topsecret").with_access_token("tok123"));
        assert!(!rendered.contains("topsecret"));
        assert!(!rendered.contains("tok123"));
    }
}
