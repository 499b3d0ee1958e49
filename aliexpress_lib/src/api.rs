//! The `AliexpressApi` facade: a configured client plus per-area services.

use aliexpress_api::types::Category;
use aliexpress_api::{Client, ClientConfig, Credentials, Currency, Endpoint, Language};

use crate::cache::MemoryCache;
use crate::config::ApiConfig;
use crate::error::AliexpressError;
use crate::services::{AffiliateService, CommonService, DropshippingService, OAuthService};

/// Entry point of the SDK.
///
/// Holds the low-level [`Client`] and the caller's defaults (language,
/// currency, tracking id, access token). Services borrow the facade and fill
/// those defaults into every request the caller leaves them out of.
pub struct AliexpressApi {
    client: Client,
    config: ApiConfig,
    categories: MemoryCache<Vec<Category>>,
}

impl AliexpressApi {
    pub fn new(
        app_key: &str,
        app_secret: &str,
        language: Language,
        currency: Currency,
        tracking_id: Option<&str>,
        sandbox: bool,
    ) -> Result<Self, AliexpressError> {
        let mut config = ApiConfig::new(app_key, app_secret)
            .with_language(language)
            .with_currency(currency)
            .with_sandbox(sandbox);
        config.tracking_id = tracking_id.map(str::to_string);
        Self::from_config(config)
    }

    pub fn from_config(config: ApiConfig) -> Result<Self, AliexpressError> {
        let client_config = if config.sandbox {
            ClientConfig::sandbox()
        } else {
            ClientConfig::default()
        };
        Self::build(config, client_config)
    }

    /// Reads the configuration from the environment (see [`ApiConfig::from_env`]).
    pub fn from_env() -> Result<Self, AliexpressError> {
        Self::from_config(ApiConfig::from_env()?)
    }

    /// Creates a facade talking to a custom gateway. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, config: ApiConfig) -> Result<Self, AliexpressError> {
        Self::build(config, ClientConfig::default().with_base_url(base_url))
    }

    fn build(config: ApiConfig, client_config: ClientConfig) -> Result<Self, AliexpressError> {
        if config.app_key.trim().is_empty() || config.app_secret.trim().is_empty() {
            return Err(AliexpressError::Config(
                "app key and app secret are required".to_string(),
            ));
        }
        let credentials = Credentials::new(config.app_key.clone(), config.app_secret.clone());
        let client = Client::with_config(credentials, client_config)?;
        let categories = MemoryCache::new(config.category_ttl);
        tracing::debug!(
            "AliExpress API initialized (sandbox: {}, language: {}, currency: {})",
            config.sandbox,
            config.language,
            config.currency
        );
        Ok(Self {
            client,
            config,
            categories,
        })
    }

    /// Sets the session token attached to dropshipping calls.
    pub fn with_access_token(mut self, access_token: &str) -> Self {
        self.config.access_token = Some(access_token.to_string());
        self
    }

    pub fn with_tracking_id(mut self, tracking_id: &str) -> Self {
        self.config.tracking_id = Some(tracking_id.to_string());
        self
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn language(&self) -> Language {
        self.config.language
    }

    pub fn currency(&self) -> Currency {
        self.config.currency
    }

    pub fn tracking_id(&self) -> Option<&str> {
        self.config.tracking_id.as_deref()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.config.access_token.as_deref()
    }

    /// `{language}_{COUNTRY}`, with `US` when no country is given.
    pub fn locale(&self, country: Option<&str>) -> String {
        self.config.language.locale(country)
    }

    pub fn common(&self) -> CommonService<'_> {
        CommonService::new(self)
    }

    pub fn affiliate(&self) -> AffiliateService<'_> {
        AffiliateService::new(self)
    }

    pub fn dropshipping(&self) -> DropshippingService<'_> {
        DropshippingService::new(self)
    }

    pub fn oauth(&self) -> OAuthService<'_> {
        OAuthService::new(self)
    }

    pub(crate) fn category_cache(&self) -> &MemoryCache<Vec<Category>> {
        &self.categories
    }

    /// Runs an endpoint without a session token.
    pub(crate) async fn call<E: Endpoint>(&self, endpoint: &E) -> Result<E::Response, AliexpressError> {
        Ok(self.client.execute(endpoint, None).await?)
    }

    /// Runs an endpoint with the configured session token, if any.
    pub(crate) async fn call_with_session<E: Endpoint>(
        &self,
        endpoint: &E,
    ) -> Result<E::Response, AliexpressError> {
        if self.config.access_token.is_none() {
            tracing::debug!("{} called without an access token", E::METHOD);
        }
        Ok(self.client.execute(endpoint, self.access_token()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_credentials() {
        let err = AliexpressApi::new("", "secret", Language::En, Currency::Usd, None, false)
            .err()
            .unwrap();
        assert!(matches!(err, AliexpressError::Config(_)));
    }

    #[test]
    fn locale_uses_configured_language() {
        let api = AliexpressApi::new("key", "secret", Language::Es, Currency::Eur, None, false)
            .unwrap();
        assert_eq!(api.locale(None), "es_US");
        assert_eq!(api.locale(Some("mx")), "es_MX");
    }

    #[test]
    fn sandbox_points_at_sandbox_gateway() {
        let api = AliexpressApi::new("key", "secret", Language::En, Currency::Usd, Some("trk"), true)
            .unwrap();
        assert_eq!(api.client().base_url(), aliexpress_api::SANDBOX_BASE_URL);
        assert_eq!(api.tracking_id(), Some("trk"));
    }

    #[test]
    fn builder_setters() {
        let api = AliexpressApi::new("key", "secret", Language::En, Currency::Usd, None, false)
            .unwrap()
            .with_access_token("tok")
            .with_tracking_id("trk");
        assert_eq!(api.access_token(), Some("tok"));
        assert_eq!(api.tracking_id(), Some("trk"));
    }
}
