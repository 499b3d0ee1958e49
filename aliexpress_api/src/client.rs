//! Signed HTTP client for the AliExpress Open Platform gateway.

use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::{
    envelope,
    params::Params,
    request::{Endpoint, FileItem, HttpMethod},
    sign::{sign, SignMethod},
    Error,
};

/// Production gateway host.
pub const DEFAULT_BASE_URL: &str = "https://api-sg.aliexpress.com";
/// Sandbox gateway host.
pub const SANDBOX_BASE_URL: &str = "https://gw.api.tbsandbox.com";
/// SDK identifier sent as `partner_id`.
pub const PARTNER_ID: &str = "aliexpress-rs-0.3";
/// Value of the `v` system parameter.
pub const API_VERSION: &str = "2.0";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// App credentials issued by the Open Platform console.
#[derive(Clone)]
pub struct Credentials {
    pub app_key: String,
    app_secret: String,
}

impl Credentials {
    pub fn new(app_key: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            app_secret: app_secret.into(),
        }
    }

    pub fn app_secret(&self) -> &str {
        &self.app_secret
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("app_key", &self.app_key)
            .field("app_secret", &"***")
            .finish()
    }
}

/// Transport settings for [`Client`].
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Gateway host without path, e.g. `https://api-sg.aliexpress.com`.
    pub base_url: String,
    pub timeout: Duration,
    pub sign_method: SignMethod,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            sign_method: SignMethod::default(),
        }
    }
}

impl ClientConfig {
    pub fn sandbox() -> Self {
        Self {
            base_url: SANDBOX_BASE_URL.to_string(),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_sign_method(mut self, sign_method: SignMethod) -> Self {
        self.sign_method = sign_method;
        self
    }
}

/// HTTP client for the AliExpress Open Platform.
///
/// Every call is signed with the app secret, sent once, and its response
/// unwrapped into the endpoint's model. Nothing is cached or retried, and
/// the client holds no mutable state, so one instance can be shared freely.
pub struct Client {
    http: reqwest::Client,
    credentials: Credentials,
    base_url: String,
    sign_method: SignMethod,
}

impl Client {
    /// Creates a client pointing at the production gateway.
    pub fn new(credentials: Credentials) -> Result<Self, Error> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Creates a client pointing at the sandbox gateway.
    pub fn sandbox(credentials: Credentials) -> Result<Self, Error> {
        Self::with_config(credentials, ClientConfig::sandbox())
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, credentials: Credentials) -> Result<Self, Error> {
        Self::with_config(credentials, ClientConfig::default().with_base_url(base_url))
    }

    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Request(e.to_string())
            })?;
        Ok(Self {
            http,
            credentials,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            sign_method: config.sign_method,
        })
    }

    pub fn app_key(&self) -> &str {
        &self.credentials.app_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn sign_method(&self) -> SignMethod {
        self.sign_method
    }

    pub(crate) fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    fn sync_url(&self) -> String {
        format!("{}/sync", self.base_url)
    }

    pub(crate) fn rest_url(&self, path: &str) -> String {
        format!("{}/rest{}", self.base_url, path)
    }

    /// Builds the system parameters for one call, including `sign`.
    ///
    /// The signature covers the system and application parameters together;
    /// only the system set (with `sign`) is returned.
    pub fn sign_request(
        &self,
        method: &str,
        params: &Params,
        timestamp: i64,
        access_token: Option<&str>,
    ) -> Result<Params, Error> {
        let mut system = Params::new();
        system
            .push("app_key", &self.credentials.app_key)
            .push("method", method)
            .push("timestamp", timestamp)
            .push("sign_method", self.sign_method)
            .push("format", "json")
            .push("v", API_VERSION)
            .push("partner_id", PARTNER_ID)
            .push_opt("access_token", access_token);

        let mut signed = params.clone();
        signed.extend(&system);
        let signature = sign(
            self.sign_method,
            self.credentials.app_secret(),
            method,
            signed.iter(),
        )?;
        system.push("sign", signature);
        Ok(system)
    }

    fn get_url<'a, I>(&self, base: &str, pairs: I) -> Result<Url, Error>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut url = Url::parse(base).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::Request(format!("invalid url {}: {}", base, e))
        })?;
        url.query_pairs_mut().extend_pairs(pairs);
        Ok(url)
    }

    /// Signs and sends one call, returning the parsed (still wrapped) body.
    pub async fn dispatch(
        &self,
        method: &str,
        http_method: HttpMethod,
        params: &Params,
        file: Option<FileItem>,
        access_token: Option<&str>,
    ) -> Result<Value, Error> {
        let timestamp = chrono::Utc::now().timestamp_millis();
        let system = self.sign_request(method, params, timestamp, access_token)?;
        tracing::debug!(
            "API {} - {:?} with params {:?}",
            method,
            http_method,
            params.keys()
        );

        let request = match http_method {
            HttpMethod::Get => {
                let url = self.get_url(&self.sync_url(), system.iter().chain(params.iter()))?;
                self.http.get(url)
            }
            HttpMethod::Post => {
                let url = self.get_url(&self.sync_url(), system.iter())?;
                match file {
                    Some(file) => {
                        let mut form = reqwest::multipart::Form::new();
                        for (key, value) in params.iter() {
                            form = form.text(key.to_string(), value.to_string());
                        }
                        let part = reqwest::multipart::Part::bytes(file.content)
                            .file_name(file.filename);
                        form = form.part(file.field, part);
                        self.http.post(url).multipart(form)
                    }
                    None => {
                        let body: Vec<(&str, &str)> = params.iter().collect();
                        self.http.post(url).form(&body)
                    }
                }
            }
        };

        let resp = request.send().await.map_err(|e| {
            tracing::error!("API {} - request failed: {}", method, e);
            Error::Request(e.to_string())
        })?;
        read_json(method, resp).await
    }

    /// Dispatches a catalog entry and maps its payload onto the endpoint's model.
    pub async fn execute<E: Endpoint>(
        &self,
        endpoint: &E,
        access_token: Option<&str>,
    ) -> Result<E::Response, Error> {
        let params = endpoint.params()?;
        let body = self
            .dispatch(E::METHOD, E::HTTP_METHOD, &params, endpoint.file(), access_token)
            .await?;
        let payload = envelope::unwrap_payload(body, &endpoint.response_key())?;
        serde_json::from_value::<E::Response>(payload).map_err(|e| {
            tracing::error!("API {} - unexpected payload shape: {}", E::METHOD, e);
            Error::MalformedResponse(format!("{}: {}", E::METHOD, e))
        })
    }
}

/// Reads a response body, enforcing a success status and JSON content.
pub(crate) async fn read_json(label: &str, resp: reqwest::Response) -> Result<Value, Error> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| {
        tracing::error!("Failed to read response body: {}", e);
        Error::Request(e.to_string())
    })?;

    if !status.is_success() {
        let snippet = truncate_body(&body);
        tracing::error!("Request failed with status {}: {}", status, snippet);
        return Err(Error::HttpStatus {
            status: status.as_u16(),
            body: snippet,
        });
    }

    tracing::debug!("API {} - raw response: {}", label, truncate_body(&body));

    serde_json::from_str::<Value>(&body).map_err(|e| {
        let snippet = truncate_body(&body);
        tracing::error!("Failed to parse response: {} | body: {}", e, snippet);
        Error::MalformedResponse(format!("invalid JSON: {}", e))
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::with_base_url(
            "https://example.com/",
            Credentials::new("12345678", "helloworld"),
        )
        .unwrap()
    }

    #[test]
    fn system_params_are_complete() {
        let mut params = Params::new();
        params.push("product_ids", "1005001234567890");
        let system = client()
            .sign_request("aliexpress.affiliate.productdetail.get", &params, 1700000000000, None)
            .unwrap();
        assert_eq!(
            system.keys(),
            vec!["app_key", "format", "method", "partner_id", "sign", "sign_method", "timestamp", "v"]
        );
        assert_eq!(system.get("sign_method"), Some("sha256"));
        assert!(!system.contains("product_ids"));
    }

    #[test]
    fn signature_is_deterministic_for_equal_content() {
        let mut a = Params::new();
        a.push("keywords", "phone").push("page_no", 1);
        let mut b = Params::new();
        b.push("page_no", 1).push("keywords", "phone");
        let c = client();
        let sa = c.sign_request("m", &a, 1, Some("tok")).unwrap();
        let sb = c.sign_request("m", &b, 1, Some("tok")).unwrap();
        assert_eq!(sa.get("sign"), sb.get("sign"));
        assert_eq!(sa.get("access_token"), Some("tok"));
    }

    #[test]
    fn application_params_are_covered_by_signature() {
        let c = client();
        let mut a = Params::new();
        a.push("keywords", "phone");
        let mut b = Params::new();
        b.push("keywords", "case");
        let sa = c.sign_request("m", &a, 1, None).unwrap();
        let sb = c.sign_request("m", &b, 1, None).unwrap();
        assert_ne!(sa.get("sign"), sb.get("sign"));
    }

    #[test]
    fn base_url_is_normalized() {
        let c = client();
        assert_eq!(c.base_url(), "https://example.com");
        assert_eq!(c.sync_url(), "https://example.com/sync");
        assert_eq!(c.rest_url("/auth/token/create"), "https://example.com/rest/auth/token/create");
    }

    #[test]
    fn credentials_debug_hides_secret() {
        let rendered = format!("{:?}", Credentials::new("key", "topsecret"));
        assert!(rendered.contains("key"));
        assert!(!rendered.contains("topsecret"));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
    }
}
