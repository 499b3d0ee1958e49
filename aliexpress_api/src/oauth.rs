//! OAuth token calls on the `/rest` gateway.
//!
//! Unlike `/sync` calls these carry no `method` parameter; the API path
//! itself is part of the signed string.

use serde_json::Value;

use crate::{
    client::{read_json, Client},
    envelope::{api_error_from, is_success_code},
    params::Params,
    sign::{sign, SignMethod},
    types::TokenResponse,
    Error,
};

pub const TOKEN_CREATE_PATH: &str = "/auth/token/create";
pub const TOKEN_REFRESH_PATH: &str = "/auth/token/refresh";

const TOKEN_CONTAINERS: [&str; 3] = ["token_response", "result", "data"];

impl Client {
    /// Exchanges an authorization code from the app callback for tokens.
    ///
    /// Codes expire after a few minutes and are single-use.
    pub async fn create_token(&self, code: &str, uuid: Option<&str>) -> Result<TokenResponse, Error> {
        let mut params = Params::new();
        params.push("code", code).push_opt("uuid", uuid);
        self.token_request(TOKEN_CREATE_PATH, params).await
    }

    /// Trades a refresh token for a new access token.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<TokenResponse, Error> {
        let mut params = Params::new();
        params.push("refresh_token", refresh_token);
        self.token_request(TOKEN_REFRESH_PATH, params).await
    }

    /// Builds the signed form for a token call.
    ///
    /// The `/rest` token endpoints only accept HMAC-SHA256, whatever the
    /// client's configured method.
    pub fn sign_token_request(
        &self,
        path: &str,
        mut params: Params,
        timestamp: i64,
    ) -> Result<Params, Error> {
        params
            .push("app_key", &self.credentials().app_key)
            .push("timestamp", timestamp)
            .push("sign_method", SignMethod::Sha256);
        let signature = sign(
            SignMethod::Sha256,
            self.credentials().app_secret(),
            path,
            params.iter(),
        )?;
        params.push("sign", signature);
        Ok(params)
    }

    async fn token_request(&self, path: &str, params: Params) -> Result<TokenResponse, Error> {
        let timestamp = chrono::Utc::now().timestamp_millis();
        let form = self.sign_token_request(path, params, timestamp)?;
        tracing::debug!("OAuth request to {}", path);

        let body: Vec<(&str, &str)> = form.iter().collect();
        let resp = self
            .http()
            .post(self.rest_url(path))
            .form(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OAuth request to {} failed: {}", path, e);
                Error::Request(e.to_string())
            })?;
        let body = read_json(path, resp).await?;
        token_from_body(body)
    }
}

/// Maps a token endpoint body onto [`TokenResponse`].
///
/// Token data sits either at the top level or under one of a few container
/// keys, depending on the gateway version.
pub fn token_from_body(body: Value) -> Result<TokenResponse, Error> {
    if let Some(err) = body.get("error_response") {
        return Err(api_error_from(err));
    }
    if let Some(code) = body.get("code") {
        if !is_success_code(code) {
            return Err(api_error_from(&body));
        }
    }

    let data = if body.get("access_token").is_some() {
        body
    } else {
        let nested = match &body {
            Value::Object(map) => TOKEN_CONTAINERS
                .iter()
                .find_map(|k| map.get(*k).filter(|v| v.is_object()).cloned()),
            _ => None,
        };
        nested.unwrap_or(body)
    };

    let token: TokenResponse = serde_json::from_value(data).map_err(|e| {
        tracing::error!("Unexpected token payload: {}", e);
        Error::MalformedResponse(format!("token response: {}", e))
    })?;
    if token.access_token.is_none() {
        return Err(Error::MalformedResponse(
            "token response carries no access_token".to_string(),
        ));
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{ClientConfig, Credentials};

    #[test]
    fn token_request_signature_matches_known_vector() {
        let client =
            Client::with_base_url("https://example.com", Credentials::new("12345678", "helloworld"))
                .unwrap();
        let mut params = Params::new();
        params.push("code", "3_500102_abc");
        let form = client
            .sign_token_request(TOKEN_CREATE_PATH, params, 1700000000000)
            .unwrap();
        assert_eq!(
            form.get("sign"),
            Some("EF0E30B2B6002D52E65A95D42803B98A1CD5BFB6DEC3FCF5F1EC62F0903AE10D")
        );
        assert!(!form.contains("method"));
    }

    #[test]
    fn token_request_is_sha256_even_for_md5_clients() {
        let config = ClientConfig::default()
            .with_base_url("https://example.com")
            .with_sign_method(SignMethod::Md5);
        let client =
            Client::with_config(Credentials::new("12345678", "helloworld"), config).unwrap();
        assert_eq!(client.sign_method(), SignMethod::Md5);

        let mut params = Params::new();
        params.push("code", "3_500102_abc");
        let form = client
            .sign_token_request(TOKEN_CREATE_PATH, params, 1700000000000)
            .unwrap();
        assert_eq!(form.get("sign_method"), Some("sha256"));
        assert_eq!(
            form.get("sign"),
            Some("EF0E30B2B6002D52E65A95D42803B98A1CD5BFB6DEC3FCF5F1EC62F0903AE10D")
        );
    }

    #[test]
    fn top_level_token_is_read() {
        let token = token_from_body(json!({
            "code": "0",
            "access_token": "50000600c",
            "refresh_token": "50001600d",
            "expires_in": "2592000",
            "expire_time": 1702592000000i64,
            "user_id": 2200000001i64,
            "request_id": "2101e9d5"
        }))
        .unwrap();
        assert_eq!(token.access_token.as_deref(), Some("50000600c"));
        assert_eq!(token.expires_in, Some(2592000));
        assert_eq!(token.user_id.as_deref(), Some("2200000001"));
        assert!(token.expires_at().is_some());
    }

    #[test]
    fn nested_token_is_read() {
        let token = token_from_body(json!({
            "token_response": {"access_token": "abc", "refresh_token": "def"}
        }))
        .unwrap();
        assert_eq!(token.refresh_token.as_deref(), Some("def"));
    }

    #[test]
    fn rest_error_code_is_an_api_error() {
        let err = token_from_body(json!({
            "type": "ISV",
            "code": "InvalidCode",
            "message": "The authorization code is invalid or expired",
            "request_id": "2101e9d5"
        }))
        .unwrap_err();
        assert_eq!(err.api_code(), Some("InvalidCode"));
    }

    #[test]
    fn error_response_is_an_api_error() {
        let err = token_from_body(json!({
            "error_response": {"code": "IncompleteSignature", "msg": "bad sign"}
        }))
        .unwrap_err();
        assert_eq!(err.api_code(), Some("IncompleteSignature"));
    }

    #[test]
    fn missing_token_is_malformed() {
        let err = token_from_body(json!({"code": "0"})).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }
}
