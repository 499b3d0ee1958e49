use aliexpress_api::types::TokenResponse;

use crate::api::AliexpressApi;
use crate::error::AliexpressError;
use crate::validation::sanitize_text;

const MAX_TOKEN_LENGTH: usize = 512;

/// Authorization code and refresh token exchange.
pub struct OAuthService<'a> {
    api: &'a AliexpressApi,
}

impl<'a> OAuthService<'a> {
    pub(crate) fn new(api: &'a AliexpressApi) -> Self {
        Self { api }
    }

    /// Exchanges the `code` from the authorization redirect for tokens.
    pub async fn generate_access_token(
        &self,
        code: &str,
        uuid: Option<&str>,
    ) -> Result<TokenResponse, AliexpressError> {
        let code = sanitize_text(code, MAX_TOKEN_LENGTH)?;
        tracing::debug!("Exchanging authorization code for an access token");
        Ok(self.api.client().create_token(&code, uuid).await?)
    }

    pub async fn refresh_access_token(
        &self,
        refresh_token: &str,
    ) -> Result<TokenResponse, AliexpressError> {
        let refresh_token = sanitize_text(refresh_token, MAX_TOKEN_LENGTH)?;
        tracing::debug!("Refreshing access token");
        Ok(self.api.client().refresh_token(&refresh_token).await?)
    }
}
