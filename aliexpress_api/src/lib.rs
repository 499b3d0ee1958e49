mod client;
pub mod envelope;
mod errors;
mod oauth;
pub mod params;
pub mod request;
pub mod sign;
pub mod types;
pub use self::client::{
    Client, ClientConfig, Credentials, API_VERSION, DEFAULT_BASE_URL, PARTNER_ID,
    SANDBOX_BASE_URL,
};
pub use self::errors::Error;
pub use self::oauth::{token_from_body, TOKEN_CREATE_PATH, TOKEN_REFRESH_PATH};
pub use self::params::{OneOrMany, Params};
pub use self::request::{
    Currency, Endpoint, FileItem, HttpMethod, Language, LinkType, OrderStatus, ProductType,
    SortBy,
};
pub use self::sign::SignMethod;

#[cfg(test)]
mod tests {
    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn client_is_shareable_across_tasks() {
        assert_send_sync::<crate::Client>();
        assert_send_sync::<crate::Error>();
    }
}
