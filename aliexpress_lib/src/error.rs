//! Error types for the facade layer.

use std::fmt;

const EMPTY_RESULT_CODE: &str = "405";

/// Errors produced by [`crate::AliexpressApi`], wrapping client errors and
/// adding "nothing found" results and input validation failures.
#[derive(Debug)]
pub enum AliexpressError {
    /// An error from the underlying API client.
    Api(aliexpress_api::Error),
    /// A product search or lookup returned no products.
    ProductsNotFound(String),
    /// An order listing returned no orders.
    OrdersNotFound(String),
    /// The category listing came back empty.
    CategoriesNotFound(String),
    /// The call needs a tracking id and none was configured.
    InvalidTrackingId(String),
    /// User-provided input failed validation.
    InvalidArgument(String),
    /// No product id could be extracted from the given text or URL.
    ProductIdNotFound(String),
    /// Required configuration is missing or unreadable.
    Config(String),
}

impl AliexpressError {
    /// Whether the call succeeded but matched nothing.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ProductsNotFound(_) | Self::OrdersNotFound(_) | Self::CategoriesNotFound(_)
        )
    }

    /// Whether the gateway answered with its "405 The result is empty"
    /// business code instead of an empty page.
    pub fn is_empty_result(&self) -> bool {
        match self {
            Self::Api(aliexpress_api::Error::ApiResponse { code, message, .. }) => {
                code == EMPTY_RESULT_CODE || message.to_lowercase().contains("result is empty")
            }
            _ => false,
        }
    }

    /// Turns an empty-result API error into the given not-found variant,
    /// leaving every other error untouched.
    pub(crate) fn empty_result_as(self, not_found: fn(String) -> Self) -> Self {
        if !self.is_empty_result() {
            return self;
        }
        match self {
            Self::Api(aliexpress_api::Error::ApiResponse { message, .. }) => not_found(message),
            other => other,
        }
    }
}

impl fmt::Display for AliexpressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::ProductsNotFound(msg) => write!(f, "Products not found: {}", msg),
            Self::OrdersNotFound(msg) => write!(f, "Orders not found: {}", msg),
            Self::CategoriesNotFound(msg) => write!(f, "Categories not found: {}", msg),
            Self::InvalidTrackingId(msg) => write!(f, "Invalid tracking id: {}", msg),
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Self::ProductIdNotFound(input) => {
                write!(f, "Product id not found in '{}'", input)
            }
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AliexpressError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<aliexpress_api::Error> for AliexpressError {
    fn from(e: aliexpress_api::Error) -> Self {
        Self::Api(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_api_code() {
        let err = AliexpressError::from(aliexpress_api::Error::ApiResponse {
            code: "X".into(),
            message: "Y".into(),
            sub_code: None,
            sub_msg: None,
        });
        assert_eq!(err.to_string(), "API error: API error X: Y");
        assert!(std::error::Error::source(&err).is_some());
    }

    fn api_error(code: &str, message: &str) -> AliexpressError {
        AliexpressError::from(aliexpress_api::Error::ApiResponse {
            code: code.into(),
            message: message.into(),
            sub_code: None,
            sub_msg: None,
        })
    }

    #[test]
    fn empty_result_becomes_not_found() {
        let err = api_error("405", "The result is empty")
            .empty_result_as(AliexpressError::ProductsNotFound);
        assert!(
            matches!(&err, AliexpressError::ProductsNotFound(msg) if msg == "The result is empty")
        );

        let err = api_error("0", "The Result Is Empty")
            .empty_result_as(AliexpressError::OrdersNotFound);
        assert!(matches!(err, AliexpressError::OrdersNotFound(_)));
    }

    #[test]
    fn other_errors_pass_through() {
        let err = api_error("IncompleteSignature", "bad sign")
            .empty_result_as(AliexpressError::ProductsNotFound);
        assert!(!err.is_empty_result());
        assert!(matches!(err, AliexpressError::Api(_)));

        let err = AliexpressError::InvalidArgument("page".into())
            .empty_result_as(AliexpressError::ProductsNotFound);
        assert!(matches!(err, AliexpressError::InvalidArgument(_)));
    }

    #[test]
    fn not_found_variants() {
        assert!(AliexpressError::OrdersNotFound("none".into()).is_not_found());
        assert!(!AliexpressError::InvalidArgument("bad".into()).is_not_found());
    }
}
