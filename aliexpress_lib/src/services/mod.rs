//! Per-area services. Each borrows the [`crate::AliexpressApi`] it came from.

mod affiliate;
mod common;
mod dropshipping;
mod oauth;

pub use self::affiliate::AffiliateService;
pub use self::common::CommonService;
pub use self::dropshipping::DropshippingService;
pub use self::oauth::OAuthService;
