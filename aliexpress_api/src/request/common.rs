//! Shared request infrastructure: the [`Endpoint`] trait and the enumerated
//! parameter values used across the catalog.

use std::str::FromStr;

use serde::de::DeserializeOwned;

use crate::params::Params;
use crate::Error;

/// HTTP verb used to reach an endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HttpMethod {
    /// Every parameter in the query string.
    Get,
    /// System parameters in the query string, application parameters in the body.
    #[default]
    Post,
}

/// A binary upload sent as a multipart field.
#[derive(Clone, Debug)]
pub struct FileItem {
    /// Multipart field name.
    pub field: String,
    pub filename: String,
    pub content: Vec<u8>,
}

/// Trait implemented by every catalog entry: a fixed remote method name, the
/// application parameters, and the model the unwrapped payload maps onto.
pub trait Endpoint {
    /// Model the unwrapped result deserializes into.
    type Response: DeserializeOwned;

    /// Remote method name, e.g. `aliexpress.affiliate.product.query`.
    const METHOD: &'static str;

    const HTTP_METHOD: HttpMethod = HttpMethod::Post;

    /// Application parameters, excluding system fields and the signature.
    fn params(&self) -> Result<Params, Error>;

    /// Top-level key wrapping the payload in the response body.
    fn response_key(&self) -> String {
        default_response_key(Self::METHOD)
    }

    /// File carried as a multipart field, if any.
    fn file(&self) -> Option<FileItem> {
        None
    }
}

/// `aliexpress.ds.product.get` -> `aliexpress_ds_product_get_response`.
pub fn default_response_key(method: &str) -> String {
    format!("{}_response", method.replace('.', "_"))
}

/// Interface language. Sent lowercase (`target_language=en`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Ru,
    Pt,
    Es,
    Fr,
    Id,
    It,
    Th,
    Ja,
    Ar,
    Vi,
    Tr,
    De,
    He,
    Ko,
    Nl,
    Pl,
    Mx,
    Cl,
    Iw,
    In,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
            Language::Pt => "pt",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::Id => "id",
            Language::It => "it",
            Language::Th => "th",
            Language::Ja => "ja",
            Language::Ar => "ar",
            Language::Vi => "vi",
            Language::Tr => "tr",
            Language::De => "de",
            Language::He => "he",
            Language::Ko => "ko",
            Language::Nl => "nl",
            Language::Pl => "pl",
            Language::Mx => "mx",
            Language::Cl => "cl",
            Language::Iw => "iw",
            Language::In => "in",
        }
    }

    /// Locale string such as `en_US`. The country defaults to `US`.
    pub fn locale(&self, country: Option<&str>) -> String {
        let country = country
            .filter(|c| !c.trim().is_empty())
            .map(|c| c.trim().to_uppercase())
            .unwrap_or_else(|| "US".to_string());
        format!("{}_{}", self.code(), country)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ru" => Ok(Language::Ru),
            "pt" => Ok(Language::Pt),
            "es" => Ok(Language::Es),
            "fr" => Ok(Language::Fr),
            "id" => Ok(Language::Id),
            "it" => Ok(Language::It),
            "th" => Ok(Language::Th),
            "ja" => Ok(Language::Ja),
            "ar" => Ok(Language::Ar),
            "vi" => Ok(Language::Vi),
            "tr" => Ok(Language::Tr),
            "de" => Ok(Language::De),
            "he" => Ok(Language::He),
            "ko" => Ok(Language::Ko),
            "nl" => Ok(Language::Nl),
            "pl" => Ok(Language::Pl),
            "mx" => Ok(Language::Mx),
            "cl" => Ok(Language::Cl),
            "iw" => Ok(Language::Iw),
            "in" => Ok(Language::In),
            _ => Err(()),
        }
    }
}

/// Currency for target prices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Currency {
    #[default]
    Usd,
    Gbp,
    Cad,
    Eur,
    Uah,
    Mxn,
    Try,
    Rub,
    Brl,
    Aud,
    Inr,
    Jpy,
    Idr,
    Sek,
    Krw,
    Ils,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Cad => "CAD",
            Currency::Eur => "EUR",
            Currency::Uah => "UAH",
            Currency::Mxn => "MXN",
            Currency::Try => "TRY",
            Currency::Rub => "RUB",
            Currency::Brl => "BRL",
            Currency::Aud => "AUD",
            Currency::Inr => "INR",
            Currency::Jpy => "JPY",
            Currency::Idr => "IDR",
            Currency::Sek => "SEK",
            Currency::Krw => "KRW",
            Currency::Ils => "ILS",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "GBP" => Ok(Currency::Gbp),
            "CAD" => Ok(Currency::Cad),
            "EUR" => Ok(Currency::Eur),
            "UAH" => Ok(Currency::Uah),
            "MXN" => Ok(Currency::Mxn),
            "TRY" => Ok(Currency::Try),
            "RUB" => Ok(Currency::Rub),
            "BRL" => Ok(Currency::Brl),
            "AUD" => Ok(Currency::Aud),
            "INR" => Ok(Currency::Inr),
            "JPY" => Ok(Currency::Jpy),
            "IDR" => Ok(Currency::Idr),
            "SEK" => Ok(Currency::Sek),
            "KRW" => Ok(Currency::Krw),
            "ILS" => Ok(Currency::Ils),
            _ => Err(()),
        }
    }
}

/// Affiliate link flavour. Discriminant values are sent to the API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkType {
    #[default]
    Normal = 0,
    /// Hot link, higher commission for eligible products.
    Hotlink = 2,
}

impl std::fmt::Display for LinkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

/// Platform product type filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductType {
    All,
    Plaza,
    Tmall,
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ProductType::All => "ALL",
                ProductType::Plaza => "PLAZA",
                ProductType::Tmall => "TMALL",
            }
        )?;
        Ok(())
    }
}

/// Sort order for affiliate product searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortBy {
    SalePriceAsc,
    SalePriceDesc,
    LastVolumeAsc,
    LastVolumeDesc,
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortBy::SalePriceAsc => "SALE_PRICE_ASC",
                SortBy::SalePriceDesc => "SALE_PRICE_DESC",
                SortBy::LastVolumeAsc => "LAST_VOLUME_ASC",
                SortBy::LastVolumeDesc => "LAST_VOLUME_DESC",
            }
        )?;
        Ok(())
    }
}

impl FromStr for SortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SALE_PRICE_ASC" => Ok(SortBy::SalePriceAsc),
            "SALE_PRICE_DESC" => Ok(SortBy::SalePriceDesc),
            "LAST_VOLUME_ASC" => Ok(SortBy::LastVolumeAsc),
            "LAST_VOLUME_DESC" => Ok(SortBy::LastVolumeDesc),
            _ => Err(()),
        }
    }
}

/// Affiliate order status filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderStatus {
    PaymentCompleted,
    BuyerConfirmedReceipt,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                OrderStatus::PaymentCompleted => "Payment Completed",
                OrderStatus::BuyerConfirmedReceipt => "Buyer Confirmed Receipt",
            }
        )?;
        Ok(())
    }
}

/// Time format the order-list endpoints expect (`2024-01-31 23:59:59`).
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats a timestamp for the `start_time` / `end_time` parameters.
pub fn format_time(time: &chrono::NaiveDateTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_key_replaces_dots() {
        assert_eq!(
            default_response_key("aliexpress.ds.product.get"),
            "aliexpress_ds_product_get_response"
        );
    }

    #[test]
    fn locale_defaults_to_us() {
        assert_eq!(Language::En.locale(None), "en_US");
        assert_eq!(Language::Es.locale(Some("mx")), "es_MX");
        assert_eq!(Language::Fr.locale(Some("  ")), "fr_US");
    }

    #[test]
    fn enums_render_wire_values() {
        assert_eq!(Language::Pt.to_string(), "pt");
        assert_eq!(Currency::Eur.to_string(), "EUR");
        assert_eq!(LinkType::Hotlink.to_string(), "2");
        assert_eq!(ProductType::Tmall.to_string(), "TMALL");
        assert_eq!(SortBy::LastVolumeDesc.to_string(), "LAST_VOLUME_DESC");
        assert_eq!(OrderStatus::PaymentCompleted.to_string(), "Payment Completed");
    }

    #[test]
    fn language_and_currency_parse_case_insensitively() {
        assert_eq!("EN".parse::<Language>(), Ok(Language::En));
        assert_eq!("eur".parse::<Currency>(), Ok(Currency::Eur));
        assert!("xx".parse::<Language>().is_err());
    }

    #[test]
    fn time_format_matches_platform() {
        let t = chrono::NaiveDate::from_ymd_opt(2024, 1, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(format_time(&t), "2024-01-31 23:59:59");
    }
}
