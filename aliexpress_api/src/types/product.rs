//! Affiliate product models shared by the search, hot-product, smart-match,
//! detail and recommendation endpoints.

use serde::{Deserialize, Serialize};

use super::de;

/// A product as returned by the affiliate endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "de::string_or_number")]
    pub product_id: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub product_title: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub product_detail_url: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub product_main_image_url: String,
    #[serde(deserialize_with = "de::nested_string_list")]
    pub product_small_image_urls: Vec<String>,
    #[serde(deserialize_with = "de::null_as_default")]
    pub product_video_url: String,

    #[serde(deserialize_with = "de::string_or_number")]
    pub app_sale_price: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub app_sale_price_currency: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub original_price: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub original_price_currency: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub sale_price: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub sale_price_currency: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub target_app_sale_price: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub target_app_sale_price_currency: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub target_original_price: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub target_original_price_currency: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub target_sale_price: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub target_sale_price_currency: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub discount: String,

    #[serde(deserialize_with = "de::null_as_default")]
    pub commission_rate: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub hot_product_commission_rate: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub relevant_market_commission_rate: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub evaluate_rate: String,
    #[serde(deserialize_with = "de::lenient_i64")]
    pub lastest_volume: i64,

    #[serde(deserialize_with = "de::lenient_i64")]
    pub first_level_category_id: i64,
    #[serde(deserialize_with = "de::null_as_default")]
    pub first_level_category_name: String,
    #[serde(deserialize_with = "de::lenient_i64")]
    pub second_level_category_id: i64,
    #[serde(deserialize_with = "de::null_as_default")]
    pub second_level_category_name: String,

    #[serde(deserialize_with = "de::lenient_i64")]
    pub shop_id: i64,
    #[serde(deserialize_with = "de::null_as_default")]
    pub shop_url: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub shop_name: String,

    /// Affiliate link. Only present when a tracking id was supplied.
    #[serde(deserialize_with = "de::null_as_default")]
    pub promotion_link: String,
}

/// One page of affiliate products.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ProductPage {
    #[serde(deserialize_with = "de::lenient_i64")]
    pub current_page_no: i64,
    #[serde(deserialize_with = "de::lenient_i64")]
    pub current_record_count: i64,
    #[serde(deserialize_with = "de::lenient_i64")]
    pub total_record_count: i64,
    #[serde(deserialize_with = "de::lenient_i64")]
    pub total_page_no: i64,
    /// Set by the recommendation feed when the last page was served.
    #[serde(deserialize_with = "de::lenient_bool")]
    pub is_finished: bool,
    #[serde(deserialize_with = "de::nested_list")]
    pub products: Vec<Product>,
}

impl ProductPage {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
