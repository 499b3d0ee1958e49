//! Affiliate link, category and order models.

use serde::{Deserialize, Serialize};

use super::de;

/// A source URL converted into a tracked promotion link.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AffiliateLink {
    #[serde(deserialize_with = "de::null_as_default")]
    pub promotion_link: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub source_value: String,
}

/// Result of `aliexpress.affiliate.link.generate`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct LinkGenerateResult {
    #[serde(deserialize_with = "de::lenient_i64")]
    pub total_result_count: i64,
    #[serde(deserialize_with = "de::null_as_default")]
    pub tracking_id: String,
    #[serde(deserialize_with = "de::nested_list")]
    pub promotion_links: Vec<AffiliateLink>,
}

/// An affiliate category. Top-level categories carry no parent id.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Category {
    #[serde(deserialize_with = "de::lenient_i64")]
    pub category_id: i64,
    #[serde(deserialize_with = "de::null_as_default")]
    pub category_name: String,
    #[serde(
        deserialize_with = "de::opt_lenient_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_category_id: Option<i64>,
}

impl Category {
    pub fn is_parent(&self) -> bool {
        self.parent_category_id.is_none()
    }
}

/// Result of `aliexpress.affiliate.category.get`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct CategoryList {
    #[serde(deserialize_with = "de::lenient_i64")]
    pub total_result_count: i64,
    #[serde(deserialize_with = "de::nested_list")]
    pub categories: Vec<Category>,
}

/// A commissionable affiliate order.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AffiliateOrder {
    #[serde(deserialize_with = "de::string_or_number")]
    pub order_id: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub parent_order_number: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub order_status: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub order_type: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub product_id: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub product_title: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub product_main_image_url: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub product_detail_url: String,
    #[serde(deserialize_with = "de::lenient_i64")]
    pub product_count: i64,
    #[serde(deserialize_with = "de::string_or_number")]
    pub paid_amount: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub finished_amount: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub estimated_paid_commission: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub estimated_finished_commission: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub commission_rate: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub incentive_commission_rate: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub new_buyer_bonus_commission: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub paid_time: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub created_time: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub finished_time: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub completed_settlement_time: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub settled_currency: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub ship_to_country: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub tracking_id: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub custom_parameters: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub sub_order_id: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub effect_detail_status: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub is_new_buyer: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub is_hot_product: String,
}

/// One page of affiliate orders.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct OrderPage {
    #[serde(deserialize_with = "de::lenient_i64")]
    pub current_page_no: i64,
    #[serde(deserialize_with = "de::lenient_i64")]
    pub current_record_count: i64,
    #[serde(deserialize_with = "de::lenient_i64")]
    pub total_record_count: i64,
    #[serde(deserialize_with = "de::lenient_i64")]
    pub total_page_no: i64,
    #[serde(deserialize_with = "de::nested_list")]
    pub orders: Vec<AffiliateOrder>,
}

impl OrderPage {
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
