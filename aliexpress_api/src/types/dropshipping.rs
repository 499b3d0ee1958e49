//! Dropshipping models: product detail, categories, orders, search,
//! logistics and feeds.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::de;
use super::product::Product;

/// Loosely typed result for endpoints whose payload varies by account and
/// region. Every field the platform sent is kept.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AttributeBag(pub Map<String, Value>);

impl AttributeBag {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// A scalar field rendered as a string.
    pub fn get_str(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ============================================================================
// Product detail
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ItemBaseInfo {
    #[serde(deserialize_with = "de::string_or_number")]
    pub product_id: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub subject: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub detail: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub mobile_detail: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub category_id: String,
    pub category_sequence: Option<String>,
    #[serde(deserialize_with = "de::null_as_default")]
    pub product_status_type: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub currency_code: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub avg_evaluation_rating: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub evaluation_count: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub sales_count: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub gmt_create: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub gmt_modified: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub owner_member_seq_long: String,
    #[serde(deserialize_with = "de::opt_string_or_number")]
    pub separated_listing: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ItemProperty {
    #[serde(deserialize_with = "de::null_as_default")]
    pub attr_name: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub attr_value: String,
    #[serde(deserialize_with = "de::opt_string_or_number")]
    pub attr_name_id: Option<String>,
    #[serde(deserialize_with = "de::opt_string_or_number")]
    pub attr_value_id: Option<String>,
    pub attr_value_unit: Option<String>,
    #[serde(deserialize_with = "de::opt_string_or_number")]
    pub attr_value_start: Option<String>,
    #[serde(deserialize_with = "de::opt_string_or_number")]
    pub attr_value_end: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SkuProperty {
    #[serde(deserialize_with = "de::string_or_number")]
    pub sku_property_id: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub sku_property_name: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub property_value_id: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub property_value_definition_name: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub sku_property_value: String,
    pub sku_image: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct WholesalePriceTier {
    #[serde(deserialize_with = "de::string_or_number")]
    pub min_quantity: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub wholesale_price: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub discount: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SkuInfo {
    #[serde(deserialize_with = "de::string_or_number")]
    pub sku_id: String,
    /// Property id pairs, e.g. `14:175#Black;5:100014064`.
    #[serde(deserialize_with = "de::null_as_default")]
    pub id: String,
    pub sku_attr: Option<String>,
    #[serde(deserialize_with = "de::string_or_number")]
    pub sku_price: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub offer_sale_price: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub offer_bulk_sale_price: String,
    #[serde(deserialize_with = "de::lenient_i64")]
    pub sku_available_stock: i64,
    #[serde(deserialize_with = "de::string_or_number")]
    pub sku_bulk_order: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub currency_code: String,
    pub ean_code: Option<String>,
    pub barcode: Option<String>,
    #[serde(deserialize_with = "de::opt_string_or_number")]
    pub price_include_tax: Option<String>,
    #[serde(deserialize_with = "de::opt_string_or_number")]
    pub tax_amount: Option<String>,
    pub tax_currency_code: Option<String>,
    #[serde(deserialize_with = "de::opt_string_or_number")]
    pub estimated_import_charges: Option<String>,
    pub limit_strategy: Option<String>,
    #[serde(deserialize_with = "de::opt_string_or_number")]
    pub buy_amount_limit_set_by_promotion: Option<String>,
    #[serde(rename = "ae_sku_property_dtos", deserialize_with = "de::nested_list")]
    pub properties: Vec<SkuProperty>,
    #[serde(deserialize_with = "de::nested_list")]
    pub wholesale_price_tiers: Vec<WholesalePriceTier>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Video {
    #[serde(deserialize_with = "de::string_or_number")]
    pub media_id: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub media_type: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub media_status: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub media_url: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub poster_url: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub ali_member_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct MultimediaInfo {
    /// Semicolon separated image URLs.
    #[serde(deserialize_with = "de::null_as_default")]
    pub image_urls: String,
    #[serde(rename = "ae_video_dtos", deserialize_with = "de::nested_list")]
    pub videos: Vec<Video>,
}

impl MultimediaInfo {
    pub fn images(&self) -> Vec<&str> {
        self.image_urls
            .split(';')
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .collect()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PackageInfo {
    #[serde(deserialize_with = "de::string_or_number")]
    pub package_length: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub package_width: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub package_height: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub gross_weight: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub package_type: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub product_unit: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub base_unit: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct LogisticsInfo {
    #[serde(deserialize_with = "de::string_or_number")]
    pub delivery_time: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub ship_to_country: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct StoreInfo {
    #[serde(deserialize_with = "de::string_or_number")]
    pub store_id: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub store_name: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub store_country_code: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub communication_rating: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub shipping_speed_rating: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub item_as_described_rating: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ManufacturerInfo {
    #[serde(deserialize_with = "de::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub phone_prefix: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub country_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ProductIdConverterResult {
    #[serde(deserialize_with = "de::string_or_number")]
    pub main_product_id: String,
    pub sub_product_id: Option<Value>,
}

/// Result of `aliexpress.ds.product.get` and `aliexpress.ds.product.wholesale.get`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct DsProduct {
    #[serde(rename = "ae_item_base_info_dto", deserialize_with = "de::null_as_default")]
    pub base_info: ItemBaseInfo,
    #[serde(rename = "ae_multimedia_info_dto", deserialize_with = "de::null_as_default")]
    pub multimedia: MultimediaInfo,
    #[serde(rename = "ae_item_sku_info_dtos", deserialize_with = "de::nested_list")]
    pub skus: Vec<SkuInfo>,
    #[serde(rename = "package_info_dto", deserialize_with = "de::null_as_default")]
    pub package_info: PackageInfo,
    #[serde(rename = "logistics_info_dto", deserialize_with = "de::null_as_default")]
    pub logistics_info: LogisticsInfo,
    #[serde(rename = "ae_store_info", deserialize_with = "de::null_as_default")]
    pub store_info: StoreInfo,
    #[serde(rename = "ae_item_properties", deserialize_with = "de::nested_list")]
    pub properties: Vec<ItemProperty>,
    pub manufacturer_info: Option<ManufacturerInfo>,
    pub product_id_converter_result: Option<ProductIdConverterResult>,
    #[serde(deserialize_with = "de::lenient_bool")]
    pub has_whole_sale: bool,
}

// ============================================================================
// Categories
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct DsCategory {
    #[serde(deserialize_with = "de::lenient_i64")]
    pub category_id: i64,
    #[serde(deserialize_with = "de::null_as_default")]
    pub category_name: String,
    #[serde(deserialize_with = "de::opt_lenient_i64")]
    pub parent_category_id: Option<i64>,
    #[serde(deserialize_with = "de::nested_list")]
    pub children: Vec<DsCategory>,
}

/// Result of `aliexpress.ds.category.get`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct DsCategoryList {
    #[serde(deserialize_with = "de::nested_list")]
    pub categories: Vec<DsCategory>,
}

// ============================================================================
// Orders
// ============================================================================

/// Money amount as the trade endpoints report it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Amount {
    #[serde(deserialize_with = "de::string_or_number")]
    pub amount: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub currency_code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct DsOrderProduct {
    #[serde(deserialize_with = "de::string_or_number")]
    pub product_id: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub product_name: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub sku_id: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub sku_info: String,
    #[serde(deserialize_with = "de::lenient_i64")]
    pub product_count: i64,
    #[serde(deserialize_with = "de::string_or_number")]
    pub product_price: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub product_image_url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct DsOrder {
    #[serde(deserialize_with = "de::string_or_number")]
    pub order_id: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub order_status: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub gmt_create: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub gmt_modified: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub total_amount: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "de::lenient_i64")]
    pub product_count: i64,
    #[serde(deserialize_with = "de::nested_list")]
    pub order_products: Vec<DsOrderProduct>,
}

/// Result of `aliexpress.ds.order.list`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct DsOrderPage {
    #[serde(deserialize_with = "de::lenient_i64")]
    pub current_page_no: i64,
    #[serde(deserialize_with = "de::lenient_i64")]
    pub current_record_count: i64,
    #[serde(deserialize_with = "de::lenient_i64")]
    pub total_record_count: i64,
    #[serde(deserialize_with = "de::nested_list")]
    pub orders: Vec<DsOrder>,
}

impl DsOrderPage {
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct DsCommissionOrder {
    #[serde(deserialize_with = "de::string_or_number")]
    pub order_id: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub parent_order_number: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub order_status: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub commission_status: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub commission_rate: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub estimated_paid_commission: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub paid_amount: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub settled_currency: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub paid_time: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub created_time: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub product_id: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub product_title: String,
    #[serde(deserialize_with = "de::lenient_i64")]
    pub product_count: i64,
}

/// Result of `aliexpress.ds.commissionorder.listbyindex`. Paging is by index
/// id: pass `max_query_index_id` back as `start_query_index_id`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct DsCommissionOrderPage {
    #[serde(deserialize_with = "de::lenient_i64")]
    pub current_record_count: i64,
    #[serde(deserialize_with = "de::lenient_i64")]
    pub total_record_count: i64,
    #[serde(deserialize_with = "de::opt_string_or_number")]
    pub max_query_index_id: Option<String>,
    #[serde(deserialize_with = "de::opt_string_or_number")]
    pub min_query_index_id: Option<String>,
    #[serde(deserialize_with = "de::nested_list")]
    pub orders: Vec<DsCommissionOrder>,
}

impl DsCommissionOrderPage {
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ChildOrder {
    #[serde(deserialize_with = "de::string_or_number")]
    pub product_id: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub product_name: String,
    #[serde(deserialize_with = "de::lenient_i64")]
    pub product_count: i64,
    pub product_price: Option<Amount>,
    #[serde(deserialize_with = "de::null_as_default")]
    pub sku_attr: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct OrderLogisticsInfo {
    #[serde(deserialize_with = "de::null_as_default")]
    pub logistics_no: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub logistics_service: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub logistics_status: String,
}

/// Result of `aliexpress.ds.trade.order.get` and `aliexpress.trade.ds.order.get`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct DsTradeOrder {
    #[serde(deserialize_with = "de::string_or_number")]
    pub order_id: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub order_status: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub logistics_status: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub gmt_create: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub gmt_modified: String,
    pub order_amount: Option<Amount>,
    #[serde(rename = "child_order_list", deserialize_with = "de::nested_list")]
    pub child_orders: Vec<ChildOrder>,
    #[serde(rename = "logistics_info_list", deserialize_with = "de::nested_list")]
    pub logistics: Vec<OrderLogisticsInfo>,
}

/// Result of `aliexpress.ds.order.create`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct DsOrderCreateResult {
    #[serde(deserialize_with = "de::lenient_bool")]
    pub is_success: bool,
    /// Platform order ids, one per seller split.
    #[serde(rename = "order_list", deserialize_with = "de::nested_string_list")]
    pub order_ids: Vec<String>,
    pub error_code: Option<String>,
    pub error_msg: Option<String>,
}

// ============================================================================
// Logistics
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct DeliveryOption {
    /// Logistics service code, the value to pass as `logistics_service_name`.
    #[serde(deserialize_with = "de::null_as_default")]
    pub code: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub shipping_fee_cent: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub shipping_fee_currency: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub shipping_fee_format: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub delivery_date_desc: String,
    #[serde(deserialize_with = "de::opt_lenient_i64")]
    pub min_delivery_days: Option<i64>,
    #[serde(deserialize_with = "de::opt_lenient_i64")]
    pub max_delivery_days: Option<i64>,
    #[serde(deserialize_with = "de::lenient_bool")]
    pub free_shipping: bool,
    #[serde(deserialize_with = "de::lenient_bool")]
    pub tracking: bool,
    #[serde(deserialize_with = "de::null_as_default")]
    pub ship_from_country: String,
}

/// Result of `aliexpress.ds.freight.query`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct DsFreightResult {
    #[serde(deserialize_with = "de::lenient_bool")]
    pub success: bool,
    #[serde(deserialize_with = "de::null_as_default")]
    pub msg: String,
    #[serde(deserialize_with = "de::nested_list")]
    pub delivery_options: Vec<DeliveryOption>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct TrackingEvent {
    #[serde(deserialize_with = "de::lenient_i64")]
    pub time_stamp: i64,
    #[serde(deserialize_with = "de::null_as_default")]
    pub tracking_name: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub tracking_detail_desc: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PackageTracking {
    #[serde(deserialize_with = "de::null_as_default")]
    pub carrier_name: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub mail_no: String,
    #[serde(deserialize_with = "de::opt_lenient_i64")]
    pub eta_time_stamps: Option<i64>,
    #[serde(rename = "detail_node_list", deserialize_with = "de::nested_list")]
    pub events: Vec<TrackingEvent>,
}

/// Result of `aliexpress.ds.order.tracking.get`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct DsOrderTracking {
    #[serde(deserialize_with = "de::lenient_bool")]
    pub ret: bool,
    #[serde(deserialize_with = "de::null_as_default")]
    pub data: DsOrderTrackingData,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct DsOrderTrackingData {
    #[serde(rename = "tracking_detail_line_list", deserialize_with = "de::nested_list")]
    pub packages: Vec<PackageTracking>,
}

// ============================================================================
// Search and feeds
// ============================================================================

/// A product hit from the dropshipping text or image search.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct DsSearchProduct {
    #[serde(deserialize_with = "de::string_or_number")]
    pub item_id: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub item_main_pic: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub item_url: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub sale_price: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub sale_price_currency: String,
    #[serde(deserialize_with = "de::opt_string_or_number")]
    pub original_price: Option<String>,
    pub original_price_currency: Option<String>,
    pub discount: Option<String>,
    #[serde(deserialize_with = "de::opt_string_or_number")]
    pub evaluate_rate: Option<String>,
    #[serde(deserialize_with = "de::opt_string_or_number")]
    pub orders: Option<String>,
    #[serde(deserialize_with = "de::opt_string_or_number")]
    pub score: Option<String>,
    pub video_url: Option<String>,
}

/// Result of `aliexpress.ds.text.search`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct DsTextSearchResult {
    #[serde(deserialize_with = "de::lenient_i64")]
    pub total_count: i64,
    #[serde(deserialize_with = "de::lenient_i64")]
    pub page_index: i64,
    #[serde(deserialize_with = "de::lenient_i64")]
    pub page_size: i64,
    #[serde(deserialize_with = "de::nested_list")]
    pub products: Vec<DsSearchProduct>,
}

impl DsTextSearchResult {
    pub fn is_empty(&self) -> bool {
        self.total_count <= 0 && self.products.is_empty()
    }
}

/// Result of `aliexpress.ds.image.searchV2`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct DsImageSearchResult {
    #[serde(deserialize_with = "de::lenient_i64")]
    pub total_record_count: i64,
    #[serde(deserialize_with = "de::nested_list")]
    pub products: Vec<Product>,
}

/// Result of `aliexpress.ds.feed.itemids.get`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct DsFeedItemIds {
    pub search_id: Option<String>,
    #[serde(deserialize_with = "de::lenient_i64")]
    pub total: i64,
    #[serde(rename = "products", deserialize_with = "de::nested_string_list")]
    pub product_ids: Vec<String>,
}
