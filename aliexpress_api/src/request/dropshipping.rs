//! Dropshipping endpoints (`aliexpress.ds.*` and the buyer-side trade lookup).
//!
//! Every entry here is called on behalf of a dropshipper account and needs
//! an access token at dispatch time.

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    params::{OneOrMany, Params},
    types::{
        AttributeBag, DsCategoryList, DsCommissionOrderPage, DsFeedItemIds, DsFreightResult,
        DsImageSearchResult, DsOrderCreateResult, DsOrderPage, DsOrderTracking, DsProduct,
        DsTextSearchResult, DsTradeOrder, ProductPage,
    },
    Error,
};

use super::common::{format_time, Currency, Endpoint, FileItem, HttpMethod, Language};

// ============================================================================
// Products
// ============================================================================

/// Full product detail as seen by a dropshipper shipping to one country.
#[derive(Clone, Debug, Default)]
pub struct DsProductGet {
    pub product_id: String,
    pub ship_to_country: String,
    pub target_currency: Option<Currency>,
    pub target_language: Option<Language>,
    pub remove_personal_benefit: Option<bool>,
    pub biz_model: Option<String>,
    pub province_code: Option<String>,
    pub city_code: Option<String>,
    pub locale: Option<String>,
}

impl DsProductGet {
    pub fn new(product_id: &str, ship_to_country: &str) -> Self {
        Self {
            product_id: product_id.to_string(),
            ship_to_country: ship_to_country.to_uppercase(),
            ..Self::default()
        }
    }

    pub fn with_target_currency(mut self, currency: Currency) -> Self {
        self.target_currency = Some(currency);
        self
    }

    pub fn with_target_language(mut self, language: Language) -> Self {
        self.target_language = Some(language);
        self
    }

    pub fn with_remove_personal_benefit(mut self, remove: bool) -> Self {
        self.remove_personal_benefit = Some(remove);
        self
    }

    pub fn with_biz_model(mut self, biz_model: &str) -> Self {
        self.biz_model = Some(biz_model.to_string());
        self
    }

    pub fn with_province_code(mut self, code: &str) -> Self {
        self.province_code = Some(code.to_string());
        self
    }

    pub fn with_city_code(mut self, code: &str) -> Self {
        self.city_code = Some(code.to_string());
        self
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = Some(locale.to_string());
        self
    }
}

impl Endpoint for DsProductGet {
    type Response = DsProduct;
    const METHOD: &'static str = "aliexpress.ds.product.get";

    fn params(&self) -> Result<Params, Error> {
        let mut params = Params::new();
        params
            .push("product_id", &self.product_id)
            .push("ship_to_country", &self.ship_to_country)
            .push_opt("target_currency", self.target_currency)
            .push_opt("target_language", self.target_language)
            .push_opt("remove_personal_benefit", self.remove_personal_benefit)
            .push_opt("biz_model", self.biz_model.as_deref())
            .push_opt("province_code", self.province_code.as_deref())
            .push_opt("city_code", self.city_code.as_deref())
            .push_opt("locale", self.locale.as_deref());
        Ok(params)
    }
}

/// Product lookups keyed by a single id: special info and wholesale detail.
#[derive(Clone, Debug, Default)]
struct ProductLookup {
    product_id: String,
    fields: Option<OneOrMany>,
    locale: Option<String>,
    web_site: Option<String>,
}

impl ProductLookup {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .push("product_id", &self.product_id)
            .push_list("fields", self.fields.as_ref())
            .push_opt("locale", self.locale.as_deref())
            .push_opt("web_site", self.web_site.as_deref());
        params
    }
}

/// Certifications and other compliance attributes of a product.
#[derive(Clone, Debug, Default)]
pub struct DsProductSpecialInfoGet(ProductLookup);

impl DsProductSpecialInfoGet {
    pub fn new(product_id: &str) -> Self {
        Self(ProductLookup {
            product_id: product_id.to_string(),
            ..ProductLookup::default()
        })
    }

    pub fn with_fields(mut self, fields: impl Into<OneOrMany>) -> Self {
        self.0.fields = Some(fields.into());
        self
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.0.locale = Some(locale.to_string());
        self
    }

    pub fn with_web_site(mut self, web_site: &str) -> Self {
        self.0.web_site = Some(web_site.to_string());
        self
    }

    pub fn locale(&self) -> Option<&str> {
        self.0.locale.as_deref()
    }
}

impl Endpoint for DsProductSpecialInfoGet {
    type Response = AttributeBag;
    const METHOD: &'static str = "aliexpress.ds.product.specialinfo.get";

    fn params(&self) -> Result<Params, Error> {
        Ok(self.0.to_params())
    }
}

/// Product detail for the wholesale business model.
#[derive(Clone, Debug, Default)]
pub struct DsWholesaleProductGet(ProductLookup);

impl DsWholesaleProductGet {
    pub fn new(product_id: &str) -> Self {
        Self(ProductLookup {
            product_id: product_id.to_string(),
            ..ProductLookup::default()
        })
    }

    pub fn with_fields(mut self, fields: impl Into<OneOrMany>) -> Self {
        self.0.fields = Some(fields.into());
        self
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.0.locale = Some(locale.to_string());
        self
    }

    pub fn with_web_site(mut self, web_site: &str) -> Self {
        self.0.web_site = Some(web_site.to_string());
        self
    }

    pub fn locale(&self) -> Option<&str> {
        self.0.locale.as_deref()
    }
}

impl Endpoint for DsWholesaleProductGet {
    type Response = DsProduct;
    const METHOD: &'static str = "aliexpress.ds.product.wholesale.get";

    fn params(&self) -> Result<Params, Error> {
        Ok(self.0.to_params())
    }
}

/// Dropshipping category tree, or the subtree under `category_id`.
#[derive(Clone, Debug, Default)]
pub struct DsCategoryGet {
    pub category_id: Option<String>,
    pub language: Option<Language>,
}

impl DsCategoryGet {
    pub fn with_category_id(mut self, category_id: &str) -> Self {
        self.category_id = Some(category_id.to_string());
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }
}

impl Endpoint for DsCategoryGet {
    type Response = DsCategoryList;
    const METHOD: &'static str = "aliexpress.ds.category.get";
    const HTTP_METHOD: HttpMethod = HttpMethod::Get;

    fn params(&self) -> Result<Params, Error> {
        let mut params = Params::new();
        params
            .push_opt("category_id", self.category_id.as_deref())
            .push_opt("language", self.language);
        Ok(params)
    }
}

// ============================================================================
// Search and feeds
// ============================================================================

/// Image search (V2). The picture travels as the multipart field
/// `image_file_bytes`.
#[derive(Clone, Debug)]
pub struct DsImageSearch {
    pub image: Vec<u8>,
    pub filename: String,
    /// `default`, `min_price`, `max_price`, `sales` or `last_volume`.
    pub sort: String,
    /// 0 for image search, 1 for similar products.
    pub search_type: u8,
    /// 1..=50.
    pub limit: u32,
    pub target_currency: Option<Currency>,
    pub target_language: Option<Language>,
    pub page_size: Option<i64>,
    pub page_index: Option<i64>,
}

impl DsImageSearch {
    pub fn new(image: Vec<u8>) -> Self {
        Self {
            image,
            filename: "image.jpg".to_string(),
            sort: "default".to_string(),
            search_type: 0,
            limit: 20,
            target_currency: None,
            target_language: None,
            page_size: None,
            page_index: None,
        }
    }

    pub fn with_filename(mut self, filename: &str) -> Self {
        self.filename = filename.to_string();
        self
    }

    pub fn with_sort(mut self, sort: &str) -> Self {
        self.sort = sort.to_string();
        self
    }

    pub fn with_search_type(mut self, search_type: u8) -> Self {
        self.search_type = search_type;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_target_currency(mut self, currency: Currency) -> Self {
        self.target_currency = Some(currency);
        self
    }

    pub fn with_target_language(mut self, language: Language) -> Self {
        self.target_language = Some(language);
        self
    }

    pub fn with_page(mut self, page_index: i64, page_size: i64) -> Self {
        self.page_index = Some(page_index);
        self.page_size = Some(page_size);
        self
    }
}

impl Endpoint for DsImageSearch {
    type Response = DsImageSearchResult;
    const METHOD: &'static str = "aliexpress.ds.image.searchV2";

    fn params(&self) -> Result<Params, Error> {
        if self.image.is_empty() {
            return Err(Error::InvalidParameter {
                name: "image_file_bytes".to_string(),
                reason: "image is empty".to_string(),
            });
        }
        let mut params = Params::new();
        params
            .push("sort", &self.sort)
            .push("search_type", self.search_type)
            .push("limit", self.limit)
            .push_opt("target_currency", self.target_currency)
            .push_opt("target_language", self.target_language)
            .push_opt("page_size", self.page_size)
            .push_opt("page_index", self.page_index);
        Ok(params)
    }

    fn response_key(&self) -> String {
        "aliexpress_ds_image_search_v2_response".to_string()
    }

    fn file(&self) -> Option<FileItem> {
        Some(FileItem {
            field: "image_file_bytes".to_string(),
            filename: self.filename.clone(),
            content: self.image.clone(),
        })
    }
}

/// Products of a recommendation feed.
#[derive(Clone, Debug, Default)]
pub struct DsRecommendFeedGet {
    pub feed_name: Option<String>,
    pub country: Option<String>,
    pub fields: Option<OneOrMany>,
    pub locale: Option<String>,
    pub page_no: Option<i64>,
    pub page_size: Option<i64>,
    pub target_currency: Option<Currency>,
    pub target_language: Option<Language>,
    pub web_site: Option<String>,
}

impl DsRecommendFeedGet {
    pub fn with_feed_name(mut self, feed_name: &str) -> Self {
        self.feed_name = Some(feed_name.to_string());
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_uppercase());
        self
    }

    pub fn with_fields(mut self, fields: impl Into<OneOrMany>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = Some(locale.to_string());
        self
    }

    pub fn with_page(mut self, page_no: i64) -> Self {
        self.page_no = Some(page_no);
        self
    }

    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_target_currency(mut self, currency: Currency) -> Self {
        self.target_currency = Some(currency);
        self
    }

    pub fn with_target_language(mut self, language: Language) -> Self {
        self.target_language = Some(language);
        self
    }

    pub fn with_web_site(mut self, web_site: &str) -> Self {
        self.web_site = Some(web_site.to_string());
        self
    }
}

impl Endpoint for DsRecommendFeedGet {
    type Response = ProductPage;
    const METHOD: &'static str = "aliexpress.ds.recommend.feed.get";

    fn params(&self) -> Result<Params, Error> {
        let mut params = Params::new();
        params
            .push_opt("feed_name", self.feed_name.as_deref())
            .push_opt("country", self.country.as_deref())
            .push_list("fields", self.fields.as_ref())
            .push_opt("locale", self.locale.as_deref())
            .push_opt("page_no", self.page_no)
            .push_opt("page_size", self.page_size)
            .push_opt("target_currency", self.target_currency)
            .push_opt("target_language", self.target_language)
            .push_opt("web_site", self.web_site.as_deref());
        Ok(params)
    }
}

/// Product ids belonging to a named feed.
#[derive(Clone, Debug, Default)]
pub struct DsFeedItemIdsGet {
    pub feed_name: String,
    pub locale: Option<String>,
    pub page_no: Option<i64>,
    pub page_size: Option<i64>,
    pub web_site: Option<String>,
}

impl DsFeedItemIdsGet {
    pub fn new(feed_name: &str) -> Self {
        Self {
            feed_name: feed_name.to_string(),
            ..Self::default()
        }
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = Some(locale.to_string());
        self
    }

    pub fn with_page(mut self, page_no: i64) -> Self {
        self.page_no = Some(page_no);
        self
    }

    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_web_site(mut self, web_site: &str) -> Self {
        self.web_site = Some(web_site.to_string());
        self
    }
}

impl Endpoint for DsFeedItemIdsGet {
    type Response = DsFeedItemIds;
    const METHOD: &'static str = "aliexpress.ds.feed.itemids.get";

    fn params(&self) -> Result<Params, Error> {
        let mut params = Params::new();
        params
            .push("feed_name", &self.feed_name)
            .push_opt("locale", self.locale.as_deref())
            .push_opt("page_no", self.page_no)
            .push_opt("page_size", self.page_size)
            .push_opt("web_site", self.web_site.as_deref());
        Ok(params)
    }
}

/// Keyword search over the dropshipping catalog. This endpoint takes
/// camelCase parameter names.
#[derive(Clone, Debug, Default)]
pub struct DsTextSearch {
    pub keywords: String,
    pub country_code: String,
    pub category_ids: Option<OneOrMany>,
    /// Sent as `local`.
    pub locale: Option<String>,
    /// e.g. `orders,desc`, `min_price,asc`.
    pub sort: Option<String>,
    pub page_index: Option<i64>,
    pub page_size: Option<i64>,
    pub currency: Option<Currency>,
    pub search_extend: Option<Value>,
}

impl DsTextSearch {
    pub fn new(keywords: &str, country_code: &str) -> Self {
        Self {
            keywords: keywords.to_string(),
            country_code: country_code.to_uppercase(),
            ..Self::default()
        }
    }

    pub fn with_category_ids(mut self, ids: impl Into<OneOrMany>) -> Self {
        self.category_ids = Some(ids.into());
        self
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = Some(locale.to_string());
        self
    }

    pub fn with_sort(mut self, sort: &str) -> Self {
        self.sort = Some(sort.to_string());
        self
    }

    pub fn with_page(mut self, page_index: i64) -> Self {
        self.page_index = Some(page_index);
        self
    }

    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Extra search options, e.g. price bounds, passed through as JSON.
    pub fn with_search_extend(mut self, extend: Value) -> Self {
        self.search_extend = Some(extend);
        self
    }
}

impl Endpoint for DsTextSearch {
    type Response = DsTextSearchResult;
    const METHOD: &'static str = "aliexpress.ds.text.search";

    fn params(&self) -> Result<Params, Error> {
        let mut params = Params::new();
        params
            .push("keyWord", &self.keywords)
            .push("countryCode", &self.country_code)
            .push_list("categoryId", self.category_ids.as_ref())
            .push_opt("local", self.locale.as_deref())
            .push_opt("sortBy", self.sort.as_deref())
            .push_opt("pageIndex", self.page_index)
            .push_opt("pageSize", self.page_size)
            .push_opt("currency", self.currency);
        if let Some(extend) = &self.search_extend {
            params.push_json("searchExtend", extend)?;
        }
        Ok(params)
    }
}

/// A search interaction reported back for ranking analytics.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct SearchEvent {
    pub event_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_time: Option<i64>,
    /// Event attributes without a dedicated field.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default)]
pub struct DsSearchEventReport {
    pub events: Vec<SearchEvent>,
    pub locale: Option<String>,
    pub web_site: Option<String>,
}

impl DsSearchEventReport {
    pub fn new(events: Vec<SearchEvent>) -> Self {
        Self {
            events,
            ..Self::default()
        }
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = Some(locale.to_string());
        self
    }

    pub fn with_web_site(mut self, web_site: &str) -> Self {
        self.web_site = Some(web_site.to_string());
        self
    }
}

impl Endpoint for DsSearchEventReport {
    type Response = AttributeBag;
    const METHOD: &'static str = "aliexpress.ds.search.event.report";

    fn params(&self) -> Result<Params, Error> {
        let mut params = Params::new();
        params
            .push_json("event_list", &self.events)?
            .push_opt("locale", self.locale.as_deref())
            .push_opt("web_site", self.web_site.as_deref());
        Ok(params)
    }
}

// ============================================================================
// Account
// ============================================================================

/// Registers a dropshipper account with the platform.
#[derive(Clone, Debug, Default)]
pub struct DropshipperAdd {
    pub email: String,
    pub mobile: Option<String>,
    pub app_name: Option<String>,
    pub country: Option<String>,
    pub locale: Option<String>,
    pub platform: Option<String>,
}

impl DropshipperAdd {
    pub fn new(email: &str) -> Self {
        Self {
            email: email.to_string(),
            ..Self::default()
        }
    }

    pub fn with_mobile(mut self, mobile: &str) -> Self {
        self.mobile = Some(mobile.to_string());
        self
    }

    pub fn with_app_name(mut self, app_name: &str) -> Self {
        self.app_name = Some(app_name.to_string());
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_uppercase());
        self
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = Some(locale.to_string());
        self
    }

    pub fn with_platform(mut self, platform: &str) -> Self {
        self.platform = Some(platform.to_string());
        self
    }
}

impl Endpoint for DropshipperAdd {
    type Response = AttributeBag;
    const METHOD: &'static str = "aliexpress.ds.dropshipper.add";

    fn params(&self) -> Result<Params, Error> {
        let mut params = Params::new();
        params
            .push("email", &self.email)
            .push_opt("mobile", self.mobile.as_deref())
            .push_opt("app_name", self.app_name.as_deref())
            .push_opt("country", self.country.as_deref())
            .push_opt("locale", self.locale.as_deref())
            .push_opt("platform", self.platform.as_deref());
        Ok(params)
    }
}

/// Membership level and benefits of the calling dropshipper.
#[derive(Clone, Debug, Default)]
pub struct DsMemberBenefitGet {
    pub locale: Option<String>,
    pub web_site: Option<String>,
}

impl DsMemberBenefitGet {
    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = Some(locale.to_string());
        self
    }

    pub fn with_web_site(mut self, web_site: &str) -> Self {
        self.web_site = Some(web_site.to_string());
        self
    }
}

impl Endpoint for DsMemberBenefitGet {
    type Response = AttributeBag;
    const METHOD: &'static str = "aliexpress.ds.member.benefit.get";
    const HTTP_METHOD: HttpMethod = HttpMethod::Get;

    fn params(&self) -> Result<Params, Error> {
        let mut params = Params::new();
        params
            .push_opt("locale", self.locale.as_deref())
            .push_opt("web_site", self.web_site.as_deref());
        Ok(params)
    }
}

// ============================================================================
// Orders
// ============================================================================

/// Orders placed by the dropshipper within a time window.
#[derive(Clone, Debug)]
pub struct DsOrderList {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub status: Option<String>,
    pub fields: Option<OneOrMany>,
    pub locale: Option<String>,
    pub page_no: Option<i64>,
    pub page_size: Option<i64>,
}

impl DsOrderList {
    pub fn new(start_time: NaiveDateTime, end_time: NaiveDateTime) -> Self {
        Self {
            start_time,
            end_time,
            status: None,
            fields: None,
            locale: None,
            page_no: None,
            page_size: None,
        }
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    pub fn with_fields(mut self, fields: impl Into<OneOrMany>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = Some(locale.to_string());
        self
    }

    pub fn with_page(mut self, page_no: i64) -> Self {
        self.page_no = Some(page_no);
        self
    }

    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

impl Endpoint for DsOrderList {
    type Response = DsOrderPage;
    const METHOD: &'static str = "aliexpress.ds.order.list";

    fn params(&self) -> Result<Params, Error> {
        let mut params = Params::new();
        params
            .push("start_time", format_time(&self.start_time))
            .push("end_time", format_time(&self.end_time))
            .push_opt("status", self.status.as_deref())
            .push_list("fields", self.fields.as_ref())
            .push_opt("locale", self.locale.as_deref())
            .push_opt("page_no", self.page_no)
            .push_opt("page_size", self.page_size);
        Ok(params)
    }
}

/// Commission orders, paged by index id.
#[derive(Clone, Debug)]
pub struct DsCommissionOrderList {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub fields: Option<OneOrMany>,
    pub locale: Option<String>,
    pub page_no: Option<i64>,
    pub page_size: Option<i64>,
    /// `max_query_index_id` of the previous page.
    pub start_query_index_id: Option<String>,
}

impl DsCommissionOrderList {
    pub fn new(start_time: NaiveDateTime, end_time: NaiveDateTime) -> Self {
        Self {
            start_time,
            end_time,
            fields: None,
            locale: None,
            page_no: None,
            page_size: None,
            start_query_index_id: None,
        }
    }

    pub fn with_fields(mut self, fields: impl Into<OneOrMany>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = Some(locale.to_string());
        self
    }

    pub fn with_page(mut self, page_no: i64) -> Self {
        self.page_no = Some(page_no);
        self
    }

    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_start_query_index_id(mut self, index_id: &str) -> Self {
        self.start_query_index_id = Some(index_id.to_string());
        self
    }
}

impl Endpoint for DsCommissionOrderList {
    type Response = DsCommissionOrderPage;
    const METHOD: &'static str = "aliexpress.ds.commissionorder.listbyindex";

    fn params(&self) -> Result<Params, Error> {
        let mut params = Params::new();
        params
            .push("start_time", format_time(&self.start_time))
            .push("end_time", format_time(&self.end_time))
            .push_list("fields", self.fields.as_ref())
            .push_opt("locale", self.locale.as_deref())
            .push_opt("page_no", self.page_no)
            .push_opt("page_size", self.page_size)
            .push_opt("start_query_index_id", self.start_query_index_id.as_deref());
        Ok(params)
    }
}

/// Order lookups keyed by a single order id.
#[derive(Clone, Debug, Default)]
struct OrderLookup {
    order_id: String,
    fields: Option<OneOrMany>,
    locale: Option<String>,
    web_site: Option<String>,
}

impl OrderLookup {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .push("order_id", &self.order_id)
            .push_list("fields", self.fields.as_ref())
            .push_opt("locale", self.locale.as_deref())
            .push_opt("web_site", self.web_site.as_deref());
        params
    }
}

/// Seller-side view of one dropshipping order.
#[derive(Clone, Debug, Default)]
pub struct DsTradeOrderGet(OrderLookup);

impl DsTradeOrderGet {
    pub fn new(order_id: &str) -> Self {
        Self(OrderLookup {
            order_id: order_id.to_string(),
            ..OrderLookup::default()
        })
    }

    pub fn with_fields(mut self, fields: impl Into<OneOrMany>) -> Self {
        self.0.fields = Some(fields.into());
        self
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.0.locale = Some(locale.to_string());
        self
    }

    pub fn locale(&self) -> Option<&str> {
        self.0.locale.as_deref()
    }
}

impl Endpoint for DsTradeOrderGet {
    type Response = DsTradeOrder;
    const METHOD: &'static str = "aliexpress.ds.trade.order.get";

    fn params(&self) -> Result<Params, Error> {
        Ok(self.0.to_params())
    }
}

/// Buyer-side view of one order.
#[derive(Clone, Debug, Default)]
pub struct TradeDsOrderGet(OrderLookup);

impl TradeDsOrderGet {
    pub fn new(order_id: &str) -> Self {
        Self(OrderLookup {
            order_id: order_id.to_string(),
            ..OrderLookup::default()
        })
    }

    pub fn with_fields(mut self, fields: impl Into<OneOrMany>) -> Self {
        self.0.fields = Some(fields.into());
        self
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.0.locale = Some(locale.to_string());
        self
    }

    pub fn with_web_site(mut self, web_site: &str) -> Self {
        self.0.web_site = Some(web_site.to_string());
        self
    }

    pub fn locale(&self) -> Option<&str> {
        self.0.locale.as_deref()
    }
}

impl Endpoint for TradeDsOrderGet {
    type Response = DsTradeOrder;
    const METHOD: &'static str = "aliexpress.trade.ds.order.get";

    fn params(&self) -> Result<Params, Error> {
        Ok(self.0.to_params())
    }
}

/// Shipping address for an order.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct LogisticsAddress {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    pub city: String,
    pub contact_person: String,
    /// ISO country code, e.g. `US`.
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    pub mobile_no: String,
    pub phone_country: String,
    pub province: String,
    pub zip: String,
    /// Brazilian taxpayer id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passport_no: Option<String>,
}

/// One purchased SKU.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ProductItem {
    pub product_id: String,
    pub product_count: u32,
    /// SKU attribute string, e.g. `14:193#Black;5:100014064`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku_attr: Option<String>,
    /// Delivery option `code` from the freight query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logistics_service_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_memo: Option<String>,
}

impl ProductItem {
    pub fn new(product_id: &str, product_count: u32) -> Self {
        Self {
            product_id: product_id.to_string(),
            product_count,
            ..Self::default()
        }
    }

    pub fn with_sku_attr(mut self, sku_attr: &str) -> Self {
        self.sku_attr = Some(sku_attr.to_string());
        self
    }

    pub fn with_logistics_service(mut self, service: &str) -> Self {
        self.logistics_service_name = Some(service.to_string());
        self
    }

    pub fn with_memo(mut self, memo: &str) -> Self {
        self.order_memo = Some(memo.to_string());
        self
    }
}

#[derive(Serialize)]
struct PlaceOrderRequest<'a> {
    logistics_address: &'a LogisticsAddress,
    product_items: &'a [ProductItem],
    #[serde(skip_serializing_if = "Option::is_none")]
    out_order_id: Option<&'a str>,
}

/// Places and pays for an order.
#[derive(Clone, Debug)]
pub struct DsOrderCreate {
    pub address: LogisticsAddress,
    pub items: Vec<ProductItem>,
    /// Caller-side id; repeated submissions with the same id are deduplicated.
    pub out_order_id: Option<String>,
    pub ds_extend: Option<Value>,
}

impl DsOrderCreate {
    pub fn new(address: LogisticsAddress, items: Vec<ProductItem>) -> Self {
        Self {
            address,
            items,
            out_order_id: None,
            ds_extend: None,
        }
    }

    pub fn with_out_order_id(mut self, out_order_id: &str) -> Self {
        self.out_order_id = Some(out_order_id.to_string());
        self
    }

    pub fn with_ds_extend(mut self, extend: Value) -> Self {
        self.ds_extend = Some(extend);
        self
    }
}

impl Endpoint for DsOrderCreate {
    type Response = DsOrderCreateResult;
    const METHOD: &'static str = "aliexpress.ds.order.create";

    fn params(&self) -> Result<Params, Error> {
        if self.items.is_empty() {
            return Err(Error::InvalidParameter {
                name: "product_items".to_string(),
                reason: "at least one item is required".to_string(),
            });
        }
        let order = PlaceOrderRequest {
            logistics_address: &self.address,
            product_items: &self.items,
            out_order_id: self.out_order_id.as_deref(),
        };
        let mut params = Params::new();
        params.push_json("param_place_order_request4_open_api_d_t_o", &order)?;
        if let Some(extend) = &self.ds_extend {
            params.push_json("ds_extend_request", extend)?;
        }
        Ok(params)
    }
}

// ============================================================================
// Logistics
// ============================================================================

/// Body of the freight query, sent JSON-encoded as `queryDeliveryReq`.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FreightQuery {
    pub product_id: String,
    pub selected_sku_id: String,
    pub ship_to_country: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_code: Option<String>,
}

/// Delivery options and fees for one SKU.
#[derive(Clone, Debug)]
pub struct DsFreightQuery {
    pub query: FreightQuery,
    pub locale: Option<String>,
}

impl DsFreightQuery {
    pub fn new(product_id: &str, sku_id: &str, ship_to_country: &str, quantity: u32) -> Self {
        Self {
            query: FreightQuery {
                product_id: product_id.to_string(),
                selected_sku_id: sku_id.to_string(),
                ship_to_country: ship_to_country.to_uppercase(),
                quantity,
                ..FreightQuery::default()
            },
            locale: None,
        }
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.query.locale = Some(locale.to_string());
        self.locale = Some(locale.to_string());
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.query.currency = Some(currency.to_string());
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.query.language = Some(language.to_string());
        self
    }

    pub fn with_province_code(mut self, code: &str) -> Self {
        self.query.province_code = Some(code.to_string());
        self
    }

    pub fn with_city_code(mut self, code: &str) -> Self {
        self.query.city_code = Some(code.to_string());
        self
    }
}

impl Endpoint for DsFreightQuery {
    type Response = DsFreightResult;
    const METHOD: &'static str = "aliexpress.ds.freight.query";

    fn params(&self) -> Result<Params, Error> {
        let mut params = Params::new();
        params
            .push_json("queryDeliveryReq", &self.query)?
            .push_opt("locale", self.locale.as_deref());
        Ok(params)
    }
}

/// Tracking events for every package of an order.
#[derive(Clone, Debug, Default)]
pub struct DsOrderTrackingGet {
    pub ae_order_id: String,
    pub language: Option<Language>,
}

impl DsOrderTrackingGet {
    pub fn new(ae_order_id: &str) -> Self {
        Self {
            ae_order_id: ae_order_id.to_string(),
            language: None,
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }
}

impl Endpoint for DsOrderTrackingGet {
    type Response = DsOrderTracking;
    const METHOD: &'static str = "aliexpress.ds.order.tracking.get";

    fn params(&self) -> Result<Params, Error> {
        let mut params = Params::new();
        params
            .push("ae_order_id", &self.ae_order_id)
            .push_opt("language", self.language);
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> LogisticsAddress {
        LogisticsAddress {
            address: "1 Main St".into(),
            city: "Springfield".into(),
            contact_person: "Sam Doe".into(),
            country: "US".into(),
            mobile_no: "5550100".into(),
            phone_country: "+1".into(),
            province: "IL".into(),
            zip: "62701".into(),
            ..LogisticsAddress::default()
        }
    }

    #[test]
    fn freight_query_uses_camel_case_wire_names() {
        let params = DsFreightQuery::new("1005001", "12000", "de", 2)
            .with_currency(Currency::Eur)
            .with_locale("de_DE")
            .params()
            .unwrap();
        insta::assert_snapshot!(
            params.get("queryDeliveryReq").unwrap(),
            @r#"{"productId":"1005001","selectedSkuId":"12000","shipToCountry":"DE","quantity":2,"locale":"de_DE","currency":"EUR"}"#
        );
        assert_eq!(params.get("locale"), Some("de_DE"));
    }

    #[test]
    fn order_create_packs_a_single_parameter() {
        let params = DsOrderCreate::new(
            address(),
            vec![ProductItem::new("1005001", 1).with_logistics_service("CAINIAO_STANDARD")],
        )
        .with_out_order_id("shop-42")
        .params()
        .unwrap();
        assert_eq!(params.keys(), vec!["param_place_order_request4_open_api_d_t_o"]);
        let body: Value =
            serde_json::from_str(params.get("param_place_order_request4_open_api_d_t_o").unwrap())
                .unwrap();
        assert_eq!(body["out_order_id"], "shop-42");
        assert_eq!(body["logistics_address"]["zip"], "62701");
        assert!(body["logistics_address"].get("cpf").is_none());
        assert_eq!(body["product_items"][0]["logistics_service_name"], "CAINIAO_STANDARD");
    }

    #[test]
    fn order_create_rejects_empty_basket() {
        let err = DsOrderCreate::new(address(), vec![]).params().unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { ref name, .. } if name == "product_items"));
    }

    #[test]
    fn image_search_sends_file_and_overrides_key() {
        let search = DsImageSearch::new(vec![0xFF, 0xD8, 0xFF]).with_limit(10);
        let params = search.params().unwrap();
        assert!(!params.contains("image_file_bytes"));
        assert_eq!(params.get("limit"), Some("10"));
        assert_eq!(params.get("sort"), Some("default"));
        let file = search.file().unwrap();
        assert_eq!(file.field, "image_file_bytes");
        assert_eq!(file.content.len(), 3);
        assert_eq!(search.response_key(), "aliexpress_ds_image_search_v2_response");
    }

    #[test]
    fn image_search_rejects_empty_image() {
        assert!(DsImageSearch::new(vec![]).params().is_err());
    }

    #[test]
    fn text_search_uses_camel_case_names() {
        let params = DsTextSearch::new("usb cable", "us")
            .with_category_ids(vec!["44", "7"])
            .with_locale("en_US")
            .with_page(2)
            .params()
            .unwrap();
        assert_eq!(
            params.keys(),
            vec!["categoryId", "countryCode", "keyWord", "local", "pageIndex"]
        );
        assert_eq!(params.get("categoryId"), Some("44,7"));
        assert_eq!(params.get("countryCode"), Some("US"));
    }

    #[test]
    fn search_events_flatten_extra_attributes() {
        let mut extra = Map::new();
        extra.insert("position".into(), Value::from(3));
        let params = DsSearchEventReport::new(vec![SearchEvent {
            event_type: "click".into(),
            item_id: Some("1005001".into()),
            extra,
            ..SearchEvent::default()
        }])
        .params()
        .unwrap();
        insta::assert_snapshot!(
            params.get("event_list").unwrap(),
            @r#"[{"event_type":"click","item_id":"1005001","position":3}]"#
        );
    }

    #[test]
    fn lookups_share_parameter_shape() {
        let special = DsProductSpecialInfoGet::new("1005001").with_fields("certs").params().unwrap();
        let wholesale = DsWholesaleProductGet::new("1005001").with_fields("certs").params().unwrap();
        assert_eq!(special, wholesale);
        let trade = TradeDsOrderGet::new("8001").with_web_site("global").params().unwrap();
        assert_eq!(trade.get("order_id"), Some("8001"));
        assert_eq!(trade.get("web_site"), Some("global"));
    }

    #[test]
    fn metadata_reads_use_get() {
        assert_eq!(DsCategoryGet::HTTP_METHOD, HttpMethod::Get);
        assert_eq!(DsMemberBenefitGet::HTTP_METHOD, HttpMethod::Get);
        assert_eq!(DsProductGet::HTTP_METHOD, HttpMethod::Post);
    }
}
