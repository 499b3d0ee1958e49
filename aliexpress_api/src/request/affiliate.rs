//! `aliexpress.affiliate.*` endpoints.

use chrono::NaiveDateTime;

use crate::{
    params::{OneOrMany, Params},
    types::{CategoryList, LinkGenerateResult, OrderPage, ProductPage},
    Error,
};

use super::common::{
    format_time, Currency, Endpoint, HttpMethod, Language, LinkType, OrderStatus, ProductType,
    SortBy,
};

/// Converts source URLs into tracked promotion links.
#[derive(Clone, Debug)]
pub struct LinkGenerate {
    pub source_values: OneOrMany,
    pub link_type: LinkType,
    pub tracking_id: String,
}

impl LinkGenerate {
    pub fn new(source_values: impl Into<OneOrMany>, tracking_id: &str) -> Self {
        Self {
            source_values: source_values.into(),
            link_type: LinkType::default(),
            tracking_id: tracking_id.to_string(),
        }
    }

    pub fn with_link_type(mut self, link_type: LinkType) -> Self {
        self.link_type = link_type;
        self
    }
}

impl Endpoint for LinkGenerate {
    type Response = LinkGenerateResult;
    const METHOD: &'static str = "aliexpress.affiliate.link.generate";

    fn params(&self) -> Result<Params, Error> {
        let mut params = Params::new();
        params
            .push_list("source_values", Some(&self.source_values))
            .push("promotion_link_type", self.link_type)
            .push("tracking_id", &self.tracking_id);
        Ok(params)
    }
}

/// Search filters shared by the product and hot-product queries.
#[derive(Clone, Debug, Default)]
pub struct ProductFilter {
    pub category_ids: Option<OneOrMany>,
    pub delivery_days: Option<u32>,
    pub fields: Option<OneOrMany>,
    pub keywords: Option<String>,
    /// Cents.
    pub max_sale_price: Option<i64>,
    /// Cents.
    pub min_sale_price: Option<i64>,
    pub page_no: Option<i64>,
    pub page_size: Option<i64>,
    pub platform_product_type: Option<ProductType>,
    pub ship_to_country: Option<String>,
    pub sort: Option<SortBy>,
    pub target_currency: Option<Currency>,
    pub target_language: Option<Language>,
    pub tracking_id: Option<String>,
}

impl ProductFilter {
    pub fn with_category_ids(mut self, ids: impl Into<OneOrMany>) -> Self {
        self.category_ids = Some(ids.into());
        self
    }

    pub fn with_delivery_days(mut self, days: u32) -> Self {
        self.delivery_days = Some(days);
        self
    }

    pub fn with_fields(mut self, fields: impl Into<OneOrMany>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    pub fn with_keywords(mut self, keywords: &str) -> Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    pub fn with_price_range(mut self, min_cents: Option<i64>, max_cents: Option<i64>) -> Self {
        self.min_sale_price = min_cents;
        self.max_sale_price = max_cents;
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

    pub fn with_product_type(mut self, product_type: ProductType) -> Self {
        self.platform_product_type = Some(product_type);
        self
    }

    pub fn with_ship_to_country(mut self, country: &str) -> Self {
        self.ship_to_country = Some(country.to_string());
        self
    }

    pub fn with_sort(mut self, sort: SortBy) -> Self {
        self.sort = Some(sort);
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

    pub fn with_tracking_id(mut self, tracking_id: &str) -> Self {
        self.tracking_id = Some(tracking_id.to_string());
        self
    }

    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .push_list("category_ids", self.category_ids.as_ref())
            // zero days means "no filter"
            .push_opt("delivery_days", self.delivery_days.filter(|d| *d > 0))
            .push_list("fields", self.fields.as_ref())
            .push_opt("keywords", self.keywords.as_deref())
            .push_opt("max_sale_price", self.max_sale_price)
            .push_opt("min_sale_price", self.min_sale_price)
            .push_opt("page_no", self.page_no)
            .push_opt("page_size", self.page_size)
            .push_opt("platform_product_type", self.platform_product_type)
            .push_opt("ship_to_country", self.ship_to_country.as_deref())
            .push_opt("sort", self.sort)
            .push_opt("target_currency", self.target_currency)
            .push_opt("target_language", self.target_language)
            .push_opt("tracking_id", self.tracking_id.as_deref());
        params
    }
}

/// Hot products: high-commission items for the affiliate program.
#[derive(Clone, Debug, Default)]
pub struct HotProductQuery {
    pub filter: ProductFilter,
}

impl From<ProductFilter> for HotProductQuery {
    fn from(filter: ProductFilter) -> Self {
        Self { filter }
    }
}

impl Endpoint for HotProductQuery {
    type Response = ProductPage;
    const METHOD: &'static str = "aliexpress.affiliate.hotproduct.query";

    fn params(&self) -> Result<Params, Error> {
        Ok(self.filter.to_params())
    }
}

/// General affiliate product search.
#[derive(Clone, Debug, Default)]
pub struct ProductQuery {
    pub filter: ProductFilter,
}

impl From<ProductFilter> for ProductQuery {
    fn from(filter: ProductFilter) -> Self {
        Self { filter }
    }
}

impl Endpoint for ProductQuery {
    type Response = ProductPage;
    const METHOD: &'static str = "aliexpress.affiliate.product.query";

    fn params(&self) -> Result<Params, Error> {
        Ok(self.filter.to_params())
    }
}

/// Products matched to a device, keyword or reference product.
#[derive(Clone, Debug, Default)]
pub struct SmartMatch {
    pub device_id: String,
    pub app: Option<String>,
    pub country: Option<String>,
    pub device: Option<String>,
    pub fields: Option<OneOrMany>,
    pub keywords: Option<String>,
    pub page_no: Option<i64>,
    pub product_id: Option<String>,
    pub site: Option<String>,
    pub target_currency: Option<Currency>,
    pub target_language: Option<Language>,
    pub tracking_id: Option<String>,
    pub user: Option<String>,
}

impl SmartMatch {
    pub fn new(device_id: &str) -> Self {
        Self {
            device_id: device_id.to_string(),
            ..Self::default()
        }
    }

    pub fn with_app(mut self, app: &str) -> Self {
        self.app = Some(app.to_string());
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }

    pub fn with_device(mut self, device: &str) -> Self {
        self.device = Some(device.to_string());
        self
    }

    pub fn with_fields(mut self, fields: impl Into<OneOrMany>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    pub fn with_keywords(mut self, keywords: &str) -> Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    pub fn with_page(mut self, page_no: i64) -> Self {
        self.page_no = Some(page_no);
        self
    }

    pub fn with_product_id(mut self, product_id: &str) -> Self {
        self.product_id = Some(product_id.to_string());
        self
    }

    pub fn with_site(mut self, site: &str) -> Self {
        self.site = Some(site.to_string());
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

    pub fn with_tracking_id(mut self, tracking_id: &str) -> Self {
        self.tracking_id = Some(tracking_id.to_string());
        self
    }

    pub fn with_user(mut self, user: &str) -> Self {
        self.user = Some(user.to_string());
        self
    }
}

impl Endpoint for SmartMatch {
    type Response = ProductPage;
    const METHOD: &'static str = "aliexpress.affiliate.product.smartmatch";

    fn params(&self) -> Result<Params, Error> {
        let mut params = Params::new();
        params
            .push("device_id", &self.device_id)
            .push_opt("app", self.app.as_deref())
            .push_opt("country", self.country.as_deref())
            .push_opt("device", self.device.as_deref())
            .push_list("fields", self.fields.as_ref())
            .push_opt("keywords", self.keywords.as_deref())
            .push_opt("page_no", self.page_no)
            .push_opt("product_id", self.product_id.as_deref())
            .push_opt("site", self.site.as_deref())
            .push_opt("target_currency", self.target_currency)
            .push_opt("target_language", self.target_language)
            .push_opt("tracking_id", self.tracking_id.as_deref())
            .push_opt("user", self.user.as_deref());
        Ok(params)
    }
}

/// Affiliate orders within a time window.
#[derive(Clone, Debug)]
pub struct OrderList {
    pub status: OrderStatus,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub fields: Option<OneOrMany>,
    /// e.g. `ru_site`, `es_site`.
    pub locale_site: Option<String>,
    pub page_no: Option<i64>,
    pub page_size: Option<i64>,
}

impl OrderList {
    pub fn new(status: OrderStatus, start_time: NaiveDateTime, end_time: NaiveDateTime) -> Self {
        Self {
            status,
            start_time,
            end_time,
            fields: None,
            locale_site: None,
            page_no: None,
            page_size: None,
        }
    }

    pub fn with_fields(mut self, fields: impl Into<OneOrMany>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    pub fn with_locale_site(mut self, locale_site: &str) -> Self {
        self.locale_site = Some(locale_site.to_string());
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

impl Endpoint for OrderList {
    type Response = OrderPage;
    const METHOD: &'static str = "aliexpress.affiliate.order.list";

    fn params(&self) -> Result<Params, Error> {
        let mut params = Params::new();
        params
            .push("status", self.status)
            .push("start_time", format_time(&self.start_time))
            .push("end_time", format_time(&self.end_time))
            .push_list("fields", self.fields.as_ref())
            .push_opt("locale_site", self.locale_site.as_deref())
            .push_opt("page_no", self.page_no)
            .push_opt("page_size", self.page_size);
        Ok(params)
    }
}

/// Full details for up to 50 products.
#[derive(Clone, Debug)]
pub struct ProductDetailGet {
    pub product_ids: OneOrMany,
    pub fields: Option<OneOrMany>,
    pub country: Option<String>,
    pub target_currency: Option<Currency>,
    pub target_language: Option<Language>,
    pub tracking_id: Option<String>,
}

impl ProductDetailGet {
    pub fn new(product_ids: impl Into<OneOrMany>) -> Self {
        Self {
            product_ids: product_ids.into(),
            fields: None,
            country: None,
            target_currency: None,
            target_language: None,
            tracking_id: None,
        }
    }

    pub fn with_fields(mut self, fields: impl Into<OneOrMany>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
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

    pub fn with_tracking_id(mut self, tracking_id: &str) -> Self {
        self.tracking_id = Some(tracking_id.to_string());
        self
    }
}

impl Endpoint for ProductDetailGet {
    type Response = ProductPage;
    const METHOD: &'static str = "aliexpress.affiliate.productdetail.get";

    fn params(&self) -> Result<Params, Error> {
        let mut params = Params::new();
        params
            .push_list("product_ids", Some(&self.product_ids))
            .push_list("fields", self.fields.as_ref())
            .push_opt("country", self.country.as_deref())
            .push_opt("target_currency", self.target_currency)
            .push_opt("target_language", self.target_language)
            .push_opt("tracking_id", self.tracking_id.as_deref());
        Ok(params)
    }
}

/// The full affiliate category tree, flattened.
#[derive(Clone, Copy, Debug, Default)]
pub struct CategoryGet;

impl Endpoint for CategoryGet {
    type Response = CategoryList;
    const METHOD: &'static str = "aliexpress.affiliate.category.get";
    const HTTP_METHOD: HttpMethod = HttpMethod::Get;

    fn params(&self) -> Result<Params, Error> {
        Ok(Params::new())
    }
}
