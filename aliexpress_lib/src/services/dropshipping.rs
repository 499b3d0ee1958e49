use aliexpress_api::request::{
    DropshipperAdd, DsCategoryGet, DsCommissionOrderList, DsFeedItemIdsGet, DsFreightQuery,
    DsImageSearch, DsMemberBenefitGet, DsOrderCreate, DsOrderList, DsOrderTrackingGet,
    DsProductGet, DsProductSpecialInfoGet, DsRecommendFeedGet, DsSearchEventReport, DsTextSearch,
    DsTradeOrderGet, DsWholesaleProductGet, TradeDsOrderGet,
};
use aliexpress_api::types::{
    AttributeBag, DsCategoryList, DsCommissionOrderPage, DsFeedItemIds, DsFreightResult,
    DsImageSearchResult, DsOrderCreateResult, DsOrderPage, DsOrderTracking, DsProduct,
    DsTextSearchResult, DsTradeOrder, ProductPage,
};

use crate::api::AliexpressApi;
use crate::error::AliexpressError;
use crate::validation::{
    validate_country, validate_keywords, validate_limit, validate_page, validate_page_size,
    validate_time_window,
};

const MAX_IMAGE_SEARCH_LIMIT: u32 = 50;

/// Dropshipping endpoints. Every call carries the facade's access token.
pub struct DropshippingService<'a> {
    api: &'a AliexpressApi,
}

impl<'a> DropshippingService<'a> {
    pub(crate) fn new(api: &'a AliexpressApi) -> Self {
        Self { api }
    }

    pub async fn get_ds_product(
        &self,
        mut request: DsProductGet,
    ) -> Result<DsProduct, AliexpressError> {
        request.ship_to_country = validate_country(&request.ship_to_country)?;
        request.target_currency.get_or_insert(self.api.currency());
        request.target_language.get_or_insert(self.api.language());
        if request.locale.is_none() {
            request.locale = Some(self.api.locale(Some(&request.ship_to_country)));
        }
        self.api.call_with_session(&request).await
    }

    pub async fn get_ds_categories(
        &self,
        mut request: DsCategoryGet,
    ) -> Result<DsCategoryList, AliexpressError> {
        request.language.get_or_insert(self.api.language());
        self.api.call_with_session(&request).await
    }

    pub async fn add_dropshipper(
        &self,
        mut request: DropshipperAdd,
    ) -> Result<AttributeBag, AliexpressError> {
        if !request.email.contains('@') {
            return Err(AliexpressError::InvalidArgument(format!(
                "invalid email '{}'",
                request.email
            )));
        }
        if request.locale.is_none() {
            request.locale = Some(self.api.locale(request.country.as_deref()));
        }
        self.api.call_with_session(&request).await
    }

    pub async fn get_ds_orders(
        &self,
        mut request: DsOrderList,
    ) -> Result<DsOrderPage, AliexpressError> {
        validate_time_window(&request.start_time, &request.end_time)?;
        validate_paging(request.page_no, request.page_size)?;
        if request.locale.is_none() {
            request.locale = Some(self.api.locale(None));
        }
        let page = self
            .api
            .call_with_session(&request)
            .await
            .map_err(|e| e.empty_result_as(AliexpressError::OrdersNotFound))?;
        if page.is_empty() {
            return Err(AliexpressError::OrdersNotFound(
                "No dropshipping orders found with current parameters".to_string(),
            ));
        }
        Ok(page)
    }

    pub async fn get_ds_trade_order(
        &self,
        mut request: DsTradeOrderGet,
    ) -> Result<DsTradeOrder, AliexpressError> {
        if request.locale().is_none() {
            request = request.with_locale(&self.api.locale(None));
        }
        self.api.call_with_session(&request).await
    }

    pub async fn get_ds_commission_orders(
        &self,
        mut request: DsCommissionOrderList,
    ) -> Result<DsCommissionOrderPage, AliexpressError> {
        validate_time_window(&request.start_time, &request.end_time)?;
        validate_paging(request.page_no, request.page_size)?;
        if request.locale.is_none() {
            request.locale = Some(self.api.locale(None));
        }
        let page = self
            .api
            .call_with_session(&request)
            .await
            .map_err(|e| e.empty_result_as(AliexpressError::OrdersNotFound))?;
        if page.is_empty() {
            return Err(AliexpressError::OrdersNotFound(
                "No commission orders found with current parameters".to_string(),
            ));
        }
        Ok(page)
    }

    pub async fn ds_image_search(
        &self,
        mut request: DsImageSearch,
    ) -> Result<DsImageSearchResult, AliexpressError> {
        if request.image.is_empty() {
            return Err(AliexpressError::InvalidArgument(
                "image data is empty".to_string(),
            ));
        }
        validate_limit(request.limit, MAX_IMAGE_SEARCH_LIMIT)?;
        request.target_currency.get_or_insert(self.api.currency());
        request.target_language.get_or_insert(self.api.language());
        self.api.call_with_session(&request).await
    }

    pub async fn get_ds_recommend_feed(
        &self,
        mut request: DsRecommendFeedGet,
    ) -> Result<ProductPage, AliexpressError> {
        validate_paging(request.page_no, request.page_size)?;
        if let Some(country) = request.country.take() {
            request.country = Some(validate_country(&country)?);
        }
        if request.locale.is_none() {
            request.locale = Some(self.api.locale(request.country.as_deref()));
        }
        request.target_currency.get_or_insert(self.api.currency());
        request.target_language.get_or_insert(self.api.language());
        self.api.call_with_session(&request).await
    }

    /// Places an order. A response with `is_success: false` is reported as an
    /// API error carrying the platform's error code.
    pub async fn create_ds_order(
        &self,
        mut request: DsOrderCreate,
    ) -> Result<DsOrderCreateResult, AliexpressError> {
        if request.items.is_empty() {
            return Err(AliexpressError::InvalidArgument(
                "at least one product item is required".to_string(),
            ));
        }
        if request.address.locale.is_none() {
            request.address.locale = Some(self.api.locale(Some(&request.address.country)));
        }
        let result = self.api.call_with_session(&request).await?;
        if !result.is_success {
            let code = result
                .error_code
                .clone()
                .unwrap_or_else(|| "ORDER_CREATE_FAILED".to_string());
            let message = result
                .error_msg
                .clone()
                .unwrap_or_else(|| "order was not created".to_string());
            tracing::error!("Order creation failed: {} {}", code, message);
            return Err(AliexpressError::Api(aliexpress_api::Error::ApiResponse {
                code,
                message,
                sub_code: None,
                sub_msg: None,
            }));
        }
        Ok(result)
    }

    pub async fn query_ds_freight(
        &self,
        mut request: DsFreightQuery,
    ) -> Result<DsFreightResult, AliexpressError> {
        if request.query.quantity == 0 {
            return Err(AliexpressError::InvalidArgument(
                "quantity must be at least 1".to_string(),
            ));
        }
        request.query.ship_to_country = validate_country(&request.query.ship_to_country)?;
        let locale = self.api.locale(Some(&request.query.ship_to_country));
        request.query.locale.get_or_insert_with(|| locale.clone());
        request.locale.get_or_insert(locale);
        request
            .query
            .currency
            .get_or_insert_with(|| self.api.currency().to_string());
        request
            .query
            .language
            .get_or_insert_with(|| self.api.language().to_string());
        self.api.call_with_session(&request).await
    }

    pub async fn get_ds_order_tracking(
        &self,
        mut request: DsOrderTrackingGet,
    ) -> Result<DsOrderTracking, AliexpressError> {
        request.language.get_or_insert(self.api.language());
        self.api.call_with_session(&request).await
    }

    pub async fn get_ds_feed_items(
        &self,
        mut request: DsFeedItemIdsGet,
    ) -> Result<DsFeedItemIds, AliexpressError> {
        validate_paging(request.page_no, request.page_size)?;
        if request.locale.is_none() {
            request.locale = Some(self.api.locale(None));
        }
        self.api.call_with_session(&request).await
    }

    pub async fn get_ds_product_special_info(
        &self,
        mut request: DsProductSpecialInfoGet,
    ) -> Result<AttributeBag, AliexpressError> {
        if request.locale().is_none() {
            request = request.with_locale(&self.api.locale(None));
        }
        self.api.call_with_session(&request).await
    }

    pub async fn get_ds_wholesale_product(
        &self,
        mut request: DsWholesaleProductGet,
    ) -> Result<DsProduct, AliexpressError> {
        if request.locale().is_none() {
            request = request.with_locale(&self.api.locale(None));
        }
        self.api.call_with_session(&request).await
    }

    /// Keyword search over the dropshipping catalog.
    pub async fn text_search_ds(
        &self,
        mut request: DsTextSearch,
    ) -> Result<DsTextSearchResult, AliexpressError> {
        request.keywords = validate_keywords(&request.keywords)?;
        request.country_code = validate_country(&request.country_code)?;
        validate_paging(request.page_index, request.page_size)?;
        if request.locale.is_none() {
            request.locale = Some(self.api.locale(Some(&request.country_code)));
        }
        request.currency.get_or_insert(self.api.currency());
        let result = self
            .api
            .call_with_session(&request)
            .await
            .map_err(|e| e.empty_result_as(AliexpressError::ProductsNotFound))?;
        if result.is_empty() {
            return Err(AliexpressError::ProductsNotFound(
                "No products found with current parameters".to_string(),
            ));
        }
        Ok(result)
    }

    pub async fn report_ds_search_event(
        &self,
        mut request: DsSearchEventReport,
    ) -> Result<AttributeBag, AliexpressError> {
        if request.events.is_empty() {
            return Err(AliexpressError::InvalidArgument(
                "at least one event is required".to_string(),
            ));
        }
        if request.locale.is_none() {
            request.locale = Some(self.api.locale(None));
        }
        self.api.call_with_session(&request).await
    }

    pub async fn get_ds_member_benefit(
        &self,
        mut request: DsMemberBenefitGet,
    ) -> Result<AttributeBag, AliexpressError> {
        if request.locale.is_none() {
            request.locale = Some(self.api.locale(None));
        }
        self.api.call_with_session(&request).await
    }

    /// Order details through `aliexpress.trade.ds.order.get`.
    pub async fn get_trade_ds_order(
        &self,
        mut request: TradeDsOrderGet,
    ) -> Result<DsTradeOrder, AliexpressError> {
        if request.locale().is_none() {
            request = request.with_locale(&self.api.locale(None));
        }
        self.api.call_with_session(&request).await
    }
}

fn validate_paging(page: Option<i64>, page_size: Option<i64>) -> Result<(), AliexpressError> {
    if let Some(page) = page {
        validate_page(page)?;
    }
    if let Some(size) = page_size {
        validate_page_size(size)?;
    }
    Ok(())
}
