use aliexpress_api::request::{
    HotProductQuery, LinkGenerate, OrderList, ProductFilter, ProductQuery, SmartMatch,
};
use aliexpress_api::types::{AffiliateLink, OrderPage, ProductPage};
use aliexpress_api::{LinkType, OneOrMany};

use crate::api::AliexpressApi;
use crate::error::AliexpressError;
use crate::validation::{
    validate_country, validate_keywords, validate_page, validate_page_size, validate_time_window,
};

/// Promotion links, product discovery and commission orders.
pub struct AffiliateService<'a> {
    api: &'a AliexpressApi,
}

impl<'a> AffiliateService<'a> {
    pub(crate) fn new(api: &'a AliexpressApi) -> Self {
        Self { api }
    }

    /// Converts product or store URLs into tracked promotion links.
    ///
    /// Requires a tracking id on the facade.
    pub async fn get_affiliate_links(
        &self,
        links: impl Into<OneOrMany>,
        link_type: LinkType,
    ) -> Result<Vec<AffiliateLink>, AliexpressError> {
        let tracking_id = self.api.tracking_id().ok_or_else(|| {
            AliexpressError::InvalidTrackingId(
                "The tracking id is required for affiliate links".to_string(),
            )
        })?;
        let links = links.into();
        if links.is_empty() {
            return Err(AliexpressError::InvalidArgument(
                "at least one link is required".to_string(),
            ));
        }

        tracing::debug!("Generating promotion links for {} source values", links.values().len());
        let request = LinkGenerate::new(links, tracking_id).with_link_type(link_type);
        let result = self.api.call(&request).await?;
        Ok(result.promotion_links)
    }

    pub async fn get_hotproducts(
        &self,
        filter: ProductFilter,
    ) -> Result<ProductPage, AliexpressError> {
        let request = HotProductQuery::from(self.prepare_filter(filter)?);
        let page = self
            .api
            .call(&request)
            .await
            .map_err(|e| e.empty_result_as(AliexpressError::ProductsNotFound))?;
        non_empty_products(page)
    }

    pub async fn get_products(&self, filter: ProductFilter) -> Result<ProductPage, AliexpressError> {
        let request = ProductQuery::from(self.prepare_filter(filter)?);
        let page = self
            .api
            .call(&request)
            .await
            .map_err(|e| e.empty_result_as(AliexpressError::ProductsNotFound))?;
        non_empty_products(page)
    }

    /// Products matched to a device, keyword or seed product.
    pub async fn smart_match_product(
        &self,
        mut request: SmartMatch,
    ) -> Result<ProductPage, AliexpressError> {
        if request.device_id.trim().is_empty() {
            return Err(AliexpressError::InvalidArgument(
                "device_id is required".to_string(),
            ));
        }
        if let Some(keywords) = request.keywords.take() {
            request.keywords = Some(validate_keywords(&keywords)?);
        }
        request.target_currency.get_or_insert(self.api.currency());
        request.target_language.get_or_insert(self.api.language());
        if request.tracking_id.is_none() {
            request.tracking_id = self.api.tracking_id().map(str::to_string);
        }
        let page = self
            .api
            .call(&request)
            .await
            .map_err(|e| e.empty_result_as(AliexpressError::ProductsNotFound))?;
        non_empty_products(page)
    }

    pub async fn get_order_list(&self, request: OrderList) -> Result<OrderPage, AliexpressError> {
        validate_time_window(&request.start_time, &request.end_time)?;
        if let Some(page) = request.page_no {
            validate_page(page)?;
        }
        if let Some(size) = request.page_size {
            validate_page_size(size)?;
        }
        let page = self
            .api
            .call(&request)
            .await
            .map_err(|e| e.empty_result_as(AliexpressError::OrdersNotFound))?;
        if page.is_empty() {
            return Err(AliexpressError::OrdersNotFound(
                "No orders found with current parameters".to_string(),
            ));
        }
        Ok(page)
    }

    fn prepare_filter(&self, mut filter: ProductFilter) -> Result<ProductFilter, AliexpressError> {
        if let Some(keywords) = filter.keywords.take() {
            filter.keywords = Some(validate_keywords(&keywords)?);
        }
        if let Some(country) = filter.ship_to_country.take() {
            filter.ship_to_country = Some(validate_country(&country)?);
        }
        if let Some(page) = filter.page_no {
            validate_page(page)?;
        }
        if let Some(size) = filter.page_size {
            validate_page_size(size)?;
        }
        if let (Some(min), Some(max)) = (filter.min_sale_price, filter.max_sale_price) {
            if min > max {
                return Err(AliexpressError::InvalidArgument(format!(
                    "min_sale_price {} exceeds max_sale_price {}",
                    min, max
                )));
            }
        }
        filter.target_currency.get_or_insert(self.api.currency());
        filter.target_language.get_or_insert(self.api.language());
        if filter.tracking_id.is_none() {
            filter.tracking_id = self.api.tracking_id().map(str::to_string);
        }
        Ok(filter)
    }
}

fn non_empty_products(page: ProductPage) -> Result<ProductPage, AliexpressError> {
    if page.is_empty() {
        return Err(AliexpressError::ProductsNotFound(
            "No products found with current parameters".to_string(),
        ));
    }
    Ok(page)
}
