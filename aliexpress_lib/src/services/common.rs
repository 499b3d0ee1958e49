use aliexpress_api::request::{BuyerFreightCalculate, CategoryGet, ProductDetailGet};
use aliexpress_api::types::{BuyerFreightResult, Category, Product};
use aliexpress_api::OneOrMany;

use crate::api::AliexpressApi;
use crate::categories::{filter_child_categories, filter_parent_categories};
use crate::error::AliexpressError;
use crate::validation::{get_product_ids, validate_country};

const CATEGORY_CACHE_KEY: &str = "affiliate_categories";

/// Product details, categories and freight estimates.
pub struct CommonService<'a> {
    api: &'a AliexpressApi,
}

impl<'a> CommonService<'a> {
    pub(crate) fn new(api: &'a AliexpressApi) -> Self {
        Self { api }
    }

    /// Details for one or more products. Entries may be product ids or item URLs.
    pub async fn get_products_details(
        &self,
        product_ids: impl Into<OneOrMany>,
        fields: Option<OneOrMany>,
        country: Option<&str>,
    ) -> Result<Vec<Product>, AliexpressError> {
        let ids = get_product_ids(&product_ids.into())?;
        let mut request = ProductDetailGet::new(ids)
            .with_target_currency(self.api.currency())
            .with_target_language(self.api.language());
        request.fields = fields;
        if let Some(country) = country {
            request = request.with_country(&validate_country(country)?);
        }
        if let Some(tracking_id) = self.api.tracking_id() {
            request = request.with_tracking_id(tracking_id);
        }

        let page = self
            .api
            .call(&request)
            .await
            .map_err(|e| e.empty_result_as(AliexpressError::ProductsNotFound))?;
        if page.is_empty() {
            return Err(AliexpressError::ProductsNotFound(
                "No products found with current parameters".to_string(),
            ));
        }
        Ok(page.products)
    }

    /// Every affiliate category, parents and children. Refreshes the category cache.
    pub async fn get_categories(&self) -> Result<Vec<Category>, AliexpressError> {
        let list = self.api.call(&CategoryGet).await?;
        if list.categories.is_empty() {
            return Err(AliexpressError::CategoriesNotFound(
                "No categories found".to_string(),
            ));
        }
        self.api
            .category_cache()
            .set(CATEGORY_CACHE_KEY, list.categories.clone());
        Ok(list.categories)
    }

    pub async fn get_parent_categories(
        &self,
        use_cache: bool,
    ) -> Result<Vec<Category>, AliexpressError> {
        let categories = self.categories(use_cache).await?;
        Ok(filter_parent_categories(&categories))
    }

    pub async fn get_child_categories(
        &self,
        parent_category_id: i64,
        use_cache: bool,
    ) -> Result<Vec<Category>, AliexpressError> {
        let categories = self.categories(use_cache).await?;
        Ok(filter_child_categories(&categories, parent_category_id))
    }

    async fn categories(&self, use_cache: bool) -> Result<Vec<Category>, AliexpressError> {
        if use_cache {
            if let Some(cached) = self.api.category_cache().get(CATEGORY_CACHE_KEY) {
                tracing::debug!("Using {} cached categories", cached.len());
                return Ok(cached);
            }
        }
        self.get_categories().await
    }

    /// Shipping options and costs for a basket delivered to `country_code`.
    pub async fn calculate_buyer_freight(
        &self,
        mut request: BuyerFreightCalculate,
    ) -> Result<BuyerFreightResult, AliexpressError> {
        if request.products.is_empty() {
            return Err(AliexpressError::InvalidArgument(
                "at least one product is required".to_string(),
            ));
        }
        request.country_code = validate_country(&request.country_code)?;
        if request.locale.is_none() {
            request.locale = Some(self.api.locale(Some(&request.country_code)));
        }
        self.api.call(&request).await
    }
}
