//! `aliexpress.logistics.*` endpoints.

use serde::Serialize;

use crate::{params::Params, types::BuyerFreightResult, Error};

use super::common::Endpoint;

/// One line of a buyer freight estimate.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FreightProduct {
    pub product_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku_id: Option<String>,
    pub product_num: u32,
}

impl FreightProduct {
    pub fn new(product_id: &str, product_num: u32) -> Self {
        Self {
            product_id: product_id.to_string(),
            sku_id: None,
            product_num,
        }
    }

    pub fn with_sku_id(mut self, sku_id: &str) -> Self {
        self.sku_id = Some(sku_id.to_string());
        self
    }
}

/// Shipping options and prices for a basket shipped to one country.
#[derive(Clone, Debug)]
pub struct BuyerFreightCalculate {
    pub country_code: String,
    pub products: Vec<FreightProduct>,
    pub locale: Option<String>,
    pub web_site: Option<String>,
}

impl BuyerFreightCalculate {
    pub fn new(country_code: &str, products: Vec<FreightProduct>) -> Self {
        Self {
            country_code: country_code.to_uppercase(),
            products,
            locale: None,
            web_site: None,
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

impl Endpoint for BuyerFreightCalculate {
    type Response = BuyerFreightResult;
    const METHOD: &'static str = "aliexpress.logistics.buyer.freight.calculate";

    fn params(&self) -> Result<Params, Error> {
        let mut params = Params::new();
        params
            .push("country_code", &self.country_code)
            .push_json("product_list", &self.products)?
            .push_opt("locale", self.locale.as_deref())
            .push_opt("web_site", self.web_site.as_deref());
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_are_json_encoded() {
        let params = BuyerFreightCalculate::new(
            "br",
            vec![
                FreightProduct::new("1005001", 2).with_sku_id("12000"),
                FreightProduct::new("1005002", 1),
            ],
        )
        .params()
        .unwrap();
        assert_eq!(params.get("country_code"), Some("BR"));
        insta::assert_snapshot!(
            params.get("product_list").unwrap(),
            @r#"[{"product_id":"1005001","sku_id":"12000","product_num":2},{"product_id":"1005002","product_num":1}]"#
        );
    }
}
