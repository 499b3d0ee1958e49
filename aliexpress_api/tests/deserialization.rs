use aliexpress_api::envelope::unwrap_payload;
use aliexpress_api::types::{
    CategoryList, DsOrderTracking, DsProduct, DsTextSearchResult, LinkGenerateResult, ProductPage,
};
use serde::de::DeserializeOwned;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn payload<T: DeserializeOwned>(fixture: &str, key: &str) -> T {
    let body: serde_json::Value = serde_json::from_str(&load_fixture(fixture)).unwrap();
    serde_json::from_value(unwrap_payload(body, key).unwrap()).unwrap()
}

#[test]
fn deserialize_product_detail() {
    let page: ProductPage = payload(
        "productdetail.json",
        "aliexpress_affiliate_productdetail_get_response",
    );
    assert_eq!(page.products.len(), 1);
    let product = &page.products[0];
    assert_eq!(product.app_sale_price, "12.99");
    assert_eq!(product.commission_rate, "7.0%");
    assert_eq!(product.first_level_category_id, 44);
    assert_eq!(
        product.product_small_image_urls,
        vec!["https://ae01.alicdn.com/kf/a.jpg", "https://ae01.alicdn.com/kf/b.jpg"]
    );
    assert_eq!(product.promotion_link, "https://s.click.aliexpress.com/e/_abc123");
    assert!(product.product_video_url.is_empty());
}

#[test]
fn null_string_fields_read_as_empty() {
    let body = serde_json::json!({
        "aliexpress_affiliate_productdetail_get_response": {
            "resp_result": {
                "resp_code": 200,
                "result": {
                    "current_record_count": 1,
                    "products": {"product": [{
                        "product_id": 1005001234567890u64,
                        "product_title": null,
                        "shop_url": null,
                        "commission_rate": null,
                        "target_sale_price": "9.99"
                    }]}
                }
            }
        }
    });
    let payload = unwrap_payload(body, "aliexpress_affiliate_productdetail_get_response").unwrap();
    let page: ProductPage = serde_json::from_value(payload).unwrap();
    let product = &page.products[0];
    assert_eq!(product.product_id, "1005001234567890");
    assert_eq!(product.product_title, "");
    assert_eq!(product.shop_url, "");
    assert_eq!(product.commission_rate, "");
    assert_eq!(product.target_sale_price, "9.99");
}

#[test]
fn null_ds_sections_read_as_default() {
    let body = serde_json::json!({
        "aliexpress_ds_product_get_response": {
            "result": {
                "ae_item_base_info_dto": {"product_id": 42, "subject": null},
                "ae_store_info": null,
                "ae_multimedia_info_dto": null
            },
            "rsp_code": 200
        }
    });
    let payload = unwrap_payload(body, "aliexpress_ds_product_get_response").unwrap();
    let product: DsProduct = serde_json::from_value(payload).unwrap();
    assert_eq!(product.base_info.product_id, "42");
    assert!(product.base_info.subject.is_empty());
    assert!(product.store_info.store_id.is_empty());
}

#[test]
fn deserialize_empty_product_page() {
    let page: ProductPage = payload(
        "product_query_empty.json",
        "aliexpress_affiliate_product_query_response",
    );
    assert!(page.is_empty());
    assert_eq!(page.total_record_count, 0);
}

#[test]
fn deserialize_categories_with_quoted_ids() {
    let list: CategoryList = payload(
        "category_get.json",
        "aliexpress_affiliate_category_get_response",
    );
    assert_eq!(list.categories.len(), 4);
    assert_eq!(list.categories[3].category_id, 200000343);
    assert!(list.categories[0].is_parent());
    assert!(!list.categories[2].is_parent());
}

#[test]
fn deserialize_link_generate() {
    let result: LinkGenerateResult = payload(
        "link_generate.json",
        "aliexpress_affiliate_link_generate_response",
    );
    assert_eq!(result.tracking_id, "my_tracking");
    assert_eq!(result.total_result_count, 1);
}

#[test]
fn deserialize_ds_product() {
    let product: DsProduct = payload("ds_product_get.json", "aliexpress_ds_product_get_response");
    assert_eq!(product.base_info.subject, "USB-C Fast Charging Cable 2m");
    assert_eq!(product.base_info.avg_evaluation_rating, "4.8");
    assert_eq!(product.skus[0].sku_id, "12000012345678901");
    assert_eq!(product.skus[0].properties[0].sku_property_id, "14");
    assert_eq!(product.store_info.store_id, "1102345678");
    assert!(product.properties.is_empty());
    assert!(product.manufacturer_info.is_none());
}

#[test]
fn deserialize_text_search() {
    let result: DsTextSearchResult =
        payload("ds_text_search.json", "aliexpress_ds_text_search_response");
    assert!(!result.is_empty());
    assert_eq!(result.page_size, 20);
    assert_eq!(result.products[0].orders.as_deref(), Some("5000+"));
    assert!(result.products[1].item_main_pic.is_empty());
}

#[test]
fn deserialize_order_tracking() {
    let tracking: DsOrderTracking = payload(
        "ds_order_tracking.json",
        "aliexpress_ds_order_tracking_get_response",
    );
    let package = &tracking.data.packages[0];
    assert_eq!(package.carrier_name, "Cainiao");
    assert_eq!(package.eta_time_stamps, Some(1702000000000));
    assert_eq!(package.events[1].time_stamp, 1700000000000);
}
