use super::*;

use chrono::NaiveDate;

// -- Text sanitization --

#[test]
fn sanitize_strips_control_chars() {
    assert_eq!(sanitize_text("usb\u{0007} cable\n", 50).unwrap(), "usb cable");
}

#[test]
fn sanitize_rejects_blank() {
    assert!(sanitize_text(" \t ", 50).is_err());
}

#[test]
fn sanitize_enforces_length() {
    let long = "a".repeat(MAX_KEYWORDS_LENGTH + 1);
    assert!(validate_keywords(&long).is_err());
}

// -- Country validation --

#[test]
fn country_is_uppercased() {
    assert_eq!(validate_country("es").unwrap(), "ES");
    assert_eq!(validate_country(" US ").unwrap(), "US");
}

#[test]
fn country_invalid() {
    assert!(validate_country("USA").is_err());
    assert!(validate_country("1A").is_err());
    assert!(validate_country("").is_err());
}

// -- Paging --

#[test]
fn page_bounds() {
    assert_eq!(validate_page(1).unwrap(), 1);
    assert!(validate_page(0).is_err());
    assert!(validate_page(-3).is_err());
}

#[test]
fn page_size_bounds() {
    assert_eq!(validate_page_size(1).unwrap(), 1);
    assert_eq!(validate_page_size(50).unwrap(), 50);
    assert!(validate_page_size(0).is_err());
    assert!(validate_page_size(51).is_err());
}

#[test]
fn limit_bounds() {
    assert_eq!(validate_limit(10, 100).unwrap(), 10);
    assert!(validate_limit(0, 100).is_err());
    assert!(validate_limit(101, 100).is_err());
}

// -- Time windows --

fn at(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn time_window_ordered() {
    assert!(validate_time_window(&at(1), &at(2)).is_ok());
}

#[test]
fn time_window_reversed_or_empty() {
    assert!(validate_time_window(&at(2), &at(1)).is_err());
    assert!(validate_time_window(&at(1), &at(1)).is_err());
}

// -- Product ids --

#[test]
fn product_id_plain() {
    assert_eq!(get_product_id("1005001234567890").unwrap(), "1005001234567890");
}

#[test]
fn product_id_from_item_url() {
    assert_eq!(
        get_product_id("https://www.aliexpress.com/item/1005001234567890.html?spm=a2g0o").unwrap(),
        "1005001234567890"
    );
    assert_eq!(
        get_product_id("aliexpress.com/item/4000123456789").unwrap(),
        "4000123456789"
    );
}

#[test]
fn product_id_missing() {
    let err = get_product_id("https://s.click.aliexpress.com/e/_abcdef").unwrap_err();
    assert!(matches!(err, AliexpressError::ProductIdNotFound(_)));
    assert!(get_product_id("").is_err());
}

#[test]
fn product_ids_mixed_inputs() {
    let values = OneOrMany::Many(vec![
        "123".to_string(),
        "https://aliexpress.com/item/456.html".to_string(),
    ]);
    assert_eq!(get_product_ids(&values).unwrap(), vec!["123", "456"]);
}

#[test]
fn product_ids_comma_string() {
    let values = OneOrMany::One("123, 456".to_string());
    assert_eq!(get_product_ids(&values).unwrap(), vec!["123", "456"]);
}

#[test]
fn product_ids_fail_on_any_bad_entry() {
    let values = OneOrMany::Many(vec!["123".to_string(), "nope".to_string()]);
    assert!(matches!(
        get_product_ids(&values),
        Err(AliexpressError::ProductIdNotFound(ref s)) if s == "nope"
    ));
}

#[test]
fn product_ids_empty() {
    let values = OneOrMany::Many(vec![]);
    assert!(matches!(
        get_product_ids(&values),
        Err(AliexpressError::InvalidArgument(_))
    ));
}
