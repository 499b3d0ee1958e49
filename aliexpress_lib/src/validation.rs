use chrono::NaiveDateTime;
use regex::Regex;

use aliexpress_api::OneOrMany;

use crate::error::AliexpressError;

pub const MAX_KEYWORDS_LENGTH: usize = 200;
pub const MAX_PAGE_SIZE: i64 = 50;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, AliexpressError> {
    if input.len() > max_len {
        return Err(AliexpressError::InvalidArgument(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(AliexpressError::InvalidArgument(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate search keywords: enforce length, strip control chars, trim.
pub fn validate_keywords(input: &str) -> Result<String, AliexpressError> {
    sanitize_text(input, MAX_KEYWORDS_LENGTH)
}

/// Validate a country code: 2-letter ISO code, normalized to uppercase.
pub fn validate_country(input: &str) -> Result<String, AliexpressError> {
    let trimmed = input.trim();
    if trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(trimmed.to_uppercase())
    } else {
        Err(AliexpressError::InvalidArgument(format!(
            "invalid country code '{}'. Expected 2-letter ISO code (e.g., US, ES)",
            input
        )))
    }
}

/// Validate page number (must be >= 1).
pub fn validate_page(page: i64) -> Result<i64, AliexpressError> {
    if page < 1 {
        return Err(AliexpressError::InvalidArgument(
            "page must be >= 1".to_string(),
        ));
    }
    Ok(page)
}

/// Validate page size (must be 1..=50).
pub fn validate_page_size(page_size: i64) -> Result<i64, AliexpressError> {
    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(AliexpressError::InvalidArgument(format!(
            "page_size must be between 1 and {}",
            MAX_PAGE_SIZE
        )));
    }
    Ok(page_size)
}

/// Validate a result limit for the image search (1..=max).
pub fn validate_limit(limit: u32, max: u32) -> Result<u32, AliexpressError> {
    if limit == 0 || limit > max {
        return Err(AliexpressError::InvalidArgument(format!(
            "limit must be between 1 and {}, got {}",
            max, limit
        )));
    }
    Ok(limit)
}

/// Validate an order query window: the start must come before the end.
pub fn validate_time_window(
    start: &NaiveDateTime,
    end: &NaiveDateTime,
) -> Result<(), AliexpressError> {
    if start >= end {
        return Err(AliexpressError::InvalidArgument(format!(
            "start_time {} must be before end_time {}",
            start, end
        )));
    }
    Ok(())
}

/// Extract a product id from a bare id or an AliExpress item URL.
///
/// Accepts `1005001234567890`, `https://www.aliexpress.com/item/1005001234567890.html`
/// and short forms such as `aliexpress.com/item/1005001234567890`.
pub fn get_product_id(text: &str) -> Result<String, AliexpressError> {
    let trimmed = text.trim();
    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Ok(trimmed.to_string());
    }

    let re = Regex::new(r"(?:/item/|/i/|/)(\d+)(?:\.html|[/?#]|$)").map_err(|e| {
        AliexpressError::InvalidArgument(format!("regex compile error: {}", e))
    })?;
    re.captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| AliexpressError::ProductIdNotFound(text.to_string()))
}

/// Extract product ids from every entry, failing on the first one without an id.
pub fn get_product_ids(values: &OneOrMany) -> Result<Vec<String>, AliexpressError> {
    let ids = values
        .values()
        .iter()
        .map(|v| get_product_id(v))
        .collect::<Result<Vec<_>, _>>()?;
    if ids.is_empty() {
        return Err(AliexpressError::InvalidArgument(
            "at least one product id is required".to_string(),
        ));
    }
    Ok(ids)
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
