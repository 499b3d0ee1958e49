//! Unwrapping of the gateway's response envelope.
//!
//! A successful body looks like
//! `{"<method>_response": {"resp_result": {"resp_code": 200, "result": {...}}}}`;
//! failures come back either as a top-level `error_response` object or as a
//! non-success code at one of the inner levels.

use serde_json::{Map, Value};

use crate::Error;

const CODE_KEYS: [&str; 3] = ["resp_code", "rsp_code", "code"];
const MSG_KEYS: [&str; 3] = ["resp_msg", "rsp_msg", "msg"];
const RESULT_KEYS: [&str; 3] = ["resp_result", "result", "data"];

/// Extracts the result object for `response_key` from a parsed body.
pub fn unwrap_payload(body: Value, response_key: &str) -> Result<Value, Error> {
    let mut body = match body {
        Value::Object(map) => map,
        other => {
            return Err(Error::MalformedResponse(format!(
                "expected a JSON object, got {}",
                kind(&other)
            )))
        }
    };

    if let Some(err) = body.get("error_response") {
        return Err(api_error_from(err));
    }

    let inner = match body.remove(response_key) {
        Some(inner) => inner,
        None => {
            check_code(&body)?;
            let available: Vec<&str> = body.keys().map(String::as_str).collect();
            return Err(Error::MalformedResponse(format!(
                "response key '{}' not found, available: {:?}",
                response_key, available
            )));
        }
    };

    let mut inner = match inner {
        Value::Object(map) => map,
        other => {
            return Err(Error::MalformedResponse(format!(
                "'{}' is {}, expected an object",
                response_key,
                kind(&other)
            )))
        }
    };
    check_code(&inner)?;

    let mut result = match RESULT_KEYS.iter().find(|k| inner.contains_key(**k)) {
        Some(key) => inner.remove(*key).unwrap_or(Value::Null),
        None => Value::Object(inner),
    };

    let nested = match &mut result {
        Value::Object(map) => {
            check_code(map)?;
            match map.get("result") {
                Some(v) if v.is_object() || v.is_array() => map.remove("result"),
                _ => None,
            }
        }
        _ => None,
    };
    if let Some(nested) = nested {
        result = nested;
    }

    Ok(result)
}

/// Builds [`Error::ApiResponse`] from an `error_response` object.
pub fn api_error_from(err: &Value) -> Error {
    Error::ApiResponse {
        code: scalar(err.get("code")).unwrap_or_else(|| "unknown".to_string()),
        message: scalar(err.get("msg"))
            .or_else(|| scalar(err.get("message")))
            .unwrap_or_else(|| "Unknown error".to_string()),
        sub_code: scalar(err.get("sub_code")),
        sub_msg: scalar(err.get("sub_msg")),
    }
}

/// `0`, `00`, `200` and `success` all mean success on this platform.
pub fn is_success_code(code: &Value) -> bool {
    match code {
        Value::Number(n) => matches!(n.as_i64(), Some(0) | Some(200)),
        Value::String(s) => matches!(
            s.trim().to_lowercase().as_str(),
            "0" | "00" | "200" | "success"
        ),
        Value::Null => true,
        _ => false,
    }
}

fn check_code(map: &Map<String, Value>) -> Result<(), Error> {
    let Some(code) = CODE_KEYS.iter().find_map(|k| map.get(*k)) else {
        return Ok(());
    };
    if is_success_code(code) {
        return Ok(());
    }
    let message = MSG_KEYS
        .iter()
        .find_map(|k| scalar(map.get(*k)))
        .unwrap_or_else(|| "Unknown error".to_string());
    Err(Error::ApiResponse {
        code: scalar(Some(code)).unwrap_or_default(),
        message,
        sub_code: scalar(map.get("sub_code")),
        sub_msg: scalar(map.get("sub_msg")),
    })
}

fn scalar(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const KEY: &str = "aliexpress_affiliate_product_query_response";

    #[test]
    fn error_response_maps_code_and_message() {
        let body = json!({"error_response": {"code": "X", "msg": "Y", "request_id": "abc"}});
        match unwrap_payload(body, KEY) {
            Err(Error::ApiResponse {
                code,
                message,
                sub_code,
                ..
            }) => {
                assert_eq!(code, "X");
                assert_eq!(message, "Y");
                assert_eq!(sub_code, None);
            }
            other => panic!("expected ApiResponse, got {:?}", other),
        }
    }

    #[test]
    fn error_response_with_numeric_code_and_sub_fields() {
        let body = json!({"error_response": {
            "code": 15, "msg": "Remote service error",
            "sub_code": "isv.invalid-parameter", "sub_msg": "bad product id"
        }});
        let err = unwrap_payload(body, KEY).unwrap_err();
        assert_eq!(err.api_code(), Some("15"));
        match err {
            Error::ApiResponse {
                sub_code, sub_msg, ..
            } => {
                assert_eq!(sub_code.as_deref(), Some("isv.invalid-parameter"));
                assert_eq!(sub_msg.as_deref(), Some("bad product id"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn affiliate_envelope_is_flattened() {
        let body = json!({KEY: {
            "resp_result": {
                "resp_code": 200,
                "resp_msg": "Call succeeds",
                "result": {"current_record_count": 1}
            },
            "request_id": "r1"
        }});
        let result = unwrap_payload(body, KEY).unwrap();
        assert_eq!(result, json!({"current_record_count": 1}));
    }

    #[test]
    fn inner_error_code_is_an_api_error() {
        let body = json!({KEY: {
            "resp_result": {"resp_code": 405, "resp_msg": "The result is empty"}
        }});
        let err = unwrap_payload(body, KEY).unwrap_err();
        assert_eq!(err.api_code(), Some("405"));
        assert!(err.to_string().contains("The result is empty"));
    }

    #[test]
    fn response_level_error_code() {
        let body = json!({"aliexpress_ds_product_get_response": {
            "rsp_code": "5005", "rsp_msg": "product not found"
        }});
        let err = unwrap_payload(body, "aliexpress_ds_product_get_response").unwrap_err();
        assert_eq!(err.api_code(), Some("5005"));
    }

    #[test]
    fn data_envelope_with_string_success_code() {
        let body = json!({"aliexpress_ds_text_search_response": {
            "code": "00", "msg": "success",
            "data": {"totalCount": 3}
        }});
        let result = unwrap_payload(body, "aliexpress_ds_text_search_response").unwrap();
        assert_eq!(result, json!({"totalCount": 3}));
    }

    #[test]
    fn envelope_without_result_key_returns_inner() {
        let body = json!({"aliexpress_ds_member_benefit_get_response": {"level": "gold"}});
        let result =
            unwrap_payload(body, "aliexpress_ds_member_benefit_get_response").unwrap();
        assert_eq!(result, json!({"level": "gold"}));
    }

    #[test]
    fn missing_key_is_malformed() {
        let body = json!({"something_else": {}});
        match unwrap_payload(body, KEY) {
            Err(Error::MalformedResponse(msg)) => assert!(msg.contains(KEY)),
            other => panic!("expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn missing_key_with_top_level_error_code() {
        let body = json!({"code": "IllegalTimestamp", "msg": "timestamp expired"});
        let err = unwrap_payload(body, KEY).unwrap_err();
        assert_eq!(err.api_code(), Some("IllegalTimestamp"));
    }

    #[test]
    fn non_object_body_is_malformed() {
        let err = unwrap_payload(json!([1, 2]), KEY).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn success_codes() {
        assert!(is_success_code(&json!(0)));
        assert!(is_success_code(&json!(200)));
        assert!(is_success_code(&json!("00")));
        assert!(is_success_code(&json!("SUCCESS")));
        assert!(!is_success_code(&json!("405")));
        assert!(!is_success_code(&json!(false)));
    }
}
