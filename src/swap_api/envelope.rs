use anyhow::{anyhow, Result};
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::entity::swap_api_error::is_user_error_status;
use crate::entity::SwapApiError;

/// Status and body of an HTTP response, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Body returned by the swap API: exactly one of `result` / `error` is meaningful.
///
/// Any JSON document decodes. A body without a truthy `success` (including
/// one that is not an object at all) is a failure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum ResponseEnvelope {
    Success(Value),
    Failure(String),
}

impl From<Value> for ResponseEnvelope {
    fn from(mut body: Value) -> Self {
        if body.get("success").is_some_and(is_truthy) {
            let result = body.get_mut("result").map(Value::take).unwrap_or_default();
            return ResponseEnvelope::Success(result);
        }

        let message = match body.get_mut("error").map(Value::take) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(message)) => message,
            Some(other) => other.to_string(),
        };
        ResponseEnvelope::Failure(message)
    }
}

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl ResponseEnvelope {
    pub fn parse(body: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(|e| anyhow!("Failed to parse swap API response: {}", e))
    }
}

/// Interprets a swap API response.
///
/// Returns the envelope's `result` on success. A failed envelope becomes a
/// [`SwapApiError`], unless `ignore_user_errors` is set and the status is 4xx,
/// in which case the response is treated as "no data" (`Ok(None)`).
pub fn decode_response(
    response: &RawResponse,
    ignore_user_errors: bool,
) -> Result<Option<Value>> {
    match ResponseEnvelope::parse(&response.body)? {
        ResponseEnvelope::Success(result) => Ok(Some(result)),
        ResponseEnvelope::Failure(message) => {
            if ignore_user_errors && is_user_error_status(response.status) {
                debug!(
                    "Ignoring swap API user error [{}]: {}",
                    response.status, message
                );
                return Ok(None);
            }

            warn!("Swap API error [{}]: {}", response.status, message);
            Err(SwapApiError::new(message, response.status).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn api_error(err: anyhow::Error) -> SwapApiError {
        err.downcast::<SwapApiError>()
            .expect("expected a SwapApiError")
    }

    #[test]
    fn success_returns_result_unchanged() {
        let response = RawResponse::new(200, r#"{"success":true,"result":{"price":1.23}}"#);
        let value = decode_response(&response, false).unwrap();
        assert_eq!(value, Some(json!({"price": 1.23})));
    }

    #[test]
    fn success_with_null_or_missing_result_is_null() {
        let explicit = RawResponse::new(200, r#"{"success":true,"result":null}"#);
        let missing = RawResponse::new(200, r#"{"success":true}"#);

        assert_eq!(decode_response(&explicit, false).unwrap(), Some(Value::Null));
        assert_eq!(decode_response(&missing, true).unwrap(), Some(Value::Null));
    }

    #[test]
    fn success_flag_wins_over_status() {
        let response = RawResponse::new(500, r#"{"success":true,"result":[1,2]}"#);
        assert_eq!(decode_response(&response, false).unwrap(), Some(json!([1, 2])));
    }

    #[test]
    fn user_error_is_soft_when_ignored() {
        for status in [400, 404, 429, 499] {
            let response = RawResponse::new(status, r#"{"success":false,"error":"nope"}"#);
            assert_eq!(decode_response(&response, true).unwrap(), None);
        }
    }

    #[test]
    fn user_error_fails_when_not_ignored() {
        let response = RawResponse::new(404, r#"{"success":false,"error":"not found"}"#);
        let err = api_error(decode_response(&response, false).unwrap_err());
        assert_eq!(err, SwapApiError::new("not found", 404));
    }

    #[test]
    fn server_error_fails_even_when_ignored() {
        for status in [200, 399, 500, 503] {
            let response = RawResponse::new(status, r#"{"success":false,"error":"boom"}"#);
            let err = api_error(decode_response(&response, true).unwrap_err());
            assert_eq!(err.message, "boom");
            assert_eq!(err.status, status);
        }
    }

    #[test]
    fn missing_error_message_is_empty() {
        let response = RawResponse::new(500, r#"{"success":false}"#);
        let err = api_error(decode_response(&response, false).unwrap_err());
        assert_eq!(err.message, "");
    }

    #[test]
    fn body_without_success_is_a_failure() {
        let response = RawResponse::new(404, r#"{"message":"Not Found"}"#);
        assert_eq!(decode_response(&response, true).unwrap(), None);

        let err = api_error(decode_response(&response, false).unwrap_err());
        assert_eq!(err, SwapApiError::new("", 404));
    }

    #[test]
    fn non_object_body_is_a_failure() {
        let response = RawResponse::new(502, r#""upstream timeout""#);
        let err = api_error(decode_response(&response, true).unwrap_err());
        assert_eq!(err.status, 502);
    }

    #[test]
    fn non_string_error_keeps_its_json_text() {
        let response = RawResponse::new(500, r#"{"success":false,"error":{"code":7}}"#);
        let err = api_error(decode_response(&response, false).unwrap_err());
        assert_eq!(err.message, r#"{"code":7}"#);

        let soft = RawResponse::new(422, r#"{"success":0,"error":["bad size"]}"#);
        assert_eq!(decode_response(&soft, true).unwrap(), None);
    }

    #[test]
    fn truthy_success_counts() {
        let response = RawResponse::new(200, r#"{"success":1,"result":"ok"}"#);
        assert_eq!(decode_response(&response, false).unwrap(), Some(json!("ok")));
    }

    #[test]
    fn invalid_json_is_a_generic_fault() {
        let response = RawResponse::new(502, "<html>Bad Gateway</html>");
        let err = decode_response(&response, true).unwrap_err();
        assert!(err.downcast_ref::<SwapApiError>().is_none());
        assert!(err.to_string().starts_with("Failed to parse swap API response"));
    }

    #[test]
    fn envelope_is_tagged() {
        assert_eq!(
            ResponseEnvelope::parse(r#"{"success":false,"error":"x","result":1}"#).unwrap(),
            ResponseEnvelope::Failure("x".to_string())
        );
        assert_eq!(
            ResponseEnvelope::parse(r#"{"success":true,"error":"x","result":1}"#).unwrap(),
            ResponseEnvelope::Success(json!(1))
        );
    }
}
