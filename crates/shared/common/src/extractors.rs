//! JSON payload extraction with validation.
//!
//! Record payloads are checked before any store operation runs: malformed
//! JSON and failed field rules both surface as `AppError::Validation`, which
//! renders as a 400 `{"error": {"code": "VALIDATION_ERROR", ...}}` body.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

/// JSON extractor that runs the record's field rules after deserializing.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

/// Report the first failed field as `"<field>: <rule message>"`.
fn first_failure(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .next()
        .map(|(field, failures)| match failures.first().and_then(|f| f.message.as_ref()) {
            Some(message) => format!("{}: {}", field, message),
            None => format!("{}: invalid value", field),
        })
        .unwrap_or_else(|| "Validation failed".to_string())
}

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Missing or mistyped fields are caught by deserialization
        let Json(record) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        record
            .validate()
            .map_err(|e| AppError::validation(first_failure(&e)))?;

        Ok(ValidatedJson(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{header, Request as HttpRequest};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "Name cannot be empty"))]
        name: String,
        count: i64,
    }

    fn json_request(body: &str) -> Request {
        HttpRequest::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn accepts_valid_payload() {
        let req = json_request(r#"{"name": "pen", "count": 2}"#);
        let ValidatedJson(payload) = ValidatedJson::<Payload>::from_request(req, &())
            .await
            .unwrap();
        assert_eq!(payload.name, "pen");
        assert_eq!(payload.count, 2);
    }

    #[tokio::test]
    async fn failed_field_rule_names_the_field() {
        let req = json_request(r#"{"name": "", "count": 2}"#);
        let err = ValidatedJson::<Payload>::from_request(req, &())
            .await
            .unwrap_err();
        match err {
            AppError::Validation(msg) => {
                assert!(msg.contains("name"), "field name missing from: {}", msg);
                assert!(msg.contains("Name cannot be empty"), "rule message missing from: {}", msg);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_required_field_is_a_validation_error() {
        let req = json_request(r#"{"name": "pen"}"#);
        let err = ValidatedJson::<Payload>::from_request(req, &())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn malformed_json_is_a_validation_error() {
        let req = json_request("{not json");
        let err = ValidatedJson::<Payload>::from_request(req, &())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
