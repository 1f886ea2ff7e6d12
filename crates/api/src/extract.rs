//! Validating body extractors.
//!
//! Both extractors decode the body into a JSON record, evaluate the target
//! type's declared [`FormModel::FIELDS`] against it, and only then deserialize
//! the typed value. A missing required field therefore surfaces as a
//! field-level violation rather than a deserialization failure.

use axum::extract::{FromRequest, Request};
use axum::{Form, Json};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use sok_core::error::CoreError;
use sok_core::validation::{evaluate_fields, record_from_pairs, FormModel};

use crate::error::AppError;

/// JSON body extractor that validates before deserializing.
///
/// ```ignore
/// async fn update(ValidatedJson(input): ValidatedJson<SetMinutesPerVisitDto>) -> AppResult<StatusCode> {
///     // input.minutes_per_visit is guaranteed to be within bounds here.
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + FormModel,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let Value::Object(record) = value else {
            return Err(AppError::BadRequest(
                "Request body must be a JSON object".into(),
            ));
        };

        validate_record(record).map(ValidatedJson)
    }
}

/// `application/x-www-form-urlencoded` extractor that validates before
/// deserializing. Values are coerced by each field's declared input kind.
#[derive(Debug, Clone)]
pub struct ValidatedForm<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedForm<T>
where
    T: DeserializeOwned + FormModel,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let record = record_from_pairs(T::FIELDS, pairs);
        validate_record(record).map(ValidatedForm)
    }
}

fn validate_record<T>(record: Map<String, Value>) -> Result<T, AppError>
where
    T: DeserializeOwned + FormModel,
{
    let model = std::any::type_name::<T>();
    let result = evaluate_fields(T::FIELDS, &record);

    if !result.is_valid {
        // Field names and rule types only; values may be credentials.
        let rejected: Vec<String> = result
            .errors
            .iter()
            .map(|e| format!("{}:{}", e.field, e.rule_type))
            .collect();
        tracing::debug!(model, ?rejected, "Rejected inbound model");
        return Err(AppError::Core(CoreError::InvalidFields(result.errors)));
    }

    serde_json::from_value(Value::Object(record)).map_err(|e| {
        tracing::debug!(model, category = ?e.classify(), "Inbound model failed to deserialize");
        AppError::BadRequest("Request body does not match the expected shape".into())
    })
}
