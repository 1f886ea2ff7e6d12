use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::routing::{post, put};
use axum::{Json, Router};
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sok_api::dto::{LoginVm, ParishDto, SetMinutesPerVisitDto};
use sok_api::error::AppResult;
use sok_api::extract::{ValidatedForm, ValidatedJson};
use sok_api::response::DataResponse;
use sok_core::parish::{Address, Diocese, Parish};
use tower::ServiceExt;

/// Build a router that exposes each shape through the validating extractors.
///
/// ```text
/// PUT  /settings/minutes-per-visit   JSON  -> SetMinutesPerVisitDto
/// POST /account/login                form  -> LoginVm
/// POST /account/login.json           JSON  -> LoginVm
/// GET  /parish                             -> ParishDto
/// ```
pub fn build_test_app() -> Router {
    Router::new()
        .route("/settings/minutes-per-visit", put(set_minutes))
        .route("/account/login", post(login_form))
        .route("/account/login.json", post(login_json))
        .route("/parish", axum::routing::get(current_parish))
}

async fn set_minutes(
    ValidatedJson(input): ValidatedJson<SetMinutesPerVisitDto>,
) -> AppResult<Json<DataResponse<SetMinutesPerVisitDto>>> {
    Ok(Json(DataResponse::new(input)))
}

async fn login_form(ValidatedForm(input): ValidatedForm<LoginVm>) -> Json<Value> {
    Json(accepted_login(&input))
}

async fn login_json(ValidatedJson(input): ValidatedJson<LoginVm>) -> Json<Value> {
    Json(accepted_login(&input))
}

fn accepted_login(input: &LoginVm) -> Value {
    json!({
        "data": {
            "username": input.username,
            "remember_me": input.remember_me,
        }
    })
}

async fn current_parish() -> Json<DataResponse<ParishDto>> {
    Json(DataResponse::new(ParishDto::from(&sample_parish())))
}

pub fn sample_parish() -> Parish {
    Parish {
        id: 1,
        unique_id: "par-0001".to_string(),
        full_name: "Parafia Najświętszego Serca Pana Jezusa".to_string(),
        diocese: Diocese {
            id: 4,
            name: "Diecezja Tarnowska".to_string(),
        },
        address: Address {
            street: "Kościelna".to_string(),
            house_number: "1".to_string(),
            apartment_number: Some("2".to_string()),
            postal_code: "33-100".to_string(),
            city: "Tarnów".to_string(),
            country: "Polska".to_string(),
        },
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn send_json(app: Router, method: &str, uri: &str, body: Value) -> Response {
    send_raw(app, method, uri, "application/json", body.to_string()).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send_json(app, "POST", uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    send_json(app, "PUT", uri, body).await
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> Response {
    send_raw(
        app,
        "POST",
        uri,
        "application/x-www-form-urlencoded",
        body.to_string(),
    )
    .await
}

pub async fn send_raw(
    app: Router,
    method: &str,
    uri: &str,
    content_type: &str,
    body: String,
) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a 400 validation response and return the violations array.
pub async fn expect_violations(response: Response) -> Vec<Value> {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    json["fields"]
        .as_array()
        .expect("fields should be an array")
        .clone()
}
