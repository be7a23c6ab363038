//! Tests for application HTTP handlers.

use std::sync::Arc;

use actix_web::{App, http::StatusCode, test as actix_test, web};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::InMemoryApplicationRepository;
use crate::domain::{ApplicationCommandService, ApplicationQueryService};

/// Clock pinned to 2026-06-15 so age-cutoff outcomes are stable.
struct FrozenClock(DateTime<Utc>);

impl Clock for FrozenClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

fn frozen_clock() -> Arc<dyn Clock> {
    let now = Utc
        .with_ymd_and_hms(2026, 6, 15, 12, 0, 0)
        .single()
        .expect("valid timestamp");
    Arc::new(FrozenClock(now))
}

fn test_state() -> web::Data<HttpState> {
    let repo = Arc::new(InMemoryApplicationRepository::new());
    let command = Arc::new(ApplicationCommandService::new(repo.clone(), frozen_clock()));
    let query = Arc::new(ApplicationQueryService::new(repo));
    web::Data::new(HttpState::new(command, query))
}

fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(test_state())
        .service(create_application)
        .service(get_application)
        .service(update_application)
        .service(submit_application)
}

const VEHICLES: &str = r#"[{"VIN":"1HGBH41JXMN109188","year":2022,"make":"Toyota","model":"Camry"}]"#;

fn john_doe() -> Value {
    json!({
        "firstName": "John",
        "lastName": "Doe",
        "dob": "2000-01-01",
        "street": "123 Main St",
        "city": "Anytown",
        "state": "Anystate",
        "zipCode": "12345",
        "vehicles": VEHICLES,
    })
}

async fn create(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    payload: Value,
) -> actix_web::dev::ServiceResponse {
    actix_test::call_service(
        app,
        actix_test::TestRequest::post()
            .uri("/applications")
            .set_json(payload)
            .to_request(),
    )
    .await
}

#[actix_web::test]
async fn create_returns_id_message_and_record() {
    let app = actix_test::init_service(test_app()).await;

    let response = create(&app, john_doe()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = actix_test::read_body_json(response).await;
    let id = body["id"].as_i64().expect("integer id");
    assert_eq!(
        body["message"],
        format!("Start a new insurance application with id {id}")
    );
    assert_eq!(body["application"]["firstName"], "John");
    assert_eq!(body["application"]["vehicles"], VEHICLES);
}

#[actix_web::test]
async fn create_collects_validation_errors_into_a_400() {
    let app = actix_test::init_service(test_app()).await;
    let mut payload = john_doe();
    payload["firstName"] = json!("");
    payload["zipCode"] = json!("abc");

    let response = create(&app, payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({
            "errors": [
                "First and Last name are required.",
                "Address is incomplete or ZipCode is not numeric.",
            ]
        })
    );
}

#[actix_web::test]
async fn create_accepts_a_body_with_missing_fields() {
    // Absent fields decode as empty strings and surface as violations.
    let app = actix_test::init_service(test_app()).await;

    let response = create(&app, json!({"vehicles": VEHICLES})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = actix_test::read_body_json(response).await;
    let errors = body["errors"].as_array().expect("errors array");
    assert!(errors.contains(&json!("First and Last name are required.")));
    assert!(errors.contains(&json!("Missing DOB")));
}

#[actix_web::test]
async fn get_round_trips_the_stored_record() {
    let app = actix_test::init_service(test_app()).await;
    let created: Value = actix_test::read_body_json(create(&app, john_doe()).await).await;
    let id = created["id"].as_i64().expect("integer id");

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/applications/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["dob"], "2000-01-01");
    assert_eq!(body["vehicles"], VEHICLES);
}

#[actix_web::test]
async fn get_of_a_missing_id_is_404() {
    let app = actix_test::init_service(test_app()).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/applications/321")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "message": "Application with ID 321 not found." }));
}

#[actix_web::test]
async fn update_persists_the_supplied_fields() {
    let app = actix_test::init_service(test_app()).await;
    let created: Value = actix_test::read_body_json(create(&app, john_doe()).await).await;
    let id = created["id"].as_i64().expect("integer id");

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/applications/{id}"))
            .set_json(json!({"firstName": "David", "vehicles": VEHICLES}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["firstName"], "David");
    assert_eq!(body["lastName"], "Doe");
    assert_eq!(body["vehicles"], VEHICLES);

    let fetched: Value = actix_test::read_body_json(
        actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/applications/{id}"))
                .to_request(),
        )
        .await,
    )
    .await;
    assert_eq!(fetched["firstName"], "David");
}

#[actix_web::test]
async fn update_renders_the_first_violation_as_an_error_object() {
    let app = actix_test::init_service(test_app()).await;
    let created: Value = actix_test::read_body_json(create(&app, john_doe()).await).await;
    let id = created["id"].as_i64().expect("integer id");

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/applications/{id}"))
            .set_json(json!({"street": "", "zipCode": "abc"}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({
            "errors": [{
                "type": "field",
                "msg": "Street is required.",
                "path": "street",
                "location": "body",
            }]
        })
    );
}

#[actix_web::test]
async fn update_of_a_missing_id_is_404() {
    let app = actix_test::init_service(test_app()).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/applications/404")
            .set_json(json!({"firstName": "David"}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn submit_returns_the_fixed_quote() {
    let app = actix_test::init_service(test_app()).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/applications/55/submit")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({
            "quote": 123,
            "message": "Submit insurance application with id 55",
        })
    );
}
