//! End-to-end HTTP contract tests over the in-memory repository.
//!
//! These exercise the full wire behaviour: create → read round-trip with the
//! vehicles text unreformatted, partial updates, validation failure shapes,
//! the fixed quote, and the ping check.

use std::sync::Arc;

use actix_web::{App, http::StatusCode, test as actix_test, web};
use chrono::{Months, Utc};
use mockable::{Clock, DefaultClock};
use serde_json::{Value, json};

use intake::domain::ports::InMemoryApplicationRepository;
use intake::domain::{ApplicationCommandService, ApplicationQueryService};
use intake::inbound::http::applications::{
    create_application, get_application, submit_application, update_application,
};
use intake::inbound::http::health::ping;
use intake::inbound::http::state::HttpState;
use intake::middleware::Trace;

const VEHICLES: &str = r#"[{"VIN":"1HGBH41JXMN109188","year":2022,"make":"Toyota","model":"Camry"}]"#;

fn intake_state() -> web::Data<HttpState> {
    let repo = Arc::new(InMemoryApplicationRepository::new());
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let commands = Arc::new(ApplicationCommandService::new(repo.clone(), clock));
    let queries = Arc::new(ApplicationQueryService::new(repo));
    web::Data::new(HttpState::new(commands, queries))
}

fn intake_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(intake_state())
        .wrap(Trace)
        .service(create_application)
        .service(get_application)
        .service(update_application)
        .service(submit_application)
        .service(ping)
}

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

async fn post_application(
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

async fn get_by_id(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    id: i64,
) -> actix_web::dev::ServiceResponse {
    actix_test::call_service(
        app,
        actix_test::TestRequest::get()
            .uri(&format!("/applications/{id}"))
            .to_request(),
    )
    .await
}

async fn put_by_id(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    id: i64,
    payload: Value,
) -> actix_web::dev::ServiceResponse {
    actix_test::call_service(
        app,
        actix_test::TestRequest::put()
            .uri(&format!("/applications/{id}"))
            .set_json(payload)
            .to_request(),
    )
    .await
}

#[actix_web::test]
async fn ping_responds_with_pong() {
    let app = actix_test::init_service(intake_app()).await;

    let response =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri("/ping").to_request())
            .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "message": "pong" }));
}

#[actix_web::test]
async fn create_read_update_read_flow() {
    let app = actix_test::init_service(intake_app()).await;

    // Create John Doe.
    let response = post_application(&app, john_doe()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let created: Value = actix_test::read_body_json(response).await;
    let id = created["id"].as_i64().expect("integer id");
    let message = created["message"].as_str().expect("message");
    assert!(message.contains("Start a new insurance application with id"));

    // Read it back: field-for-field, vehicles text unreformatted.
    let response = get_by_id(&app, id).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Value = actix_test::read_body_json(response).await;
    assert_eq!(fetched["dob"], "2000-01-01");
    assert_eq!(fetched["vehicles"], VEHICLES);
    assert_eq!(fetched["id"], created["application"]["id"]);

    // Rename the applicant, resending the same vehicles text.
    let response = put_by_id(&app, id, json!({"firstName": "David", "vehicles": VEHICLES})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = actix_test::read_body_json(response).await;
    assert_eq!(updated["firstName"], "David");
    assert_eq!(updated["vehicles"], VEHICLES);

    // The rename persisted.
    let confirmed: Value = actix_test::read_body_json(get_by_id(&app, id).await).await;
    assert_eq!(confirmed["firstName"], "David");
    assert_eq!(confirmed["lastName"], "Doe");
}

#[actix_web::test]
async fn update_is_idempotent() {
    let app = actix_test::init_service(intake_app()).await;
    let created: Value = actix_test::read_body_json(post_application(&app, john_doe()).await).await;
    let id = created["id"].as_i64().expect("integer id");
    let patch = json!({"city": "Newtown", "zipCode": "54321"});

    let first: Value = actix_test::read_body_json(put_by_id(&app, id, patch.clone()).await).await;
    let second: Value = actix_test::read_body_json(put_by_id(&app, id, patch).await).await;

    assert_eq!(first, second);
    let stored: Value = actix_test::read_body_json(get_by_id(&app, id).await).await;
    assert_eq!(stored, second);
}

#[actix_web::test]
async fn create_collects_all_violations() {
    let app = actix_test::init_service(intake_app()).await;
    let underage_dob = Utc::now()
        .date_naive()
        .checked_sub_months(Months::new(120))
        .expect("valid date")
        .format("%Y-%m-%d")
        .to_string();
    let payload = json!({
        "firstName": "John",
        "lastName": "",
        "dob": underage_dob,
        "street": "",
        "city": "Anytown",
        "state": "Anystate",
        "zipCode": "12345",
        "vehicles": "[]",
    });

    let response = post_application(&app, payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({
            "errors": [
                "First and Last name are required.",
                "Applicant too young.",
                "Address is incomplete or ZipCode is not numeric.",
                "Vehicle count must be between 1 and 3.",
            ]
        })
    );
}

#[actix_web::test]
async fn create_with_unparseable_vehicles_reports_only_the_parse_error() {
    let app = actix_test::init_service(intake_app()).await;
    let mut payload = john_doe();
    payload["vehicles"] = json!("[{ not json");

    let response = post_application(&app, payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({ "errors": ["Failed to parse vehicles data. Ensure it is valid JSON."] })
    );
}

#[actix_web::test]
async fn update_rejects_underage_dob_with_the_same_cutoff() {
    let app = actix_test::init_service(intake_app()).await;
    let created: Value = actix_test::read_body_json(post_application(&app, john_doe()).await).await;
    let id = created["id"].as_i64().expect("integer id");
    let underage_dob = Utc::now()
        .date_naive()
        .checked_sub_months(Months::new(120))
        .expect("valid date")
        .format("%Y-%m-%d")
        .to_string();

    let response = put_by_id(&app, id, json!({"dob": underage_dob})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({
            "errors": [{
                "type": "field",
                "msg": "Applicant too young.",
                "path": "dob",
                "location": "body",
            }]
        })
    );
}

#[actix_web::test]
async fn missing_records_yield_the_404_message() {
    let app = actix_test::init_service(intake_app()).await;

    let response = get_by_id(&app, 77).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "message": "Application with ID 77 not found." }));

    let response = put_by_id(&app, 77, json!({"firstName": "David"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "message": "Application with ID 77 not found." }));
}

#[actix_web::test]
async fn submit_returns_the_fixed_quote() {
    let app = actix_test::init_service(intake_app()).await;
    let created: Value = actix_test::read_body_json(post_application(&app, john_doe()).await).await;
    let id = created["id"].as_i64().expect("integer id");

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri(&format!("/applications/{id}/submit"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["quote"], 123);
    assert_eq!(
        body["message"],
        format!("Submit insurance application with id {id}")
    );
}

#[actix_web::test]
async fn responses_carry_a_trace_id_header() {
    let app = actix_test::init_service(intake_app()).await;

    let response =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri("/ping").to_request())
            .await;

    assert!(response.headers().contains_key("trace-id"));
}
