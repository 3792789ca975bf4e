use actix_web::{test, web, App};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::RwLock;

use customs_ai::handlers::{
    agreements_handler, chat_handler, classify_handler, health_handler, info_handler,
};
use customs_ai::{AppState, Settings};

fn test_state() -> web::Data<AppState> {
    let settings = Settings::new().expect("settings should build from defaults");
    web::Data::new(AppState::new(Arc::new(RwLock::new(settings))))
}

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .app_data(test_state())
                .route("/", web::get().to(info_handler::info))
                .service(
                    web::scope("/api")
                        .configure(chat_handler::config)
                        .configure(classify_handler::config)
                        .configure(agreements_handler::config),
                )
                .service(web::scope("/health").configure(health_handler::config)),
        )
        .await
    };
}

#[actix_web::test]
async fn test_root_info() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "RPA-PORT Customs AI");
    assert_eq!(body["status"], "running");
    assert!(body["endpoints"]["chat"].is_string());
}

#[actix_web::test]
async fn test_health_without_credential() {
    // Health must not depend on the Claude credential
    std::env::remove_var("ANTHROPIC_API_KEY");

    let app = test_app!();

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "rpa-port-customs-ai");
}

#[actix_web::test]
async fn test_agreements() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/api/agreements").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    let agreements = body["agreements"].as_array().expect("agreements array");
    assert_eq!(agreements.len(), 15);

    for agreement in agreements {
        assert!(!agreement["code"].as_str().unwrap().is_empty());
        assert!(!agreement["name"].as_str().unwrap().is_empty());
        assert!(agreement["year"].is_i64());
    }
}

#[actix_web::test]
async fn test_chat_no_api_key() {
    std::env::remove_var("ANTHROPIC_API_KEY");

    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({"message": "test"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_server_error());

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("ANTHROPIC_API_KEY"));
}

#[actix_web::test]
async fn test_classify_no_api_key() {
    std::env::remove_var("ANTHROPIC_API_KEY");

    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/classify")
        .set_json(json!({"description": "test product"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_server_error());
}

#[actix_web::test]
async fn test_chat_missing_message_is_rejected() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({"history": []}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
}

#[actix_web::test]
async fn test_chat_empty_message_is_rejected() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({"message": "   "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_classify_empty_description_is_rejected() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/classify")
        .set_json(json!({"description": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}
