use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use backend::repos::alunos::CredentialStore;
use backend::services::auth::AuthService;
use backend::state::app_state::AppState;
use backend_test_support::error_body::status_and_json;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};

use crate::support::app_builder::test_security;
use crate::support::{create_test_app, test_state, InMemoryAlunos};

#[actix_web::test]
async fn test_health_without_database() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(Arc::new(InMemoryAlunos::default())).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/health").to_request();
    let (status, body) = status_and_json(test::call_service(&app, req).await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "not_configured");
    assert!(body.get("db_error").is_none());
    assert_eq!(body["app_version"], env!("CARGO_PKG_VERSION"));

    let time = body["time"].as_str().unwrap_or_default();
    assert!(time.contains('T') && time.ends_with('Z'), "time: {time}");

    Ok(())
}

#[actix_web::test]
async fn test_health_hides_database_error_detail() -> Result<(), Box<dyn std::error::Error>> {
    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Conn(RuntimeErr::Internal(
            "password authentication failed for user biblioteca_app at 10.0.0.5:5432".to_string(),
        ))])
        .into_connection();
    let store: Arc<dyn CredentialStore> = Arc::new(InMemoryAlunos::default());
    let auth = AuthService::new(store.clone(), test_security());
    let state = AppState::new(Some(conn), store, auth);
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/health").to_request();
    let (status, body) = status_and_json(test::call_service(&app, req).await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["db"], "error");
    assert!(body.get("db_error").is_none());
    let text = body.to_string();
    assert!(!text.contains("10.0.0.5"), "body: {text}");
    assert!(!text.contains("biblioteca_app"), "body: {text}");

    Ok(())
}
