use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::error_body::status_and_json;
use serde_json::json;

use crate::support::{create_test_app, test_state, InMemoryAlunos};

#[actix_web::test]
async fn test_root_route() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(Arc::new(InMemoryAlunos::default())).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/").to_request();
    let (status, body) = status_and_json(test::call_service(&app, req).await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "mensagem": "Rota padrão" }));

    Ok(())
}

#[actix_web::test]
async fn test_unknown_route_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(Arc::new(InMemoryAlunos::default())).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/livros").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}
