use std::sync::Arc;

use actix_web::test;
use backend::middleware::ACCESS_TOKEN_HEADER;

use crate::common::header_value;
use crate::support::{create_test_app, test_state, InMemoryAlunos};

#[actix_web::test]
async fn test_every_response_carries_request_id() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(Arc::new(InMemoryAlunos::default())).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let first = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let second = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    let a = header_value(&first, "x-request-id");
    let b = header_value(&second, "x-request-id");
    assert_ne!(a, b);
    assert_eq!(a.len(), 36);

    Ok(())
}

#[actix_web::test]
async fn test_rejection_trace_id_matches_request_id() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(Arc::new(InMemoryAlunos::default())).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get()
        .uri("/perfil/aluno")
        .insert_header((ACCESS_TOKEN_HEADER, "garbage"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 401);
    assert_eq!(
        header_value(&resp, "x-trace-id"),
        header_value(&resp, "x-request-id")
    );

    Ok(())
}
