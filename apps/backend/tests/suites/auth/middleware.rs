// Token verification middleware on a protected scope.
//
// A counting handler tallies its invocations so each rejection can also assert
// that the wrapped service never ran.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web, HttpResponse};
use backend::error::{MSG_TOKEN_EXPIRED, MSG_TOKEN_INVALID, MSG_TOKEN_MISSING};
use backend::middleware::{JwtExtract, ACCESS_TOKEN_HEADER};
use backend::state::security_config::SecurityConfig;
use backend::AuthenticatedContext;
use backend_test_support::error_body::assert_token_rejected;
use serde::Serialize;

use crate::support::app_builder::test_security;
use crate::support::auth::{epoch_secs, mint_expired_token, mint_test_token, sign_claims};
use crate::support::{create_test_app, test_state, InMemoryAlunos};

async fn counted(ctx: AuthenticatedContext, hits: web::Data<AtomicUsize>) -> HttpResponse {
    hits.fetch_add(1, Ordering::SeqCst);
    HttpResponse::Ok().json(ctx)
}

macro_rules! protected_app {
    ($hits:expr) => {{
        let hits = $hits.clone();
        let state = test_state(Arc::new(InMemoryAlunos::default()))
            .await
            .unwrap();
        create_test_app(state)
            .with_routes(move |cfg| {
                cfg.app_data(hits.clone());
                cfg.service(
                    web::scope("/protegido")
                        .wrap(JwtExtract)
                        .route("", web::get().to(counted)),
                );
            })
            .build()
            .await
            .unwrap()
    }};
}

fn get_with(token: Option<&str>) -> actix_http::Request {
    let mut req = test::TestRequest::get().uri("/protegido");
    if let Some(token) = token {
        req = req.insert_header((ACCESS_TOKEN_HEADER, token));
    }
    req.to_request()
}

#[actix_web::test]
async fn test_missing_header() {
    let hits = web::Data::new(AtomicUsize::new(0));
    let app = protected_app!(hits);

    let resp = test::call_service(&app, get_with(None)).await;

    assert_token_rejected(resp, MSG_TOKEN_MISSING).await;
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn test_empty_header() {
    let hits = web::Data::new(AtomicUsize::new(0));
    let app = protected_app!(hits);

    let resp = test::call_service(&app, get_with(Some(""))).await;

    assert_token_rejected(resp, MSG_TOKEN_MISSING).await;
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn test_authorization_bearer_is_not_read() {
    let hits = web::Data::new(AtomicUsize::new(0));
    let app = protected_app!(hits);
    let token = mint_test_token("2024001", "ana@escola.edu.br", &test_security());

    let req = test::TestRequest::get()
        .uri("/protegido")
        .insert_header(("authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_token_rejected(resp, MSG_TOKEN_MISSING).await;
}

#[actix_web::test]
async fn test_garbage_token() {
    let hits = web::Data::new(AtomicUsize::new(0));
    let app = protected_app!(hits);

    let resp = test::call_service(&app, get_with(Some("not-a-real-token"))).await;

    assert_token_rejected(resp, MSG_TOKEN_INVALID).await;
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn test_wrong_signature() {
    let hits = web::Data::new(AtomicUsize::new(0));
    let app = protected_app!(hits);
    let foreign = SecurityConfig::new(b"some-other-secret".to_vec());
    let token = mint_test_token("2024001", "ana@escola.edu.br", &foreign);

    let resp = test::call_service(&app, get_with(Some(&token))).await;

    assert_token_rejected(resp, MSG_TOKEN_INVALID).await;
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn test_expired_token() {
    let hits = web::Data::new(AtomicUsize::new(0));
    let app = protected_app!(hits);
    let token = mint_expired_token("2024001", "ana@escola.edu.br", &test_security());

    let resp = test::call_service(&app, get_with(Some(&token))).await;

    assert_token_rejected(resp, MSG_TOKEN_EXPIRED).await;
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn test_signed_token_without_subject_or_expiry() {
    #[derive(Serialize)]
    struct NoSub {
        name: &'static str,
        exp: i64,
    }

    #[derive(Serialize)]
    struct NoExp {
        sub: &'static str,
    }

    #[derive(Serialize)]
    struct EmptySub {
        sub: &'static str,
        exp: i64,
    }

    let hits = web::Data::new(AtomicUsize::new(0));
    let app = protected_app!(hits);
    let sec = test_security();

    for token in [
        sign_claims(
            &NoSub {
                name: "Ana",
                exp: epoch_secs(3600),
            },
            &sec,
        ),
        sign_claims(&NoExp { sub: "2024001" }, &sec),
        sign_claims(
            &EmptySub {
                sub: "",
                exp: epoch_secs(3600),
            },
            &sec,
        ),
    ] {
        let resp = test::call_service(&app, get_with(Some(&token))).await;
        assert_token_rejected(resp, MSG_TOKEN_INVALID).await;
    }

    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn test_valid_token_is_admitted_with_context() {
    let hits = web::Data::new(AtomicUsize::new(0));
    let app = protected_app!(hits);
    let token = mint_test_token("2024001", "ana@escola.edu.br", &test_security());

    let resp = test::call_service(&app, get_with(Some(&token))).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["ra"], "2024001");
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[actix_web::test]
async fn test_unprotected_routes_ignore_tokens() {
    let state = test_state(Arc::new(InMemoryAlunos::default()))
        .await
        .unwrap();
    let app = create_test_app(state)
        .with_prod_routes()
        .build()
        .await
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/")
        .insert_header((ACCESS_TOKEN_HEADER, "garbage"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}
