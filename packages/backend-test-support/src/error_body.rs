//! Assertions on the JSON error contract returned by the backend.
//!
//! Kept free of backend types so both unit and integration tests can use it.

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;

/// Split a response into its status and parsed JSON body.
pub async fn status_and_json<B>(resp: ServiceResponse<B>) -> (StatusCode, Value)
where
    B: MessageBody,
{
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

/// Assert a 401 from the token middleware: `{message, auth: false}` and nothing else.
pub async fn assert_token_rejected<B>(resp: ServiceResponse<B>, expected_message: &str)
where
    B: MessageBody,
{
    let (status, body) = status_and_json(resp).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED, "body: {body}");
    assert_eq!(body["message"], expected_message, "body: {body}");
    assert_eq!(body["auth"], false, "body: {body}");
    assert!(body.get("token").is_none(), "token must not be present: {body}");
}

/// Assert the login rejection shape: `{auth: false, token: null, message}`.
pub async fn assert_login_rejected<B>(resp: ServiceResponse<B>)
where
    B: MessageBody,
{
    let (status, body) = status_and_json(resp).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED, "body: {body}");
    assert_eq!(body["auth"], false);
    assert!(body["token"].is_null());
    assert_eq!(body["message"], "Usuário e/ou senha incorretos");
    assert!(body.get("aluno").is_none());
}

/// Assert the generic 500 body, which must not leak internals.
pub async fn assert_internal_error<B>(resp: ServiceResponse<B>)
where
    B: MessageBody,
{
    let (status, body) = status_and_json(resp).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "body: {body}");
    assert_eq!(body, serde_json::json!({ "message": "Erro interno do servidor" }));
}
