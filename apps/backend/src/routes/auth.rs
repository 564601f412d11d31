use std::fmt;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::repos::alunos::AlunoProfile;
use crate::state::app_state::AppState;

/// Login body. Absent or `null` fields are treated as empty strings and
/// never match.
#[derive(Deserialize, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    /// SHA-256 hex digest computed by the front end
    #[serde(default)]
    pub senha: Option<String>,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("senha", &"***")
            .finish()
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub auth: bool,
    pub token: String,
    pub aluno: AlunoProfile,
}

async fn login(
    req: web::Json<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let LoginRequest { email, senha } = req.into_inner();
    let email = email.unwrap_or_default();
    let senha = senha.unwrap_or_default();

    let ok = app_state.auth.authenticate(&email, &senha).await?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        auth: true,
        token: ok.token,
        aluno: ok.aluno,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/login").route(web::post().to(login)));
}
