use actix_web::web;

use crate::error::AppError;
use crate::middleware::JwtExtract;

pub mod alunos;
pub mod auth;
pub mod health;

pub const MSG_BAD_REQUEST: &str = "Requisição inválida";

/// Register every route. Shared by `main` and the integration tests so both
/// see the same paths, JSON limits and protected scopes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    cfg.route("/", web::get().to(health::root));
    cfg.configure(health::configure_routes);
    cfg.configure(auth::configure_routes);

    cfg.service(
        web::scope("/perfil")
            .wrap(JwtExtract)
            .configure(alunos::configure_routes),
    );
}

/// Bodies that are not JSON are rejected before the handler runs.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(16 * 1024)
        .content_type_required(false)
        .error_handler(|err, _req| {
            tracing::debug!(error = %err, "rejected request body");
            AppError::bad_request(MSG_BAD_REQUEST).into()
        })
}
