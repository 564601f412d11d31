use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use tracing::debug;

use crate::auth::claims::AuthenticatedContext;
use crate::error::AppError;
use crate::repos::alunos::AlunoProfile;
use crate::state::app_state::AppState;

pub const MSG_ALUNO_NOT_FOUND: &str = "Aluno não encontrado";

/// Public profile of the student the access token was issued to.
///
/// A token outlives the row it names; a deleted student yields 404.
#[derive(Debug, Clone)]
pub struct CurrentAluno(pub AlunoProfile);

impl FromRequest for CurrentAluno {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        let mut payload = payload.take();

        Box::pin(async move {
            let ctx = AuthenticatedContext::from_request(&req, &mut payload).await?;

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available"))?;

            let timeout = app_state.auth.store_timeout();
            let aluno = tokio::time::timeout(timeout, app_state.alunos.find_by_ra(&ctx.ra))
                .await
                .map_err(|_| {
                    AppError::internal(format!(
                        "profile lookup exceeded {} ms",
                        timeout.as_millis()
                    ))
                })??;
            match aluno {
                Some(aluno) => Ok(CurrentAluno(aluno.profile())),
                None => {
                    debug!(ra = %ctx.ra, "token subject has no aluno row");
                    Err(AppError::not_found(MSG_ALUNO_NOT_FOUND))
                }
            }
        })
    }
}
