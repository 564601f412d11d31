use actix_web::{web, HttpResponse};

use crate::extractors::CurrentAluno;

/// Profile of the logged-in student, for the front end's header.
async fn perfil(CurrentAluno(aluno): CurrentAluno) -> HttpResponse {
    HttpResponse::Ok().json(aluno)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/aluno", web::get().to(perfil));
}
