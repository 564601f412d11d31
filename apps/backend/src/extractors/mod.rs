pub mod auth_context;
pub mod current_aluno;

pub use current_aluno::CurrentAluno;
