//! Domain-facing repository seams.

pub mod alunos;

pub use alunos::{AlunoCredential, AlunoProfile, CredentialStore, StoreError};
