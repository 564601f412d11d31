//! Storage adapters implementing the `repos` seams.

pub mod alunos_sea;

pub use alunos_sea::SeaCredentialStore;
