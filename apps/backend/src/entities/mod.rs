//! SeaORM entities. Only the tables this service reads are mapped.

pub mod aluno;
