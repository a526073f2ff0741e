//! Repository implementations backed by PostgreSQL.

pub mod project_repo;

pub use project_repo::PgProjectRepo;
