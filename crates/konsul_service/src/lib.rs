pub mod admin;
pub mod error;
pub mod export;
pub mod submission;

use sqlx::PgPool;

pub use error::{Error, Result};

#[derive(Clone)]
pub struct KonsulService {
    pub pool: PgPool,
}

impl KonsulService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
