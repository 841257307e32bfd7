use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i64) -> Self {
        Self::NotFound(format!("{entity} {id} not found"))
    }

    /// Wrap a storage failure with the operation that hit it,
    /// e.g. `could not create client: <driver message>`.
    pub fn db(op: &str, entity: &str, err: impl std::fmt::Display) -> Self {
        Self::Db(format!("could not {op} {entity}: {err}"))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
