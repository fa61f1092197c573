use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("person with id '{id}' cannot be found")]
    NotFound { id: i64 },
}

impl ServiceError {
    pub fn not_found(id: i64) -> Self { Self::NotFound { id } }
}
