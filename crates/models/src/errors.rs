use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// One message per failing field, in field order.
    #[error("validation error: {}", .0.join(", "))]
    Validation(Vec<String>),
}

impl ModelError {
    pub fn details(&self) -> &[String] {
        match self {
            Self::Validation(details) => details,
        }
    }
}
