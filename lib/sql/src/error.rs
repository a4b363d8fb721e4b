use thiserror::Error;

#[derive(Error, Debug)]
pub enum SQLError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("query error: {0}")]
    Query(String),

    #[error("execution error: {0}")]
    Execution(String),

    /// A UNIQUE, FOREIGN KEY or CHECK constraint rejected the write.
    /// Services map this to a Conflict response.
    #[error("constraint violation: {0}")]
    Constraint(String),
}

impl SQLError {
    pub fn is_constraint(&self) -> bool {
        matches!(self, SQLError::Constraint(_))
    }
}
