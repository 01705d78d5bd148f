use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    /// Payload failed schema checks. Carries every violated constraint.
    Validation(Vec<String>),
    Conflict,
    NotFound,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation(violations) => {
                write!(f, "Invalid book payload: {}", violations.join(", "))
            }
            KernelError::Conflict => write!(f, "A book with this isbn already exists"),
            KernelError::NotFound => write!(f, "Book not found"),
            KernelError::Timeout => write!(f, "Datastore timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
