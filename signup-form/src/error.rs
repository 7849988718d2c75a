use thiserror::Error;

use crate::field::Field;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignupError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("invalid step number: {0} (expected 1..=5)")]
    InvalidStep(u8),

    #[error("field {0} is read-only while the form is submitted")]
    FormLocked(Field),
}
