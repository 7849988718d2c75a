//! Five-step account signup form: field model, validation and the state
//! manager the UI dispatches into.

pub mod actions;
pub mod error;
pub mod field;
pub mod manager;
pub mod state;
pub mod step;
pub mod validation;
pub mod values;


pub use actions::FormAction;
pub use error::SignupError;
pub use field::{Field, FieldKind};
pub use manager::SignupManager;
pub use state::{FormEvent, FormState, Mode};
pub use step::Step;
pub use validation::{validate, validate_field, FieldError, ValidationReport};
pub use values::{FormValues, NumberInput, NumberValue};

// Re-export for convenience
pub mod prelude {
    pub use super::actions::FormAction;
    pub use super::field::{Field, FieldKind};
    pub use super::manager::SignupManager;
    pub use super::state::{FormEvent, FormState, Mode};
    pub use super::step::Step;
    pub use super::validation::{FieldError, ValidationReport};
    pub use super::values::FormValues;
}
