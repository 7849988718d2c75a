use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::field::Field;
use crate::values::{FormValues, NumberValue};

/// Per-field failure; the display string is the inline message under the input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("{}", required_message(.0))]
    Required(Field),

    #[error("{}", not_a_number_message(.0))]
    NotANumber(Field),

    #[error("Formato de correo electrónico inválido")]
    InvalidEmail,

    #[error("Las contraseñas deben coincidir")]
    PasswordMismatch,
}

fn required_message(field: &Field) -> &'static str {
    match field {
        Field::Username => "El nombre de usuario es obligatorio",
        Field::Lastname => "El apellido de usuario es obligatorio",
        Field::Age => "La edad es obligatoria",
        Field::Phone => "El número de teléfono es obligatorio",
        Field::Country => "El país es obligatorio",
        Field::City => "La ciudad es obligatoria",
        Field::Email => "El correo electrónico es obligatorio",
        Field::Password => "La contraseña es obligatoria",
        Field::ConfirmPassword => "La confirmación de contraseña es obligatoria",
    }
}

fn not_a_number_message(field: &Field) -> &'static str {
    match field {
        Field::Phone => "El número de teléfono debe ser un número",
        _ => "La edad debe ser un número",
    }
}

// WHATWG "valid e-mail address" production.
fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
        )
        .expect("email pattern is a valid regex")
    })
}

pub fn is_email_shaped(candidate: &str) -> bool {
    email_regex().is_match(candidate)
}

/// First failing rule for one field, or `None` when it passes.
pub fn validate_field(field: Field, values: &FormValues) -> Option<FieldError> {
    match field {
        Field::Username | Field::Lastname | Field::Country | Field::City | Field::Password => {
            required_text(field, values.get(field))
        }
        Field::Age => required_number(field, values.age.value()),
        Field::Phone => required_number(field, values.phone.value()),
        Field::Email => required_text(field, &values.email).or_else(|| {
            if is_email_shaped(&values.email) {
                None
            } else {
                Some(FieldError::InvalidEmail)
            }
        }),
        Field::ConfirmPassword => {
            required_text(field, &values.confirm_password).or_else(|| {
                if values.confirm_password == values.password {
                    None
                } else {
                    Some(FieldError::PasswordMismatch)
                }
            })
        }
    }
}

fn required_text(field: Field, text: &str) -> Option<FieldError> {
    if text.is_empty() {
        Some(FieldError::Required(field))
    } else {
        None
    }
}

// Zero is a present value.
fn required_number(field: Field, value: NumberValue) -> Option<FieldError> {
    match value {
        NumberValue::Missing => Some(FieldError::Required(field)),
        NumberValue::Invalid => Some(FieldError::NotANumber(field)),
        NumberValue::Present(_) => None,
    }
}

/// Outcome of running every rule against a set of values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn errors(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

pub fn validate(values: &FormValues) -> ValidationReport {
    let errors = Field::ALL
        .iter()
        .filter_map(|&field| validate_field(field, values).map(|error| (field, error)))
        .collect();

    ValidationReport { errors }
}
