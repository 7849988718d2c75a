use serde::{Deserialize, Serialize};

use crate::error::SignupError;
use crate::field::Field;

/// One of the five field groups, shown one at a time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Personal = 1,
    Contact = 2,
    Location = 3,
    Email = 4,
    Credentials = 5,
}

impl Default for Step {
    fn default() -> Self {
        Self::Personal
    }
}

impl Step {
    pub const FIRST: Step = Step::Personal;
    pub const LAST: Step = Step::Credentials;

    pub fn all() -> [Step; 5] {
        [
            Step::Personal,
            Step::Contact,
            Step::Location,
            Step::Email,
            Step::Credentials,
        ]
    }

    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn from_number(number: u8) -> Result<Self, SignupError> {
        match number {
            1 => Ok(Step::Personal),
            2 => Ok(Step::Contact),
            3 => Ok(Step::Location),
            4 => Ok(Step::Email),
            5 => Ok(Step::Credentials),
            other => Err(SignupError::InvalidStep(other)),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Personal => "Información personal",
            Step::Contact => "Información de contacto",
            Step::Location => "Información de ubicación",
            Step::Email => "Correo electrónico",
            Step::Credentials => "Contraseña",
        }
    }

    pub fn fields(&self) -> &'static [Field] {
        match self {
            Step::Personal => &[Field::Username, Field::Lastname],
            Step::Contact => &[Field::Age, Field::Phone],
            Step::Location => &[Field::Country, Field::City],
            Step::Email => &[Field::Email],
            Step::Credentials => &[Field::Password, Field::ConfirmPassword],
        }
    }

    pub fn is_first(&self) -> bool {
        *self == Self::FIRST
    }

    pub fn is_last(&self) -> bool {
        *self == Self::LAST
    }

    /// Following step; the last step saturates.
    pub fn next(&self) -> Step {
        match self {
            Step::Personal => Step::Contact,
            Step::Contact => Step::Location,
            Step::Location => Step::Email,
            Step::Email => Step::Credentials,
            Step::Credentials => Step::Credentials, // Stay at last
        }
    }

    /// Preceding step; the first step saturates.
    pub fn previous(&self) -> Step {
        match self {
            Step::Personal => Step::Personal, // Stay at first
            Step::Contact => Step::Personal,
            Step::Location => Step::Contact,
            Step::Email => Step::Location,
            Step::Credentials => Step::Email,
        }
    }

    pub fn progress_percentage(&self) -> u8 {
        self.number() * 20
    }
}
