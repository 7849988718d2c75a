use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SignupError;
use crate::step::Step;

/// The nine inputs collected by the signup form, in display order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Username,
    Lastname,
    Age,
    Phone,
    Country,
    City,
    Email,
    Password,
    ConfirmPassword,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Email,
    Secret,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Username,
        Field::Lastname,
        Field::Age,
        Field::Phone,
        Field::Country,
        Field::City,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Name used for the input id and in serialized values.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Lastname => "lastname",
            Field::Age => "age",
            Field::Phone => "phone",
            Field::Country => "country",
            Field::City => "city",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Username => "Nombre:",
            Field::Lastname => "Apellido:",
            Field::Age => "Edad:",
            Field::Phone => "Teléfono:",
            Field::Country => "País:",
            Field::City => "Ciudad:",
            Field::Email => "Correo Electrónico:",
            Field::Password => "Contraseña:",
            Field::ConfirmPassword => "Confirmar Contraseña:",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Age | Field::Phone => FieldKind::Number,
            Field::Email => FieldKind::Email,
            Field::Password | Field::ConfirmPassword => FieldKind::Secret,
            Field::Username | Field::Lastname | Field::Country | Field::City => FieldKind::Text,
        }
    }

    pub fn step(&self) -> Step {
        match self {
            Field::Username | Field::Lastname => Step::Personal,
            Field::Age | Field::Phone => Step::Contact,
            Field::Country | Field::City => Step::Location,
            Field::Email => Step::Email,
            Field::Password | Field::ConfirmPassword => Step::Credentials,
        }
    }

    pub fn is_secret(&self) -> bool {
        self.kind() == FieldKind::Secret
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = SignupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.name() == s)
            .ok_or_else(|| SignupError::UnknownField(s.to_string()))
    }
}
