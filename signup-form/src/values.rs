use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::field::Field;

/// Raw text of a numeric input. Parsing is deferred to validation so that
/// half-typed input is preserved while the user edits it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NumberInput {
    text: String,
}

/// Result of reading a [`NumberInput`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    Missing,
    Invalid,
    Present(f64),
}

impl NumberInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn from_number(number: f64) -> Self {
        Self {
            text: number.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> NumberValue {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            return NumberValue::Missing;
        }

        match trimmed.parse::<f64>() {
            Ok(number) if number.is_finite() => NumberValue::Present(number),
            _ => NumberValue::Invalid,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self.value() {
            NumberValue::Present(number) => Some(number),
            NumberValue::Missing | NumberValue::Invalid => None,
        }
    }
}

impl From<f64> for NumberInput {
    fn from(number: f64) -> Self {
        Self::from_number(number)
    }
}

impl From<i64> for NumberInput {
    fn from(number: i64) -> Self {
        Self {
            text: number.to_string(),
        }
    }
}

impl fmt::Display for NumberInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_number() {
            Some(number) => write!(f, "{}", number),
            None => f.write_str(&self.text),
        }
    }
}

// Whole numbers serialize as integers so logged values read `"age":30`.
impl Serialize for NumberInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_number() {
            Some(number) if number.fract() == 0.0 && number.abs() < 9_007_199_254_740_992.0 => {
                serializer.serialize_i64(number as i64)
            }
            Some(number) => serializer.serialize_f64(number),
            None => serializer.serialize_str(&self.text),
        }
    }
}

impl<'de> Deserialize<'de> for NumberInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(number) => NumberInput::from_number(number),
            Raw::Text(text) => NumberInput::new(text),
        })
    }
}

/// Everything the user enters across the five steps.
///
/// Secret fields are never serialized, so a serialized `FormValues` is safe
/// to log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub username: String,
    pub lastname: String,
    pub age: NumberInput,
    pub phone: NumberInput,
    pub country: String,
    pub city: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    #[serde(skip_serializing, default)]
    pub confirm_password: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            username: String::new(),
            lastname: String::new(),
            age: NumberInput::new("0"),
            phone: NumberInput::new("3"),
            country: String::new(),
            city: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
        }
    }
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of a field as it appears in its input.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Lastname => &self.lastname,
            Field::Age => self.age.text(),
            Field::Phone => self.phone.text(),
            Field::Country => &self.country,
            Field::City => &self.city,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Username => self.username = value,
            Field::Lastname => self.lastname = value,
            Field::Age => self.age = NumberInput::new(value),
            Field::Phone => self.phone = NumberInput::new(value),
            Field::Country => self.country = value,
            Field::City => self.city = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
        }
    }

    /// Label/value pairs shown on the confirmation panel. Secrets are left out.
    pub fn summary_rows(&self) -> Vec<(Field, String)> {
        Field::ALL
            .iter()
            .filter(|field| !field.is_secret())
            .map(|&field| {
                let shown = match field {
                    Field::Age => self.age.to_string(),
                    Field::Phone => self.phone.to_string(),
                    _ => self.get(field).to_string(),
                };
                (field, shown)
            })
            .collect()
    }

    pub fn to_log_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<unserializable: {}>", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let values = FormValues::default();
        assert_eq!(values.age.value(), NumberValue::Present(0.0));
        assert_eq!(values.phone.value(), NumberValue::Present(3.0));
        assert!(values.username.is_empty());
        assert!(values.confirm_password.is_empty());
    }

    #[test]
    fn test_number_input_reading() {
        assert_eq!(NumberInput::new("").value(), NumberValue::Missing);
        assert_eq!(NumberInput::new("   ").value(), NumberValue::Missing);
        assert_eq!(NumberInput::new("abc").value(), NumberValue::Invalid);
        assert_eq!(NumberInput::new("inf").value(), NumberValue::Invalid);
        assert_eq!(NumberInput::new(" 42 ").value(), NumberValue::Present(42.0));
        assert_eq!(NumberInput::new("1.5").value(), NumberValue::Present(1.5));
    }

    #[test]
    fn test_set_and_get_by_field() {
        let mut values = FormValues::default();
        values.set(Field::ConfirmPassword, "secret");
        values.set(Field::Age, "31");
        assert_eq!(values.get(Field::ConfirmPassword), "secret");
        assert_eq!(values.age.as_number(), Some(31.0));
    }

    #[test]
    fn test_log_json_skips_secrets() {
        let mut values = FormValues::default();
        values.username = "Ana".to_string();
        values.password = "p1".to_string();
        values.confirm_password = "p1".to_string();

        let json = values.to_log_json();
        assert!(json.contains("\"username\":\"Ana\""));
        assert!(json.contains("\"age\":0"));
        assert!(json.contains("\"phone\":3"));
        assert!(!json.contains("password"));
        assert!(!json.contains("p1"));
    }

    #[test]
    fn test_deserialize_accepts_numbers_and_text() {
        let values: FormValues = serde_json::from_str(
            r#"{"username":"Ana","lastname":"Ruiz","age":30,"phone":"5551234",
                "country":"MX","city":"CDMX","email":"ana@example.com"}"#,
        )
        .unwrap();
        assert_eq!(values.age.as_number(), Some(30.0));
        assert_eq!(values.phone.as_number(), Some(5551234.0));
        assert!(values.password.is_empty());
    }

    #[test]
    fn test_summary_rows_hide_secrets() {
        let mut values = FormValues::default();
        values.phone = NumberInput::from(5551234_i64);
        let rows = values.summary_rows();
        assert_eq!(rows.len(), 7);
        assert!(rows.iter().all(|(field, _)| !field.is_secret()));
        assert!(rows.contains(&(Field::Phone, "5551234".to_string())));
    }
}
