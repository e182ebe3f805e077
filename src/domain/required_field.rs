use serde::{Deserialize, Serialize};

/// A contact-form value that must be present and non-empty.
///
/// The text is kept as entered, surrounding whitespace and
/// newlines included. Whitespace alone counts as a value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequiredField(String);

impl RequiredField {
    /// Returns an instance of `RequiredField` if the input is not empty.
    pub fn parse(value: String) -> Result<RequiredField, String> {
        if value.is_empty() {
            return Err("Value is missing or empty".to_string());
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for RequiredField {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
