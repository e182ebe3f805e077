use serde::{Deserialize, Serialize};

use super::RequiredField;

/// Contact-form payload as received on the wire.
///
/// Every field is optional so that an absent field is reported the same
/// way as an empty one.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SubmissionForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub idea: Option<String>,
}

/// A contact submission with all three fields present.
#[derive(Debug, Clone)]
pub struct Submission {
    pub name: RequiredField,
    pub email: RequiredField,
    pub idea: RequiredField,
}

impl TryFrom<SubmissionForm> for Submission {
    type Error = String;

    fn try_from(form: SubmissionForm) -> Result<Self, Self::Error> {
        let name = required("name", form.name)?;
        let email = required("email", form.email)?;
        let idea = required("idea", form.idea)?;

        Ok(Self { name, email, idea })
    }
}

fn required(field: &str, value: Option<String>) -> Result<RequiredField, String> {
    RequiredField::parse(value.unwrap_or_default())
        .map_err(|e| format!("`{}` is invalid: {}", field, e))
}
