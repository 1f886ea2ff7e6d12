//! Login form view model.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use sok_core::error::CoreError;
use sok_core::validation::{evaluate_fields, FieldSpec, FormModel, InputKind, Rule};

/// Credentials submitted from the login form.
///
/// Handed as-is to the authentication collaborator once validated. The
/// password never appears in `Debug` or serialized output.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LoginVm {
    pub username: String,
    pub password: String,
    pub remember_me: bool,
}

impl FormModel for LoginVm {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("Username", "Username", InputKind::Text, &[Rule::Required]),
        FieldSpec::new("Password", "Password", InputKind::Password, &[Rule::Required]),
        FieldSpec::new("RememberMe", "Remember me", InputKind::Checkbox, &[]),
    ];
}

impl LoginVm {
    /// Check the declared rules against these credentials.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut record = Map::new();
        record.insert("Username".into(), Value::from(self.username.as_str()));
        record.insert("Password".into(), Value::from(self.password.as_str()));
        record.insert("RememberMe".into(), Value::Bool(self.remember_me));

        evaluate_fields(Self::FIELDS, &record).into_result()
    }
}

/// Serializes the form for redisplay. `Password` is always written empty.
impl Serialize for LoginVm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("LoginVm", 3)?;
        state.serialize_field("Username", &self.username)?;
        state.serialize_field("Password", "")?;
        state.serialize_field("RememberMe", &self.remember_me)?;
        state.end()
    }
}

impl fmt::Debug for LoginVm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginVm")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}
