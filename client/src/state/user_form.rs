//! Account-creation form shared by the manager and trainer pages.

#[cfg(test)]
#[path = "user_form_test.rs"]
mod user_form_test;

use session::Role;

use crate::net::types::CreateUserRequest;

/// Field values of a create-account form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl UserForm {
    /// Label of the first required field left blank.
    #[must_use]
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("First Name", &self.first_name),
            ("Last Name", &self.last_name),
            ("Email", &self.email),
            ("Password", &self.password),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
    }

    /// Request body for an account of `account_type`.
    ///
    /// # Errors
    ///
    /// Returns the inline message for the first blank required field.
    pub fn to_request(&self, account_type: Role, personal_trainer_id: Option<i64>) -> Result<CreateUserRequest, String> {
        if let Some(label) = self.missing_field() {
            return Err(format!("{label} is required."));
        }
        Ok(CreateUserRequest {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            account_type,
            personal_trainer_id,
        })
    }
}
