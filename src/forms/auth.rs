use serde::Deserialize;
use validator::Validate;

/// Credentials posted to the login endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl LoginForm {
    /// Email in the form accounts are stored with.
    pub fn normalized_email(&self) -> String {
        self.email.trim().to_lowercase()
    }
}
