use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{validate_email_domain, Schema};

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    pub name: String,
    #[validate(
        email(message = "Invalid email address"),
        custom(function = "validate_email_domain")
    )]
    pub email: String,
    pub address: String,
    /// Age in years.
    #[validate(range(min = 0, max = 120, message = "Age must be between 0 and 120"))]
    pub age: Option<i64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl Schema for User {
    const COLLECTION: &'static str = "user";
}
