//! Record schemas persisted by this service.
//!
//! Each schema names its own collection through [`Schema::COLLECTION`]; the
//! mapping is declared next to the type rather than derived from its name.

pub mod contact_inquiry;
pub mod product;
pub mod user;

pub use contact_inquiry::{ContactInquiry, HiringNeed, PreferredContact, Timeframe};
pub use product::Product;
pub use user::User;

use serde::Serialize;
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// A validated record shape bound to a document store collection.
pub trait Schema: Serialize + Validate {
    const COLLECTION: &'static str;
}

/// Reject addresses whose domain is not a dotted host name, such as `a@b`.
/// Malformed addresses without an `@` are left to the `email` rule.
pub fn validate_email_domain(email: &str) -> Result<(), ValidationError> {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return Ok(());
    };

    if domain.contains('.') && domain.split('.').all(|label| !label.is_empty()) {
        return Ok(());
    }

    let mut err = ValidationError::new("email");
    err.message = Some(Cow::Borrowed("Invalid email address"));
    Err(err)
}
