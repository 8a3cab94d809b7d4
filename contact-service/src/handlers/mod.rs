//! HTTP handlers for contact-service.

pub mod contact;
pub mod diagnostics;
pub mod health;
pub mod root;

pub use contact::submit_contact;
pub use diagnostics::test_database;
pub use health::{health_check, metrics_endpoint, readiness_check};
pub use root::{hello, read_root};
