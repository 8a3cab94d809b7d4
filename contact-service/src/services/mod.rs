pub mod database;
pub mod memory;
pub mod metrics;
#[cfg(feature = "mongo")]
pub mod mongo;

pub use database::{create_document, DocumentStore, StoreHandle};
pub use memory::MemoryStore;
pub use metrics::{get_metrics, init_metrics, record_contact_inquiry};
#[cfg(feature = "mongo")]
pub use mongo::MongoStore;
