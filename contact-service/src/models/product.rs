use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Schema;

fn default_in_stock() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Product {
    pub title: String,
    pub description: Option<String>,
    /// Price in dollars.
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
    pub category: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

impl Schema for Product {
    const COLLECTION: &'static str = "product";
}
