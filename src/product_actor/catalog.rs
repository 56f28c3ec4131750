//! Fixed product seed loaded at process start.

use crate::model::Product;

/// The products every catalog starts with.
pub fn seed() -> Vec<Product> {
    vec![
        Product::new("prod123", "Laptop", 1200.0),
        Product::new("prod456", "Mouse", 25.0),
        Product::new("prod789", "Keyboard", 75.0),
    ]
}
