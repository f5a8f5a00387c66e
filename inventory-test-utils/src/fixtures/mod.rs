//! Test fixture modules for database record creation.
//!
//! - `inventory` - catalog records (categories, products, product lines, ...)

pub mod inventory;
