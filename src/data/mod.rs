//! Catalog repositories.
//!
//! Each repository borrows any sea-orm connection (a pooled connection or an
//! open transaction) and wraps the queries for one aggregate. Constraint
//! violations such as unique conflicts or deleting a protected row are
//! returned as the database's `DbErr`.

pub mod attribute;
pub mod category;
pub mod product;
pub mod product_image;
pub mod product_line;
pub mod product_type;
pub mod seasonal_event;

#[cfg(test)]
mod tests;
