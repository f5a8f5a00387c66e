//! Inventory catalog entities.
//!
//! Every entity in this crate belongs to the `inventory` app label, which the
//! database routers use to decide where reads, writes and migrations go.

pub mod prelude;

pub mod attribute;
pub mod attribute_value;
pub mod category;
pub mod product;
pub mod product_image;
pub mod product_line;
pub mod product_line_attribute_value;
pub mod product_product_type;
pub mod product_type;
pub mod sea_orm_active_enums;
pub mod seasonal_event;
pub mod slug;

/// App label shared by every entity in this crate.
pub const APP_LABEL: &str = "inventory";
