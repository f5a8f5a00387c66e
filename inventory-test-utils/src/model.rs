//! Type aliases for the inventory entity models returned by fixtures.

pub type CategoryModel = entity::category::Model;
pub type SeasonalEventModel = entity::seasonal_event::Model;
pub type ProductTypeModel = entity::product_type::Model;
pub type ProductModel = entity::product::Model;
pub type AttributeModel = entity::attribute::Model;
pub type AttributeValueModel = entity::attribute_value::Model;
pub type ProductLineModel = entity::product_line::Model;
pub type ProductImageModel = entity::product_image::Model;
