pub use super::attribute::Entity as Attribute;
pub use super::attribute_value::Entity as AttributeValue;
pub use super::category::Entity as Category;
pub use super::product::Entity as Product;
pub use super::product_image::Entity as ProductImage;
pub use super::product_line::Entity as ProductLine;
pub use super::product_line_attribute_value::Entity as ProductLineAttributeValue;
pub use super::product_product_type::Entity as ProductProductType;
pub use super::product_type::Entity as ProductType;
pub use super::sea_orm_active_enums::StockStatus;
pub use super::seasonal_event::Entity as SeasonalEvent;
