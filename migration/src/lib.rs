pub use sea_orm_migration::prelude::*;

mod m20251020_000001_inventory_category;
mod m20251020_000002_inventory_seasonal_event;
mod m20251020_000003_inventory_product_type;
mod m20251020_000004_inventory_product;
mod m20251020_000005_inventory_product_producttype;
mod m20251020_000006_inventory_attribute;
mod m20251020_000007_inventory_attribute_value;
mod m20251020_000008_inventory_product_line;
mod m20251020_000009_inventory_productline_attributevalue;
mod m20251020_000010_inventory_product_image;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_inventory_category::Migration),
            Box::new(m20251020_000002_inventory_seasonal_event::Migration),
            Box::new(m20251020_000003_inventory_product_type::Migration),
            Box::new(m20251020_000004_inventory_product::Migration),
            Box::new(m20251020_000005_inventory_product_producttype::Migration),
            Box::new(m20251020_000006_inventory_attribute::Migration),
            Box::new(m20251020_000007_inventory_attribute_value::Migration),
            Box::new(m20251020_000008_inventory_product_line::Migration),
            Box::new(m20251020_000009_inventory_productline_attributevalue::Migration),
            Box::new(m20251020_000010_inventory_product_image::Migration),
        ]
    }
}
