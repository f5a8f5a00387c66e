use entity::sea_orm_active_enums::StockStatus;
use sea_orm::{ActiveEnum, ActiveValue, Iterable};

use super::*;

fn schema() -> ModelSchema {
    inventory::schema::inventory_models()
        .into_iter()
        .find(|model| model.table == "inventory_product")
        .unwrap()
}

#[test]
fn has_twelve_concrete_fields() {
    let schema = schema();

    assert_eq!(schema.fields.len(), 12);
    assert_auto_primary_key(&schema);
}

#[test]
fn identifiers_are_unique_bounded_strings() {
    let schema = schema();

    for (name, len) in [("pid", 255), ("name", 200), ("slug", 220)] {
        let column = field(&schema, name);
        assert_eq!(column.column_type, varchar(len), "{} length", name);
        assert!(column.unique, "{} should be unique", name);
        assert!(!column.nullable, "{} should not be nullable", name);
    }
}

#[test]
fn description_is_nullable_text() {
    let schema = schema();
    let description = field(&schema, "description");

    assert_eq!(description.column_type, ColumnType::Text);
    assert!(description.nullable);
}

#[test]
fn flags_and_timestamps_are_required() {
    let schema = schema();

    assert_eq!(field(&schema, "is_digital").column_type, ColumnType::Boolean);
    assert_eq!(field(&schema, "is_active").column_type, ColumnType::Boolean);
    assert_eq!(field(&schema, "created_at").column_type, ColumnType::DateTime);
    assert_eq!(field(&schema, "updated_at").column_type, ColumnType::DateTime);

    for name in ["is_digital", "is_active", "created_at", "updated_at", "stock_status"] {
        assert_plain(field(&schema, name));
    }
}

#[test]
fn stock_status_is_three_letter_code() {
    assert_eq!(
        StockStatus::db_type().get_column_type(),
        &ColumnType::String(StringLen::N(3))
    );

    let codes: Vec<String> = StockStatus::iter().map(|status| status.to_value()).collect();
    assert_eq!(codes, vec!["IS", "OOS", "BO"]);

    let labels: Vec<&str> = StockStatus::iter().map(|status| status.label()).collect();
    assert_eq!(labels, vec!["In Stock", "Out of stock", "Back Ordered"]);
}

#[test]
fn defaults() {
    let product = entity::product::ActiveModel::default();

    assert_eq!(product.is_digital, ActiveValue::Set(false));
    assert_eq!(product.is_active, ActiveValue::Set(false));
    assert_eq!(product.stock_status, ActiveValue::Set(StockStatus::OutOfStock));
    assert_eq!(StockStatus::default(), StockStatus::OutOfStock);
}

#[test]
fn category_and_event_are_nullable_protected_fks() {
    let schema = schema();

    assert!(field(&schema, "category_id").nullable);
    assert!(field(&schema, "seasonal_event_id").nullable);
    assert_protected_fk(&schema, "category_id", "Category", "inventory_category");
    assert_protected_fk(
        &schema,
        "seasonal_event_id",
        "SeasonalEvent",
        "inventory_seasonal_event",
    );
    assert_eq!(schema.foreign_keys.len(), 2);
}

#[test]
fn product_type_is_many_to_many_through_join_table() {
    let schema = schema();
    let m2m = schema.many_to_many_field("product_type").unwrap();

    assert_eq!(m2m.to_table, "inventory_product_type");
    assert_eq!(m2m.through, "inventory_product_producttype");
}

#[test]
fn join_table_cascades_both_sides() {
    let schema = describe::<entity::prelude::ProductProductType>();

    assert_eq!(schema.fields.len(), 3);
    for (relation, to_table) in [
        ("Product", "inventory_product"),
        ("ProductType", "inventory_product_type"),
    ] {
        let fk = schema.foreign_key(relation).unwrap();
        assert_eq!(fk.to_table, to_table);
        assert_eq!(fk.on_delete, Some(OnDelete::Cascade));
    }
}
