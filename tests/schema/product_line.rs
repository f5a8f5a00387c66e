use sea_orm::ActiveValue;

use super::*;

fn schema() -> ModelSchema {
    inventory::schema::inventory_models()
        .into_iter()
        .find(|model| model.table == "inventory_product_line")
        .unwrap()
}

#[test]
fn has_ten_concrete_fields() {
    let schema = schema();

    assert_eq!(schema.fields.len(), 10);
    assert_auto_primary_key(&schema);
}

#[test]
fn price_is_decimal_five_two() {
    let schema = schema();
    let price = field(&schema, "price");

    assert_eq!(price.column_type, ColumnType::Decimal(Some((5, 2))));
    assert_plain(price);
}

#[test]
fn sku_is_unique_uuid() {
    let schema = schema();
    let sku = field(&schema, "sku");

    assert_eq!(sku.column_type, ColumnType::Uuid);
    assert!(sku.unique);
    assert!(!sku.nullable);
}

#[test]
fn quantities_and_flags_are_required() {
    let schema = schema();

    assert_eq!(field(&schema, "stock_qty").column_type, ColumnType::Integer);
    assert_eq!(field(&schema, "order").column_type, ColumnType::Integer);
    assert_eq!(field(&schema, "is_active").column_type, ColumnType::Boolean);
    assert_eq!(field(&schema, "weight").column_type, ColumnType::Double);

    for name in ["stock_qty", "order", "is_active", "weight", "created_at", "updated_at"] {
        assert_plain(field(&schema, name));
    }
}

#[test]
fn defaults() {
    let first = entity::product_line::ActiveModel::default();
    let second = entity::product_line::ActiveModel::default();

    assert_eq!(first.stock_qty, ActiveValue::Set(0));
    assert_eq!(first.is_active, ActiveValue::Set(false));
    assert!(matches!(first.sku, ActiveValue::Set(_)));
    assert_ne!(first.sku, second.sku);
}

#[test]
fn product_is_required_protected_fk() {
    let schema = schema();

    assert!(!field(&schema, "product_id").nullable);
    assert_protected_fk(&schema, "product_id", "Product", "inventory_product");
}

#[test]
fn attribute_values_are_many_to_many_through_join_table() {
    let schema = schema();
    let m2m = schema.many_to_many_field("attribute_values").unwrap();

    assert_eq!(m2m.to_table, "inventory_attribute_value");
    assert_eq!(m2m.through, "inventory_productline_attributevalue");
}

#[test]
fn join_table_cascades_both_sides() {
    let schema = describe::<entity::prelude::ProductLineAttributeValue>();

    assert_eq!(schema.fields.len(), 3);
    for (relation, to_table) in [
        ("AttributeValue", "inventory_attribute_value"),
        ("ProductLine", "inventory_product_line"),
    ] {
        let fk = schema.foreign_key(relation).unwrap();
        assert_eq!(fk.to_table, to_table);
        assert_eq!(fk.on_delete, Some(OnDelete::Cascade));
    }
}
