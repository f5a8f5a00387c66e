use sea_orm::ActiveValue;

use super::*;

fn schema() -> ModelSchema {
    describe::<entity::prelude::ProductType>()
}

#[test]
fn has_four_fields() {
    let schema = schema();

    assert_eq!(schema.table, "inventory_product_type");
    assert_eq!(schema.fields.len(), 4);
    assert_auto_primary_key(&schema);
}

#[test]
fn parent_is_nullable_self_reference_with_protect() {
    let schema = schema();

    assert!(field(&schema, "parent_id").nullable);
    assert_protected_fk(&schema, "parent_id", "Parent", "inventory_product_type");
}

#[test]
fn name_is_varchar_100() {
    let schema = schema();
    let name = field(&schema, "name");

    assert_eq!(name.column_type, varchar(100));
    assert_plain(name);
}

#[test]
fn level_defaults_to_zero() {
    let schema = schema();

    assert_eq!(field(&schema, "level").column_type, ColumnType::Integer);
    assert_eq!(
        entity::product_type::ActiveModel::default().level,
        ActiveValue::Set(0)
    );
}
