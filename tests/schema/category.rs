use sea_orm::ActiveValue;

use super::*;

fn schema() -> ModelSchema {
    describe::<entity::prelude::Category>()
}

#[test]
fn uses_django_table_name_and_app_label() {
    let schema = schema();

    assert_eq!(schema.table, "inventory_category");
    assert_eq!(schema.app_label, "inventory");
    assert_eq!(schema.fields.len(), 6);
}

#[test]
fn id_is_auto_primary_key() {
    assert_auto_primary_key(&schema());
}

#[test]
fn parent_is_nullable_self_reference_with_protect() {
    let schema = schema();

    assert!(field(&schema, "parent_id").nullable);
    assert_protected_fk(&schema, "parent_id", "Parent", "inventory_category");
}

#[test]
fn name_is_varchar_100() {
    let schema = schema();
    let name = field(&schema, "name");

    assert_eq!(name.column_type, varchar(100));
    assert_eq!(name.max_length(), Some(100));
    assert_plain(name);
}

#[test]
fn slug_is_unique_varchar_120() {
    let schema = schema();
    let slug = field(&schema, "slug");

    assert_eq!(slug.column_type, varchar(120));
    assert!(slug.unique);
    assert!(!slug.nullable);
}

#[test]
fn is_active_and_level_are_plain_columns() {
    let schema = schema();

    assert_eq!(field(&schema, "is_active").column_type, ColumnType::Boolean);
    assert_eq!(field(&schema, "level").column_type, ColumnType::Integer);
    assert_plain(field(&schema, "is_active"));
    assert_plain(field(&schema, "level"));
}

#[test]
fn defaults() {
    let category = entity::category::ActiveModel::default();

    assert_eq!(category.name, ActiveValue::Set(String::new()));
    assert_eq!(category.is_active, ActiveValue::Set(false));
    assert_eq!(category.level, ActiveValue::Set(0));
    assert_eq!(category.slug, ActiveValue::NotSet);
}
