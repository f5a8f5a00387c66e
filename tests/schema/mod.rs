//! Structural tests asserting the shape of every inventory table through the
//! entity metadata.

use inventory::schema::{describe, FieldSchema, ModelSchema, OnDelete};
use sea_orm::sea_query::{ColumnType, StringLen};

mod attribute;
mod category;
mod product;
mod product_image;
mod product_line;
mod product_type;
mod seasonal_event;

fn field<'a>(schema: &'a ModelSchema, name: &str) -> &'a FieldSchema {
    schema
        .field(name)
        .unwrap_or_else(|| panic!("{} has no field {}", schema.table, name))
}

fn varchar(len: u32) -> ColumnType {
    ColumnType::String(StringLen::N(len))
}

/// Expected: not null, not unique, not a primary key
fn assert_plain(field: &FieldSchema) {
    assert!(!field.nullable, "{} should not be nullable", field.name);
    assert!(!field.unique, "{} should not be unique", field.name);
    assert!(!field.primary_key, "{} should not be a primary key", field.name);
}

fn assert_auto_primary_key(schema: &ModelSchema) {
    let id = field(schema, "id");

    assert!(id.primary_key);
    assert_eq!(id.column_type, ColumnType::Integer);
    assert!(!id.nullable);
}

/// Expected: a nullable integer column with a RESTRICT relation to `to_table`
fn assert_protected_fk(schema: &ModelSchema, column: &str, relation: &str, to_table: &str) {
    let fk_field = field(schema, column);
    assert_eq!(fk_field.column_type, ColumnType::Integer);

    let fk = schema
        .foreign_key(relation)
        .unwrap_or_else(|| panic!("{} has no relation {}", schema.table, relation));
    assert_eq!(fk.to_table, to_table);
    assert_eq!(fk.on_delete, Some(OnDelete::Restrict));
}
