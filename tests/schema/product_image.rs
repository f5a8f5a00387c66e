use super::*;

#[test]
fn image_columns() {
    let schema = describe::<entity::prelude::ProductImage>();

    assert_eq!(schema.table, "inventory_product_image");
    assert_eq!(schema.fields.len(), 5);
    assert_auto_primary_key(&schema);

    for name in ["alternative_text", "url"] {
        let column = field(&schema, name);
        assert_eq!(column.column_type, varchar(100));
        assert_plain(column);
    }
    assert_eq!(field(&schema, "order").column_type, ColumnType::Integer);
}

#[test]
fn product_line_is_required_protected_fk() {
    let schema = describe::<entity::prelude::ProductImage>();

    assert!(!field(&schema, "product_line_id").nullable);
    assert_protected_fk(
        &schema,
        "product_line_id",
        "ProductLine",
        "inventory_product_line",
    );
}
