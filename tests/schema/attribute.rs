use super::*;

#[test]
fn attribute_name_is_unique_and_description_nullable() {
    let schema = describe::<entity::prelude::Attribute>();

    assert_eq!(schema.table, "inventory_attribute");
    assert_eq!(schema.fields.len(), 3);
    assert_auto_primary_key(&schema);

    let name = field(&schema, "name");
    assert_eq!(name.column_type, varchar(100));
    assert!(name.unique);

    let description = field(&schema, "description");
    assert_eq!(description.column_type, ColumnType::Text);
    assert!(description.nullable);
}

#[test]
fn attribute_value_belongs_to_attribute() {
    let schema = describe::<entity::prelude::AttributeValue>();

    assert_eq!(schema.table, "inventory_attribute_value");
    assert_eq!(schema.fields.len(), 3);

    let value = field(&schema, "attribute_value");
    assert_eq!(value.column_type, varchar(100));
    assert_plain(value);

    assert!(!field(&schema, "attribute_id").nullable);
    assert_protected_fk(&schema, "attribute_id", "Attribute", "inventory_attribute");
}

#[test]
fn attribute_value_label_names_its_attribute() {
    let attribute = entity::attribute::Model {
        id: 1,
        name: "colour".to_string(),
        description: None,
    };
    let value = entity::attribute_value::Model {
        id: 1,
        attribute_id: 1,
        attribute_value: "red".to_string(),
    };

    assert_eq!(value.label(&attribute), "colour: red");
    assert_eq!(attribute.to_string(), "colour");
}
