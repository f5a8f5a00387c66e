use super::*;

fn schema() -> ModelSchema {
    describe::<entity::prelude::SeasonalEvent>()
}

#[test]
fn has_four_fields() {
    let schema = schema();

    assert_eq!(schema.table, "inventory_seasonal_event");
    assert_eq!(schema.fields.len(), 4);
    assert_auto_primary_key(&schema);
}

#[test]
fn dates_are_required_datetimes() {
    let schema = schema();

    for name in ["start_date", "end_date"] {
        let date = field(&schema, name);
        assert_eq!(date.column_type, ColumnType::DateTime);
        assert_plain(date);
    }
}

#[test]
fn name_is_unique_varchar_100() {
    let schema = schema();
    let name = field(&schema, "name");

    assert_eq!(name.column_type, varchar(100));
    assert!(name.unique);
    assert!(!name.nullable);
}

#[test]
fn has_no_foreign_keys() {
    assert!(schema().foreign_keys.is_empty());
}
