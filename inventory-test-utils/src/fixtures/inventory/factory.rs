//! Unsaved active models populated with standard test values.
//!
//! Each factory returns an `ActiveModel` so a test can override any field
//! before inserting it.

use chrono::{DateTime, NaiveDateTime};
use rust_decimal::Decimal;
use sea_orm::ActiveValue;

use crate::constant::{TEST_EVENT_END, TEST_EVENT_START};

fn parse_timestamp(value: &str) -> NaiveDateTime {
    DateTime::parse_from_rfc3339(value)
        .unwrap()
        .naive_utc()
}

/// Create a mock category. The slug is left unset so it is derived on insert.
pub fn mock_category(name: &str, parent_id: Option<i32>) -> entity::category::ActiveModel {
    entity::category::ActiveModel {
        parent_id: ActiveValue::Set(parent_id),
        name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    }
}

/// Create a mock seasonal event spanning one week.
pub fn mock_seasonal_event(name: &str) -> entity::seasonal_event::ActiveModel {
    entity::seasonal_event::ActiveModel {
        start_date: ActiveValue::Set(parse_timestamp(TEST_EVENT_START)),
        end_date: ActiveValue::Set(parse_timestamp(TEST_EVENT_END)),
        name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    }
}

/// Create a mock product type.
pub fn mock_product_type(
    name: &str,
    parent_id: Option<i32>,
) -> entity::product_type::ActiveModel {
    entity::product_type::ActiveModel {
        parent_id: ActiveValue::Set(parent_id),
        name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    }
}

/// Create a mock product whose pid is derived from its name.
pub fn mock_product(name: &str, category_id: Option<i32>) -> entity::product::ActiveModel {
    entity::product::ActiveModel {
        category_id: ActiveValue::Set(category_id),
        seasonal_event_id: ActiveValue::Set(None),
        pid: ActiveValue::Set(format!("pid-{}", entity::slug::slugify(name))),
        name: ActiveValue::Set(name.to_string()),
        description: ActiveValue::Set(Some("string".to_string())),
        ..Default::default()
    }
}

/// Create a mock attribute.
pub fn mock_attribute(name: &str) -> entity::attribute::ActiveModel {
    entity::attribute::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        description: ActiveValue::Set(None),
        ..Default::default()
    }
}

/// Create a mock value for an attribute.
pub fn mock_attribute_value(
    attribute_id: i32,
    value: &str,
) -> entity::attribute_value::ActiveModel {
    entity::attribute_value::ActiveModel {
        attribute_id: ActiveValue::Set(attribute_id),
        attribute_value: ActiveValue::Set(value.to_string()),
        ..Default::default()
    }
}

/// Create a mock product line priced at 12.50.
pub fn mock_product_line(product_id: i32, order: i32) -> entity::product_line::ActiveModel {
    entity::product_line::ActiveModel {
        product_id: ActiveValue::Set(product_id),
        price: ActiveValue::Set(Decimal::new(1250, 2)),
        order: ActiveValue::Set(order),
        weight: ActiveValue::Set(1.5),
        ..Default::default()
    }
}

/// Create a mock product image.
pub fn mock_product_image(product_line_id: i32, order: i32) -> entity::product_image::ActiveModel {
    entity::product_image::ActiveModel {
        product_line_id: ActiveValue::Set(product_line_id),
        alternative_text: ActiveValue::Set("string".to_string()),
        url: ActiveValue::Set(format!("images/line-{product_line_id}-{order}.png")),
        order: ActiveValue::Set(order),
        ..Default::default()
    }
}
