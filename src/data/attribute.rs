use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct AttributeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AttributeRepository<'a, C> {
    /// Creates a new instance of [`AttributeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<entity::attribute::Model, DbErr> {
        let attribute = entity::attribute::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description.map(str::to_string)),
            ..Default::default()
        };

        attribute.insert(self.db).await
    }

    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::attribute::Model>, DbErr> {
        entity::prelude::Attribute::find()
            .filter(entity::attribute::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Adds a value to an attribute, e.g. `red` to `colour`
    pub async fn add_value(
        &self,
        attribute_id: i32,
        value: &str,
    ) -> Result<entity::attribute_value::Model, DbErr> {
        let attribute_value = entity::attribute_value::ActiveModel {
            attribute_id: ActiveValue::Set(attribute_id),
            attribute_value: ActiveValue::Set(value.to_string()),
            ..Default::default()
        };

        attribute_value.insert(self.db).await
    }

    pub async fn values(
        &self,
        attribute_id: i32,
    ) -> Result<Vec<entity::attribute_value::Model>, DbErr> {
        entity::prelude::AttributeValue::find()
            .filter(entity::attribute_value::Column::AttributeId.eq(attribute_id))
            .order_by_asc(entity::attribute_value::Column::Id)
            .all(self.db)
            .await
    }

    /// Display label of a value, `"<attribute>: <value>"`
    pub async fn value_label(&self, attribute_value_id: i32) -> Result<Option<String>, DbErr> {
        let label = entity::prelude::AttributeValue::find_by_id(attribute_value_id)
            .find_also_related(entity::prelude::Attribute)
            .one(self.db)
            .await?
            .and_then(|(value, attribute)| attribute.map(|attribute| value.label(&attribute)));

        Ok(label)
    }

    /// Deletes an attribute
    ///
    /// Fails while any of its values still exist.
    pub async fn delete(&self, attribute_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Attribute::delete_by_id(attribute_id)
            .exec(self.db)
            .await
    }
}
