use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct ProductTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductTypeRepository<'a, C> {
    /// Creates a new instance of [`ProductTypeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        parent: Option<&entity::product_type::Model>,
    ) -> Result<entity::product_type::Model, DbErr> {
        let product_type = entity::product_type::ActiveModel {
            parent_id: ActiveValue::Set(parent.map(|p| p.id)),
            name: ActiveValue::Set(name.to_string()),
            level: ActiveValue::Set(parent.map_or(0, |p| p.level + 1)),
            ..Default::default()
        };

        product_type.insert(self.db).await
    }

    pub async fn find_children(
        &self,
        parent_id: i32,
    ) -> Result<Vec<entity::product_type::Model>, DbErr> {
        entity::prelude::ProductType::find()
            .filter(entity::product_type::Column::ParentId.eq(parent_id))
            .order_by_asc(entity::product_type::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, product_type_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ProductType::delete_by_id(product_type_id)
            .exec(self.db)
            .await
    }
}
