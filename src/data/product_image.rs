use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct ProductImageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductImageRepository<'a, C> {
    /// Creates a new instance of [`ProductImageRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        product_line_id: i32,
        url: &str,
        alternative_text: &str,
        order: i32,
    ) -> Result<entity::product_image::Model, DbErr> {
        let image = entity::product_image::ActiveModel {
            product_line_id: ActiveValue::Set(product_line_id),
            alternative_text: ActiveValue::Set(alternative_text.to_string()),
            url: ActiveValue::Set(url.to_string()),
            order: ActiveValue::Set(order),
            ..Default::default()
        };

        image.insert(self.db).await
    }

    pub async fn list_for_line(
        &self,
        product_line_id: i32,
    ) -> Result<Vec<entity::product_image::Model>, DbErr> {
        entity::prelude::ProductImage::find()
            .filter(entity::product_image::Column::ProductLineId.eq(product_line_id))
            .order_by_asc(entity::product_image::Column::Order)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, image_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ProductImage::delete_by_id(image_id)
            .exec(self.db)
            .await
    }
}
