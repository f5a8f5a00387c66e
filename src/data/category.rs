use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    /// Creates a new instance of [`CategoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a category one level below `parent`, or at level 0 without one
    ///
    /// The slug is derived from the name when the row is saved.
    pub async fn create(
        &self,
        name: &str,
        parent: Option<&entity::category::Model>,
    ) -> Result<entity::category::Model, DbErr> {
        let category = entity::category::ActiveModel {
            parent_id: ActiveValue::Set(parent.map(|p| p.id)),
            name: ActiveValue::Set(name.to_string()),
            level: ActiveValue::Set(parent.map_or(0, |p| p.level + 1)),
            ..Default::default()
        };

        category.insert(self.db).await
    }

    pub async fn get(&self, category_id: i32) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find_by_id(category_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .filter(entity::category::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Direct children of a category ordered by name
    pub async fn find_children(
        &self,
        parent_id: i32,
    ) -> Result<Vec<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .filter(entity::category::Column::ParentId.eq(parent_id))
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn set_active(
        &self,
        category_id: i32,
        is_active: bool,
    ) -> Result<Option<entity::category::Model>, DbErr> {
        let category = match self.get(category_id).await? {
            Some(category) => category,
            None => return Ok(None),
        };

        let mut category_am = category.into_active_model();
        category_am.is_active = ActiveValue::Set(is_active);

        let category = category_am.update(self.db).await?;

        Ok(Some(category))
    }

    /// Deletes a category
    ///
    /// Fails while any child category or product still references it.
    pub async fn delete(&self, category_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Category::delete_by_id(category_id)
            .exec(self.db)
            .await
    }
}
