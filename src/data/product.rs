use entity::sea_orm_active_enums::StockStatus;
use sea_orm::TransactionSession;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, ModelTrait, QueryFilter, QueryOrder, TransactionTrait,
};

/// Fields of a product that has not been saved yet.
#[derive(Debug, Clone, Default)]
pub struct NewProduct {
    pub pid: String,
    pub name: String,
    pub description: Option<String>,
    pub is_digital: bool,
    pub category_id: Option<i32>,
    pub seasonal_event_id: Option<i32>,
}

pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    /// Creates a new instance of [`ProductRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a product and links it to `product_type_ids`
    ///
    /// The slug is derived from the name and both timestamps are set when the
    /// row is saved. New products start inactive and out of stock. The product
    /// and its links are written in one transaction, so a bad product type ID
    /// leaves no product behind.
    pub async fn create(
        &self,
        product: NewProduct,
        product_type_ids: &[i32],
    ) -> Result<entity::product::Model, DbErr>
    where
        C: TransactionTrait,
    {
        let txn = self.db.begin().await?;

        let product = entity::product::ActiveModel {
            category_id: ActiveValue::Set(product.category_id),
            seasonal_event_id: ActiveValue::Set(product.seasonal_event_id),
            pid: ActiveValue::Set(product.pid),
            name: ActiveValue::Set(product.name),
            description: ActiveValue::Set(product.description),
            is_digital: ActiveValue::Set(product.is_digital),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        insert_product_type_links(&txn, product.id, product_type_ids).await?;

        txn.commit().await?;

        Ok(product)
    }

    pub async fn add_product_types(
        &self,
        product_id: i32,
        product_type_ids: &[i32],
    ) -> Result<(), DbErr> {
        insert_product_type_links(self.db, product_id, product_type_ids).await
    }

    pub async fn get(&self, product_id: i32) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find_by_id(product_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find()
            .filter(entity::product::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    pub async fn get_by_pid(&self, pid: &str) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find()
            .filter(entity::product::Column::Pid.eq(pid))
            .one(self.db)
            .await
    }

    /// Product types linked through the join table, ordered by name
    pub async fn product_types(
        &self,
        product: &entity::product::Model,
    ) -> Result<Vec<entity::product_type::Model>, DbErr> {
        product
            .find_related(entity::prelude::ProductType)
            .order_by_asc(entity::product_type::Column::Name)
            .all(self.db)
            .await
    }

    /// Active products ordered by name
    pub async fn list_active(&self) -> Result<Vec<entity::product::Model>, DbErr> {
        entity::prelude::Product::find()
            .filter(entity::product::Column::IsActive.eq(true))
            .order_by_asc(entity::product::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn list_for_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<entity::product::Model>, DbErr> {
        entity::prelude::Product::find()
            .filter(entity::product::Column::CategoryId.eq(category_id))
            .order_by_asc(entity::product::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn set_active(
        &self,
        product_id: i32,
        is_active: bool,
    ) -> Result<Option<entity::product::Model>, DbErr> {
        self.update_with(product_id, |product| {
            product.is_active = ActiveValue::Set(is_active);
        })
        .await
    }

    pub async fn set_stock_status(
        &self,
        product_id: i32,
        stock_status: StockStatus,
    ) -> Result<Option<entity::product::Model>, DbErr> {
        self.update_with(product_id, |product| {
            product.stock_status = ActiveValue::Set(stock_status);
        })
        .await
    }

    /// Loads a product, applies `change` and saves it, refreshing `updated_at`
    async fn update_with<F>(
        &self,
        product_id: i32,
        change: F,
    ) -> Result<Option<entity::product::Model>, DbErr>
    where
        F: FnOnce(&mut entity::product::ActiveModel),
    {
        let product = match self.get(product_id).await? {
            Some(product) => product,
            None => return Ok(None),
        };

        let mut product_am = product.into_active_model();
        change(&mut product_am);

        let product = product_am.update(self.db).await?;

        Ok(Some(product))
    }

    /// Deletes a product
    ///
    /// Product type links are removed with it. Fails while any product line
    /// still references the product.
    pub async fn delete(&self, product_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Product::delete_by_id(product_id)
            .exec(self.db)
            .await
    }
}

async fn insert_product_type_links<C: ConnectionTrait>(
    db: &C,
    product_id: i32,
    product_type_ids: &[i32],
) -> Result<(), DbErr> {
    if product_type_ids.is_empty() {
        return Ok(());
    }

    let links = product_type_ids
        .iter()
        .map(|&product_type_id| entity::product_product_type::ActiveModel {
            product_id: ActiveValue::Set(product_id),
            product_type_id: ActiveValue::Set(product_type_id),
            ..Default::default()
        });

    entity::prelude::ProductProductType::insert_many(links)
        .exec(db)
        .await?;

    Ok(())
}
