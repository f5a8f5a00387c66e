use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::TransactionSession;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, ExprTrait, ModelTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

/// Fields of a product line that has not been saved yet.
#[derive(Debug, Clone)]
pub struct NewProductLine {
    pub price: Decimal,
    pub order: i32,
    pub weight: f64,
    pub stock_qty: i32,
    pub is_active: bool,
}

pub struct ProductLineRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductLineRepository<'a, C> {
    /// Creates a new instance of [`ProductLineRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a product line with a fresh SKU and links its attribute values
    ///
    /// The line is rolled back if any attribute value link fails.
    pub async fn create(
        &self,
        product_id: i32,
        line: NewProductLine,
        attribute_value_ids: &[i32],
    ) -> Result<entity::product_line::Model, DbErr>
    where
        C: TransactionTrait,
    {
        let txn = self.db.begin().await?;

        let product_line = entity::product_line::ActiveModel {
            product_id: ActiveValue::Set(product_id),
            price: ActiveValue::Set(line.price),
            stock_qty: ActiveValue::Set(line.stock_qty),
            is_active: ActiveValue::Set(line.is_active),
            order: ActiveValue::Set(line.order),
            weight: ActiveValue::Set(line.weight),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        if !attribute_value_ids.is_empty() {
            let links = attribute_value_ids.iter().map(|&attribute_value_id| {
                entity::product_line_attribute_value::ActiveModel {
                    attribute_value_id: ActiveValue::Set(attribute_value_id),
                    product_line_id: ActiveValue::Set(product_line.id),
                    ..Default::default()
                }
            });

            entity::prelude::ProductLineAttributeValue::insert_many(links)
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok(product_line)
    }

    pub async fn get_by_sku(
        &self,
        sku: Uuid,
    ) -> Result<Option<entity::product_line::Model>, DbErr> {
        entity::prelude::ProductLine::find()
            .filter(entity::product_line::Column::Sku.eq(sku))
            .one(self.db)
            .await
    }

    /// Lines of a product in display order
    pub async fn list_for_product(
        &self,
        product_id: i32,
    ) -> Result<Vec<entity::product_line::Model>, DbErr> {
        entity::prelude::ProductLine::find()
            .filter(entity::product_line::Column::ProductId.eq(product_id))
            .order_by_asc(entity::product_line::Column::Order)
            .all(self.db)
            .await
    }

    pub async fn attribute_values(
        &self,
        product_line: &entity::product_line::Model,
    ) -> Result<Vec<entity::attribute_value::Model>, DbErr> {
        product_line
            .find_related(entity::prelude::AttributeValue)
            .order_by_asc(entity::attribute_value::Column::Id)
            .all(self.db)
            .await
    }

    /// Adds `delta` to the stock quantity
    ///
    /// Applied as a single conditional update, so concurrent adjustments do not
    /// overwrite each other. Returns `Ok(None)` if the line does not exist and
    /// an error if the quantity would drop below zero or overflow.
    pub async fn adjust_stock(
        &self,
        product_line_id: i32,
        delta: i32,
    ) -> Result<Option<entity::product_line::Model>, DbErr> {
        use entity::product_line::Column;

        // Bounds are compared in i64 so the filter itself cannot overflow.
        let min_current = -i64::from(delta);
        let max_current = i64::from(i32::MAX) - i64::from(delta);

        let result = entity::prelude::ProductLine::update_many()
            .col_expr(Column::StockQty, Expr::col(Column::StockQty).add(delta))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().naive_utc()))
            .filter(Column::Id.eq(product_line_id))
            .filter(Column::StockQty.gte(min_current))
            .filter(Column::StockQty.lte(max_current))
            .exec(self.db)
            .await?;

        let product_line = entity::prelude::ProductLine::find_by_id(product_line_id)
            .one(self.db)
            .await?;

        match product_line {
            None => Ok(None),
            Some(_) if result.rows_affected == 0 => Err(DbErr::Custom(format!(
                "stock quantity of product line {} must stay between 0 and {}",
                product_line_id,
                i32::MAX
            ))),
            Some(product_line) => Ok(Some(product_line)),
        }
    }

    /// Deletes a product line
    ///
    /// Attribute value links are removed with it. Fails while any image still
    /// references the line.
    pub async fn delete(&self, product_line_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ProductLine::delete_by_id(product_line_id)
            .exec(self.db)
            .await
    }
}
