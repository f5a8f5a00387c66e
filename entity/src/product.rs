use chrono::Utc;
use sea_orm::{entity::prelude::*, ActiveValue};

use crate::{sea_orm_active_enums::StockStatus, slug::fill_slug};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "inventory_product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub category_id: Option<i32>,
    pub seasonal_event_id: Option<i32>,
    #[sea_orm(column_type = "String(StringLen::N(255))", unique)]
    pub pid: String,
    #[sea_orm(column_type = "String(StringLen::N(200))", unique)]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(220))", unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub description: Option<String>,
    pub is_digital: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub is_active: bool,
    pub stock_status: StockStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::seasonal_event::Entity",
        from = "Column::SeasonalEventId",
        to = "super::seasonal_event::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    SeasonalEvent,
    #[sea_orm(has_many = "super::product_line::Entity")]
    ProductLine,
    #[sea_orm(has_many = "super::product_product_type::Entity")]
    ProductProductType,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::seasonal_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeasonalEvent.def()
    }
}

impl Related<super::product_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductLine.def()
    }
}

impl Related<super::product_product_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductProductType.def()
    }
}

impl Related<super::product_type::Entity> for Entity {
    fn to() -> RelationDef {
        super::product_product_type::Relation::ProductType.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::product_product_type::Relation::Product.def().rev())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            is_digital: ActiveValue::Set(false),
            is_active: ActiveValue::Set(false),
            stock_status: ActiveValue::Set(StockStatus::OutOfStock),
            ..ActiveModelTrait::default()
        }
    }

    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        fill_slug(&mut self.slug, &self.name, insert);

        let now = Utc::now().naive_utc();
        if insert {
            self.created_at = ActiveValue::Set(now);
        }
        self.updated_at = ActiveValue::Set(now);

        Ok(self)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
