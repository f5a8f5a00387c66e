use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "inventory_product_image")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_line_id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub alternative_text: String,
    /// Storage path of the uploaded image.
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub url: String,
    pub order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product_line::Entity",
        from = "Column::ProductLineId",
        to = "super::product_line::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    ProductLine,
}

impl Related<super::product_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductLine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
