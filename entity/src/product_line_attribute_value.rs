use sea_orm::entity::prelude::*;

/// Join table linking product lines to their attribute values.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "inventory_productline_attributevalue")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub attribute_value_id: i32,
    pub product_line_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::attribute_value::Entity",
        from = "Column::AttributeValueId",
        to = "super::attribute_value::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    AttributeValue,
    #[sea_orm(
        belongs_to = "super::product_line::Entity",
        from = "Column::ProductLineId",
        to = "super::product_line::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    ProductLine,
}

impl Related<super::attribute_value::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttributeValue.def()
    }
}

impl Related<super::product_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductLine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
