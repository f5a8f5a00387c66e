use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "inventory_attribute_value")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub attribute_id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub attribute_value: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::attribute::Entity",
        from = "Column::AttributeId",
        to = "super::attribute::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Attribute,
    #[sea_orm(has_many = "super::product_line_attribute_value::Entity")]
    ProductLineAttributeValue,
}

impl Related<super::attribute::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attribute.def()
    }
}

impl Related<super::product_line_attribute_value::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductLineAttributeValue.def()
    }
}

impl Related<super::product_line::Entity> for Entity {
    fn to() -> RelationDef {
        super::product_line_attribute_value::Relation::ProductLine.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::product_line_attribute_value::Relation::AttributeValue.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Label in the form `<attribute>: <value>`.
    pub fn label(&self, attribute: &super::attribute::Model) -> String {
        format!("{}: {}", attribute.name, self.attribute_value)
    }
}
