use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251020_000007_inventory_attribute_value::InventoryAttributeValue,
    m20251020_000008_inventory_product_line::InventoryProductLine,
};

static IDX_PRODUCTLINE_ATTRIBUTEVALUE_ATTRIBUTE_VALUE_ID: &str =
    "idx-inventory_productline_attributevalue-attribute_value_id";
static IDX_PRODUCTLINE_ATTRIBUTEVALUE_PRODUCT_LINE_ID: &str =
    "idx-inventory_productline_attributevalue-product_line_id";
static FK_PRODUCTLINE_ATTRIBUTEVALUE_ATTRIBUTE_VALUE_ID: &str =
    "fk-inventory_productline_attributevalue-attribute_value_id";
static FK_PRODUCTLINE_ATTRIBUTEVALUE_PRODUCT_LINE_ID: &str =
    "fk-inventory_productline_attributevalue-product_line_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductLineAttributeValue::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductLineAttributeValue::Id))
                    .col(integer(ProductLineAttributeValue::AttributeValueId))
                    .col(integer(ProductLineAttributeValue::ProductLineId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PRODUCTLINE_ATTRIBUTEVALUE_ATTRIBUTE_VALUE_ID)
                            .from(
                                ProductLineAttributeValue::Table,
                                ProductLineAttributeValue::AttributeValueId,
                            )
                            .to(InventoryAttributeValue::Table, InventoryAttributeValue::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PRODUCTLINE_ATTRIBUTEVALUE_PRODUCT_LINE_ID)
                            .from(
                                ProductLineAttributeValue::Table,
                                ProductLineAttributeValue::ProductLineId,
                            )
                            .to(InventoryProductLine::Table, InventoryProductLine::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRODUCTLINE_ATTRIBUTEVALUE_ATTRIBUTE_VALUE_ID)
                    .table(ProductLineAttributeValue::Table)
                    .col(ProductLineAttributeValue::AttributeValueId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRODUCTLINE_ATTRIBUTEVALUE_PRODUCT_LINE_ID)
                    .table(ProductLineAttributeValue::Table)
                    .col(ProductLineAttributeValue::ProductLineId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRODUCTLINE_ATTRIBUTEVALUE_PRODUCT_LINE_ID)
                    .table(ProductLineAttributeValue::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRODUCTLINE_ATTRIBUTEVALUE_ATTRIBUTE_VALUE_ID)
                    .table(ProductLineAttributeValue::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(ProductLineAttributeValue::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ProductLineAttributeValue {
    #[sea_orm(iden = "inventory_productline_attributevalue")]
    Table,
    Id,
    AttributeValueId,
    ProductLineId,
}
