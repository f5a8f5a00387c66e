use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000006_inventory_attribute::InventoryAttribute;

static IDX_INVENTORY_ATTRIBUTE_VALUE_ATTRIBUTE_ID: &str =
    "idx-inventory_attribute_value-attribute_id";
static FK_INVENTORY_ATTRIBUTE_VALUE_ATTRIBUTE_ID: &str = "fk-inventory_attribute_value-attribute_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InventoryAttributeValue::Table)
                    .if_not_exists()
                    .col(pk_auto(InventoryAttributeValue::Id))
                    .col(integer(InventoryAttributeValue::AttributeId))
                    .col(string_len(InventoryAttributeValue::AttributeValue, 100))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_INVENTORY_ATTRIBUTE_VALUE_ATTRIBUTE_ID)
                            .from(
                                InventoryAttributeValue::Table,
                                InventoryAttributeValue::AttributeId,
                            )
                            .to(InventoryAttribute::Table, InventoryAttribute::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INVENTORY_ATTRIBUTE_VALUE_ATTRIBUTE_ID)
                    .table(InventoryAttributeValue::Table)
                    .col(InventoryAttributeValue::AttributeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INVENTORY_ATTRIBUTE_VALUE_ATTRIBUTE_ID)
                    .table(InventoryAttributeValue::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(InventoryAttributeValue::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum InventoryAttributeValue {
    Table,
    Id,
    AttributeId,
    AttributeValue,
}
