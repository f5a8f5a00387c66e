use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000008_inventory_product_line::InventoryProductLine;

static IDX_INVENTORY_PRODUCT_IMAGE_PRODUCT_LINE_ID: &str =
    "idx-inventory_product_image-product_line_id";
static FK_INVENTORY_PRODUCT_IMAGE_PRODUCT_LINE_ID: &str =
    "fk-inventory_product_image-product_line_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InventoryProductImage::Table)
                    .if_not_exists()
                    .col(pk_auto(InventoryProductImage::Id))
                    .col(integer(InventoryProductImage::ProductLineId))
                    .col(string_len(InventoryProductImage::AlternativeText, 100))
                    .col(string_len(InventoryProductImage::Url, 100))
                    .col(integer(InventoryProductImage::Order))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_INVENTORY_PRODUCT_IMAGE_PRODUCT_LINE_ID)
                            .from(
                                InventoryProductImage::Table,
                                InventoryProductImage::ProductLineId,
                            )
                            .to(InventoryProductLine::Table, InventoryProductLine::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INVENTORY_PRODUCT_IMAGE_PRODUCT_LINE_ID)
                    .table(InventoryProductImage::Table)
                    .col(InventoryProductImage::ProductLineId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INVENTORY_PRODUCT_IMAGE_PRODUCT_LINE_ID)
                    .table(InventoryProductImage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(InventoryProductImage::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum InventoryProductImage {
    Table,
    Id,
    ProductLineId,
    AlternativeText,
    Url,
    Order,
}
