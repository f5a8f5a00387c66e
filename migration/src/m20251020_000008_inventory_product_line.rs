use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000004_inventory_product::InventoryProduct;

static IDX_INVENTORY_PRODUCT_LINE_PRODUCT_ID: &str = "idx-inventory_product_line-product_id";
static FK_INVENTORY_PRODUCT_LINE_PRODUCT_ID: &str = "fk-inventory_product_line-product_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InventoryProductLine::Table)
                    .if_not_exists()
                    .col(pk_auto(InventoryProductLine::Id))
                    .col(integer(InventoryProductLine::ProductId))
                    .col(decimal_len(InventoryProductLine::Price, 5, 2))
                    .col(uuid_uniq(InventoryProductLine::Sku))
                    .col(integer(InventoryProductLine::StockQty).default(0))
                    .col(boolean(InventoryProductLine::IsActive).default(false))
                    .col(integer(InventoryProductLine::Order))
                    .col(double(InventoryProductLine::Weight))
                    .col(timestamp(InventoryProductLine::CreatedAt))
                    .col(timestamp(InventoryProductLine::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_INVENTORY_PRODUCT_LINE_PRODUCT_ID)
                            .from(InventoryProductLine::Table, InventoryProductLine::ProductId)
                            .to(InventoryProduct::Table, InventoryProduct::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INVENTORY_PRODUCT_LINE_PRODUCT_ID)
                    .table(InventoryProductLine::Table)
                    .col(InventoryProductLine::ProductId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INVENTORY_PRODUCT_LINE_PRODUCT_ID)
                    .table(InventoryProductLine::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(InventoryProductLine::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum InventoryProductLine {
    Table,
    Id,
    ProductId,
    Price,
    Sku,
    StockQty,
    IsActive,
    Order,
    Weight,
    CreatedAt,
    UpdatedAt,
}
