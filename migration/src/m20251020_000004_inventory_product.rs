use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251020_000001_inventory_category::InventoryCategory,
    m20251020_000002_inventory_seasonal_event::InventorySeasonalEvent,
};

static IDX_INVENTORY_PRODUCT_CATEGORY_ID: &str = "idx-inventory_product-category_id";
static IDX_INVENTORY_PRODUCT_SEASONAL_EVENT_ID: &str = "idx-inventory_product-seasonal_event_id";
static FK_INVENTORY_PRODUCT_CATEGORY_ID: &str = "fk-inventory_product-category_id";
static FK_INVENTORY_PRODUCT_SEASONAL_EVENT_ID: &str = "fk-inventory_product-seasonal_event_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InventoryProduct::Table)
                    .if_not_exists()
                    .col(pk_auto(InventoryProduct::Id))
                    .col(integer_null(InventoryProduct::CategoryId))
                    .col(integer_null(InventoryProduct::SeasonalEventId))
                    .col(string_len_uniq(InventoryProduct::Pid, 255))
                    .col(string_len_uniq(InventoryProduct::Name, 200))
                    .col(string_len_uniq(InventoryProduct::Slug, 220))
                    .col(text_null(InventoryProduct::Description))
                    .col(boolean(InventoryProduct::IsDigital).default(false))
                    .col(timestamp(InventoryProduct::CreatedAt))
                    .col(timestamp(InventoryProduct::UpdatedAt))
                    .col(boolean(InventoryProduct::IsActive).default(false))
                    .col(string_len(InventoryProduct::StockStatus, 3).default("OOS"))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_INVENTORY_PRODUCT_CATEGORY_ID)
                            .from(InventoryProduct::Table, InventoryProduct::CategoryId)
                            .to(InventoryCategory::Table, InventoryCategory::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_INVENTORY_PRODUCT_SEASONAL_EVENT_ID)
                            .from(InventoryProduct::Table, InventoryProduct::SeasonalEventId)
                            .to(InventorySeasonalEvent::Table, InventorySeasonalEvent::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INVENTORY_PRODUCT_CATEGORY_ID)
                    .table(InventoryProduct::Table)
                    .col(InventoryProduct::CategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INVENTORY_PRODUCT_SEASONAL_EVENT_ID)
                    .table(InventoryProduct::Table)
                    .col(InventoryProduct::SeasonalEventId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INVENTORY_PRODUCT_SEASONAL_EVENT_ID)
                    .table(InventoryProduct::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INVENTORY_PRODUCT_CATEGORY_ID)
                    .table(InventoryProduct::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(InventoryProduct::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum InventoryProduct {
    Table,
    Id,
    CategoryId,
    SeasonalEventId,
    Pid,
    Name,
    Slug,
    Description,
    IsDigital,
    CreatedAt,
    UpdatedAt,
    IsActive,
    StockStatus,
}
