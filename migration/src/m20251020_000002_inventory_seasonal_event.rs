use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InventorySeasonalEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(InventorySeasonalEvent::Id))
                    .col(timestamp(InventorySeasonalEvent::StartDate))
                    .col(timestamp(InventorySeasonalEvent::EndDate))
                    .col(string_len_uniq(InventorySeasonalEvent::Name, 100))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InventorySeasonalEvent::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum InventorySeasonalEvent {
    Table,
    Id,
    StartDate,
    EndDate,
    Name,
}
