use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InventoryAttribute::Table)
                    .if_not_exists()
                    .col(pk_auto(InventoryAttribute::Id))
                    .col(string_len_uniq(InventoryAttribute::Name, 100))
                    .col(text_null(InventoryAttribute::Description))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InventoryAttribute::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum InventoryAttribute {
    Table,
    Id,
    Name,
    Description,
}
