use sea_orm_migration::{prelude::*, schema::*};

static IDX_INVENTORY_PRODUCT_TYPE_PARENT_ID: &str = "idx-inventory_product_type-parent_id";
static FK_INVENTORY_PRODUCT_TYPE_PARENT_ID: &str = "fk-inventory_product_type-parent_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InventoryProductType::Table)
                    .if_not_exists()
                    .col(pk_auto(InventoryProductType::Id))
                    .col(integer_null(InventoryProductType::ParentId))
                    .col(string_len(InventoryProductType::Name, 100))
                    .col(integer(InventoryProductType::Level).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_INVENTORY_PRODUCT_TYPE_PARENT_ID)
                            .from(InventoryProductType::Table, InventoryProductType::ParentId)
                            .to(InventoryProductType::Table, InventoryProductType::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INVENTORY_PRODUCT_TYPE_PARENT_ID)
                    .table(InventoryProductType::Table)
                    .col(InventoryProductType::ParentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INVENTORY_PRODUCT_TYPE_PARENT_ID)
                    .table(InventoryProductType::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(InventoryProductType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum InventoryProductType {
    Table,
    Id,
    ParentId,
    Name,
    Level,
}
