use sea_orm_migration::{prelude::*, schema::*};

static IDX_INVENTORY_CATEGORY_PARENT_ID: &str = "idx-inventory_category-parent_id";
static FK_INVENTORY_CATEGORY_PARENT_ID: &str = "fk-inventory_category-parent_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InventoryCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(InventoryCategory::Id))
                    .col(integer_null(InventoryCategory::ParentId))
                    .col(string_len(InventoryCategory::Name, 100).default(""))
                    .col(string_len_uniq(InventoryCategory::Slug, 120))
                    .col(boolean(InventoryCategory::IsActive).default(false))
                    .col(integer(InventoryCategory::Level).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_INVENTORY_CATEGORY_PARENT_ID)
                            .from(InventoryCategory::Table, InventoryCategory::ParentId)
                            .to(InventoryCategory::Table, InventoryCategory::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INVENTORY_CATEGORY_PARENT_ID)
                    .table(InventoryCategory::Table)
                    .col(InventoryCategory::ParentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INVENTORY_CATEGORY_PARENT_ID)
                    .table(InventoryCategory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(InventoryCategory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum InventoryCategory {
    Table,
    Id,
    ParentId,
    Name,
    Slug,
    IsActive,
    Level,
}
