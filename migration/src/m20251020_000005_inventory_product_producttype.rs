use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251020_000003_inventory_product_type::InventoryProductType,
    m20251020_000004_inventory_product::InventoryProduct,
};

static IDX_PRODUCT_PRODUCTTYPE_PRODUCT_ID: &str = "idx-inventory_product_producttype-product_id";
static IDX_PRODUCT_PRODUCTTYPE_PRODUCT_TYPE_ID: &str =
    "idx-inventory_product_producttype-product_type_id";
static FK_PRODUCT_PRODUCTTYPE_PRODUCT_ID: &str = "fk-inventory_product_producttype-product_id";
static FK_PRODUCT_PRODUCTTYPE_PRODUCT_TYPE_ID: &str =
    "fk-inventory_product_producttype-product_type_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductProductType::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductProductType::Id))
                    .col(integer(ProductProductType::ProductId))
                    .col(integer(ProductProductType::ProductTypeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PRODUCT_PRODUCTTYPE_PRODUCT_ID)
                            .from(ProductProductType::Table, ProductProductType::ProductId)
                            .to(InventoryProduct::Table, InventoryProduct::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PRODUCT_PRODUCTTYPE_PRODUCT_TYPE_ID)
                            .from(ProductProductType::Table, ProductProductType::ProductTypeId)
                            .to(InventoryProductType::Table, InventoryProductType::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRODUCT_PRODUCTTYPE_PRODUCT_ID)
                    .table(ProductProductType::Table)
                    .col(ProductProductType::ProductId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRODUCT_PRODUCTTYPE_PRODUCT_TYPE_ID)
                    .table(ProductProductType::Table)
                    .col(ProductProductType::ProductTypeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRODUCT_PRODUCTTYPE_PRODUCT_TYPE_ID)
                    .table(ProductProductType::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRODUCT_PRODUCTTYPE_PRODUCT_ID)
                    .table(ProductProductType::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProductProductType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ProductProductType {
    #[sea_orm(iden = "inventory_product_producttype")]
    Table,
    Id,
    ProductId,
    ProductTypeId,
}
