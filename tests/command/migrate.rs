use inventory::data::{
    category::CategoryRepository,
    product::{NewProduct, ProductRepository},
    product_type::ProductTypeRepository,
};
use sea_orm::Database;

use super::*;

/// Expected: "No app has been specified" with no database touched
#[tokio::test]
async fn fails_without_app_label() {
    let result = migrate(&MigrateArgs::new(None, Some("inventory_db")), &config()).await;

    match result {
        Err(Error::CommandError(err)) => {
            assert_eq!(err, CommandError::NoAppLabel);
            assert_eq!(err.to_string(), "No app has been specified");
        }
        other => panic!("expected NoAppLabel, got {:?}", other.map(|_| ())),
    }
}

/// Expected: "No database supplied"
#[tokio::test]
async fn fails_without_database() {
    let result = migrate(&MigrateArgs::new(Some("inventory"), None), &config()).await;

    match result {
        Err(Error::CommandError(err)) => {
            assert_eq!(err, CommandError::NoDatabase);
            assert_eq!(err.to_string(), "No database supplied");
        }
        other => panic!("expected NoDatabase, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn migrates_inventory_database() -> Result<(), Error> {
    let outcome = migrate(
        &MigrateArgs::new(Some("inventory"), Some("inventory_db")),
        &config(),
    )
    .await?;

    assert_eq!(outcome, MigrateOutcome::Applied(10));

    Ok(())
}

/// Expected: the migrated schema accepts rows written through the entities
/// and enforces the same constraints
#[tokio::test]
async fn migrated_schema_matches_entities() -> Result<(), Error> {
    let db = Database::connect("sqlite::memory:").await?;
    apply(&db).await?;

    let category_repo = CategoryRepository::new(&db);
    let product_type_repo = ProductTypeRepository::new(&db);
    let product_repo = ProductRepository::new(&db);

    let category = category_repo.create("Garden", None).await?;
    let product_type = product_type_repo.create("Tools", None).await?;
    let product = product_repo
        .create(
            NewProduct {
                pid: "GT-001".to_string(),
                name: "Garden Trowel".to_string(),
                category_id: Some(category.id),
                ..Default::default()
            },
            &[product_type.id],
        )
        .await?;

    assert_eq!(product.slug, "garden-trowel");
    assert_eq!(product_repo.product_types(&product).await?, vec![product_type]);
    assert!(category_repo.delete(category.id).await.is_err());

    Ok(())
}
