use entity::sea_orm_active_enums::StockStatus;

use super::*;
use crate::data::product::{NewProduct, ProductRepository};

fn new_product(name: &str) -> NewProduct {
    NewProduct {
        pid: format!("pid-{}", entity::slug::slugify(name)),
        name: name.to_string(),
        ..Default::default()
    }
}

mod create {
    use super::*;

    /// Expect defaults, slug and timestamps to be filled on insert
    #[tokio::test]
    async fn creates_product_with_defaults() -> Result<(), TestError> {
        let test = TestBuilder::new().with_inventory_tables().build().await?;

        let product_repo = ProductRepository::new(&test.db);
        let product = product_repo.create(new_product("Trail Runner 2"), &[]).await?;

        assert_eq!(product.slug, "trail-runner-2");
        assert_eq!(product.stock_status, StockStatus::OutOfStock);
        assert!(!product.is_active);
        assert!(!product.is_digital);
        assert_eq!(product.description, None);
        assert_eq!(product.created_at, product.updated_at);

        Ok(())
    }

    /// Expect every requested product type to be linked
    #[tokio::test]
    async fn links_product_types() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_inventory_tables()
            .with_mock_product_type("Shoes")
            .with_mock_product_type("Outdoor")
            .build()
            .await?;

        let product_repo = ProductRepository::new(&test.db);
        let product = product_repo.create(new_product("Hiking Boot"), &[1, 2]).await?;
        let product_types = product_repo.product_types(&product).await?;

        let names: Vec<&str> = product_types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Outdoor", "Shoes"]);

        Ok(())
    }

    /// Expect Error and no saved product when a product type does not exist
    #[tokio::test]
    async fn fails_for_nonexistent_product_type() -> Result<(), TestError> {
        let test = TestBuilder::new().with_inventory_tables().build().await?;

        let product_repo = ProductRepository::new(&test.db);
        let result = product_repo.create(new_product("Orphan"), &[99]).await;

        assert!(result.is_err());
        assert!(product_repo.get_by_pid("pid-orphan").await?.is_none());

        // The pid is free again after the rollback
        let retried = product_repo.create(new_product("Orphan"), &[]).await?;
        assert_eq!(retried.pid, "pid-orphan");

        Ok(())
    }

    /// Expect Error when the pid is already taken
    #[tokio::test]
    async fn fails_for_duplicate_pid() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_inventory_tables()
            .with_mock_product("Desk Lamp", None)
            .build()
            .await?;

        let product_repo = ProductRepository::new(&test.db);
        let product = NewProduct {
            pid: "pid-desk-lamp".to_string(),
            name: "Floor Lamp".to_string(),
            ..Default::default()
        };
        let result = product_repo.create(product, &[]).await;

        assert!(result.is_err());

        Ok(())
    }

    /// Expect Error when the product name is already taken
    #[tokio::test]
    async fn fails_for_duplicate_name() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_inventory_tables()
            .with_mock_product("Desk Lamp", None)
            .build()
            .await?;

        let product_repo = ProductRepository::new(&test.db);
        let product = NewProduct {
            pid: "pid-other".to_string(),
            name: "Desk Lamp".to_string(),
            ..Default::default()
        };
        let result = product_repo.create(product, &[]).await;

        assert!(result.is_err());

        Ok(())
    }
}

mod lookup {
    use super::*;

    #[tokio::test]
    async fn finds_product_by_slug_and_pid() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_inventory_tables()
            .with_mock_product("Coffee Grinder", None)
            .build()
            .await?;

        let product_repo = ProductRepository::new(&test.db);
        let by_slug = product_repo.get_by_slug("coffee-grinder").await?;
        let by_pid = product_repo.get_by_pid("pid-coffee-grinder").await?;

        assert!(by_slug.is_some());
        assert_eq!(by_slug, by_pid);

        Ok(())
    }

    /// Expect only active products in name order
    #[tokio::test]
    async fn lists_active_products_by_name() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_inventory_tables()
            .with_mock_product("Zither", None)
            .with_mock_product("Accordion", None)
            .with_mock_product("Banjo", None)
            .build()
            .await?;

        let product_repo = ProductRepository::new(&test.db);
        for slug in ["zither", "accordion"] {
            let product = product_repo.get_by_slug(slug).await?.unwrap();
            product_repo.set_active(product.id, true).await?;
        }

        let names: Vec<String> = product_repo
            .list_active()
            .await?
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Accordion", "Zither"]);

        Ok(())
    }

    #[tokio::test]
    async fn lists_products_of_category() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_inventory_tables()
            .with_mock_category("Audio")
            .with_mock_category("Video")
            .with_mock_product("Headphones", Some("Audio"))
            .with_mock_product("Projector", Some("Video"))
            .build()
            .await?;

        let product_repo = ProductRepository::new(&test.db);
        let headphones = product_repo.get_by_slug("headphones").await?.unwrap();
        let products = product_repo
            .list_for_category(headphones.category_id.unwrap())
            .await?;

        assert_eq!(products, vec![headphones]);

        Ok(())
    }
}

mod set_stock_status {
    use super::*;

    /// Expect the status to change, `created_at` to stay and `updated_at` to move forward
    #[tokio::test]
    async fn updates_status_and_timestamp() -> Result<(), TestError> {
        let test = TestBuilder::new().with_inventory_tables().build().await?;
        let product = test.inventory().insert_mock_product("Kettle", None).await?;

        let product_repo = ProductRepository::new(&test.db);
        let updated = product_repo
            .set_stock_status(product.id, StockStatus::InStock)
            .await?
            .unwrap();

        assert_eq!(updated.stock_status, StockStatus::InStock);
        assert_eq!(updated.created_at, product.created_at);
        assert!(updated.updated_at >= product.updated_at);
        assert_eq!(updated.slug, product.slug);

        Ok(())
    }

    #[tokio::test]
    async fn returns_none_for_missing_product() -> Result<(), TestError> {
        let test = TestBuilder::new().with_inventory_tables().build().await?;

        let product_repo = ProductRepository::new(&test.db);
        let result = product_repo
            .set_stock_status(7, StockStatus::Backordered)
            .await?;

        assert!(result.is_none());

        Ok(())
    }
}

mod delete {
    use sea_orm::{EntityTrait, PaginatorTrait};

    use super::*;

    /// Expect product type links to be removed along with the product
    #[tokio::test]
    async fn cascades_to_product_type_links() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_inventory_tables()
            .with_mock_product_type("Furniture")
            .build()
            .await?;

        let product_repo = ProductRepository::new(&test.db);
        let product = product_repo.create(new_product("Stool"), &[1]).await?;
        let result = product_repo.delete(product.id).await?;

        assert_eq!(result.rows_affected, 1);
        assert_eq!(
            entity::prelude::ProductProductType::find()
                .count(&test.db)
                .await?,
            0
        );
        assert_eq!(
            entity::prelude::ProductType::find().count(&test.db).await?,
            1
        );

        Ok(())
    }

    /// Expect Error while a product line references the product
    #[tokio::test]
    async fn fails_while_product_line_exists() -> Result<(), TestError> {
        let test = TestBuilder::new().with_inventory_tables().build().await?;
        let product = test.inventory().insert_mock_product("Bicycle", None).await?;
        test.inventory()
            .insert_mock_product_line(product.id, 1)
            .await?;

        let product_repo = ProductRepository::new(&test.db);
        let result = product_repo.delete(product.id).await;

        assert!(result.is_err());
        assert!(product_repo.get(product.id).await?.is_some());

        Ok(())
    }
}
