//! Declarative test builder.
//!
//! Tables and fixtures are queued on the builder and created in a single
//! `build()` call, so a test reads as a description of the state it needs.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_inventory_tables: bool,

    // Database fixtures to insert
    categories: Vec<String>,
    seasonal_events: Vec<String>,
    product_types: Vec<String>,
    attributes: Vec<String>,
    products: Vec<(String, Option<String>)>, // (product name, category name)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_inventory_tables: false,
            categories: Vec::new(),
            seasonal_events: Vec::new(),
            product_types: Vec::new(),
            attributes: Vec::new(),
            products: Vec::new(),
        }
    }

    /// Add every inventory table to the test database.
    ///
    /// Tables are created in dependency order so foreign keys always point at
    /// an existing table.
    pub fn with_inventory_tables(mut self) -> Self {
        self.include_inventory_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// ```no_run
    /// use inventory_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), inventory_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Category)
    ///     .with_table(SeasonalEvent)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a top level category with the given name.
    pub fn with_mock_category(mut self, name: &str) -> Self {
        self.categories.push(name.to_string());
        self
    }

    /// Insert a seasonal event with the given name.
    pub fn with_mock_seasonal_event(mut self, name: &str) -> Self {
        self.seasonal_events.push(name.to_string());
        self
    }

    /// Insert a top level product type with the given name.
    pub fn with_mock_product_type(mut self, name: &str) -> Self {
        self.product_types.push(name.to_string());
        self
    }

    /// Insert an attribute with the given name.
    pub fn with_mock_attribute(mut self, name: &str) -> Self {
        self.attributes.push(name.to_string());
        self
    }

    /// Insert a product, optionally filed under a category queued with
    /// [`with_mock_category`](Self::with_mock_category).
    pub fn with_mock_product(mut self, name: &str, category: Option<&str>) -> Self {
        self.products
            .push((name.to_string(), category.map(str::to_string)));
        self
    }

    /// Build the test context.
    ///
    /// Creates tables first, then inserts fixtures parents before children.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_inventory_tables {
            all_tables.extend(inventory_tables());
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        let mut categories = Vec::new();
        for name in &self.categories {
            categories.push(setup.inventory().insert_mock_category(name).await?);
        }

        for name in &self.seasonal_events {
            setup.inventory().insert_mock_seasonal_event(name).await?;
        }

        for name in &self.product_types {
            setup.inventory().insert_mock_product_type(name, None).await?;
        }

        for name in &self.attributes {
            setup.inventory().insert_mock_attribute(name).await?;
        }

        for (name, category) in &self.products {
            let category_id = category
                .as_ref()
                .and_then(|category| categories.iter().find(|c| &c.name == category))
                .map(|c| c.id);

            setup
                .inventory()
                .insert_mock_product(name, category_id)
                .await?;
        }

        Ok(setup)
    }
}

/// CREATE TABLE statements for every inventory entity, parents first.
pub fn inventory_tables() -> Vec<TableCreateStatement> {
    use entity::prelude::*;

    let schema = Schema::new(sea_orm::DbBackend::Sqlite);
    vec![
        schema.create_table_from_entity(Category),
        schema.create_table_from_entity(SeasonalEvent),
        schema.create_table_from_entity(ProductType),
        schema.create_table_from_entity(Product),
        schema.create_table_from_entity(ProductProductType),
        schema.create_table_from_entity(Attribute),
        schema.create_table_from_entity(AttributeValue),
        schema.create_table_from_entity(ProductLine),
        schema.create_table_from_entity(ProductLineAttributeValue),
        schema.create_table_from_entity(ProductImage),
    ]
}
