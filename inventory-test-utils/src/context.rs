//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{constant::TEST_DATABASE_URL, error::TestError};

/// A test environment backed by an in-memory SQLite database.
///
/// ```ignore
/// let test = TestBuilder::new().with_inventory_tables().build().await?;
///
/// let category = test.inventory().insert_mock_category("Shoes").await?;
/// let repo = CategoryRepository::new(&test.db);
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Open a fresh in-memory database with no tables.
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect(TEST_DATABASE_URL).await?;

        Ok(TestContext { db })
    }

    /// Execute CREATE TABLE statements in the order given.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
