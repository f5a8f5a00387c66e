use crate::TestContext;

pub mod data;
pub mod factory;

impl TestContext {
    /// Fixture helpers for inserting inventory records.
    pub fn inventory<'a>(&'a self) -> InventoryFixtures<'a> {
        InventoryFixtures { setup: self }
    }
}

pub struct InventoryFixtures<'a> {
    pub setup: &'a TestContext,
}
