use sea_orm::entity::prelude::*;

/// Stock availability of a product, stored as a short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(3))")]
pub enum StockStatus {
    #[sea_orm(string_value = "IS")]
    InStock,
    #[sea_orm(string_value = "OOS")]
    OutOfStock,
    #[sea_orm(string_value = "BO")]
    Backordered,
}

impl StockStatus {
    /// Human readable label shown next to the stored code.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::OutOfStock => "Out of stock",
            Self::Backordered => "Back Ordered",
        }
    }
}

impl Default for StockStatus {
    fn default() -> Self {
        Self::OutOfStock
    }
}
