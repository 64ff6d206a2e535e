use derive_more::Display;
use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod health;
pub mod storage;

/// Surrogate primary key generated by the database on insert.
pub type RowId = i64;

/// Every entity kind the import pipeline persists, in load order.
#[derive(Serialize, Deserialize, Display, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    #[display("categories")]
    Categories,
    #[display("producers")]
    Producers,
    #[display("units")]
    Units,
    #[display("products")]
    Products,
    #[display("variants")]
    Variants,
    #[display("stock")]
    Stock,
    #[display("prices")]
    Prices,
    #[display("images")]
    Images,
    #[display("documents")]
    Documents,
    #[display("properties")]
    Properties,
}

impl EntityKind {
    pub const ALL: [EntityKind; 10] = [
        Self::Categories,
        Self::Producers,
        Self::Units,
        Self::Products,
        Self::Variants,
        Self::Stock,
        Self::Prices,
        Self::Images,
        Self::Documents,
        Self::Properties,
    ];
}
