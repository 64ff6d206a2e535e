//! Normalized catalog entities produced by the feed transformer.
//!
//! Each entity is identified by its natural key (supplier codes, names, urls),
//! never by a database id. Parents are referenced by natural key too; the
//! loader turns those references into surrogate ids through [`Linked`].

use crate::RowId;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::hash::Hash;
use time::Date;
use typesafe_repository::macros::Id;
use typesafe_repository::{Identity, IdentityOf, RefIdentity};

pub mod repository;

pub const DEFAULT_CURRENCY: &str = "EUR";
pub const DEFAULT_PRICE_TYPE: &str = "retail";
pub const DEFAULT_WAREHOUSE: &str = "main";

#[derive(Id, Clone, Debug, PartialEq, Eq)]
#[Id(ref_id)]
pub struct Category {
    #[id]
    pub code: String,
    pub name: String,
    pub path: Option<String>,
}

#[derive(Id, Clone, Debug, PartialEq, Eq)]
#[Id(ref_id)]
pub struct Producer {
    #[id]
    pub name: String,
}

#[derive(Id, Clone, Debug, PartialEq, Eq)]
#[Id(ref_id)]
pub struct Unit {
    #[id]
    pub code: String,
    pub name: String,
    pub moq: i32,
}

#[derive(Id, Clone, Debug, PartialEq, Eq)]
#[Id(ref_id)]
pub struct Product {
    #[id]
    pub code: String,
    pub ean: Option<String>,
    pub name: String,
    pub category: Option<IdentityOf<Category>>,
    pub producer: Option<IdentityOf<Producer>>,
    pub unit: Option<IdentityOf<Unit>>,
    pub description_short: Option<String>,
    pub description_long: Option<String>,
    pub description_html: Option<String>,
    pub vat: Option<Decimal>,
    pub delivery_date: Option<String>,
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariantKey {
    pub product_code: String,
    pub code: String,
}

impl VariantKey {
    pub fn new(product_code: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            product_code: product_code.into(),
            code: code.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variant {
    pub key: VariantKey,
    pub weight: Decimal,
    pub gross_weight: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StockKey {
    pub variant: VariantKey,
    pub warehouse: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stock {
    pub key: StockKey,
    pub quantity: i64,
    pub available: bool,
    pub min_order_quantity: i32,
}

impl Stock {
    pub fn new(key: StockKey, quantity: i64, min_order_quantity: i32) -> Self {
        let quantity = quantity.max(0);
        Self {
            key,
            quantity,
            available: quantity > 0,
            min_order_quantity: min_order_quantity.max(1),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PriceKey {
    pub variant: VariantKey,
    pub kind: String,
    pub currency: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Price {
    pub key: PriceKey,
    pub gross: Decimal,
    pub net: Decimal,
    pub srp_gross: Option<Decimal>,
    pub srp_net: Option<Decimal>,
    pub valid_from: Option<Date>,
    pub valid_to: Option<Date>,
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImageKey {
    pub product_code: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    pub key: ImageKey,
    pub is_main: bool,
    pub display_order: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentKey {
    pub product_code: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub key: DocumentKey,
    pub name: Option<String>,
    pub kind: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropertyKey {
    pub product_code: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductProperty {
    pub key: PropertyKey,
    pub value: String,
}

macro_rules! keyed_by {
    ($entity:ty, $key:ty) => {
        impl Identity for $entity {
            type Id = $key;
        }

        impl RefIdentity for $entity {
            fn id_ref(&self) -> &Self::Id {
                &self.key
            }
        }
    };
}

keyed_by!(Variant, VariantKey);
keyed_by!(Stock, StockKey);
keyed_by!(Price, PriceKey);
keyed_by!(Image, ImageKey);
keyed_by!(Document, DocumentKey);
keyed_by!(ProductProperty, PropertyKey);

/// Surrogate ids of the parents an entity references, resolved by the loader
/// after the parent tier has been persisted.
pub trait Links {
    type Links: Clone + std::fmt::Debug + Send + Sync;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProductLinks {
    pub category_id: Option<RowId>,
    pub producer_id: Option<RowId>,
    pub unit_id: Option<RowId>,
}

impl Links for Category {
    type Links = ();
}

impl Links for Producer {
    type Links = ();
}

impl Links for Unit {
    type Links = ();
}

impl Links for Product {
    type Links = ProductLinks;
}

/// Id of the owning product.
impl Links for Variant {
    type Links = RowId;
}

/// Id of the owning variant.
impl Links for Stock {
    type Links = RowId;
}

/// Id of the owning variant.
impl Links for Price {
    type Links = RowId;
}

/// Id of the owning product.
impl Links for Image {
    type Links = RowId;
}

/// Id of the owning product.
impl Links for Document {
    type Links = RowId;
}

/// Id of the owning product.
impl Links for ProductProperty {
    type Links = RowId;
}

#[derive(Clone, Debug)]
pub struct Linked<V: Links> {
    pub entity: V,
    pub links: V::Links,
}

impl<V: Links> Linked<V> {
    pub fn new(entity: V, links: V::Links) -> Self {
        Self { entity, links }
    }
}

impl<V: Links<Links = ()>> From<V> for Linked<V> {
    fn from(entity: V) -> Self {
        Self { entity, links: () }
    }
}

/// Outcome of one upsert batch: which natural keys map to which row ids and
/// how many rows were inserted versus updated in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Upserted<K: Eq + Hash> {
    pub ids: HashMap<K, RowId>,
    pub created: u64,
    pub updated: u64,
}

impl<K: Eq + Hash> Default for Upserted<K> {
    fn default() -> Self {
        Self {
            ids: HashMap::new(),
            created: 0,
            updated: 0,
        }
    }
}

impl<K: Eq + Hash> Upserted<K> {
    pub fn record(&mut self, key: K, id: RowId, inserted: bool) {
        self.ids.insert(key, id);
        if inserted {
            self.created += 1;
        } else {
            self.updated += 1;
        }
    }

    pub fn merge(&mut self, other: Upserted<K>) {
        self.ids.extend(other.ids);
        self.created += other.created;
        self.updated += other.updated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_availability_follows_quantity() {
        let key = StockKey {
            variant: VariantKey::new("P1", "V1"),
            warehouse: DEFAULT_WAREHOUSE.to_string(),
        };
        assert!(Stock::new(key.clone(), 5, 1).available);
        let empty = Stock::new(key.clone(), -3, 0);
        assert_eq!(empty.quantity, 0);
        assert!(!empty.available);
        assert_eq!(empty.min_order_quantity, 1);
    }

    #[test]
    fn merges_upsert_outcomes() {
        let mut a = Upserted::default();
        a.record("P1".to_string(), 1, true);
        let mut b = Upserted::default();
        b.record("P2".to_string(), 2, false);
        b.record("P3".to_string(), 3, true);
        a.merge(b);
        assert_eq!(a.created, 2);
        assert_eq!(a.updated, 1);
        assert_eq!(a.ids.get("P3"), Some(&3));
    }
}
