use crate::catalog::{
    Category, Document, Image, Linked, Links, Price, Producer, Product, ProductProperty, Stock,
    Unit, Upserted, Variant,
};
use async_trait::async_trait;
use typesafe_repository::{Identity, IdentityOf, Repository};

/// Insert-or-update keyed on the entity's natural key.
///
/// Implementations update the named columns on conflict, report for every row
/// whether it was inserted or updated, and return the generated id of every
/// row in the batch so children can reference it.
#[async_trait]
pub trait UpsertBatch<V>: Repository<V>
where
    V: Identity + Links + Send + Sync,
    IdentityOf<V>: Eq + std::hash::Hash,
{
    async fn upsert_batch(
        &self,
        rows: &[Linked<V>],
    ) -> Result<Upserted<IdentityOf<V>>, Self::Error>;
}

pub trait CatalogRepository:
    Repository<Category, Error = anyhow::Error>
    + UpsertBatch<Category>
    + Repository<Producer, Error = anyhow::Error>
    + UpsertBatch<Producer>
    + Repository<Unit, Error = anyhow::Error>
    + UpsertBatch<Unit>
    + Repository<Product, Error = anyhow::Error>
    + UpsertBatch<Product>
    + Repository<Variant, Error = anyhow::Error>
    + UpsertBatch<Variant>
    + Repository<Stock, Error = anyhow::Error>
    + UpsertBatch<Stock>
    + Repository<Price, Error = anyhow::Error>
    + UpsertBatch<Price>
    + Repository<Image, Error = anyhow::Error>
    + UpsertBatch<Image>
    + Repository<Document, Error = anyhow::Error>
    + UpsertBatch<Document>
    + Repository<ProductProperty, Error = anyhow::Error>
    + UpsertBatch<ProductProperty>
    + Send
    + Sync
{
}

/// The single unit of work an import runs in. Nothing written through it is
/// visible to other sessions until [`CatalogTransaction::commit`].
#[async_trait]
pub trait CatalogTransaction: CatalogRepository {
    async fn commit(&mut self) -> Result<(), anyhow::Error>;
    async fn rollback(&mut self) -> Result<(), anyhow::Error>;
}

/// Explicitly constructed handle to the catalog database.
#[async_trait]
pub trait CatalogStore: Send {
    /// Takes the import lock for the rest of the session. Fails right away
    /// when another import holds it.
    async fn lock(&mut self) -> Result<(), anyhow::Error>;
    async fn unlock(&mut self) -> Result<(), anyhow::Error>;
    async fn begin<'a>(&'a mut self) -> Result<Box<dyn CatalogTransaction + 'a>, anyhow::Error>;
}
