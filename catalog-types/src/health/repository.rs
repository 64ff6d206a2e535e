use crate::health::SyncHealth;
use typesafe_repository::async_ops::{Add, Get, Save};
use typesafe_repository::Repository;

pub trait HealthRepository:
    Repository<SyncHealth, Error = anyhow::Error>
    + Add<SyncHealth>
    + Get<SyncHealth>
    + Save<SyncHealth>
    + Send
    + Sync
{
}
