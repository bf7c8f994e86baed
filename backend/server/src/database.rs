//! # Vote Store
//!
//! One counter per kit id. Counters that were never incremented read as 0, so nothing has to
//! be seeded when the catalog grows.
//!
//! ## Redis
//!
//! - One hash, [`VOTES_KEY`], field = kit id, value = vote count
//! - `HINCRBY` is atomic and creates the field at 0 if missing
//! - `HGETALL` snapshots every counter for listing and ranking
//! - ~17k fields at most, small enough to sort in-process
//!
//! ## Memory
//!
//! Same semantics behind a mutex. Used for local runs and tests.
use std::{collections::HashMap, sync::Arc, time::Duration};

use parking_lot::Mutex;
use redis::{
    AsyncCommands, Client,
    aio::{ConnectionManager, ConnectionManagerConfig},
};
use tracing::info;

use crate::{
    config::{Config, StoreKind},
    error::StoreError,
};

pub const VOTES_KEY: &str = "votes";

#[derive(Clone)]
pub enum VoteStore {
    Redis(ConnectionManager),
    Memory(Arc<Mutex<HashMap<u32, u32>>>),
}

impl VoteStore {
    pub fn memory() -> Self {
        Self::Memory(Arc::new(Mutex::new(HashMap::new())))
    }

    pub async fn increment(&self, id: u32) -> Result<u32, StoreError> {
        match self {
            Self::Redis(connection) => {
                let mut connection = connection.clone();

                let count: u32 = connection.hincr(VOTES_KEY, id, 1u32).await?;

                Ok(count)
            }
            Self::Memory(votes) => {
                let mut votes = votes.lock();
                let count = votes.entry(id).or_insert(0);
                *count += 1;

                Ok(*count)
            }
        }
    }

    pub async fn count(&self, id: u32) -> Result<u32, StoreError> {
        match self {
            Self::Redis(connection) => {
                let mut connection = connection.clone();
                let count: Option<u32> = connection.hget(VOTES_KEY, id).await?;

                Ok(count.unwrap_or(0))
            }
            Self::Memory(votes) => Ok(votes.lock().get(&id).copied().unwrap_or(0)),
        }
    }

    pub async fn counts(&self) -> Result<HashMap<u32, u32>, StoreError> {
        match self {
            Self::Redis(connection) => {
                let mut connection = connection.clone();

                let counts: HashMap<u32, u32> = connection.hgetall(VOTES_KEY).await?;

                Ok(counts)
            }
            Self::Memory(votes) => Ok(votes.lock().clone()),
        }
    }
}

pub async fn init_store(config: &Config) -> Result<VoteStore, StoreError> {
    match config.store {
        StoreKind::Memory => {
            info!("Using in-memory vote store");

            Ok(VoteStore::memory())
        }
        StoreKind::Redis => {
            info!("Connecting to Redis vote store...");

            Ok(VoteStore::Redis(init_redis(&config.redis_url).await?))
        }
    }
}

pub async fn init_redis(redis_url: &str) -> Result<ConnectionManager, StoreError> {
    let config = ConnectionManagerConfig::new()
        .set_number_of_retries(1)
        .set_connection_timeout(Duration::from_millis(100));

    let client = Client::open(redis_url)?;
    let connection_manager = client.get_connection_manager_with_config(config).await?;

    Ok(connection_manager)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_increment() {
        let store = VoteStore::memory();

        assert_eq!(store.count(5).await.unwrap(), 0);
        assert_eq!(store.increment(5).await.unwrap(), 1);
        assert_eq!(store.increment(5).await.unwrap(), 2);
        assert_eq!(store.increment(9).await.unwrap(), 1);
        assert_eq!(store.count(5).await.unwrap(), 2);

        let counts = store.counts().await.unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&9], 1);
    }

    #[tokio::test]
    async fn test_memory_clones_share_counters() {
        let store = VoteStore::memory();
        let other = store.clone();

        other.increment(1).await.unwrap();
        assert_eq!(store.count(1).await.unwrap(), 1);
    }
}
