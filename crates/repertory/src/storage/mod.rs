//! Storage backend implementations.
//!
//! This module provides concrete implementations of `RecordStore` from
//! `repertory_core::store`. The backend is picked at runtime with
//! `--backend`; the DynamoDB backend is only compiled in with the `dynamodb`
//! feature (enabled by default).
//!
//! # Examples
//!
//! Build with DynamoDB (default):
//! ```bash
//! cargo build -p repertory
//! ```
//!
//! Build without the AWS SDK (in-memory only):
//! ```bash
//! cargo build -p repertory --no-default-features
//! ```

use std::sync::Arc;

use clap::ValueEnum;
use repertory_core::store::{Collection, RecordStore};

use crate::config::Config;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbStore;

pub use inmemory::InMemoryStore;

/// Which record store the process talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// DynamoDB, local or AWS.
    #[default]
    Dynamodb,
    /// In-process store seeded with demo data.
    Memory,
}

/// Build the process-wide store for the chosen backend.
pub async fn build_store(backend: Backend, config: &Config) -> anyhow::Result<Arc<dyn RecordStore>> {
    match backend {
        Backend::Memory => {
            let store = InMemoryStore::new();
            crate::mock_data::seed(&store).await?;
            tracing::info!(
                users = store.len(Collection::Users).await,
                pieces = store.len(Collection::Pieces).await,
                "Using in-memory store with demo data"
            );
            Ok(Arc::new(store))
        }
        #[cfg(feature = "dynamodb")]
        Backend::Dynamodb => Ok(Arc::new(DynamoDbStore::connect(config).await)),
        #[cfg(not(feature = "dynamodb"))]
        Backend::Dynamodb => {
            let _ = config;
            anyhow::bail!("DynamoDB backend requires the `dynamodb` feature")
        }
    }
}
