//! In-memory storage backend.
//!
//! Holds every collection in a `Vec` of items behind `Arc<RwLock<_>>`. Used
//! by the tests and by `--backend memory`, where it is seeded with the demo
//! data from `mock_data`.

mod store;

pub use store::InMemoryStore;
