pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod schema;

pub use error::{Result, StorageError};
pub use repository::{
    Filter, RecordStore, SharedStore,
    memory::InMemoryStore,
    postgres::{Database, PoolSettings},
    query,
};
