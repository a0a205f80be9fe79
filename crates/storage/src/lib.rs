#![forbid(unsafe_code)]

pub mod auth_store;
pub mod repository;
pub mod sqlite;

pub use auth_store::AuthStore;
pub use repository::{InMemoryRepository, KeyValueRepository, Storage, StorageError};
