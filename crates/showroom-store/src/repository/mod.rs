//! # Repository Module
//!
//! Storage backends for saved configurations.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Front end                                                             │
//! │       │                                                                 │
//! │       │  store.save(SavedConfiguration::capture("weekend", &session)?) │
//! │       ▼                                                                 │
//! │  SnapshotStore (trait)                                                 │
//! │  ├── save(&mut self, record)                                           │
//! │  ├── load(&self, name)                                                 │
//! │  ├── list(&self)                                                       │
//! │  └── delete(&mut self, name)                                           │
//! │       │                                                                 │
//! │       ├──► MemoryStore   (tests, throwaway sessions)                   │
//! │       └──► FileStore     (one JSON file per name on the device)        │
//! │                                                                         │
//! │  A remote document store is another implementation of the same trait. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`MemoryStore`](memory::MemoryStore) - In-process map
//! - [`FileStore`](file::FileStore) - JSON files in a directory

pub mod file;
pub mod memory;

use crate::error::StoreResult;
use crate::record::SavedConfiguration;

/// Persistence boundary for saved configurations.
///
/// Calls are synchronous and run to completion; a store is owned by one
/// session at a time.
pub trait SnapshotStore {
    /// Saves a record under its name, replacing any record with that name.
    fn save(&mut self, record: &SavedConfiguration) -> StoreResult<()>;

    /// Loads a record by name, or `NotFound`.
    fn load(&self, name: &str) -> StoreResult<SavedConfiguration>;

    /// All records, sorted by name.
    fn list(&self) -> StoreResult<Vec<SavedConfiguration>>;

    /// Removes a record by name, or `NotFound`.
    fn delete(&mut self, name: &str) -> StoreResult<()>;
}
