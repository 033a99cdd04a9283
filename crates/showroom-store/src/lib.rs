//! # Showroom Store
//!
//! Saved configurations for the vehicle configurator.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          showroom-store                                 │
//! │                                                                         │
//! │  ┌─────────────────────┐      ┌──────────────────────────────────────┐ │
//! │  │  SavedConfiguration │      │  SnapshotStore                       │ │
//! │  │  id, name, snapshot │─────►│  ├── MemoryStore                     │ │
//! │  │  total, saved_at    │      │  └── FileStore (<dir>/<name>.json)   │ │
//! │  └─────────────────────┘      └──────────────────────────────────────┘ │
//! │            ▲                                                            │
//! │            │ capture / open                                             │
//! │  ┌─────────┴───────────┐                                                │
//! │  │  showroom-core      │                                                │
//! │  │  Configurator       │                                                │
//! │  └─────────────────────┘                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! use showroom_store::{FileStore, SavedConfiguration, SnapshotStore};
//!
//! let mut store = FileStore::open_default()?;
//! store.save(&SavedConfiguration::capture("weekend", &session)?)?;
//! let session = store.load("weekend")?.open(catalog)?;
//! ```

pub mod error;
pub mod record;
pub mod repository;

pub use error::{StoreError, StoreResult};
pub use record::{validate_name, SavedConfiguration};
pub use repository::file::{default_dir, FileStore};
pub use repository::memory::MemoryStore;
pub use repository::SnapshotStore;

/// Maximum length of a saved configuration name.
pub const MAX_NAME_LEN: usize = 64;
