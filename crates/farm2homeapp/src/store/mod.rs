//! # Storage Layer
//!
//! Farm2Home keeps its state the way a browser page keeps `localStorage`: a flat,
//! string-keyed map where each key holds one JSON document. The
//! [`backend::StorageBackend`] trait is that map; [`collection::PersistedCollection`]
//! is the load-mutate-save lifecycle built on top of it.
//!
//! ## Lifecycle
//!
//! 1. **Initialize**: read the key and parse it as a JSON array. A missing key,
//!    an unreadable backend or malformed JSON all produce an empty collection.
//!    Failures are logged, never returned.
//! 2. **Mutate**: callers compute the new sequence in memory.
//! 3. **Replace**: the whole sequence is serialized and written back. A failed
//!    write is logged and the in-memory state is kept, so the session continues
//!    in memory only.
//!
//! There is no locking. Two processes writing the same key race and the last
//! write wins.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one `<key>.json` file per key, atomic writes.
//! - [`mem_backend::MemBackend`]: in-memory map for tests, with write-failure
//!   simulation.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/
//! ├── farm2home_cart.json      # CartEntry array
//! └── farm2home_farmers.json   # FarmerRecord array, newest first
//! ```

pub mod backend;
pub mod collection;
pub mod fs_backend;
pub mod mem_backend;

/// Key holding the serialized cart.
pub const CART_KEY: &str = "farm2home_cart";

/// Key holding the serialized farmer registry.
pub const FARMERS_KEY: &str = "farm2home_farmers";
