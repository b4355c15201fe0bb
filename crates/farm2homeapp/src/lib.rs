//! # Farm2Home Architecture
//!
//! Farm2Home is a **UI-agnostic storefront state library**: a shopping cart and
//! a farmer registry, each persisted to local key-value storage. The command
//! line client in `crates/farm2home` is one presentation layer over it; a web
//! or desktop front end could drive the same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation (crates/farm2home)                            │
//! │  - Parses intents, renders results, asks for confirmation   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session's Cart and FarmerRegistry               │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per area: catalog, cart, farmers, reset       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Stores (cart.rs, registry.rs)                              │
//! │  - Invariants: unique cart ids, newest-first farmers,       │
//! │    monotonic farmer ids                                     │
//! │  - Emit StoreEvent after every mutation                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait: FsBackend, MemBackend              │
//! │  - PersistedCollection: load, mutate, rewrite               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Storage Never Breaks the Session
//!
//! Reading corrupt data yields an empty collection; a failed write keeps the
//! in-memory state. Both are logged through `tracing` and never surfaced. The
//! only error a user sees from the stores is a registration form that fails
//! validation.
//!
//! ## Execution Model
//!
//! Single-threaded and synchronous: each operation runs to completion before
//! the next one starts. Two processes sharing a data directory may overwrite
//! each other's changes (last write wins).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Operations returning `CmdResult`
//! - [`cart`]: Cart Store
//! - [`registry`]: Farmer Registry Store
//! - [`validation`]: Registration form rules
//! - [`catalog`]: Static products, deals and categories
//! - [`events`]: State-change notifications
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types
//! - [`config`]: Configuration loading
//! - [`init`]: Session setup and data directory resolution
//! - [`error`]: Error types

pub mod api;
pub mod cart;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod init;
pub mod model;
pub mod registry;
pub mod store;
pub mod validation;

#[cfg(test)]
pub mod test_utils;
