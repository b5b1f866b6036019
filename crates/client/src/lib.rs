//! Shelf Client - Product store access and screen-state layer.
//!
//! This crate is the contract-bearing part of Shelf: everything a front
//! end needs to keep its product screens consistent with the remote
//! store.
//!
//! # Architecture
//!
//! - [`store`] - HTTP+JSON client for the remote `/products` collection
//! - [`state`] - List/filter state and the view-state machine
//! - [`config`] - Store endpoint configuration from the environment
//!
//! The store client performs exactly one round trip per operation; there
//! are no retries, no caching, and no auth. All failures surface as
//! typed [`store::StoreError`] values propagated through `Result`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod state;
pub mod store;

pub use config::StoreConfig;
pub use state::{ListState, NavIntent, NavToken, RefreshTicket, ViewController, ViewState};
pub use store::{ProductStoreClient, StoreError};
