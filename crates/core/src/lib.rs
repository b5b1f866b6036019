//! Shelf Core - Shared domain types.
//!
//! This crate provides the types exchanged between the Shelf components:
//! - `client` - Store client and screen-state layer
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - The `Product` entity, its draft form, and type-safe IDs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
