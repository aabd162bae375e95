//! Demo Shop Core - Shared types library.
//!
//! This crate provides the types used across all demo shop components:
//! - `storefront` - Store, seeder, renderers, validators and actions
//! - `cli` - Command-line driver playing the role of the browser page
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and ratings
//! - [`records`] - The JSON records persisted in the local store

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod records;
pub mod types;

pub use records::*;
pub use types::*;
