//! 6amGrocery Core - Shared domain types.
//!
//! This crate provides the types used across all storefront components:
//! - `storefront` - Server-rendered shopping UI and its session reducer
//! - `cli` - Operator tools for inspecting and validating catalogs
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no session store.
//! Everything here is reference data or a value carried inside session state.
//!
//! # Modules
//!
//! - [`types`] - Ids, prices, ratings, categories, vendors, products,
//!   delivery addresses and checkout steps

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
