//! Core types for 6amGrocery.
//!
//! This module provides type-safe wrappers for the storefront's domain concepts.

pub mod address;
pub mod category;
pub mod checkout;
pub mod id;
pub mod listing;
pub mod price;
pub mod rating;

pub use address::{AddressPatch, DeliveryAddress, DeliveryWindow};
pub use category::{CategoryError, CategoryFilter, VendorCategory};
pub use checkout::CheckoutStep;
pub use id::*;
pub use listing::{Product, Vendor};
pub use price::{CurrencyCode, Price, PriceError};
pub use rating::{Rating, RatingError};
