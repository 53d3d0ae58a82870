//! Sesame Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod identity;
pub mod store;

pub use identity::{IdentityClient, IdentityConfig};
pub use store::{FileSecureStore, MemorySecureStore, StoreError};
