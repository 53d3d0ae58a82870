//! Identity endpoint adapter.

mod client;

pub use client::{IdentityClient, IdentityConfig};
