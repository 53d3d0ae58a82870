//! Sesame Domain - Core session types
//!
//! This crate defines the domain model for the Sesame session client.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;

pub use auth::{AuthFailure, AuthenticationState, TokenPair};
