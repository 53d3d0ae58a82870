//! Session module for the Sesame client.
//!
//! This module provides:
//! - Token storage with a memory/durable ownership split
//! - The authentication state machine
//! - The login surface view-model

mod controller;
mod login;
mod token_store;

pub use controller::AuthenticationController;
pub use login::LoginForm;
pub use token_store::TokenStore;
