//! Sesame Application - Session orchestration and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for external dependencies)
//! - The authentication state machine and token lifecycle
//! - The login surface view-model

pub mod ports;
pub mod session;

pub use ports::{AuthenticationClient, SecureStore};
pub use session::{AuthenticationController, LoginForm, TokenStore};
