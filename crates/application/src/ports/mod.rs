//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external
//! systems. Each port is a trait that can be implemented by adapters in the
//! infrastructure layer.

mod authentication_client;
mod secure_store;

pub use authentication_client::AuthenticationClient;
pub use secure_store::SecureStore;
