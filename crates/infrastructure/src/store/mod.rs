//! Durable store adapters.

mod file;
mod memory;

pub use file::{FileSecureStore, StoreError};
pub use memory::MemorySecureStore;
