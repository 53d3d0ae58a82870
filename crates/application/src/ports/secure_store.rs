//! Durable key-value storage port.

/// Port for the durable string store backing the session.
///
/// The contract is deliberately small: one string slot per key, and a
/// `set` is observable by the next `get` before the call returns. The
/// store is assumed reliable; adapters deal with (and log) their own
/// storage failures rather than surfacing them here.
pub trait SecureStore: std::fmt::Debug + Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, or delete the entry when `None`.
    fn set(&self, key: &str, value: Option<&str>);
}
