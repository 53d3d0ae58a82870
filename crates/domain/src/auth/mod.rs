//! Authentication domain types

mod failure;
mod state;
mod token;

pub use failure::AuthFailure;
pub use state::AuthenticationState;
pub use token::TokenPair;
