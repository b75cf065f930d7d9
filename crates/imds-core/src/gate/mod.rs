//! Checks that run before a gated payload is built.
mod delay;
pub use delay::DelayGate;

mod token;
pub use token::{TokenMode, is_token_valid};
