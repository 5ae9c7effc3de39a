/// Shared types for the PNYX hub exchange
///
/// This crate provides the records, messages, events, constants and error
/// type shared by the math kernel, the exchange module and its tooling.
pub mod asset;
pub mod constants;
pub mod errors;
pub mod events;
pub mod genesis;
pub mod msgs;
pub mod pool;
pub mod serde_helpers;

// Re-export all public types
pub use asset::*;
pub use constants::*;
pub use errors::*;
pub use events::*;
pub use genesis::*;
pub use msgs::*;
pub use pool::*;
pub use serde_helpers::amount_serde;
