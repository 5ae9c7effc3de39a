//! Persisted state: the store abstraction and record encoding

pub mod codec;
pub mod store;

pub use codec::*;
pub use store::*;
