//! Exchange logic
//!
//! State transitions take a `Context`; read-only helpers take a store.

pub mod asset_registry;
pub mod genesis;
pub mod liquidity;
pub mod pool_store;
pub mod router;
pub mod state_context;
pub mod swap;
pub mod unit_of_work;

pub use asset_registry::*;
pub use genesis::*;
pub use liquidity::*;
pub use pool_store::*;
pub use router::*;
pub use state_context::*;
pub use swap::*;
pub use unit_of_work::*;
