//! # PNYX Hub Exchange
//!
//! Deterministic constant-product exchange pairing the native PNYX token with
//! whitelisted assets. Cross-asset trades route through PNYX in two hops.
//!
//! The module runs single-threaded against a host key-value store. The same
//! message sequence from the same genesis produces byte-identical state and
//! an identical event stream on every node.

pub mod instructions;
pub mod logic;
pub mod module;
pub mod queries;
pub mod state;

pub use instructions::{handle_msg, MsgResponse};
pub use logic::*;
pub use module::{DexModule, Module, MsgRouter, TxResult};
pub use state::{prefix_end, KVStore, MemStore};
