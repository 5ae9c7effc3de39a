//! Module lifecycle and message routing
//!
//! The host drives modules through the `Module` trait. `MsgRouter` is a
//! local routing table keyed on module name that executes each transaction
//! inside one work unit: every message commits, or none does.

use crate::instructions::{handle_msg, MsgResponse};
use crate::logic::{export_genesis, init_genesis, Context, WorkUnit};
use crate::queries;
use crate::state::KVStore;
use pnyx_types::{DexError, DexEvent, DexResult, GenesisState, Msg, MODULE_NAME};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Lifecycle hooks and handlers a host module exposes
pub trait Module {
    fn name(&self) -> &'static str;

    fn default_genesis(&self) -> DexResult<Value>;

    fn validate_genesis(&self, genesis: &Value) -> DexResult<()>;

    fn init_genesis(&self, store: &mut dyn KVStore, genesis: &Value) -> DexResult<()>;

    fn export_genesis(&self, store: &dyn KVStore) -> DexResult<Value>;

    fn begin_block(&self, _ctx: &mut dyn Context) -> DexResult<()> {
        Ok(())
    }

    fn end_block(&self, _ctx: &mut dyn Context) -> DexResult<()> {
        Ok(())
    }

    fn handle(&self, ctx: &mut dyn Context, msg: &Msg) -> DexResult<MsgResponse>;

    fn query(&self, store: &dyn KVStore, path: &str) -> DexResult<Vec<u8>>;
}

fn parse_genesis(genesis: &Value) -> DexResult<GenesisState> {
    serde_json::from_value(genesis.clone())
        .map_err(|e| DexError::invalid_request(format!("malformed genesis: {}", e)))
}

fn genesis_to_value(genesis: &GenesisState) -> DexResult<Value> {
    serde_json::to_value(genesis).map_err(|e| DexError::internal("genesis", e.to_string()))
}

/// The exchange module
#[derive(Debug, Clone, Copy, Default)]
pub struct DexModule;

impl Module for DexModule {
    fn name(&self) -> &'static str {
        MODULE_NAME
    }

    fn default_genesis(&self) -> DexResult<Value> {
        genesis_to_value(&GenesisState::default())
    }

    fn validate_genesis(&self, genesis: &Value) -> DexResult<()> {
        parse_genesis(genesis)?.validate()
    }

    fn init_genesis(&self, store: &mut dyn KVStore, genesis: &Value) -> DexResult<()> {
        init_genesis(store, &parse_genesis(genesis)?)
    }

    fn export_genesis(&self, store: &dyn KVStore) -> DexResult<Value> {
        genesis_to_value(&export_genesis(store)?)
    }

    fn handle(&self, ctx: &mut dyn Context, msg: &Msg) -> DexResult<MsgResponse> {
        handle_msg(ctx, msg)
    }

    fn query(&self, store: &dyn KVStore, path: &str) -> DexResult<Vec<u8>> {
        queries::query(store, path)
    }
}

/// Responses and events of a committed transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxResult {
    pub responses: Vec<MsgResponse>,
    pub events: Vec<DexEvent>,
}

/// Local routing table from module name to module
#[derive(Default)]
pub struct MsgRouter {
    routes: BTreeMap<&'static str, Box<dyn Module>>,
}

impl MsgRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Router with the exchange module registered
    pub fn with_dex() -> Self {
        let mut router = Self::new();
        router.routes.insert(MODULE_NAME, Box::new(DexModule));
        router
    }

    pub fn register(&mut self, module: Box<dyn Module>) -> DexResult<()> {
        let name = module.name();
        if self.routes.contains_key(name) {
            return Err(DexError::invalid_request(format!(
                "module {} already registered",
                name
            )));
        }
        self.routes.insert(name, module);
        Ok(())
    }

    fn module(&self, name: &str) -> DexResult<&dyn Module> {
        self.routes
            .get(name)
            .map(|module| module.as_ref())
            .ok_or_else(|| DexError::unknown_request(format!("unrecognized module route: {}", name)))
    }

    /// Import one module's genesis
    pub fn init_genesis(&self, store: &mut dyn KVStore, name: &str, genesis: &Value) -> DexResult<()> {
        let module = self.module(name)?;
        module.validate_genesis(genesis)?;
        module.init_genesis(store, genesis)
    }

    pub fn export_genesis(&self, store: &dyn KVStore, name: &str) -> DexResult<Value> {
        self.module(name)?.export_genesis(store)
    }

    /// Run every module's begin-block hook atomically
    pub fn begin_block(&self, store: &mut dyn KVStore, block_height: u64) -> DexResult<Vec<DexEvent>> {
        let mut unit = WorkUnit::new(store, block_height);
        for module in self.routes.values() {
            module.begin_block(&mut unit)?;
        }
        Ok(unit.commit())
    }

    /// Run every module's end-block hook atomically
    pub fn end_block(&self, store: &mut dyn KVStore, block_height: u64) -> DexResult<Vec<DexEvent>> {
        let mut unit = WorkUnit::new(store, block_height);
        for module in self.routes.values() {
            module.end_block(&mut unit)?;
        }
        Ok(unit.commit())
    }

    /// Validate and execute a transaction.
    ///
    /// All messages are checked statelessly first. Execution happens in one
    /// work unit that commits only when every message succeeds.
    pub fn deliver_tx(&self, store: &mut dyn KVStore, block_height: u64, msgs: &[Msg]) -> DexResult<TxResult> {
        if msgs.is_empty() {
            return Err(DexError::invalid_request("transaction has no messages"));
        }
        for msg in msgs {
            if let Err(err) = msg.validate_basic() {
                warn!(
                    msg = msg.type_name(),
                    sender = msg.sender(),
                    error = %err,
                    "message failed validation"
                );
                return Err(err);
            }
        }

        let mut unit = WorkUnit::new(store, block_height);
        let mut responses = Vec::with_capacity(msgs.len());
        for (index, msg) in msgs.iter().enumerate() {
            let module = self.module(msg.route())?;
            match module.handle(&mut unit, msg) {
                Ok(response) => responses.push(response),
                Err(err) => {
                    warn!(
                        index,
                        msg = msg.type_name(),
                        sender = msg.sender(),
                        error = %err,
                        "message rejected"
                    );
                    return Err(err);
                }
            }
        }

        debug!(
            msgs = msgs.len(),
            writes = unit.pending_writes(),
            events = unit.events().len(),
            "transaction committed"
        );
        let events = unit.commit();
        Ok(TxResult { responses, events })
    }

    pub fn query(&self, store: &dyn KVStore, name: &str, path: &str) -> DexResult<Vec<u8>> {
        self.module(name)?.query(store, path)
    }
}
