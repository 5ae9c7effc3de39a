use crate::Amount;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

// ============================================================================
// Error Kinds
// ============================================================================

/// Host-visible error category.
///
/// Clients and the host dispatch on the kind; the message carries the detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidRequest,
    UnknownRequest,
    KeyNotFound,
    Slippage,
    TradingDisabled,
    AssetNotRegistered,
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidRequest => "invalid request",
            ErrorKind::UnknownRequest => "unknown request",
            ErrorKind::KeyNotFound => "key not found",
            ErrorKind::Slippage => "slippage",
            ErrorKind::TradingDisabled => "trading disabled",
            ErrorKind::AssetNotRegistered => "asset not registered",
            ErrorKind::Internal => "internal",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Main Error Enum
// ============================================================================

/// Errors raised by the exchange core.
///
/// Messages are deterministic: the same failure renders the same string on
/// every node.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DexError {
    // ========================================================================
    // Request Errors
    // ========================================================================
    /// Stateless validation or malformed request
    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },

    /// Request targets a pool that does not exist
    #[error("unknown request: {reason}")]
    UnknownRequest { reason: String },

    /// Query target or registry entry missing
    #[error("key not found: {reason}")]
    KeyNotFound { reason: String },

    /// Output fell below the caller's minimum
    #[error("slippage exceeded: output {output} below min_output {min_output}")]
    Slippage { output: Amount, min_output: Amount },

    // ========================================================================
    // Registry Gate Errors
    // ========================================================================
    #[error("trading disabled for asset {denom}")]
    TradingDisabled { denom: String },

    #[error("asset {denom} not registered")]
    AssetNotRegistered { denom: String },

    // ========================================================================
    // Routing Errors
    // ========================================================================
    /// Failure inside one leg of a hub route
    #[error("hop {hop} ({from} -> {to}) failed: {source}")]
    Hop {
        hop: u8,
        from: String,
        to: String,
        source: Box<DexError>,
    },

    // ========================================================================
    // Internal Errors
    // ========================================================================
    /// Arithmetic overflow in a fixed-width intermediate
    #[error("math overflow in '{operation}' with values: {values:?}")]
    MathOverflow {
        operation: String,
        values: Vec<String>,
    },

    /// Corrupt record or broken invariant
    #[error("internal error in '{component}': {details}")]
    Internal { component: String, details: String },
}

impl DexError {
    /// Category of the error; hop wrappers report the kind of the wrapped error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DexError::InvalidRequest { .. } => ErrorKind::InvalidRequest,
            DexError::UnknownRequest { .. } => ErrorKind::UnknownRequest,
            DexError::KeyNotFound { .. } => ErrorKind::KeyNotFound,
            DexError::Slippage { .. } => ErrorKind::Slippage,
            DexError::TradingDisabled { .. } => ErrorKind::TradingDisabled,
            DexError::AssetNotRegistered { .. } => ErrorKind::AssetNotRegistered,
            DexError::Hop { source, .. } => source.kind(),
            DexError::MathOverflow { .. } | DexError::Internal { .. } => ErrorKind::Internal,
        }
    }

    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            reason: reason.into(),
        }
    }

    pub fn unknown_request(reason: impl Into<String>) -> Self {
        Self::UnknownRequest {
            reason: reason.into(),
        }
    }

    pub fn key_not_found(reason: impl Into<String>) -> Self {
        Self::KeyNotFound {
            reason: reason.into(),
        }
    }

    /// Missing pool for a swap or liquidity operation
    pub fn no_pool(asset_denom: &str) -> Self {
        Self::unknown_request(format!("no pool for {}", asset_denom))
    }

    pub fn slippage(output: Amount, min_output: Amount) -> Self {
        Self::Slippage { output, min_output }
    }

    pub fn trading_disabled(denom: &str) -> Self {
        Self::TradingDisabled {
            denom: denom.to_string(),
        }
    }

    pub fn asset_not_registered(denom: &str) -> Self {
        Self::AssetNotRegistered {
            denom: denom.to_string(),
        }
    }

    /// Wrap a failure of one leg of a hub route
    pub fn hop(hop: u8, from: &str, to: &str, source: DexError) -> Self {
        Self::Hop {
            hop,
            from: from.to_string(),
            to: to.to_string(),
            source: Box::new(source),
        }
    }

    /// Create a math overflow error with context
    pub fn math_overflow(operation: &str, values: &[&dyn fmt::Display]) -> Self {
        Self::MathOverflow {
            operation: operation.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    pub fn internal(component: &str, details: impl Into<String>) -> Self {
        Self::Internal {
            component: component.to_string(),
            details: details.into(),
        }
    }
}

/// Result type alias using the exchange error type
pub type DexResult<T> = std::result::Result<T, DexError>;
