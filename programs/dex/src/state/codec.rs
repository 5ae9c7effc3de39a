//! Record encoding
//!
//! Records are borsh-encoded and wrapped in a 4-byte little-endian length
//! prefix. Borsh is canonical, so the same record produces the same bytes
//! on every node.

use borsh::{BorshDeserialize, BorshSerialize};
use pnyx_types::{DexError, DexResult};

const LENGTH_PREFIX: usize = 4;

/// Encode a record with its length prefix
pub fn encode<T: BorshSerialize>(record: &T) -> DexResult<Vec<u8>> {
    let body = record
        .try_to_vec()
        .map_err(|e| DexError::internal("codec", format!("encode failed: {}", e)))?;
    let len = u32::try_from(body.len())
        .map_err(|_| DexError::internal("codec", format!("record too large: {} bytes", body.len())))?;

    let mut bytes = Vec::with_capacity(LENGTH_PREFIX + body.len());
    bytes.extend_from_slice(&len.to_le_bytes());
    bytes.extend_from_slice(&body);
    Ok(bytes)
}

/// Decode a length-prefixed record; `what` names the record in errors
pub fn decode<T: BorshDeserialize>(bytes: &[u8], what: &str) -> DexResult<T> {
    if bytes.len() < LENGTH_PREFIX {
        return Err(DexError::internal(
            "codec",
            format!("{} record truncated: {} bytes", what, bytes.len()),
        ));
    }
    let (prefix, body) = bytes.split_at(LENGTH_PREFIX);
    let mut len_bytes = [0u8; LENGTH_PREFIX];
    len_bytes.copy_from_slice(prefix);
    let declared = u32::from_le_bytes(len_bytes) as usize;
    if declared != body.len() {
        return Err(DexError::internal(
            "codec",
            format!(
                "{} record length mismatch: declared {}, found {}",
                what,
                declared,
                body.len()
            ),
        ));
    }

    T::try_from_slice(body)
        .map_err(|e| DexError::internal("codec", format!("{} record corrupt: {}", what, e)))
}
