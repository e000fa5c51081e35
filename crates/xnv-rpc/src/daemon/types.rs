//! Request-side types for the daemon clients.
//!
//! Responses are left as raw JSON; only arguments get structure here.

use serde::Serialize;

use crate::error::RpcError;

// ==============================================================================
// Block Identifier
// ==============================================================================

/// Selects a block either by hash or by height. Serializes to `{"hash": ..}`
/// or `{"height": ..}`, the two accepted shapes of `get_block`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockId {
    Hash(String),
    Height(u64),
}

impl BlockId {
    /// Build from two optional identifiers, exactly one of which must be set.
    /// Height `0` counts as set.
    pub fn from_parts(hash: Option<&str>, height: Option<u64>) -> Result<Self, RpcError> {
        match (hash, height) {
            (Some(hash), None) => Ok(BlockId::Hash(hash.to_owned())),
            (None, Some(height)) => Ok(BlockId::Height(height)),
            _ => Err(RpcError::InvalidArgument(
                "exactly one of block hash or height must be provided".to_owned(),
            )),
        }
    }
}

// ==============================================================================
// Peer Bans
// ==============================================================================

/// One entry of `set_bans`. Peers are addressed by `host` or by `ip` (as the
/// daemon's packed integer form); unset fields are left out of the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ban {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<u32>,
    pub ban: bool,
    pub seconds: u64,
}

impl Ban {
    pub fn host(host: impl Into<String>, ban: bool, seconds: u64) -> Self {
        Self {
            host: Some(host.into()),
            ip: None,
            ban,
            seconds,
        }
    }
}

// ==============================================================================
// Outputs
// ==============================================================================

/// Global output reference used by `get_outs` and `get_outs.bin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutputIndex {
    pub amount: u64,
    pub index: u64,
}

/// Optional arguments of `get_output_distribution` (both the JSON-RPC and
/// the `.bin` variant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutputDistributionOptions {
    pub from_height: u64,
    pub to_height: u64,
    pub cumulative: bool,
    pub binary: bool,
    pub compress: bool,
}

impl Default for OutputDistributionOptions {
    fn default() -> Self {
        Self {
            from_height: 0,
            to_height: 0,
            cumulative: false,
            binary: true,
            compress: false,
        }
    }
}

#[derive(Serialize)]
pub(crate) struct OutputDistributionParams<'a> {
    pub(crate) amounts: &'a [u64],
    #[serde(flatten)]
    pub(crate) options: &'a OutputDistributionOptions,
}

// ==============================================================================
// Transactions
// ==============================================================================

/// Optional flags of `get_transactions`; all default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TransactionsOptions {
    pub decode_as_json: bool,
    pub prune: bool,
    pub split: bool,
}

#[derive(Serialize)]
pub(crate) struct TransactionsParams<'a> {
    pub(crate) txs_hashes: &'a [&'a str],
    #[serde(flatten)]
    pub(crate) options: &'a TransactionsOptions,
}
