//! Daemon clients.
//!
//! The node exposes two kinds of endpoints: JSON-RPC methods behind
//! `/json_rpc` ([`DaemonJsonRpc`]) and plain HTTP endpoints posted to
//! `/{endpoint}` ([`DaemonOther`]). Both default to `localhost:17566`.

mod json_rpc;
mod other;
pub mod types;

pub use json_rpc::DaemonJsonRpc;
pub use other::DaemonOther;
pub use types::{Ban, BlockId, OutputDistributionOptions, OutputIndex, TransactionsOptions};
