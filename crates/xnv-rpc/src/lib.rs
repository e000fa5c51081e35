//! Async client for the Nerva daemon and wallet RPC interfaces.
//!
//! Three independent clients share one transport primitive:
//!
//! - [`DaemonJsonRpc`]: daemon methods behind `/json_rpc`.
//! - [`DaemonOther`]: daemon endpoints that take the params as the whole body.
//! - [`Wallet`]: wallet service methods behind `/json_rpc`, with optional
//!   basic auth.
//!
//! Every method returns the decoded response as a [`serde_json::Value`]
//! without inspecting it; errors reported by the remote side arrive inside
//! that value.

pub mod config;
pub mod daemon;
pub mod error;
pub mod rpc;
pub mod wallet;

pub use config::ClientConfig;
pub use daemon::{DaemonJsonRpc, DaemonOther};
pub use error::RpcError;
pub use rpc::{HttpTransport, Transport};
pub use wallet::Wallet;

/// Version of this crate, for diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
