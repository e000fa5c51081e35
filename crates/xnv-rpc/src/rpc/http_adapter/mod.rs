//! HTTP transport for the daemon and wallet RPC endpoints.
//!
//! Implements [`Transport`](super::Transport) using `reqwest`, with basic
//! auth and a per-call timeout taken from [`ClientConfig`](crate::ClientConfig).

mod client;
mod connection;

pub use client::HttpTransport;
