use serde::Serialize;
use serde_json::Value;

/// Path of the JSON-RPC endpoint on both the daemon and the wallet.
pub const JSON_RPC_PATH: &str = "json_rpc";

pub const JSON_RPC_VERSION: &str = "2.0";

/// The daemon and wallet never correlate by id, so it is always zero.
pub const REQUEST_ID: u64 = 0;

#[derive(Debug, Serialize)]
pub struct JsonRpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: Value,
}

impl<'a> JsonRpcRequest<'a> {
    pub fn new(method: &'a str, params: Value) -> Self {
        Self {
            jsonrpc: JSON_RPC_VERSION,
            id: REQUEST_ID,
            method,
            params,
        }
    }
}
