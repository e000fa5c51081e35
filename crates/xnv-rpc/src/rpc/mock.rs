use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::RpcError;

use super::Transport;

/// A transport that records every request and answers with a canned value.
/// Lets client tests assert on the exact path and body without a server.
pub struct MockTransport {
    response: Value,
    requests: Mutex<Vec<(String, Value)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            response: json!({"id": 0, "jsonrpc": "2.0", "result": {"status": "OK"}}),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(mut self, response: Value) -> Self {
        self.response = response;
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Every `(path, body)` recorded so far, oldest first.
    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }

    /// Every JSON-RPC request as `(method, params)`, oldest first.
    pub fn json_rpc_calls(&self) -> Vec<(String, Value)> {
        self.requests()
            .into_iter()
            .map(|(path, body)| {
                assert_eq!(path, super::JSON_RPC_PATH, "not a JSON-RPC request");
                let method = body["method"].as_str().expect("request has no method");
                (method.to_owned(), body["params"].clone())
            })
            .collect()
    }

    /// The `(path, body)` of the most recent request.
    pub fn last_request(&self) -> (String, Value) {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was recorded")
    }

    /// The `params` object of the most recent JSON-RPC request.
    pub fn last_params(&self) -> Value {
        let (_, body) = self.last_request();
        body.get("params").cloned().expect("request has no params")
    }

    /// The `method` of the most recent JSON-RPC request.
    pub fn last_method(&self) -> String {
        let (_, body) = self.last_request();
        body.get("method")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .expect("request has no method")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post(&self, path: &str, body: Value) -> Result<Value, RpcError> {
        self.requests.lock().unwrap().push((path.to_owned(), body));
        Ok(self.response.clone())
    }
}
