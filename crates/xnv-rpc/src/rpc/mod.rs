//! Shared transport layer.
//!
//! Defines the [`Transport`] trait that all three clients dispatch through,
//! the JSON-RPC envelope, and an HTTP implementation ([`HttpTransport`])
//! plus a recording test double (`mock::MockTransport`).

mod http_adapter;
#[cfg(test)]
pub mod mock;
pub mod protocol;

pub use http_adapter::HttpTransport;
pub use protocol::JSON_RPC_PATH;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::error::RpcError;
use protocol::JsonRpcRequest;

/// One request, one response.
///
/// Implementations POST `body` to `path` relative to their base URL and
/// return the decoded response body. They must not retry and must not
/// interpret the payload.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, path: &str, body: Value) -> Result<Value, RpcError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn post(&self, path: &str, body: Value) -> Result<Value, RpcError> {
        (**self).post(path, body).await
    }
}

/// Wrap `params` in a JSON-RPC envelope and post it to `/json_rpc`.
pub(crate) async fn json_rpc<T, P>(
    transport: &T,
    method: &str,
    params: &P,
) -> Result<Value, RpcError>
where
    T: Transport + ?Sized,
    P: Serialize + ?Sized,
{
    let params = serde_json::to_value(params).map_err(RpcError::Encode)?;
    let body =
        serde_json::to_value(JsonRpcRequest::new(method, params)).map_err(RpcError::Encode)?;
    transport.post(JSON_RPC_PATH, body).await
}

/// Post `params` as the whole body to `/{endpoint}`.
pub(crate) async fn direct<T, P>(
    transport: &T,
    endpoint: &str,
    params: &P,
) -> Result<Value, RpcError>
where
    T: Transport + ?Sized,
    P: Serialize + ?Sized,
{
    let body = serde_json::to_value(params).map_err(RpcError::Encode)?;
    transport.post(endpoint, body).await
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::mock::MockTransport;
    use super::*;

    #[tokio::test]
    async fn json_rpc_wraps_params_in_envelope() {
        let transport = MockTransport::new();
        json_rpc(&transport, "get_info", &json!({})).await.unwrap();

        let (path, body) = transport.last_request();
        assert_eq!(path, "json_rpc");
        assert_eq!(
            body,
            json!({"jsonrpc": "2.0", "id": 0, "method": "get_info", "params": {}})
        );
    }

    #[tokio::test]
    async fn direct_posts_params_verbatim() {
        let transport = MockTransport::new();
        direct(&transport, "get_o_indexes.bin", &json!({"txid": "ab"}))
            .await
            .unwrap();

        let (path, body) = transport.last_request();
        assert_eq!(path, "get_o_indexes.bin");
        assert_eq!(body, json!({"txid": "ab"}));
    }

    #[tokio::test]
    async fn response_is_returned_unchanged() {
        let reply = json!({"id": 0, "jsonrpc": "2.0", "error": {"code": -1, "message": "busy"}});
        let transport = MockTransport::new().with_response(reply.clone());
        let value = json_rpc(&transport, "get_info", &json!({})).await.unwrap();
        assert_eq!(value, reply);
    }

    #[tokio::test]
    async fn arc_transport_dispatches_to_inner() {
        let transport = Arc::new(MockTransport::new());
        json_rpc(&transport, "sync_info", &json!({})).await.unwrap();
        assert_eq!(transport.request_count(), 1);
    }
}
