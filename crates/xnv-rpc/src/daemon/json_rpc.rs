use serde::Serialize;
use serde_json::{json, Value};

use crate::config::ClientConfig;
use crate::error::RpcError;
use crate::rpc::{self, HttpTransport, Transport};

use super::types::{Ban, BlockId, OutputDistributionOptions, OutputDistributionParams};

/// Client for the daemon methods behind `/json_rpc`.
///
/// Every method returns the full JSON-RPC response object (including any
/// `error` member) exactly as the daemon sent it.
#[derive(Debug, Clone)]
pub struct DaemonJsonRpc<T = HttpTransport> {
    transport: T,
}

impl DaemonJsonRpc {
    pub fn new(config: &ClientConfig) -> Result<Self, RpcError> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }
}

impl<T> DaemonJsonRpc<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> DaemonJsonRpc<T> {
    /// Call any JSON-RPC method by name.
    pub async fn call<P>(&self, method: &str, params: &P) -> Result<Value, RpcError>
    where
        P: Serialize + ?Sized,
    {
        rpc::json_rpc(&self.transport, method, params).await
    }

    // ==========================================================================
    // Blocks and Chain
    // ==========================================================================

    pub async fn get_block_count(&self) -> Result<Value, RpcError> {
        self.call("get_block_count", &json!({})).await
    }

    pub async fn on_get_block_hash(&self, height: u64) -> Result<Value, RpcError> {
        self.call("on_get_block_hash", &json!({ "height": height })).await
    }

    pub async fn get_block_template(
        &self,
        wallet_address: &str,
        reserve_size: u32,
    ) -> Result<Value, RpcError> {
        self.call(
            "get_block_template",
            &json!({
                "wallet_address": wallet_address,
                "reserve_size": reserve_size,
            }),
        )
        .await
    }

    pub async fn submit_block(&self, block_blob: &[&str]) -> Result<Value, RpcError> {
        self.call("submit_block", &json!({ "blob": block_blob })).await
    }

    pub async fn get_last_block_header(&self) -> Result<Value, RpcError> {
        self.call("get_last_block_header", &json!({})).await
    }

    pub async fn get_block_header_by_hash(&self, block_hash: &str) -> Result<Value, RpcError> {
        self.call("get_block_header_by_hash", &json!({ "hash": block_hash })).await
    }

    pub async fn get_block_header_by_height(&self, height: u64) -> Result<Value, RpcError> {
        self.call("get_block_header_by_height", &json!({ "height": height })).await
    }

    pub async fn get_block_headers_range(
        &self,
        start_height: u64,
        end_height: u64,
    ) -> Result<Value, RpcError> {
        self.call(
            "get_block_headers_range",
            &json!({
                "start_height": start_height,
                "end_height": end_height,
            }),
        )
        .await
    }

    /// Fetch a block by hash or by height. Exactly one must be given;
    /// otherwise this fails with [`RpcError::InvalidArgument`] without
    /// touching the network.
    pub async fn get_block(
        &self,
        block_hash: Option<&str>,
        height: Option<u64>,
    ) -> Result<Value, RpcError> {
        let id = BlockId::from_parts(block_hash, height)?;
        self.get_block_by_id(&id).await
    }

    pub async fn get_block_by_id(&self, id: &BlockId) -> Result<Value, RpcError> {
        self.call("get_block", id).await
    }

    pub async fn get_coinbase_tx_sum(&self, height: u64, count: u64) -> Result<Value, RpcError> {
        self.call(
            "get_coinbase_tx_sum",
            &json!({ "height": height, "count": count }),
        )
        .await
    }

    pub async fn get_alternate_chains(&self) -> Result<Value, RpcError> {
        self.call("get_alternate_chains", &json!({})).await
    }

    pub async fn sync_info(&self) -> Result<Value, RpcError> {
        self.call("sync_info", &json!({})).await
    }

    pub async fn prune_blockchain(&self) -> Result<Value, RpcError> {
        self.call("prune_blockchain", &json!({})).await
    }

    /// With `height` unset the `height` key is left out entirely.
    pub async fn get_generated_coins(&self, height: Option<u64>) -> Result<Value, RpcError> {
        let params = match height {
            Some(height) => json!({ "height": height }),
            None => json!({}),
        };
        self.call("get_generated_coins", &params).await
    }

    // ==========================================================================
    // Node
    // ==========================================================================

    pub async fn get_connections(&self) -> Result<Value, RpcError> {
        self.call("get_connections", &json!({})).await
    }

    pub async fn get_info(&self) -> Result<Value, RpcError> {
        self.call("get_info", &json!({})).await
    }

    pub async fn hard_fork_info(&self) -> Result<Value, RpcError> {
        self.call("hard_fork_info", &json!({})).await
    }

    pub async fn get_version(&self) -> Result<Value, RpcError> {
        self.call("get_version", &json!({})).await
    }

    pub async fn get_min_version(&self) -> Result<Value, RpcError> {
        self.call("get_min_version", &json!({})).await
    }

    pub async fn set_bans(&self, bans: &[Ban]) -> Result<Value, RpcError> {
        self.call("set_bans", &json!({ "bans": bans })).await
    }

    pub async fn get_bans(&self) -> Result<Value, RpcError> {
        self.call("get_bans", &json!({})).await
    }

    pub async fn add_peer(&self, host: &str) -> Result<Value, RpcError> {
        self.call("add_peer", &json!({ "host": host })).await
    }

    pub async fn flush_cache(&self, bad_txs: bool) -> Result<Value, RpcError> {
        self.call("flush_cache", &json!({ "bad_txs": bad_txs })).await
    }

    // ==========================================================================
    // Transaction Pool
    // ==========================================================================

    /// Drop the given transactions from the pool; an empty slice flushes
    /// everything.
    pub async fn flush_txpool(&self, txids: &[&str]) -> Result<Value, RpcError> {
        self.call("flush_txpool", &json!({ "txids": txids })).await
    }

    pub async fn relay_tx(&self, txids: &[&str]) -> Result<Value, RpcError> {
        self.call("relay_tx", &json!({ "txids": txids })).await
    }

    pub async fn get_txpool_backlog(&self) -> Result<Value, RpcError> {
        self.call("get_txpool_backlog", &json!({})).await
    }

    /// With `grace_blocks` unset the key is left out entirely.
    pub async fn get_fee_estimate(&self, grace_blocks: Option<u64>) -> Result<Value, RpcError> {
        let params = match grace_blocks {
            Some(grace_blocks) => json!({ "grace_blocks": grace_blocks }),
            None => json!({}),
        };
        self.call("get_fee_estimate", &params).await
    }

    // ==========================================================================
    // Outputs
    // ==========================================================================

    pub async fn get_output_histogram(
        &self,
        amounts: &[u64],
        min_count: u64,
        max_count: u64,
        unlocked: bool,
        recent_cutoff: u64,
    ) -> Result<Value, RpcError> {
        self.call(
            "get_output_histogram",
            &json!({
                "amounts": amounts,
                "min_count": min_count,
                "max_count": max_count,
                "unlocked": unlocked,
                "recent_cutoff": recent_cutoff,
            }),
        )
        .await
    }

    pub async fn get_output_distribution(
        &self,
        amounts: &[u64],
        options: &OutputDistributionOptions,
    ) -> Result<Value, RpcError> {
        self.call(
            "get_output_distribution",
            &OutputDistributionParams { amounts, options },
        )
        .await
    }

    pub async fn get_tx_pubkey(&self, extra: &str) -> Result<Value, RpcError> {
        self.call("get_tx_pubkey", &json!({ "extra": extra })).await
    }

    pub async fn decode_outputs(
        &self,
        tx_hashes: &[&str],
        sec_view_key: &str,
        address: &str,
    ) -> Result<Value, RpcError> {
        self.call(
            "decode_outputs",
            &json!({
                "tx_hashes": tx_hashes,
                "sec_view_key": sec_view_key,
                "address": address,
            }),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::mock::MockTransport;

    fn client() -> DaemonJsonRpc<MockTransport> {
        DaemonJsonRpc::with_transport(MockTransport::new())
    }

    #[tokio::test]
    async fn parameterless_method_sends_empty_params() {
        let daemon = client();
        daemon.get_block_count().await.unwrap();

        let (path, body) = daemon.transport().last_request();
        assert_eq!(path, "json_rpc");
        assert_eq!(
            body,
            json!({"jsonrpc": "2.0", "id": 0, "method": "get_block_count", "params": {}})
        );
    }

    #[tokio::test]
    async fn get_block_by_hash() {
        let daemon = client();
        daemon.get_block(Some("abc"), None).await.unwrap();
        assert_eq!(daemon.transport().last_method(), "get_block");
        assert_eq!(daemon.transport().last_params(), json!({"hash": "abc"}));
    }

    #[tokio::test]
    async fn get_block_by_height() {
        let daemon = client();
        daemon.get_block(None, Some(100)).await.unwrap();
        assert_eq!(daemon.transport().last_params(), json!({"height": 100}));
    }

    #[tokio::test]
    async fn get_block_at_genesis_height() {
        let daemon = client();
        daemon.get_block(None, Some(0)).await.unwrap();
        assert_eq!(daemon.transport().last_params(), json!({"height": 0}));
    }

    #[tokio::test]
    async fn get_block_with_both_ids_fails_before_sending() {
        let daemon = client();
        let err = daemon
            .get_block(Some("abc"), Some(100))
            .await
            .expect_err("both identifiers must be rejected");
        assert!(matches!(err, RpcError::InvalidArgument(_)));
        assert_eq!(daemon.transport().request_count(), 0);
    }

    #[tokio::test]
    async fn get_block_with_no_id_fails_before_sending() {
        let daemon = client();
        let err = daemon
            .get_block(None, None)
            .await
            .expect_err("missing identifier must be rejected");
        assert!(matches!(err, RpcError::InvalidArgument(_)));
        assert_eq!(daemon.transport().request_count(), 0);
    }

    #[tokio::test]
    async fn flush_txpool_defaults_to_empty_list() {
        let daemon = client();
        daemon.flush_txpool(&[]).await.unwrap();
        assert_eq!(daemon.transport().last_params(), json!({"txids": []}));

        daemon.flush_txpool(&["t1", "t2"]).await.unwrap();
        assert_eq!(
            daemon.transport().last_params(),
            json!({"txids": ["t1", "t2"]})
        );
    }

    #[tokio::test]
    async fn get_fee_estimate_omits_unset_grace_blocks() {
        let daemon = client();
        daemon.get_fee_estimate(None).await.unwrap();
        assert_eq!(daemon.transport().last_params(), json!({}));

        daemon.get_fee_estimate(Some(10)).await.unwrap();
        assert_eq!(daemon.transport().last_params(), json!({"grace_blocks": 10}));
    }

    #[tokio::test]
    async fn get_generated_coins_keeps_explicit_zero() {
        let daemon = client();
        daemon.get_generated_coins(None).await.unwrap();
        assert_eq!(daemon.transport().last_params(), json!({}));

        daemon.get_generated_coins(Some(0)).await.unwrap();
        assert_eq!(daemon.transport().last_params(), json!({"height": 0}));
    }

    #[tokio::test]
    async fn get_output_distribution_uses_documented_defaults() {
        let daemon = client();
        daemon
            .get_output_distribution(&[0], &OutputDistributionOptions::default())
            .await
            .unwrap();
        assert_eq!(daemon.transport().last_method(), "get_output_distribution");
        assert_eq!(
            daemon.transport().last_params(),
            json!({
                "amounts": [0],
                "from_height": 0,
                "to_height": 0,
                "cumulative": false,
                "binary": true,
                "compress": false,
            })
        );
    }

    #[tokio::test]
    async fn submit_block_maps_to_blob_key() {
        let daemon = client();
        daemon.submit_block(&["0707"]).await.unwrap();
        assert_eq!(daemon.transport().last_params(), json!({"blob": ["0707"]}));
    }

    #[tokio::test]
    async fn set_bans_serializes_entries() {
        let daemon = client();
        daemon
            .set_bans(&[Ban {
                host: None,
                ip: Some(838_969_536),
                ban: false,
                seconds: 0,
            }])
            .await
            .unwrap();
        assert_eq!(
            daemon.transport().last_params(),
            json!({"bans": [{"ip": 838_969_536, "ban": false, "seconds": 0}]})
        );
    }

    #[tokio::test]
    async fn get_output_histogram_params() {
        let daemon = client();
        daemon
            .get_output_histogram(&[20_000_000_000], 0, 0, true, 0)
            .await
            .unwrap();
        assert_eq!(
            daemon.transport().last_params(),
            json!({
                "amounts": [20_000_000_000u64],
                "min_count": 0,
                "max_count": 0,
                "unlocked": true,
                "recent_cutoff": 0,
            })
        );
    }

    #[tokio::test]
    async fn call_passes_through_arbitrary_method() {
        let daemon = client();
        daemon
            .call("get_block_header_by_height", &json!({"height": 7}))
            .await
            .unwrap();
        assert_eq!(daemon.transport().last_method(), "get_block_header_by_height");
        assert_eq!(daemon.transport().last_params(), json!({"height": 7}));
    }

    #[tokio::test]
    async fn every_method_sends_its_remote_key_names() {
        let daemon = client();
        daemon.on_get_block_hash(9).await.unwrap();
        daemon.get_block_template("NV1abc", 60).await.unwrap();
        daemon.get_block_header_by_hash("bb").await.unwrap();
        daemon.get_block_header_by_height(9).await.unwrap();
        daemon.get_block_headers_range(1, 3).await.unwrap();
        daemon.get_coinbase_tx_sum(10, 5).await.unwrap();
        daemon.add_peer("10.0.0.1:17565").await.unwrap();
        daemon.flush_cache(true).await.unwrap();
        daemon.relay_tx(&["t1"]).await.unwrap();
        daemon.get_tx_pubkey("01ff").await.unwrap();
        daemon
            .decode_outputs(&["h1", "h2"], "viewkey", "NV1abc")
            .await
            .unwrap();

        let expected = [
            ("on_get_block_hash", json!({"height": 9})),
            (
                "get_block_template",
                json!({"wallet_address": "NV1abc", "reserve_size": 60}),
            ),
            ("get_block_header_by_hash", json!({"hash": "bb"})),
            ("get_block_header_by_height", json!({"height": 9})),
            (
                "get_block_headers_range",
                json!({"start_height": 1, "end_height": 3}),
            ),
            ("get_coinbase_tx_sum", json!({"height": 10, "count": 5})),
            ("add_peer", json!({"host": "10.0.0.1:17565"})),
            ("flush_cache", json!({"bad_txs": true})),
            ("relay_tx", json!({"txids": ["t1"]})),
            ("get_tx_pubkey", json!({"extra": "01ff"})),
            (
                "decode_outputs",
                json!({"tx_hashes": ["h1", "h2"], "sec_view_key": "viewkey", "address": "NV1abc"}),
            ),
        ];
        let calls = daemon.transport().json_rpc_calls();
        assert_eq!(calls.len(), expected.len());
        for ((method, params), (want_method, want_params)) in calls.iter().zip(expected.iter()) {
            assert_eq!(method, want_method);
            assert_eq!(params, want_params, "params of `{method}`");
        }
    }
}
