use serde::Serialize;
use serde_json::{json, Value};

use crate::config::ClientConfig;
use crate::error::RpcError;
use crate::rpc::{self, HttpTransport, Transport};

use super::types::{
    OutputDistributionOptions, OutputDistributionParams, OutputIndex, TransactionsOptions,
    TransactionsParams,
};

/// Client for the daemon's plain HTTP endpoints.
///
/// These take the params object as the whole request body and are posted to
/// `/{endpoint}`; there is no JSON-RPC envelope. Endpoints whose names end in
/// `.bin` are still addressed with a JSON body here.
#[derive(Debug, Clone)]
pub struct DaemonOther<T = HttpTransport> {
    transport: T,
}

impl DaemonOther {
    pub fn new(config: &ClientConfig) -> Result<Self, RpcError> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }
}

impl<T> DaemonOther<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> DaemonOther<T> {
    /// Call any endpoint by name.
    pub async fn call<P>(&self, endpoint: &str, params: &P) -> Result<Value, RpcError>
    where
        P: Serialize + ?Sized,
    {
        rpc::direct(&self.transport, endpoint, params).await
    }

    // ==========================================================================
    // Blocks
    // ==========================================================================

    pub async fn get_height(&self) -> Result<Value, RpcError> {
        self.call("get_height", &json!({})).await
    }

    pub async fn get_blocks_bin(
        &self,
        block_ids: &[&str],
        start_height: u64,
        prune: bool,
    ) -> Result<Value, RpcError> {
        self.call(
            "get_blocks.bin",
            &json!({
                "block_ids": block_ids,
                "start_height": start_height,
                "prune": prune,
            }),
        )
        .await
    }

    pub async fn get_blocks_by_height_bin(&self, heights: &[u64]) -> Result<Value, RpcError> {
        self.call("get_blocks_by_height.bin", &json!({ "heights": heights })).await
    }

    pub async fn get_hashes_bin(
        &self,
        block_ids: &[&str],
        start_height: u64,
    ) -> Result<Value, RpcError> {
        self.call(
            "get_hashes.bin",
            &json!({ "block_ids": block_ids, "start_height": start_height }),
        )
        .await
    }

    pub async fn get_alt_blocks_hashes(&self) -> Result<Value, RpcError> {
        self.call("get_alt_blocks_hashes", &json!({})).await
    }

    pub async fn save_bc(&self) -> Result<Value, RpcError> {
        self.call("save_bc", &json!({})).await
    }

    pub async fn pop_blocks(&self, nblocks: u64) -> Result<Value, RpcError> {
        self.call("pop_blocks", &json!({ "nblocks": nblocks })).await
    }

    // ==========================================================================
    // Outputs and Transactions
    // ==========================================================================

    pub async fn get_o_indexes_bin(&self, txid: &str) -> Result<Value, RpcError> {
        self.call("get_o_indexes.bin", &json!({ "txid": txid })).await
    }

    pub async fn get_outs_bin(&self, outputs: &[OutputIndex]) -> Result<Value, RpcError> {
        self.call("get_outs.bin", &json!({ "outputs": outputs })).await
    }

    pub async fn get_outs(
        &self,
        outputs: &[OutputIndex],
        get_txid: bool,
    ) -> Result<Value, RpcError> {
        self.call(
            "get_outs",
            &json!({ "outputs": outputs, "get_txid": get_txid }),
        )
        .await
    }

    pub async fn get_output_distribution_bin(
        &self,
        amounts: &[u64],
        options: &OutputDistributionOptions,
    ) -> Result<Value, RpcError> {
        self.call(
            "get_output_distribution.bin",
            &OutputDistributionParams { amounts, options },
        )
        .await
    }

    pub async fn get_transactions(
        &self,
        txs_hashes: &[&str],
        options: &TransactionsOptions,
    ) -> Result<Value, RpcError> {
        self.call(
            "get_transactions",
            &TransactionsParams {
                txs_hashes,
                options,
            },
        )
        .await
    }

    pub async fn is_key_image_spent(&self, key_images: &[&str]) -> Result<Value, RpcError> {
        self.call("is_key_image_spent", &json!({ "key_images": key_images })).await
    }

    pub async fn send_raw_transaction(
        &self,
        tx_as_hex: &str,
        do_not_relay: bool,
    ) -> Result<Value, RpcError> {
        self.call(
            "send_raw_transaction",
            &json!({ "tx_as_hex": tx_as_hex, "do_not_relay": do_not_relay }),
        )
        .await
    }

    // ==========================================================================
    // Transaction Pool
    // ==========================================================================

    pub async fn get_transaction_pool(&self) -> Result<Value, RpcError> {
        self.call("get_transaction_pool", &json!({})).await
    }

    pub async fn get_transaction_pool_hashes_bin(&self) -> Result<Value, RpcError> {
        self.call("get_transaction_pool_hashes.bin", &json!({})).await
    }

    pub async fn get_transaction_pool_hashes(&self) -> Result<Value, RpcError> {
        self.call("get_transaction_pool_hashes", &json!({})).await
    }

    pub async fn get_transaction_pool_stats(&self) -> Result<Value, RpcError> {
        self.call("get_transaction_pool_stats", &json!({})).await
    }

    // ==========================================================================
    // Mining
    // ==========================================================================

    pub async fn start_mining(
        &self,
        address: &str,
        threads_count: u32,
        do_background_mining: bool,
        ignore_battery: bool,
    ) -> Result<Value, RpcError> {
        self.call(
            "start_mining",
            &json!({
                "address": address,
                "threads_count": threads_count,
                "do_background_mining": do_background_mining,
                "ignore_battery": ignore_battery,
            }),
        )
        .await
    }

    pub async fn set_donate_level(&self, blocks: u32) -> Result<Value, RpcError> {
        self.call("set_donate_level", &json!({ "blocks": blocks })).await
    }

    pub async fn stop_mining(&self) -> Result<Value, RpcError> {
        self.call("stop_mining", &json!({})).await
    }

    pub async fn mining_status(&self) -> Result<Value, RpcError> {
        self.call("mining_status", &json!({})).await
    }

    pub async fn set_log_hash_rate(&self, visible: bool) -> Result<Value, RpcError> {
        self.call("set_log_hash_rate", &json!({ "visible": visible })).await
    }

    // ==========================================================================
    // Peers and Network
    // ==========================================================================

    pub async fn get_peer_list(&self) -> Result<Value, RpcError> {
        self.call("get_peer_list", &json!({})).await
    }

    pub async fn get_public_nodes(&self) -> Result<Value, RpcError> {
        self.call("get_public_nodes", &json!({})).await
    }

    pub async fn out_peers(&self) -> Result<Value, RpcError> {
        self.call("out_peers", &json!({})).await
    }

    pub async fn in_peers(&self) -> Result<Value, RpcError> {
        self.call("in_peers", &json!({})).await
    }

    pub async fn get_net_stats(&self) -> Result<Value, RpcError> {
        self.call("get_net_stats", &json!({})).await
    }

    pub async fn get_limit(&self) -> Result<Value, RpcError> {
        self.call("get_limit", &json!({})).await
    }

    /// Bandwidth limits in kB/s. The daemon treats `-1` as "reset to
    /// default" and `0` as "leave unchanged".
    pub async fn set_limit(&self, limit_down: i64, limit_up: i64) -> Result<Value, RpcError> {
        self.call(
            "set_limit",
            &json!({ "limit_down": limit_down, "limit_up": limit_up }),
        )
        .await
    }

    pub async fn set_bootstrap_daemon(
        &self,
        address: &str,
        username: &str,
        password: &str,
    ) -> Result<Value, RpcError> {
        self.call(
            "set_bootstrap_daemon",
            &json!({
                "address": address,
                "username": username,
                "password": password,
            }),
        )
        .await
    }

    // ==========================================================================
    // Daemon Control
    // ==========================================================================

    pub async fn get_info(&self) -> Result<Value, RpcError> {
        self.call("get_info", &json!({})).await
    }

    pub async fn set_log_level(&self, level: u8) -> Result<Value, RpcError> {
        self.call("set_log_level", &json!({ "level": level })).await
    }

    pub async fn set_log_categories(&self, categories: &str) -> Result<Value, RpcError> {
        self.call("set_log_categories", &json!({ "categories": categories })).await
    }

    pub async fn stop_daemon(&self) -> Result<Value, RpcError> {
        self.call("stop_daemon", &json!({})).await
    }

    pub async fn update(&self) -> Result<Value, RpcError> {
        self.call("update", &json!({})).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::mock::MockTransport;

    fn client() -> DaemonOther<MockTransport> {
        DaemonOther::with_transport(MockTransport::new())
    }

    #[tokio::test]
    async fn body_is_params_without_envelope() {
        let daemon = client();
        daemon.get_height().await.unwrap();
        assert_eq!(daemon.transport().last_request(), ("get_height".to_owned(), json!({})));
    }

    #[tokio::test]
    async fn binary_endpoints_keep_suffix_in_path() {
        let daemon = client();
        daemon.get_blocks_bin(&["aa", "bb"], 5, true).await.unwrap();
        assert_eq!(
            daemon.transport().last_request(),
            (
                "get_blocks.bin".to_owned(),
                json!({"block_ids": ["aa", "bb"], "start_height": 5, "prune": true})
            )
        );

        daemon.get_transaction_pool_hashes_bin().await.unwrap();
        assert_eq!(
            daemon.transport().last_request().0,
            "get_transaction_pool_hashes.bin"
        );
    }

    #[tokio::test]
    async fn get_transactions_defaults_flags_to_false() {
        let daemon = client();
        daemon
            .get_transactions(&["deadbeef"], &TransactionsOptions::default())
            .await
            .unwrap();
        assert_eq!(
            daemon.transport().last_request(),
            (
                "get_transactions".to_owned(),
                json!({
                    "txs_hashes": ["deadbeef"],
                    "decode_as_json": false,
                    "prune": false,
                    "split": false,
                })
            )
        );
    }

    #[tokio::test]
    async fn get_outs_serializes_output_indices() {
        let daemon = client();
        daemon
            .get_outs(&[OutputIndex { amount: 0, index: 42 }], true)
            .await
            .unwrap();
        assert_eq!(
            daemon.transport().last_request().1,
            json!({"outputs": [{"amount": 0, "index": 42}], "get_txid": true})
        );
    }

    #[tokio::test]
    async fn output_distribution_bin_uses_documented_defaults() {
        let daemon = client();
        daemon
            .get_output_distribution_bin(&[0], &OutputDistributionOptions::default())
            .await
            .unwrap();
        assert_eq!(
            daemon.transport().last_request(),
            (
                "get_output_distribution.bin".to_owned(),
                json!({
                    "amounts": [0],
                    "from_height": 0,
                    "to_height": 0,
                    "cumulative": false,
                    "binary": true,
                    "compress": false,
                })
            )
        );
    }

    #[tokio::test]
    async fn set_limit_allows_reset_sentinel() {
        let daemon = client();
        daemon.set_limit(-1, 2048).await.unwrap();
        assert_eq!(
            daemon.transport().last_request().1,
            json!({"limit_down": -1, "limit_up": 2048})
        );
    }

    #[tokio::test]
    async fn start_mining_params() {
        let daemon = client();
        daemon
            .start_mining("NV1abc", 2, false, true)
            .await
            .unwrap();
        assert_eq!(
            daemon.transport().last_request(),
            (
                "start_mining".to_owned(),
                json!({
                    "address": "NV1abc",
                    "threads_count": 2,
                    "do_background_mining": false,
                    "ignore_battery": true,
                })
            )
        );
    }

    #[tokio::test]
    async fn every_endpoint_sends_its_remote_key_names() {
        let daemon = client();
        let outputs = [OutputIndex { amount: 0, index: 7 }];
        daemon.get_blocks_by_height_bin(&[1, 2]).await.unwrap();
        daemon.get_hashes_bin(&["aa"], 3).await.unwrap();
        daemon.pop_blocks(4).await.unwrap();
        daemon.get_outs_bin(&outputs).await.unwrap();
        daemon.is_key_image_spent(&["ki"]).await.unwrap();
        daemon.send_raw_transaction("0101", true).await.unwrap();
        daemon.set_donate_level(5).await.unwrap();
        daemon.set_log_hash_rate(true).await.unwrap();
        daemon
            .set_bootstrap_daemon("node.example:17566", "bob", "hunter2")
            .await
            .unwrap();
        daemon.set_log_level(2).await.unwrap();
        daemon.set_log_categories("*:INFO").await.unwrap();

        let expected = [
            ("get_blocks_by_height.bin", json!({"heights": [1, 2]})),
            ("get_hashes.bin", json!({"block_ids": ["aa"], "start_height": 3})),
            ("pop_blocks", json!({"nblocks": 4})),
            ("get_outs.bin", json!({"outputs": [{"amount": 0, "index": 7}]})),
            ("is_key_image_spent", json!({"key_images": ["ki"]})),
            ("send_raw_transaction", json!({"tx_as_hex": "0101", "do_not_relay": true})),
            ("set_donate_level", json!({"blocks": 5})),
            ("set_log_hash_rate", json!({"visible": true})),
            (
                "set_bootstrap_daemon",
                json!({
                    "address": "node.example:17566",
                    "username": "bob",
                    "password": "hunter2",
                }),
            ),
            ("set_log_level", json!({"level": 2})),
            ("set_log_categories", json!({"categories": "*:INFO"})),
        ];
        let requests = daemon.transport().requests();
        assert_eq!(requests.len(), expected.len());
        for ((path, body), (want_path, want_body)) in requests.iter().zip(expected.iter()) {
            assert_eq!(path, want_path);
            assert_eq!(body, want_body, "body of `{path}`");
        }
    }
}
