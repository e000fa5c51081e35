use serde::Serialize;
use serde_json::{json, Value};

use crate::config::ClientConfig;
use crate::error::RpcError;
use crate::rpc::{self, HttpTransport, Transport};

use super::types::{
    AddressBookEdit, EditAddressBookParams, MakeUriParams, SetDaemonRequest, SubaddressIndex,
    SweepAllRequest, SweepDustOptions, SweepSingleRequest, TransferRequest, TransferSplitRequest,
    TransfersFilter, UriOptions, ValidateAddressOptions,
};

/// Client for the wallet service's `/json_rpc` methods.
///
/// Build it from [`ClientConfig::wallet`]; add
/// [`with_basic_auth`](ClientConfig::with_basic_auth) when the service was
/// started with `--rpc-login`.
#[derive(Debug, Clone)]
pub struct Wallet<T = HttpTransport> {
    transport: T,
}

impl Wallet {
    pub fn new(config: &ClientConfig) -> Result<Self, RpcError> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }
}

impl<T> Wallet<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> Wallet<T> {
    /// Call any wallet method by name.
    pub async fn call<P>(&self, method: &str, params: &P) -> Result<Value, RpcError>
    where
        P: Serialize + ?Sized,
    {
        rpc::json_rpc(&self.transport, method, params).await
    }

    // ==========================================================================
    // Balance and Addresses
    // ==========================================================================

    /// An empty `address_indices` asks for every subaddress of the account.
    pub async fn get_balance(
        &self,
        account_index: u32,
        address_indices: &[u32],
    ) -> Result<Value, RpcError> {
        self.call(
            "get_balance",
            &json!({
                "account_index": account_index,
                "address_indices": address_indices,
            }),
        )
        .await
    }

    pub async fn get_address(
        &self,
        account_index: u32,
        address_indices: &[u32],
    ) -> Result<Value, RpcError> {
        self.call(
            "get_address",
            &json!({
                "account_index": account_index,
                "address_indices": address_indices,
            }),
        )
        .await
    }

    pub async fn get_address_index(&self, address: &str) -> Result<Value, RpcError> {
        self.call("get_address_index", &json!({ "address": address })).await
    }

    pub async fn create_address(
        &self,
        account_index: u32,
        label: Option<&str>,
    ) -> Result<Value, RpcError> {
        self.call(
            "create_address",
            &json!({ "account_index": account_index, "label": label }),
        )
        .await
    }

    pub async fn label_address(
        &self,
        index: SubaddressIndex,
        label: &str,
    ) -> Result<Value, RpcError> {
        self.call("label_address", &json!({ "index": index, "label": label })).await
    }

    pub async fn validate_address(
        &self,
        address: &str,
        options: &ValidateAddressOptions,
    ) -> Result<Value, RpcError> {
        self.call(
            "validate_address",
            &json!({
                "address": address,
                "any_net_type": options.any_net_type,
                "allow_openalias": options.allow_openalias,
            }),
        )
        .await
    }

    pub async fn make_integrated_address(
        &self,
        payment_id: &str,
        standard_address: Option<&str>,
    ) -> Result<Value, RpcError> {
        self.call(
            "make_integrated_address",
            &json!({
                "payment_id": payment_id,
                "standard_address": standard_address,
            }),
        )
        .await
    }

    pub async fn split_integrated_address(
        &self,
        integrated_address: &str,
    ) -> Result<Value, RpcError> {
        self.call(
            "split_integrated_address",
            &json!({ "integrated_address": integrated_address }),
        )
        .await
    }

    // ==========================================================================
    // Accounts
    // ==========================================================================

    pub async fn get_accounts(&self, tag: Option<&str>) -> Result<Value, RpcError> {
        self.call("get_accounts", &json!({ "tag": tag })).await
    }

    pub async fn create_account(&self, label: Option<&str>) -> Result<Value, RpcError> {
        self.call("create_account", &json!({ "label": label })).await
    }

    pub async fn label_account(&self, account_index: u32, label: &str) -> Result<Value, RpcError> {
        self.call(
            "label_account",
            &json!({ "account_index": account_index, "label": label }),
        )
        .await
    }

    pub async fn get_account_tags(&self) -> Result<Value, RpcError> {
        self.call("get_account_tags", &json!({})).await
    }

    pub async fn tag_accounts(&self, tag: &str, accounts: &[u32]) -> Result<Value, RpcError> {
        self.call("tag_accounts", &json!({ "tag": tag, "accounts": accounts })).await
    }

    pub async fn untag_accounts(&self, accounts: &[u32]) -> Result<Value, RpcError> {
        self.call("untag_accounts", &json!({ "accounts": accounts })).await
    }

    pub async fn set_account_tag_description(
        &self,
        tag: &str,
        description: &str,
    ) -> Result<Value, RpcError> {
        self.call(
            "set_account_tag_description",
            &json!({ "tag": tag, "description": description }),
        )
        .await
    }

    pub async fn get_height(&self) -> Result<Value, RpcError> {
        self.call("get_height", &json!({})).await
    }

    // ==========================================================================
    // Sending
    // ==========================================================================

    pub async fn transfer(&self, request: &TransferRequest) -> Result<Value, RpcError> {
        self.call("transfer", request).await
    }

    pub async fn transfer_split(&self, request: &TransferSplitRequest) -> Result<Value, RpcError> {
        self.call("transfer_split", request).await
    }

    pub async fn sign_transfer(
        &self,
        unsigned_txset: &str,
        export_raw: bool,
    ) -> Result<Value, RpcError> {
        self.call(
            "sign_transfer",
            &json!({ "unsigned_txset": unsigned_txset, "export_raw": export_raw }),
        )
        .await
    }

    pub async fn describe_transfer(&self, unsigned_txset: &str) -> Result<Value, RpcError> {
        self.call(
            "describe_transfer",
            &json!({ "unsigned_txset": unsigned_txset }),
        )
        .await
    }

    pub async fn submit_transfer(&self, tx_data_hex: &str) -> Result<Value, RpcError> {
        self.call("submit_transfer", &json!({ "tx_data_hex": tx_data_hex })).await
    }

    pub async fn sweep_dust(&self, options: &SweepDustOptions) -> Result<Value, RpcError> {
        self.call("sweep_dust", options).await
    }

    pub async fn sweep_unmixable(&self) -> Result<Value, RpcError> {
        self.call("sweep_unmixable", &json!({})).await
    }

    pub async fn sweep_all(&self, request: &SweepAllRequest) -> Result<Value, RpcError> {
        self.call("sweep_all", request).await
    }

    pub async fn sweep_single(&self, request: &SweepSingleRequest) -> Result<Value, RpcError> {
        self.call("sweep_single", request).await
    }

    pub async fn relay_tx(&self, tx_hex: &str) -> Result<Value, RpcError> {
        self.call("relay_tx", &json!({ "hex": tx_hex })).await
    }

    // ==========================================================================
    // History
    // ==========================================================================

    pub async fn get_payments(&self, payment_id: &str) -> Result<Value, RpcError> {
        self.call("get_payments", &json!({ "payment_id": payment_id })).await
    }

    pub async fn get_bulk_payments(
        &self,
        payment_ids: &[&str],
        min_block_height: u64,
    ) -> Result<Value, RpcError> {
        self.call(
            "get_bulk_payments",
            &json!({
                "payment_ids": payment_ids,
                "min_block_height": min_block_height,
            }),
        )
        .await
    }

    /// `transfer_type` is one of `all`, `available` or `unavailable`.
    pub async fn incoming_transfers(
        &self,
        transfer_type: &str,
        account_index: u32,
        subaddr_indices: &[u32],
        verbose: bool,
    ) -> Result<Value, RpcError> {
        self.call(
            "incoming_transfers",
            &json!({
                "transfer_type": transfer_type,
                "account_index": account_index,
                "subaddr_indices": subaddr_indices,
                "verbose": verbose,
            }),
        )
        .await
    }

    pub async fn get_transfers(&self, filter: &TransfersFilter) -> Result<Value, RpcError> {
        self.call("get_transfers", filter).await
    }

    pub async fn get_transfer_by_txid(
        &self,
        txid: &str,
        account_index: Option<u32>,
    ) -> Result<Value, RpcError> {
        self.call(
            "get_transfer_by_txid",
            &json!({ "txid": txid, "account_index": account_index }),
        )
        .await
    }

    pub async fn set_tx_notes(&self, txids: &[&str], notes: &[&str]) -> Result<Value, RpcError> {
        self.call("set_tx_notes", &json!({ "txids": txids, "notes": notes })).await
    }

    pub async fn get_tx_notes(&self, txids: &[&str]) -> Result<Value, RpcError> {
        self.call("get_tx_notes", &json!({ "txids": txids })).await
    }

    pub async fn set_attribute(&self, key: &str, value: &str) -> Result<Value, RpcError> {
        self.call("set_attribute", &json!({ "key": key, "value": value })).await
    }

    pub async fn get_attribute(&self, key: &str) -> Result<Value, RpcError> {
        self.call("get_attribute", &json!({ "key": key })).await
    }

    // ==========================================================================
    // Keys and Proofs
    // ==========================================================================

    /// `key_type` is `mnemonic`, `view_key` or `spend_key`.
    pub async fn query_key(&self, key_type: &str) -> Result<Value, RpcError> {
        self.call("query_key", &json!({ "key_type": key_type })).await
    }

    pub async fn get_tx_key(&self, txid: &str) -> Result<Value, RpcError> {
        self.call("get_tx_key", &json!({ "txid": txid })).await
    }

    pub async fn check_tx_key(
        &self,
        txid: &str,
        tx_key: &str,
        address: &str,
    ) -> Result<Value, RpcError> {
        self.call(
            "check_tx_key",
            &json!({ "txid": txid, "tx_key": tx_key, "address": address }),
        )
        .await
    }

    pub async fn get_tx_proof(
        &self,
        txid: &str,
        address: &str,
        message: Option<&str>,
    ) -> Result<Value, RpcError> {
        self.call(
            "get_tx_proof",
            &json!({ "txid": txid, "address": address, "message": message }),
        )
        .await
    }

    pub async fn check_tx_proof(
        &self,
        txid: &str,
        address: &str,
        signature: &str,
        message: Option<&str>,
    ) -> Result<Value, RpcError> {
        self.call(
            "check_tx_proof",
            &json!({
                "txid": txid,
                "address": address,
                "signature": signature,
                "message": message,
            }),
        )
        .await
    }

    pub async fn get_spend_proof(
        &self,
        txid: &str,
        message: Option<&str>,
    ) -> Result<Value, RpcError> {
        self.call(
            "get_spend_proof",
            &json!({ "txid": txid, "message": message }),
        )
        .await
    }

    pub async fn check_spend_proof(
        &self,
        txid: &str,
        signature: &str,
        message: Option<&str>,
    ) -> Result<Value, RpcError> {
        self.call(
            "check_spend_proof",
            &json!({ "txid": txid, "message": message, "signature": signature }),
        )
        .await
    }

    /// Prove the balance of the whole wallet (`all_reserve`) or `amount`
    /// from one account.
    pub async fn get_reserve_proof(
        &self,
        all_reserve: bool,
        account_index: u32,
        amount: u64,
        message: Option<&str>,
    ) -> Result<Value, RpcError> {
        self.call(
            "get_reserve_proof",
            &json!({
                "all": all_reserve,
                "account_index": account_index,
                "amount": amount,
                "message": message,
            }),
        )
        .await
    }

    pub async fn check_reserve_proof(
        &self,
        address: &str,
        signature: &str,
        message: Option<&str>,
    ) -> Result<Value, RpcError> {
        self.call(
            "check_reserve_proof",
            &json!({ "address": address, "message": message, "signature": signature }),
        )
        .await
    }

    pub async fn sign(&self, data: &str) -> Result<Value, RpcError> {
        self.call("sign", &json!({ "data": data })).await
    }

    pub async fn verify(
        &self,
        data: &str,
        address: &str,
        signature: &str,
    ) -> Result<Value, RpcError> {
        self.call(
            "verify",
            &json!({ "data": data, "address": address, "signature": signature }),
        )
        .await
    }

    pub async fn export_outputs(&self) -> Result<Value, RpcError> {
        self.call("export_outputs", &json!({})).await
    }

    pub async fn import_outputs(&self, outputs_data_hex: &str) -> Result<Value, RpcError> {
        self.call(
            "import_outputs",
            &json!({ "outputs_data_hex": outputs_data_hex }),
        )
        .await
    }

    pub async fn export_key_images(&self) -> Result<Value, RpcError> {
        self.call("export_key_images", &json!({})).await
    }

    pub async fn import_key_images(
        &self,
        signed_key_images: &[&str],
        key_image: &str,
        signature: &str,
    ) -> Result<Value, RpcError> {
        self.call(
            "import_key_images",
            &json!({
                "signed_key_images": signed_key_images,
                "key_image": key_image,
                "signature": signature,
            }),
        )
        .await
    }

    // ==========================================================================
    // URIs and Address Book
    // ==========================================================================

    pub async fn make_uri(&self, address: &str, options: &UriOptions) -> Result<Value, RpcError> {
        self.call("make_uri", &MakeUriParams { address, options }).await
    }

    pub async fn parse_uri(&self, uri: &str) -> Result<Value, RpcError> {
        self.call("parse_uri", &json!({ "uri": uri })).await
    }

    pub async fn get_address_book(&self, entries: &[u64]) -> Result<Value, RpcError> {
        self.call("get_address_book", &json!({ "entries": entries })).await
    }

    pub async fn add_address_book(
        &self,
        address: &str,
        payment_id: Option<&str>,
        description: Option<&str>,
    ) -> Result<Value, RpcError> {
        self.call(
            "add_address_book",
            &json!({
                "address": address,
                "payment_id": payment_id,
                "description": description,
            }),
        )
        .await
    }

    pub async fn edit_address_book(
        &self,
        index: u64,
        edit: &AddressBookEdit,
    ) -> Result<Value, RpcError> {
        self.call("edit_address_book", &EditAddressBookParams { index, edit }).await
    }

    pub async fn delete_address_book(&self, index: u64) -> Result<Value, RpcError> {
        self.call("delete_address_book", &json!({ "index": index })).await
    }

    // ==========================================================================
    // Refresh and Mining
    // ==========================================================================

    pub async fn store(&self) -> Result<Value, RpcError> {
        self.call("store", &json!({})).await
    }

    pub async fn refresh(&self, start_height: Option<u64>) -> Result<Value, RpcError> {
        self.call("refresh", &json!({ "start_height": start_height })).await
    }

    /// `period` is in seconds; unset keeps the wallet's current period.
    pub async fn auto_refresh(&self, enable: bool, period: Option<u64>) -> Result<Value, RpcError> {
        self.call(
            "auto_refresh",
            &json!({ "enable": enable, "period": period }),
        )
        .await
    }

    pub async fn rescan_blockchain(&self) -> Result<Value, RpcError> {
        self.call("rescan_blockchain", &json!({})).await
    }

    pub async fn rescan_spent(&self) -> Result<Value, RpcError> {
        self.call("rescan_spent", &json!({})).await
    }

    pub async fn start_mining(
        &self,
        threads_count: u32,
        do_background_mining: bool,
        ignore_battery: bool,
    ) -> Result<Value, RpcError> {
        self.call(
            "start_mining",
            &json!({
                "threads_count": threads_count,
                "do_background_mining": do_background_mining,
                "ignore_battery": ignore_battery,
            }),
        )
        .await
    }

    pub async fn set_donate_level(&self, donate: u32) -> Result<Value, RpcError> {
        self.call("set_donate_level", &json!({ "donate": donate })).await
    }

    pub async fn stop_mining(&self) -> Result<Value, RpcError> {
        self.call("stop_mining", &json!({})).await
    }

    // ==========================================================================
    // Wallet Files
    // ==========================================================================

    pub async fn get_languages(&self) -> Result<Value, RpcError> {
        self.call("get_languages", &json!({})).await
    }

    /// A missing password is sent as the empty string.
    pub async fn create_wallet(
        &self,
        filename: &str,
        language: &str,
        password: Option<&str>,
    ) -> Result<Value, RpcError> {
        self.call(
            "create_wallet",
            &json!({
                "filename": filename,
                "password": password.unwrap_or_default(),
                "language": language,
            }),
        )
        .await
    }

    pub async fn create_hw_wallet(
        &self,
        filename: &str,
        language: &str,
        device_name: &str,
        restore_height: u64,
    ) -> Result<Value, RpcError> {
        self.call(
            "create_hw_wallet",
            &json!({
                "filename": filename,
                "language": language,
                "device_name": device_name,
                "restore_height": restore_height,
            }),
        )
        .await
    }

    /// A missing password is sent as the empty string.
    pub async fn open_wallet(
        &self,
        filename: &str,
        password: Option<&str>,
    ) -> Result<Value, RpcError> {
        self.call(
            "open_wallet",
            &json!({
                "filename": filename,
                "password": password.unwrap_or_default(),
            }),
        )
        .await
    }

    pub async fn close_wallet(&self) -> Result<Value, RpcError> {
        self.call("close_wallet", &json!({})).await
    }

    pub async fn stop_wallet(&self) -> Result<Value, RpcError> {
        self.call("stop_wallet", &json!({})).await
    }

    pub async fn change_wallet_password(
        &self,
        old_password: Option<&str>,
        new_password: Option<&str>,
    ) -> Result<Value, RpcError> {
        self.call(
            "change_wallet_password",
            &json!({
                "old_password": old_password.unwrap_or_default(),
                "new_password": new_password.unwrap_or_default(),
            }),
        )
        .await
    }

    pub async fn restore_wallet_from_seed(
        &self,
        filename: &str,
        seed: &str,
        restore_height: u64,
    ) -> Result<Value, RpcError> {
        self.call(
            "restore_wallet_from_seed",
            &json!({
                "filename": filename,
                "seed": seed,
                "restore_height": restore_height,
            }),
        )
        .await
    }

    pub async fn restore_wallet_from_keys(
        &self,
        filename: &str,
        address: &str,
        viewkey: &str,
        spendkey: &str,
        restore_height: u64,
    ) -> Result<Value, RpcError> {
        self.call(
            "restore_wallet_from_keys",
            &json!({
                "filename": filename,
                "address": address,
                "viewkey": viewkey,
                "spendkey": spendkey,
                "restore_height": restore_height,
            }),
        )
        .await
    }

    // ==========================================================================
    // Multisig
    // ==========================================================================

    pub async fn is_multisig(&self) -> Result<Value, RpcError> {
        self.call("is_multisig", &json!({})).await
    }

    pub async fn prepare_multisig(&self) -> Result<Value, RpcError> {
        self.call("prepare_multisig", &json!({})).await
    }

    pub async fn make_multisig(
        &self,
        multisig_info: &[&str],
        threshold: u32,
        password: &str,
    ) -> Result<Value, RpcError> {
        self.call(
            "make_multisig",
            &json!({
                "multisig_info": multisig_info,
                "threshold": threshold,
                "password": password,
            }),
        )
        .await
    }

    pub async fn export_multisig_info(&self) -> Result<Value, RpcError> {
        self.call("export_multisig_info", &json!({})).await
    }

    pub async fn import_multisig_info(&self, info: &[&str]) -> Result<Value, RpcError> {
        self.call("import_multisig_info", &json!({ "info": info })).await
    }

    pub async fn finalize_multisig(
        &self,
        multisig_info: &[&str],
        password: &str,
    ) -> Result<Value, RpcError> {
        self.call(
            "finalize_multisig",
            &json!({ "multisig_info": multisig_info, "password": password }),
        )
        .await
    }

    pub async fn exchange_multisig_keys(
        &self,
        multisig_info: &[&str],
        password: &str,
    ) -> Result<Value, RpcError> {
        self.call(
            "exchange_multisig_keys",
            &json!({ "multisig_info": multisig_info, "password": password }),
        )
        .await
    }

    pub async fn sign_multisig(&self, tx_data_hex: &str) -> Result<Value, RpcError> {
        self.call("sign_multisig", &json!({ "tx_data_hex": tx_data_hex })).await
    }

    pub async fn submit_multisig(&self, tx_data_hex: &str) -> Result<Value, RpcError> {
        self.call("submit_multisig", &json!({ "tx_data_hex": tx_data_hex })).await
    }

    // ==========================================================================
    // Service
    // ==========================================================================

    pub async fn set_daemon(&self, request: &SetDaemonRequest) -> Result<Value, RpcError> {
        self.call("set_daemon", request).await
    }

    pub async fn set_log_level(&self, level: u8) -> Result<Value, RpcError> {
        self.call("set_log_level", &json!({ "level": level })).await
    }

    pub async fn set_log_categories(&self, categories: &str) -> Result<Value, RpcError> {
        self.call("set_log_categories", &json!({ "categories": categories })).await
    }

    pub async fn get_version(&self) -> Result<Value, RpcError> {
        self.call("get_version", &json!({})).await
    }
}
