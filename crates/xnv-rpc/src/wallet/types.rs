//! Request-side types for the wallet client.
//!
//! `Option` fields serialize as `null` when unset unless noted otherwise;
//! the wallet service treats a `null` the same as its own default.

use serde::Serialize;

// ==============================================================================
// Addresses
// ==============================================================================

/// Recipient of a transfer. `amount` is in atomic units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Destination {
    pub amount: u64,
    pub address: String,
}

impl Destination {
    pub fn new(address: impl Into<String>, amount: u64) -> Self {
        Self {
            amount,
            address: address.into(),
        }
    }
}

/// Account (`major`) and subaddress (`minor`) index pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubaddressIndex {
    pub major: u32,
    pub minor: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ValidateAddressOptions {
    pub any_net_type: bool,
    pub allow_openalias: bool,
}

// ==============================================================================
// Transfers
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferRequest {
    pub destinations: Vec<Destination>,
    pub account_index: u32,
    pub subaddr_indices: Vec<u32>,
    pub priority: u32,
    pub mixin: u32,
    pub ring_size: u32,
    pub unlock_time: u64,
    pub get_tx_key: bool,
    pub get_tx_hex: bool,
    pub get_tx_metadata: bool,
    pub do_not_relay: bool,
    pub payment_id: Option<String>,
}

/// Same as [`TransferRequest`] but the wallet may split the payment over
/// several transactions, so it returns a key per transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferSplitRequest {
    pub destinations: Vec<Destination>,
    pub account_index: u32,
    pub subaddr_indices: Vec<u32>,
    pub priority: u32,
    pub mixin: u32,
    pub ring_size: u32,
    pub unlock_time: u64,
    pub get_tx_keys: bool,
    pub get_tx_hex: bool,
    pub get_tx_metadata: bool,
    pub do_not_relay: bool,
    pub payment_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepAllRequest {
    pub address: String,
    pub account_index: u32,
    pub subaddr_indices: Vec<u32>,
    pub priority: u32,
    pub mixin: u32,
    pub ring_size: u32,
    pub unlock_time: u64,
    pub get_tx_keys: bool,
    pub below_amount: u64,
    pub do_not_relay: bool,
    pub get_tx_hex: bool,
    pub get_tx_metadata: bool,
    pub payment_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepSingleRequest {
    pub address: String,
    pub priority: u32,
    pub mixin: u32,
    pub ring_size: u32,
    pub unlock_time: u64,
    pub get_tx_key: bool,
    pub get_tx_hex: bool,
    pub get_tx_metadata: bool,
    pub do_not_relay: bool,
    pub payment_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SweepDustOptions {
    pub get_tx_keys: bool,
    pub do_not_relay: bool,
    pub get_tx_hex: bool,
    pub get_tx_metadata: bool,
}

/// Filter for `get_transfers`. The default selects nothing; set at least one
/// of the category flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransfersFilter {
    #[serde(rename = "in")]
    pub incoming: bool,
    #[serde(rename = "out")]
    pub outgoing: bool,
    pub pending: bool,
    pub failed: bool,
    pub pool: bool,
    pub filter_by_height: bool,
    pub min_height: Option<u64>,
    pub max_height: Option<u64>,
    pub account_index: Option<u32>,
    pub subaddr_indices: Vec<u32>,
}

// ==============================================================================
// URIs and Address Book
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UriOptions {
    pub amount: Option<u64>,
    pub payment_id: Option<String>,
    pub recipient_name: Option<String>,
    pub tx_description: Option<String>,
}

#[derive(Serialize)]
pub(crate) struct MakeUriParams<'a> {
    pub(crate) address: &'a str,
    #[serde(flatten)]
    pub(crate) options: &'a UriOptions,
}

/// Changes for `edit_address_book`. Each field is only applied when its
/// `set_*` flag is true; the setter methods flip the flag for you.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddressBookEdit {
    pub set_address: bool,
    pub address: Option<String>,
    pub set_description: bool,
    pub description: Option<String>,
    pub set_payment_id: bool,
    pub payment_id: Option<String>,
}

impl AddressBookEdit {
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.set_address = true;
        self.address = Some(address.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.set_description = true;
        self.description = Some(description.into());
        self
    }

    pub fn payment_id(mut self, payment_id: impl Into<String>) -> Self {
        self.set_payment_id = true;
        self.payment_id = Some(payment_id.into());
        self
    }
}

#[derive(Serialize)]
pub(crate) struct EditAddressBookParams<'a> {
    pub(crate) index: u64,
    #[serde(flatten)]
    pub(crate) edit: &'a AddressBookEdit,
}

// ==============================================================================
// Daemon Connection
// ==============================================================================

pub const DEFAULT_SSL_SUPPORT: &str = "autodetect";

/// Arguments of `set_daemon`. Use [`SetDaemonRequest::new`] to get the
/// service defaults for everything but the address and trust flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetDaemonRequest {
    pub address: String,
    pub trusted: bool,
    pub ssl_support: String,
    pub ssl_private_key_path: Option<String>,
    pub ssl_certificate_path: Option<String>,
    pub ssl_ca_file: Option<String>,
    pub ssl_allowed_fingerprints: Option<Vec<String>>,
    pub ssl_allow_any_cert: bool,
}

impl SetDaemonRequest {
    pub fn new(address: impl Into<String>, trusted: bool) -> Self {
        Self {
            address: address.into(),
            trusted,
            ssl_support: DEFAULT_SSL_SUPPORT.to_owned(),
            ssl_private_key_path: None,
            ssl_certificate_path: None,
            ssl_ca_file: None,
            ssl_allowed_fingerprints: None,
            ssl_allow_any_cert: false,
        }
    }
}
