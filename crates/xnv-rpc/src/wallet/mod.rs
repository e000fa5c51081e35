//! Wallet service client.

mod client;
pub mod types;

pub use client::Wallet;
pub use types::{
    AddressBookEdit, Destination, SetDaemonRequest, SubaddressIndex, SweepAllRequest,
    SweepDustOptions, SweepSingleRequest, TransferRequest, TransferSplitRequest, TransfersFilter,
    UriOptions, ValidateAddressOptions,
};
