use serde::Serialize;
use std::collections::HashMap;

use super::wire;

// ---------------------------------------------------------------------------
// AddressReport — One address's mining status for the last hour
// ---------------------------------------------------------------------------

/// What a single payout address has been up to during the last reporting
/// interval.
///
/// Balances are in BTC, hashrates in megahashes per second. Serializes in
/// the upstream shape, with decimals quoted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressReport {
    pub last_hour_shares: u64,
    #[serde(serialize_with = "wire::quoted")]
    pub immature_balance: f64,
    pub last_hour_rejected_shares: u64,
    #[serde(serialize_with = "wire::quoted")]
    pub paid_out: f64,
    #[serde(serialize_with = "wire::quoted")]
    pub unexchanged_balance: f64,
    #[serde(rename = "MegahashesPerSecond", serialize_with = "wire::quoted")]
    pub hashrate: f64,
    #[serde(serialize_with = "wire::quoted")]
    pub bitcoin_balance: f64,
    #[serde(rename = "RejectedMegahashesPerSecond", serialize_with = "wire::quoted")]
    pub rejected_hashrate: f64,
}

// ---------------------------------------------------------------------------
// AddressReportEntry — `[address, report]` pair from the report array
// ---------------------------------------------------------------------------

/// A single `[address, report]` element of the overview's report array,
/// before it is folded into an [`AddressMap`].
#[derive(Debug, Clone, PartialEq)]
pub struct AddressReportEntry {
    pub address: String,
    pub report: AddressReport,
}

/// Payout address to its report.
pub type AddressMap = HashMap<String, AddressReport>;
