use chrono::NaiveDateTime;
use serde::Serialize;

use super::address::{AddressMap, AddressReport};
use super::wire;

// ---------------------------------------------------------------------------
// OverviewReport — Pool-wide snapshot
// ---------------------------------------------------------------------------

/// The top level pool report: totals for all miners plus the per-address
/// reports, as of `time`.
///
/// Serializes to the same document shape it is decoded from.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OverviewReport {
    #[serde(serialize_with = "wire::quoted")]
    pub total_paid_out: f64,
    #[serde(rename = "TotalRejectedMegahashesPerSecond", serialize_with = "wire::quoted")]
    pub total_rejected_hashrate: f64,
    #[serde(serialize_with = "wire::quoted")]
    pub total_immature_balance: f64,
    #[serde(rename = "TotalMegahashesPerSecond", serialize_with = "wire::quoted")]
    pub total_hashrate: f64,
    #[serde(serialize_with = "wire::quoted")]
    pub total_balance: f64,
    /// Moment the pool produced the snapshot. The upstream layout carries no
    /// zone; the value is kept naive.
    #[serde(serialize_with = "wire::report_time")]
    pub time: NaiveDateTime,
    #[serde(rename = "Report", serialize_with = "wire::address_pairs")]
    pub address_reports: AddressMap,
}

impl OverviewReport {
    /// Look up the report for a payout address.
    ///
    /// Absence is not an error: the caller decides whether a missing
    /// address is fatal.
    pub fn lookup(&self, address: &str) -> Option<&AddressReport> {
        self.address_reports.get(address)
    }

    /// All addresses present in the snapshot, sorted.
    pub fn addresses(&self) -> Vec<&str> {
        let mut addresses: Vec<&str> = self.address_reports.keys().map(String::as_str).collect();
        addresses.sort_unstable();
        addresses
    }
}
