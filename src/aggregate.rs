//! Per-address aggregation and text summaries.

use std::fmt;
use std::ops::AddAssign;

use log::debug;

use crate::config;
use crate::format::general;
use crate::models::{AddressReport, OverviewReport};

// ---------------------------------------------------------------------------
// AddressReport arithmetic
// ---------------------------------------------------------------------------

impl AddressReport {
    /// Add every field of `other` into `self`, returning `self` for chaining.
    ///
    /// Shares are summed with plain integer addition; keeping them in range
    /// is up to the caller.
    pub fn add(&mut self, other: &AddressReport) -> &mut Self {
        self.last_hour_shares += other.last_hour_shares;
        self.immature_balance += other.immature_balance;
        self.last_hour_rejected_shares += other.last_hour_rejected_shares;
        self.paid_out += other.paid_out;
        self.unexchanged_balance += other.unexchanged_balance;
        self.hashrate += other.hashrate;
        self.bitcoin_balance += other.bitcoin_balance;
        self.rejected_hashrate += other.rejected_hashrate;
        self
    }

    /// Everything the address has earned: confirmed, immature, paid out and
    /// not yet exchanged.
    pub fn profit(&self) -> f64 {
        self.bitcoin_balance + self.immature_balance + self.paid_out + self.unexchanged_balance
    }

    /// Render the report as labeled lines, with profit converted at
    /// `fiat_rate`.
    pub fn format(&self, fiat_rate: f64) -> String {
        let profit = self.profit();
        format!(
            "Last Hour Shares: {}\n\
             Immature Balance: {}\n\
             Last Hour Rejected Shares: {}\n\
             Paid Out: {}\n\
             Unexchanged Balance: {}\n\
             Megahashes Per Second: {}\n\
             Bitcoin Balance: {}\n\
             Rejected Megahashes Per Second: {}\n\
             \n\
             Total Profit: {}\n\
             Total Profit(@${}): {}\n",
            self.last_hour_shares,
            general(self.immature_balance),
            self.last_hour_rejected_shares,
            general(self.paid_out),
            general(self.unexchanged_balance),
            general(self.hashrate),
            general(self.bitcoin_balance),
            general(self.rejected_hashrate),
            general(profit),
            general(fiat_rate),
            general(profit * fiat_rate),
        )
    }
}

impl AddAssign<&AddressReport> for AddressReport {
    fn add_assign(&mut self, other: &AddressReport) {
        AddressReport::add(self, other);
    }
}

impl fmt::Display for AddressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(config::DEFAULT_FIAT_RATE))
    }
}

// ---------------------------------------------------------------------------
// Batch aggregation
// ---------------------------------------------------------------------------

/// Result of summing a list of addresses from one overview report.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Aggregate {
    /// Sum of every address that was found.
    pub total: AddressReport,
    /// Requested addresses present in the report, in request order.
    pub found: Vec<String>,
    /// Requested addresses absent from the report, in request order.
    pub missing: Vec<String>,
}

impl Aggregate {
    /// True if every requested address was present.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Summary of the total at the given fiat rate.
    pub fn format(&self, fiat_rate: f64) -> String {
        self.total.format(fiat_rate)
    }
}

/// Look up a single address. `None` when the address is not in the report.
pub fn lookup<'a>(report: &'a OverviewReport, address: &str) -> Option<&'a AddressReport> {
    report.lookup(address)
}

/// Sum the reports of `addresses` into a fresh accumulator.
///
/// Missing addresses are collected rather than treated as errors so the
/// remaining addresses are still summed; the caller decides whether an
/// incomplete aggregate is acceptable. An address listed twice is counted
/// twice.
pub fn aggregate<S: AsRef<str>>(report: &OverviewReport, addresses: &[S]) -> Aggregate {
    let mut result = Aggregate::default();
    for address in addresses {
        let address = address.as_ref();
        match report.lookup(address) {
            Some(found) => {
                result.total.add(found);
                result.found.push(address.to_string());
            }
            None => {
                debug!("Address {} not present in overview report", address);
                result.missing.push(address.to_string());
            }
        }
    }
    result
}
