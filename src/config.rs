use std::time::Duration;

pub const DEFAULT_REPORT_URL: &str = "http://www.middlecoin.com/json";

/// BTC to USD rate used when no rate is supplied. Not a live quote.
pub const DEFAULT_FIAT_RATE: f64 = 650.0;

/// Layout of the report timestamp, e.g. `2014-01-28 17:05:32`.
pub const TIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// Top-level keys of the overview document, verbatim from the upstream service.
pub const FIELD_TOTAL_PAID_OUT: &str = "TotalPaidOut";
pub const FIELD_TOTAL_REJECTED_HASHRATE: &str = "TotalRejectedMegahashesPerSecond";
pub const FIELD_TOTAL_IMMATURE_BALANCE: &str = "TotalImmatureBalance";
pub const FIELD_TOTAL_HASHRATE: &str = "TotalMegahashesPerSecond";
pub const FIELD_TOTAL_BALANCE: &str = "TotalBalance";
pub const FIELD_TIME: &str = "Time";
pub const FIELD_REPORT: &str = "Report";

// Keys of a single address report object.
pub const FIELD_LAST_HOUR_SHARES: &str = "LastHourShares";
pub const FIELD_IMMATURE_BALANCE: &str = "ImmatureBalance";
pub const FIELD_LAST_HOUR_REJECTED_SHARES: &str = "LastHourRejectedShares";
pub const FIELD_PAID_OUT: &str = "PaidOut";
pub const FIELD_UNEXCHANGED_BALANCE: &str = "UnexchangedBalance";
pub const FIELD_HASHRATE: &str = "MegahashesPerSecond";
pub const FIELD_BITCOIN_BALANCE: &str = "BitcoinBalance";
pub const FIELD_REJECTED_HASHRATE: &str = "RejectedMegahashesPerSecond";
