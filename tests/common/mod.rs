//! Shared test fixtures for the Middlecoin SDK integration tests.
//!
//! Provides `sample_document()` which builds a small overview document in
//! the upstream wire shape (quoted decimals, tuple array of address reports).

#![allow(dead_code)]

use serde_json::{json, Value};

pub const ADDR_A: &str = "1DgxRTofdbau7kpf3pQeRydcoTPG2L5NUX";
pub const ADDR_B: &str = "17Nt7rWiRZKDgcNp421zZ1FHGPWSnnT1bk";
pub const ADDR_C: &str = "1MiddLeCoinTestAddressXXXXXXXXXXXX";

/// A report object for one address, with every field quoted the way the
/// pool sends it.
pub fn address_report_json(shares: u64, rejected: u64, balances: [&str; 6]) -> Value {
    let [immature, paid_out, unexchanged, hashrate, bitcoin, rejected_hashrate] = balances;
    json!({
        "LastHourShares": shares,
        "ImmatureBalance": immature,
        "LastHourRejectedShares": rejected,
        "PaidOut": paid_out,
        "UnexchangedBalance": unexchanged,
        "MegahashesPerSecond": hashrate,
        "BitcoinBalance": bitcoin,
        "RejectedMegahashesPerSecond": rejected_hashrate
    })
}

/// Two-address overview document.
pub fn sample_document() -> Value {
    json!({
        "TotalPaidOut": "1234.5",
        "TotalRejectedMegahashesPerSecond": "250.25",
        "TotalImmatureBalance": "12.75",
        "TotalMegahashesPerSecond": "98765.5",
        "TotalBalance": "40.125",
        "Time": "2014-01-28 17:05:32",
        "Report": [
            [ADDR_A, address_report_json(1200, 12, ["0.25", "1.5", "0.125", "512.5", "0.5", "4.25"])],
            [ADDR_B, address_report_json(300, 3, ["0.5", "2", "0.25", "128", "0.75", "1.5"])]
        ]
    })
}

pub fn to_bytes(value: &Value) -> Vec<u8> {
    serde_json::to_vec(value).unwrap()
}
