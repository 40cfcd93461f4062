//! Middlecoin SDK for Rust.
//!
//! Decodes the Middlecoin pool overview report into typed records and sums
//! per-address statistics. The report is an irregular JSON document: decimal
//! values are quoted strings, the snapshot time uses a fixed
//! `YYYY-MM-DD HH:MM:SS` layout, and the address reports arrive as an array
//! of `[address, report]` pairs.
//!
//! # Quick start
//!
//! ```no_run
//! use middlecoin_sdk::MiddlecoinClient;
//!
//! let client = MiddlecoinClient::builder().fiat_rate(650.0).build().unwrap();
//!
//! // Sum two payout addresses and print the summary
//! let summary = client
//!     .fetch_summary(&["1DgxRTofdbau7kpf3pQeRydcoTPG2L5NUX", "17Nt7rWiRZKDgcNp421zZ1FHGPWSnnT1bk"])
//!     .unwrap();
//! println!("{}", summary);
//! ```
//!
//! Documents obtained some other way can be decoded directly:
//!
//! ```
//! let doc = br#"{"TotalPaidOut": "1.5", "Time": "2014-01-28 17:05:32", "Report": []}"#;
//! let report = middlecoin_sdk::decode_overview_report(doc).unwrap();
//! assert_eq!(report.total_paid_out, 1.5);
//! ```

pub mod aggregate;
#[cfg(feature = "async")]
pub mod async_client;
pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod format;
pub mod models;

pub use aggregate::{aggregate, lookup, Aggregate};
#[cfg(feature = "async")]
pub use async_client::AsyncMiddlecoinClient;
pub use client::{MiddlecoinClient, MiddlecoinClientBuilder};
pub use decode::{
    decode_overview_report, decode_overview_report_gz, decode_overview_report_reader,
    decode_quoted_number, decode_timestamp, fold_entries, Decoder,
};
pub use error::{MiddlecoinError, Result};
pub use models::{AddressMap, AddressReport, AddressReportEntry, OverviewReport};
