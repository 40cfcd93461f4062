//! Decoding of the Middlecoin overview document into typed reports.
//!
//! The upstream document is irregular: decimal values arrive as quoted
//! strings, the snapshot time uses a fixed `YYYY-MM-DD HH:MM:SS` layout, and
//! the per-address reports are an array of `[address, report]` pairs rather
//! than an object. Each of those field categories has its own decoder here,
//! invoked while walking the parsed top-level object once.
//!
//! The address array is decoded in two phases: [`Decoder::entries_from_array`]
//! produces ordered [`AddressReportEntry`] values, then [`fold_entries`] folds
//! them into an [`AddressMap`] (last duplicate wins).

use std::io::Read;

use chrono::NaiveDateTime;
use flate2::read::GzDecoder;
use log::{debug, warn};
use serde_json::{Map, Value};

use crate::config;
use crate::error::{MiddlecoinError, Result};
use crate::models::{AddressMap, AddressReport, AddressReportEntry, OverviewReport};

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// Overview document decoder.
///
/// Strict by default: any malformed field, including a single bad element
/// of the address array, fails the whole decode. With
/// [`lenient(true)`](Decoder::lenient) the address array is decoded
/// permissively instead: a non-array value yields an empty mapping and
/// malformed elements are skipped with a warning. Scalar fields are strict
/// in both modes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    lenient: bool,
}

impl Decoder {
    /// Create a strict decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable permissive decoding of the address array.
    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    /// Whether this decoder skips malformed address elements.
    pub fn is_lenient(&self) -> bool {
        self.lenient
    }

    /// Decode a complete overview document from raw JSON bytes.
    pub fn decode(&self, bytes: &[u8]) -> Result<OverviewReport> {
        let document: Value = serde_json::from_slice(bytes)
            .map_err(|e| MiddlecoinError::MalformedDocument(e.to_string()))?;
        let object = match document {
            Value::Object(object) => object,
            other => {
                return Err(MiddlecoinError::MalformedDocument(format!(
                    "expected a JSON object, found {}",
                    kind(&other)
                )))
            }
        };

        let address_reports = match field(&object, config::FIELD_REPORT) {
            Some(value) => fold_entries(self.entries_from_array(value)?),
            None => AddressMap::new(),
        };

        let report = OverviewReport {
            total_paid_out: number_field(&object, config::FIELD_TOTAL_PAID_OUT)?,
            total_rejected_hashrate: number_field(&object, config::FIELD_TOTAL_REJECTED_HASHRATE)?,
            total_immature_balance: number_field(&object, config::FIELD_TOTAL_IMMATURE_BALANCE)?,
            total_hashrate: number_field(&object, config::FIELD_TOTAL_HASHRATE)?,
            total_balance: number_field(&object, config::FIELD_TOTAL_BALANCE)?,
            time: match field(&object, config::FIELD_TIME) {
                Some(value) => timestamp_value(value, config::FIELD_TIME)?,
                None => NaiveDateTime::default(),
            },
            address_reports,
        };

        debug!(
            "Decoded overview report at {} with {} addresses",
            report.time,
            report.address_reports.len()
        );
        Ok(report)
    }

    /// Decode an overview document from any byte stream.
    ///
    /// The reader is consumed and dropped before this returns, whether or
    /// not decoding succeeds.
    pub fn decode_reader<R: Read>(&self, mut reader: R) -> Result<OverviewReport> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        drop(reader);
        debug!("Read {} bytes of overview document", bytes.len());
        self.decode(&bytes)
    }

    /// Decode the `[[address, report], ...]` array into ordered entries.
    ///
    /// This is the first phase of the address decode; pass the result to
    /// [`fold_entries`] to build the mapping.
    pub fn entries_from_array(&self, value: &Value) -> Result<Vec<AddressReportEntry>> {
        let elements = match value {
            Value::Array(elements) => elements,
            Value::Null => return Ok(Vec::new()),
            other => {
                let message = format!("expected an array of [address, report] pairs, found {}", kind(other));
                if self.lenient {
                    warn!("Ignoring {}: {}", config::FIELD_REPORT, message);
                    return Ok(Vec::new());
                }
                return Err(MiddlecoinError::field(config::FIELD_REPORT, message));
            }
        };

        let mut entries = Vec::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            let path = format!("{}[{}]", config::FIELD_REPORT, index);
            match entry_value(element, &path) {
                Ok(entry) => entries.push(entry),
                Err(e) if self.lenient => warn!("Skipping address report element: {}", e),
                Err(e) => return Err(e),
            }
        }
        Ok(entries)
    }
}

// ---------------------------------------------------------------------------
// Top-level entry points
// ---------------------------------------------------------------------------

/// Decode an overview document from raw JSON bytes with a strict [`Decoder`].
pub fn decode_overview_report(bytes: &[u8]) -> Result<OverviewReport> {
    Decoder::new().decode(bytes)
}

/// Decode an overview document from a byte stream with a strict [`Decoder`].
pub fn decode_overview_report_reader<R: Read>(reader: R) -> Result<OverviewReport> {
    Decoder::new().decode_reader(reader)
}

/// Decode a gzip-compressed overview document, e.g. a saved capture.
pub fn decode_overview_report_gz<R: Read>(reader: R) -> Result<OverviewReport> {
    Decoder::new().decode_reader(GzDecoder::new(reader))
}

/// Fold decoded entries into a mapping keyed by address.
///
/// Later entries replace earlier ones with the same address.
pub fn fold_entries(entries: Vec<AddressReportEntry>) -> AddressMap {
    let mut map = AddressMap::with_capacity(entries.len());
    for entry in entries {
        map.insert(entry.address, entry.report);
    }
    map
}

// ---------------------------------------------------------------------------
// Field-category decoders
// ---------------------------------------------------------------------------

/// Decode a raw JSON value holding a quoted decimal, e.g. `"0.00123456"`.
pub fn decode_quoted_number(bytes: &[u8]) -> Result<f64> {
    let value = raw_value(bytes, "value")?;
    quoted_number_value(&value, "value")
}

/// Decode a raw JSON value holding a `YYYY-MM-DD HH:MM:SS` timestamp.
pub fn decode_timestamp(bytes: &[u8]) -> Result<NaiveDateTime> {
    let value = raw_value(bytes, "value")?;
    timestamp_value(&value, "value")
}

/// Parse the contents of a quoted decimal as a 64-bit float.
///
/// `NaN`, infinities and values outside the `f64` range are rejected.
pub fn parse_quoted_number(s: &str) -> Result<f64> {
    let invalid = || MiddlecoinError::field("value", format!("{:?} is not a decimal number", s));
    match s.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(invalid()),
    }
}

/// Parse a timestamp in the report layout.
///
/// The layout is fixed width: two-digit fields must be zero padded and no
/// surrounding text is accepted. Leap seconds (`:60`) are not accepted.
pub fn parse_report_time(s: &str) -> Result<NaiveDateTime> {
    let invalid = || {
        MiddlecoinError::field(
            "value",
            format!("{:?} does not match layout YYYY-MM-DD HH:MM:SS", s),
        )
    };
    let shape_ok = s.len() == 19
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            10 => b == b' ',
            13 | 16 => b == b':',
            _ => b.is_ascii_digit(),
        })
        && &s[17..19] <= "59";
    if !shape_ok {
        return Err(invalid());
    }
    NaiveDateTime::parse_from_str(s, config::TIME_LAYOUT).map_err(|_| invalid())
}

/// Render a timestamp in the report layout.
pub fn format_report_time(time: &NaiveDateTime) -> String {
    time.format(config::TIME_LAYOUT).to_string()
}

fn quoted_number_value(value: &Value, path: &str) -> Result<f64> {
    match value {
        Value::String(s) => parse_quoted_number(s).map_err(|e| with_path(e, path)),
        other => Err(MiddlecoinError::field(
            path,
            format!("expected a quoted decimal string, found {}", kind(other)),
        )),
    }
}

fn timestamp_value(value: &Value, path: &str) -> Result<NaiveDateTime> {
    match value {
        Value::String(s) => parse_report_time(s).map_err(|e| with_path(e, path)),
        other => Err(MiddlecoinError::field(
            path,
            format!("expected a timestamp string, found {}", kind(other)),
        )),
    }
}

fn count_value(value: &Value, path: &str) -> Result<u64> {
    value.as_u64().ok_or_else(|| {
        MiddlecoinError::field(
            path,
            format!("expected a non-negative integer, found {}", value),
        )
    })
}

fn entry_value(element: &Value, path: &str) -> Result<AddressReportEntry> {
    let pair = match element.as_array() {
        Some(pair) if pair.len() == 2 => pair,
        Some(pair) => {
            return Err(MiddlecoinError::field(
                path,
                format!("expected an [address, report] pair, found {} elements", pair.len()),
            ))
        }
        None => {
            return Err(MiddlecoinError::field(
                path,
                format!("expected an [address, report] pair, found {}", kind(element)),
            ))
        }
    };
    let address = pair[0].as_str().ok_or_else(|| {
        MiddlecoinError::field(
            format!("{}[0]", path),
            format!("expected an address string, found {}", kind(&pair[0])),
        )
    })?;
    let report = address_report_value(&pair[1], path)?;
    Ok(AddressReportEntry {
        address: address.to_string(),
        report,
    })
}

fn address_report_value(value: &Value, path: &str) -> Result<AddressReport> {
    let object = value.as_object().ok_or_else(|| {
        MiddlecoinError::field(
            format!("{}[1]", path),
            format!("expected a report object, found {}", kind(value)),
        )
    })?;

    let number = |name: &str| -> Result<f64> {
        match field(object, name) {
            Some(value) => quoted_number_value(value, &format!("{}.{}", path, name)),
            None => Ok(0.0),
        }
    };
    let count = |name: &str| -> Result<u64> {
        match field(object, name) {
            Some(value) => count_value(value, &format!("{}.{}", path, name)),
            None => Ok(0),
        }
    };

    Ok(AddressReport {
        last_hour_shares: count(config::FIELD_LAST_HOUR_SHARES)?,
        immature_balance: number(config::FIELD_IMMATURE_BALANCE)?,
        last_hour_rejected_shares: count(config::FIELD_LAST_HOUR_REJECTED_SHARES)?,
        paid_out: number(config::FIELD_PAID_OUT)?,
        unexchanged_balance: number(config::FIELD_UNEXCHANGED_BALANCE)?,
        hashrate: number(config::FIELD_HASHRATE)?,
        bitcoin_balance: number(config::FIELD_BITCOIN_BALANCE)?,
        rejected_hashrate: number(config::FIELD_REJECTED_HASHRATE)?,
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn number_field(object: &Map<String, Value>, name: &str) -> Result<f64> {
    match field(object, name) {
        Some(value) => quoted_number_value(value, name),
        None => Ok(0.0),
    }
}

/// Look up a key verbatim, falling back to the last ASCII case-insensitive
/// match in document order. `null` is treated the same as an absent key.
fn field<'a>(object: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    object
        .get(name)
        .or_else(|| {
            object
                .iter()
                .filter(|(key, _)| key.eq_ignore_ascii_case(name))
                .last()
                .map(|(_, value)| value)
        })
        .filter(|value| !value.is_null())
}

fn raw_value(bytes: &[u8], path: &str) -> Result<Value> {
    serde_json::from_slice(bytes).map_err(|e| MiddlecoinError::field(path, e.to_string()))
}

fn with_path(error: MiddlecoinError, path: &str) -> MiddlecoinError {
    match error {
        MiddlecoinError::MalformedField { message, .. } => MiddlecoinError::field(path, message),
        other => other,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
