//! Serializers that write reports back in the upstream wire shape, so a
//! serialized [`OverviewReport`](super::OverviewReport) decodes again.

use chrono::NaiveDateTime;
use serde::ser::{Error, SerializeSeq};
use serde::Serializer;

use super::address::AddressMap;
use crate::config;

/// Write a float as a quoted decimal, e.g. `"0.00123456"`.
pub(crate) fn quoted<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !value.is_finite() {
        return Err(S::Error::custom(format!("{} is not a decimal number", value)));
    }
    serializer.serialize_str(&value.to_string())
}

/// Write a timestamp in the `YYYY-MM-DD HH:MM:SS` report layout.
pub(crate) fn report_time<S: Serializer>(
    value: &NaiveDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&value.format(config::TIME_LAYOUT))
}

/// Write the address map as `[[address, report], ...]`, sorted by address.
pub(crate) fn address_pairs<S: Serializer>(
    value: &AddressMap,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut pairs: Vec<_> = value.iter().collect();
    pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
    let mut seq = serializer.serialize_seq(Some(pairs.len()))?;
    for pair in pairs {
        seq.serialize_element(&pair)?;
    }
    seq.end()
}
