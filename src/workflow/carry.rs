//! Carry-forward state encoding.
//!
//! Between steps the in-progress field values travel in the navigation
//! address as flat percent-encoded key/value pairs, one per carried field.
//! The encode and decode halves are pure and round-trip; nothing here knows
//! about navigation.

use std::collections::BTreeMap;

/// Fields the edit step is allowed to prefill from the address. Everything
/// else is dropped at the transition; absence downstream means "unknown,
/// fetch fresh".
pub const CARRIED_FIELDS: &[&str] = &[
    "customer_name",
    "phone",
    "vehicle_make",
    "vehicle_model",
    "registration_no",
    "service_type",
];

/// Encode key/value pairs into a query string.
pub fn encode_pairs<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode a query string back into field values. Malformed pairs (no `=`,
/// or undecodable percent sequences) are skipped; on a duplicated key the
/// last value wins.
pub fn decode_pairs(query: &str) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();
    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let (Ok(key), Ok(value)) = (urlencoding::decode(key), urlencoding::decode(value)) else {
            continue;
        };
        fields.insert(key.into_owned(), value.into_owned());
    }
    fields
}
