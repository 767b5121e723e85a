//! Request and response bodies.

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use sortbatch_core::{Batch, ResultSet, SubArray, TimedResult};

/// JSON name of the batch field.
pub const TO_SORT_FIELD: &str = "to_sort";

/// Body of both sort endpoints.
///
/// Decoding is lenient in the same places Go's `encoding/json` is:
/// - the field name matches case-insensitively;
/// - a missing or `null` batch is empty;
/// - a `null` sub-array is empty;
/// - a `null` element is zero;
/// - unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SortRequest {
    /// Sub-arrays to sort.
    pub to_sort: Batch,
}

impl<'de> Deserialize<'de> for SortRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(SortRequestVisitor)
    }
}

type NullableBatch = Option<Vec<Option<Vec<Option<i64>>>>>;

struct SortRequestVisitor;

impl<'de> Visitor<'de> for SortRequestVisitor {
    type Value = SortRequest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with a `to_sort` field")
    }

    fn visit_map<A>(self, mut map: A) -> Result<SortRequest, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut to_sort = Batch::new();
        // Repeated keys overwrite, last one wins.
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case(TO_SORT_FIELD) {
                to_sort = flatten_nulls(map.next_value::<NullableBatch>()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(SortRequest { to_sort })
    }
}

fn flatten_nulls(batch: NullableBatch) -> Batch {
    batch
        .unwrap_or_default()
        .into_iter()
        .map(|sub| {
            sub.unwrap_or_default()
                .into_iter()
                .map(Option::unwrap_or_default)
                .collect::<SubArray>()
        })
        .collect()
}

/// Response of both sort endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortResponse {
    /// The sorted sub-arrays.
    pub sorted_arrays: ResultSet,
    /// Nanoseconds from dispatch start to full completion.
    pub time_ns: u64,
}

impl From<TimedResult> for SortResponse {
    fn from(result: TimedResult) -> Self {
        let time_ns = result.time_ns();
        Self {
            sorted_arrays: result.sorted_arrays,
            time_ns,
        }
    }
}

/// Decode a request body.
///
/// Only the first JSON value is read and trailing bytes are ignored. A
/// top-level `null` is an empty request. An empty body is an error.
pub fn decode_request(body: &[u8]) -> Result<SortRequest, serde_json::Error> {
    let mut values =
        serde_json::Deserializer::from_slice(body).into_iter::<Option<SortRequest>>();
    match values.next() {
        Some(value) => Ok(value?.unwrap_or_default()),
        None => Err(de::Error::custom("EOF while parsing a value")),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn decode_valid_request() {
        let req = decode_request(br#"{"to_sort": [[3, 1, 2], [], [-5]]}"#).unwrap();
        assert_eq!(req.to_sort, vec![vec![3, 1, 2], vec![], vec![-5]]);
    }

    #[test]
    fn decode_missing_field_is_empty_batch() {
        let req = decode_request(b"{}").unwrap();
        assert!(req.to_sort.is_empty());
    }

    #[test]
    fn decode_ignores_unknown_fields() {
        let req = decode_request(br#"{"to_sort": [[1]], "extra": true}"#).unwrap();
        assert_eq!(req.to_sort, vec![vec![1]]);
    }

    #[test]
    fn decode_rejects_malformed() {
        assert!(decode_request(b"not json").is_err());
        assert!(decode_request(b"").is_err());
        assert!(decode_request(br#"{"to_sort": [[1.5]]}"#).is_err());
        assert!(decode_request(br#"{"to_sort": [1, 2]}"#).is_err());
        assert!(decode_request(br#"{"to_sort": [["a"]]}"#).is_err());
    }

    #[test]
    fn decode_null_batch_is_empty() {
        let req = decode_request(br#"{"to_sort": null}"#).unwrap();
        assert!(req.to_sort.is_empty());
    }

    #[test]
    fn decode_null_sub_array_and_element() {
        let req = decode_request(br#"{"to_sort": [[2, 1], null, [3, null]]}"#).unwrap();
        assert_eq!(req.to_sort, vec![vec![2, 1], vec![], vec![3, 0]]);
    }

    #[test]
    fn decode_field_name_ignores_case() {
        let req = decode_request(br#"{"To_Sort": [[2, 1]]}"#).unwrap();
        assert_eq!(req.to_sort, vec![vec![2, 1]]);
        let req = decode_request(br#"{"TO_SORT": [[4]]}"#).unwrap();
        assert_eq!(req.to_sort, vec![vec![4]]);
    }

    #[test]
    fn decode_repeated_field_last_wins() {
        let req = decode_request(br#"{"to_sort": [[1]], "TO_SORT": [[2], [3]]}"#).unwrap();
        assert_eq!(req.to_sort, vec![vec![2], vec![3]]);
    }

    #[test]
    fn decode_top_level_null_and_trailing_data() {
        assert!(decode_request(b"null").unwrap().to_sort.is_empty());
        let req = decode_request(br#"{"to_sort": [[1]]} trailing"#).unwrap();
        assert_eq!(req.to_sort, vec![vec![1]]);
    }

    #[test]
    fn decode_rejects_wrong_shapes() {
        assert!(decode_request(b"   ").is_err());
        assert!(decode_request(b"[]").is_err());
        assert!(decode_request(br#"{"to_sort": {"a": 1}}"#).is_err());
        assert!(decode_request(br#"{"to_sort": [[9223372036854775808]]}"#).is_err());
    }

    #[test]
    fn response_serialization() {
        let response = SortResponse::from(TimedResult {
            sorted_arrays: vec![vec![1, 2, 3]],
            elapsed: Duration::from_nanos(42),
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"sorted_arrays": [[1, 2, 3]], "time_ns": 42})
        );
    }

    #[test]
    fn empty_response_serializes_as_array() {
        let response = SortResponse::from(TimedResult {
            sorted_arrays: Vec::new(),
            elapsed: Duration::ZERO,
        });
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""sorted_arrays":[]"#));
    }
}
