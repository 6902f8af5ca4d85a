//! Share records and the JSON document that carries them.
//!
//! A document looks like
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! `n`, `k` and `base` may be JSON integers or strings holding integers.

use std::collections::BTreeMap;

use math::{num_bigint::BigUint, radix};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{
    error::{RecoveryError, Result},
    params::ThresholdConfig,
    points::{build_points, Point},
};

const KEYS_FIELD: &str = "keys";

/// One sample of the hidden polynomial: `value` is written in `base` and the
/// 1-based `index` is the x-coordinate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Share {
    pub index: u64,
    pub base: u32,
    pub value: String,
}

impl Share {
    pub fn new(index: u64, base: u32, value: impl Into<String>) -> Self {
        Self {
            index,
            base,
            value: value.into(),
        }
    }

    /// Decode the value string to its exact integer.
    pub fn decode(&self) -> Result<BigUint> {
        Ok(radix::decode(&self.value, self.base)?)
    }
}

/// The parsed contents of one share document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareSet {
    config: ThresholdConfig,
    records: BTreeMap<u64, Share>,
}

impl ShareSet {
    /// Collect shares under a threshold configuration. A later share with the
    /// same index replaces an earlier one.
    pub fn new(
        config: ThresholdConfig,
        shares: impl IntoIterator<Item = Share>,
    ) -> Self {
        let records = shares
            .into_iter()
            .map(|share| (share.index, share))
            .collect();
        Self { config, records }
    }

    pub fn from_json(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut fields) = value else {
            return Err(malformed("expected a JSON object at the top level"));
        };

        let keys = fields
            .remove(KEYS_FIELD)
            .ok_or_else(|| malformed("missing `keys` object"))?;
        let keys: RawKeys = serde_json::from_value(keys)
            .map_err(|e| malformed(format!("`keys`: {e}")))?;
        let n = to_usize(keys.n.parse("n")?, "n")?;
        let k = to_usize(keys.k.parse("k")?, "k")?;
        let config = ThresholdConfig::new(n, k)?;

        let mut records = BTreeMap::new();
        for (key, entry) in fields {
            let index = match key.parse::<u64>() {
                Ok(index) if (1..=n as u64).contains(&index) => index,
                _ => {
                    debug!(key = %key, "ignoring entry outside share indices 1..=n");
                    continue;
                }
            };
            let raw: RawShare = serde_json::from_value(entry)
                .map_err(|e| malformed(format!("share {index}: {e}")))?;
            // Oversized bases saturate and are rejected by the decoder.
            let base = u32::try_from(raw.base.parse("base")?)
                .unwrap_or(u32::MAX);
            records.insert(index, Share::new(index, base, raw.value));
        }

        Ok(Self { config, records })
    }

    pub fn config(&self) -> ThresholdConfig {
        self.config
    }

    pub fn get(&self, index: u64) -> Option<&Share> {
        self.records.get(&index)
    }

    pub fn records(&self) -> &BTreeMap<u64, Share> {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Share> {
        self.records.values()
    }

    /// Decode every present share with index in `1..=n`, ascending by index.
    pub fn points(&self) -> Result<Vec<Point>> {
        build_points(&self.records, self.config.n())
    }
}

#[derive(Deserialize)]
struct RawKeys {
    n: Integer,
    k: Integer,
}

#[derive(Deserialize)]
struct RawShare {
    base: Integer,
    value: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Integer {
    Number(u64),
    Text(String),
}

impl Integer {
    fn parse(&self, field: &str) -> Result<u64> {
        match self {
            Integer::Number(value) => Ok(*value),
            Integer::Text(text) => text.trim().parse().map_err(|_| {
                malformed(format!(
                    "`{field}`: expected a non-negative integer, found {text:?}"
                ))
            }),
        }
    }
}

fn to_usize(value: u64, field: &str) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| malformed(format!("`{field}` is too large: {value}")))
}

fn malformed(message: impl Into<String>) -> RecoveryError {
    RecoveryError::MalformedDocument(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SAMPLE: &str = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "2", "value": "111" },
        "3": { "base": "10", "value": "12" },
        "6": { "base": "4", "value": "213" }
    }"#;

    #[test]
    fn parses_sample_document() {
        let set = ShareSet::from_json(SAMPLE).unwrap();
        assert_eq!(set.config(), ThresholdConfig::new(4, 3).unwrap());
        // index 6 is beyond n = 4
        assert_eq!(set.len(), 3);
        assert_eq!(set.get(2), Some(&Share::new(2, 2, "111")));
        assert_eq!(set.get(6), None);
    }

    #[test]
    fn accepts_numeric_and_string_integers() {
        let set = ShareSet::from_value(json!({
            "keys": { "n": "2", "k": 1 },
            "1": { "base": 16, "value": "ff" },
            "2": { "base": " 8 ", "value": "17" }
        }))
        .unwrap();
        assert_eq!(set.config().k(), 1);
        assert_eq!(set.get(1).unwrap().base, 16);
        assert_eq!(set.get(2).unwrap().base, 8);
    }

    #[test]
    fn ignores_non_index_keys_and_index_zero() {
        let set = ShareSet::from_value(json!({
            "keys": { "n": 2, "k": 1 },
            "0": { "base": "10", "value": "1" },
            "note": "not a share",
            "2": { "base": "10", "value": "5" }
        }))
        .unwrap();
        assert_eq!(set.iter().map(|s| s.index).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn decodes_share_values() {
        assert_eq!(
            Share::new(6, 4, "213").decode().unwrap(),
            BigUint::from(39u32)
        );
        assert_eq!(
            Share::new(1, 10, "1a").decode(),
            Err(RecoveryError::InvalidDigit { digit: 'a', base: 10 })
        );
    }

    #[test]
    fn oversized_base_is_rejected_on_decode() {
        let set = ShareSet::from_value(json!({
            "keys": { "n": 1, "k": 1 },
            "1": { "base": 99_999_999_999u64, "value": "1" }
        }))
        .unwrap();
        assert_eq!(
            set.get(1).unwrap().decode(),
            Err(RecoveryError::InvalidBase(u32::MAX))
        );
    }

    #[test]
    fn rejects_malformed_documents() {
        for input in [
            "[]",
            "{}",
            r#"{"keys": {"n": 3}}"#,
            r#"{"keys": {"n": "three", "k": 1}}"#,
            r#"{"keys": {"n": 1, "k": 1}, "1": {"value": "1"}}"#,
            "{ not json",
        ] {
            assert!(
                matches!(
                    ShareSet::from_json(input),
                    Err(RecoveryError::MalformedDocument(_))
                ),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_invalid_threshold() {
        assert_eq!(
            ShareSet::from_json(r#"{"keys": {"n": 2, "k": 3}}"#),
            Err(RecoveryError::InvalidThreshold { k: 3, n: 2 })
        );
    }

    #[test]
    fn later_share_with_same_index_wins() {
        let config = ThresholdConfig::new(1, 1).unwrap();
        let set = ShareSet::new(
            config,
            [Share::new(1, 10, "4"), Share::new(1, 10, "5")],
        );
        assert_eq!(set.get(1).unwrap().value, "5");
    }
}
