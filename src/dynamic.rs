//! Keys of mixed runtime types, for callers that index values coming from a
//! dynamically typed host.
//!
//! The tree itself only requires a total order; this module supplies one for
//! keys that are "a number or a piece of text" without a common `Ord`
//! instance: numbers compare numerically, text compares lexicographically,
//! and every number orders before every text. This keeps heterogeneous keys
//! out of the core, which stays generic over [`Comparator`].

use alloc::string::String;
use core::cmp::Ordering;

use crate::compare::Comparator;

/// A key that is either a number or a piece of text.
///
/// # Examples
///
/// ```
/// use leaftree::dynamic::{DynamicKey, DynamicKeyOrder};
/// use leaftree::BPlusTreeMap;
///
/// let mut map = BPlusTreeMap::with_comparator(DynamicKeyOrder);
/// map.insert(DynamicKey::from(7.5), "seven and a half");
/// map.insert(DynamicKey::from("seven"), "the word");
///
/// // Numbers order before text.
/// assert_eq!(map.first_key_value().map(|(_, v)| *v), Some("seven and a half"));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(untagged))]
pub enum DynamicKey {
    /// A numeric key.
    Number(f64),
    /// A textual key.
    Text(String),
}

impl From<f64> for DynamicKey {
    fn from(value: f64) -> Self {
        DynamicKey::Number(value)
    }
}

impl From<&str> for DynamicKey {
    fn from(value: &str) -> Self {
        DynamicKey::Text(String::from(value))
    }
}

impl From<String> for DynamicKey {
    fn from(value: String) -> Self {
        DynamicKey::Text(value)
    }
}

/// Total order over [`DynamicKey`]: numbers numerically (IEEE total
/// ordering, so NaN keys are admissible and stable), text lexicographically,
/// numbers before text.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DynamicKeyOrder;

impl Comparator<DynamicKey> for DynamicKeyOrder {
    fn compare(&self, a: &DynamicKey, b: &DynamicKey) -> Ordering {
        match (a, b) {
            (DynamicKey::Number(x), DynamicKey::Number(y)) => x.total_cmp(y),
            (DynamicKey::Text(x), DynamicKey::Text(y)) => x.cmp(y),
            (DynamicKey::Number(_), DynamicKey::Text(_)) => Ordering::Less,
            (DynamicKey::Text(_), DynamicKey::Number(_)) => Ordering::Greater,
        }
    }
}
