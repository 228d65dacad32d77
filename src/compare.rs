use core::cmp::Ordering;

/// Key ordering supplied to the tree at construction.
///
/// The tree is monomorphized over the comparator type, so a comparator is a
/// zero-cost seam rather than a virtual call. Implementations must be a
/// strict weak ordering that is *pure*: the result for a pair of keys may
/// never change while the keys are in the tree.
///
/// Most maps key on an [`Ord`] type and use the default [`NaturalOrder`];
/// a custom comparator is for keys whose ordering is not (or not usefully)
/// their `Ord` instance, such as [`DynamicKey`](crate::dynamic::DynamicKey).
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use leaftree::{BPlusTreeMap, Comparator};
///
/// struct Reverse;
///
/// impl Comparator<i32> for Reverse {
///     fn compare(&self, a: &i32, b: &i32) -> Ordering {
///         b.cmp(a)
///     }
/// }
///
/// let mut map = BPlusTreeMap::with_comparator(Reverse);
/// map.insert(1, "a");
/// map.insert(2, "b");
/// assert_eq!(map.first_key_value(), Some((&2, &"b")));
/// ```
pub trait Comparator<K> {
    /// Compares two keys, returning their ordering.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// The default comparator: the key type's own [`Ord`] instance.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NaturalOrder;

impl<K: Ord> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}
