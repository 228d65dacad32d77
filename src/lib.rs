//! An in-memory ordered key-value index organized as a B+Tree.
//!
//! This crate provides [`BPlusTreeMap`], an ordered map in which every
//! key/value pair lives in a leaf node and the leaves are threaded into a
//! doubly linked chain in ascending key order. Internal nodes hold only
//! routing keys, so ordered iteration, inclusive range scans, and
//! count-bounded range scans are pointer walks along the leaf chain rather
//! than tree traversals.
//!
//! # Example
//!
//! ```
//! use leaftree::BPlusTreeMap;
//!
//! let mut index = BPlusTreeMap::new();
//! index.insert(10, "ten");
//! index.insert(20, "twenty");
//! index.insert(30, "thirty");
//!
//! assert_eq!(index.get(&20), Some(&"twenty"));
//!
//! let window: Vec<_> = index.range(&15, &30).map(|(k, _)| *k).collect();
//! assert_eq!(window, [20, 30]);
//!
//! assert_eq!(index.remove(&10), Some("ten"));
//! assert_eq!(index.len(), 2);
//! ```
//!
//! # Ordering
//!
//! Ordering is pluggable through the [`Comparator`] trait, defaulted to the
//! key type's `Ord` instance ([`NaturalOrder`]). The comparator is a type
//! parameter, so every comparison is monomorphized; there is no virtual
//! dispatch on the hot path. The [`dynamic`] module provides a ready-made
//! total order for keys of mixed runtime types (numbers and text).
//!
//! # Implementation
//!
//! Nodes keep their keys and entries in inline `SmallVec` storage and live
//! in a slab arena addressed by niche-optimized handles; leaf prev/next
//! links are handles too, which gives the leaf chain its non-owning back
//! references without reference counting. Mutations restore every invariant
//! on the way down: inserts split any full child before descending into it,
//! removals refill (borrow or merge) any minimal child before descending
//! into it, so changes never propagate back up the tree.
//!
//! The crate is `no_std` (requires `alloc`) and contains no unsafe code.
//! Single-threaded mutation is assumed; references returned by lookups and
//! scans borrow the tree and cannot outlive the next mutation.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod compare;
mod error;
mod raw;

pub mod dynamic;
pub mod map;

pub use compare::{Comparator, NaturalOrder};
pub use error::Error;
pub use map::BPlusTreeMap;
