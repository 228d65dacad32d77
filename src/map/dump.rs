//! Structural JSON dump for debugging tree shape. Enabled by the `json`
//! cargo feature; not part of the map's invariants or public contract.

use alloc::string::String;
use alloc::vec::Vec;

use serde::Serialize;
use serde_json::{json, Value};

use super::BPlusTreeMap;
use crate::raw::{Handle, Node, RawTree};

impl<K: Serialize, V: Serialize, C> BPlusTreeMap<K, V, C> {
    /// Renders the full node structure as pretty-printed JSON: per node its
    /// identity, leaf flag, entries or routing keys, children, and the
    /// prev/next leaf identities.
    ///
    /// Node identities are arena slot numbers; they are stable between
    /// mutations but not across them.
    ///
    /// # Errors
    ///
    /// Returns an error if a key or value fails to serialize.
    ///
    /// # Examples
    ///
    /// ```
    /// use leaftree::BPlusTreeMap;
    ///
    /// let map = BPlusTreeMap::from([(1, "a")]);
    /// let dump = map.dump_structure().unwrap();
    /// assert!(dump.contains("\"leaf\": true"));
    /// ```
    pub fn dump_structure(&self) -> serde_json::Result<String> {
        let value = dump_node(&self.raw, self.raw.root())?;
        serde_json::to_string_pretty(&value)
    }
}

fn dump_node<K: Serialize, V: Serialize, C>(
    raw: &RawTree<K, V, C>,
    handle: Handle,
) -> serde_json::Result<Value> {
    let id = handle.to_index();
    match raw.node(handle) {
        Node::Leaf(leaf) => {
            let mut entries = Vec::with_capacity(leaf.entry_count());
            for i in 0..leaf.entry_count() {
                let (key, value) = leaf.entry(i);
                entries.push(json!([serde_json::to_value(key)?, serde_json::to_value(value)?]));
            }
            Ok(json!({
                "id": id,
                "leaf": true,
                "entries": entries,
                "prev": leaf.prev().map(Handle::to_index),
                "next": leaf.next().map(Handle::to_index),
            }))
        }
        Node::Internal(internal) => {
            let mut keys = Vec::with_capacity(internal.key_count());
            for i in 0..internal.key_count() {
                keys.push(serde_json::to_value(internal.key(i))?);
            }
            let mut children = Vec::with_capacity(internal.child_count());
            for i in 0..internal.child_count() {
                children.push(dump_node(raw, internal.child(i))?);
            }
            Ok(json!({
                "id": id,
                "leaf": false,
                "keys": keys,
                "children": children,
            }))
        }
    }
}
