//! Private core: arena-backed node storage and the B+Tree algorithms.

mod arena;
mod node;
mod tree;

pub(crate) use arena::Handle;
#[cfg(feature = "json")]
pub(crate) use node::Node;
pub(crate) use tree::RawTree;
