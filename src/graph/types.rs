//! Core type definitions for the graph engine

use std::fmt;
use std::hash::Hash;

/// Edge weight. Finite and non-negative for every stored edge; the store
/// rejects anything else at insertion time.
pub type Weight = f64;

/// Bound alias for caller-supplied node keys.
///
/// Keys are opaque to the graph: anything hashable, comparable, cloneable
/// and debug-printable qualifies (`u64`, `String`, `&str`, tuples, ...).
/// Blanket-implemented, so callers never implement it by hand.
pub trait NodeKey: Eq + Hash + Clone + fmt::Debug {}

impl<T: Eq + Hash + Clone + fmt::Debug> NodeKey for T {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_node_key<K: NodeKey>() {}

    #[test]
    fn test_common_key_types_qualify() {
        assert_node_key::<u64>();
        assert_node_key::<String>();
        assert_node_key::<&str>();
        assert_node_key::<(u32, u32)>();
    }
}
