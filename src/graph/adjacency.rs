//! Map-based graphs: a key maps to the list of its neighbor values

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Lookup interface for a graph stored as `key -> [neighbor]`
///
/// Neighbor values need not be keys themselves.
pub trait Adjacency<T> {
    /// All keys of the mapping, in no particular order
    fn keys<'a>(&'a self) -> Box<dyn Iterator<Item = &'a T> + 'a>
    where
        T: 'a;

    /// Neighbors of a key, or `None` when the value is not a key
    fn neighbors(&self, key: &T) -> Option<&[T]>;

    fn contains(&self, key: &T) -> bool {
        self.neighbors(key).is_some()
    }
}

impl<T, S> Adjacency<T> for HashMap<T, Vec<T>, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn keys<'a>(&'a self) -> Box<dyn Iterator<Item = &'a T> + 'a>
    where
        T: 'a,
    {
        Box::new(HashMap::keys(self))
    }

    fn neighbors(&self, key: &T) -> Option<&[T]> {
        self.get(key).map(Vec::as_slice)
    }
}

impl<T: Ord> Adjacency<T> for BTreeMap<T, Vec<T>> {
    fn keys<'a>(&'a self) -> Box<dyn Iterator<Item = &'a T> + 'a>
    where
        T: 'a,
    {
        Box::new(BTreeMap::keys(self))
    }

    fn neighbors(&self, key: &T) -> Option<&[T]> {
        self.get(key).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_map_adjacency() {
        let graph: HashMap<&str, Vec<&str>> =
            HashMap::from([("a", vec!["b", "z"]), ("b", vec![])]);

        assert_eq!(Adjacency::neighbors(&graph, &"a"), Some(&["b", "z"][..]));
        assert!(Adjacency::contains(&graph, &"b"));
        assert!(!Adjacency::contains(&graph, &"z"));
        assert_eq!(Adjacency::keys(&graph).count(), 2);
    }

    #[test]
    fn test_btree_map_adjacency() {
        let graph: BTreeMap<i32, Vec<i32>> = BTreeMap::from([(2, vec![1]), (1, vec![])]);

        let keys: Vec<_> = Adjacency::keys(&graph).copied().collect();
        assert_eq!(keys, vec![1, 2]);
        assert_eq!(Adjacency::neighbors(&graph, &3), None);
    }
}
