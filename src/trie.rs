//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the primary API for working
//! with the radix trie data structure.

use crate::node::{self, Node};
use crate::pool::ScratchPath;
use crate::util::prefix_match;
use crate::{Error, Result};

/// A mutable compressed radix trie.
///
/// This Radix Trie (also known as a Patricia Trie) maps byte-sequence keys to
/// values of type `V`. The root is addressed by the empty key and holds its own
/// optional value; every other key lives at the end of a path of edge labels.
///
/// After every completed `insert` or `remove`:
/// - siblings never share the first byte of their edges,
/// - no edge below the root is empty,
/// - every node below the root either stores a value or has at least two children.
///
/// The trie has no internal synchronisation. Share it across threads behind a
/// lock, or only read it concurrently.
#[derive(Debug, Clone)]
pub struct Trie<V> {
    /// Value stored under the empty key
    value: Option<V>,

    /// Children of the root
    pub(crate) children: Vec<Node<V>>,

    /// The number of keys stored in the trie
    size: usize,
}

impl<V> Trie<V> {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_mutable::Trie;
    ///
    /// let trie = Trie::<i32>::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Trie {
            value: None,
            children: Vec::new(),
            size: 0,
        }
    }

    /// Returns the number of keys stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_mutable::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert_eq!(trie.len(), 0);
    ///
    /// trie.insert("hello", 42);
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie contains no keys.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every key and value.
    pub fn clear(&mut self) {
        self.value = None;
        self.children.clear();
        self.size = 0;
    }

    /// The value stored under the empty key, if any.
    pub fn root_value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// The top-level nodes of the trie, in no particular order.
    pub fn children(&self) -> &[Node<V>] {
        &self.children
    }

    /// Retrieves a reference to the value stored for the given key, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_mutable::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("long", 5);
    ///
    /// assert_eq!(trie.find("long"), Some(&5));
    /// assert_eq!(trie.find("lon"), None);
    /// assert_eq!(trie.find("longs"), None);
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: AsRef<[u8]> + ?Sized,
    {
        let mut key = key.as_ref();
        if key.is_empty() {
            return self.value.as_ref();
        }

        let mut children = &self.children;
        loop {
            let child = &children[node::position(children, key[0])?];
            if !key.starts_with(&child.edge) {
                return None;
            }
            if key.len() == child.edge.len() {
                return child.value.as_ref();
            }
            key = &key[child.edge.len()..];
            children = &child.children;
        }
    }

    /// Retrieves a mutable reference to the value stored for the given key, if any.
    pub fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: AsRef<[u8]> + ?Sized,
    {
        let mut key = key.as_ref();
        if key.is_empty() {
            return self.value.as_mut();
        }

        let mut children = &mut self.children;
        loop {
            let i = node::position(children, key[0])?;
            let child = &mut children[i];
            if !key.starts_with(&child.edge) {
                return None;
            }
            if key.len() == child.edge.len() {
                return child.value.as_mut();
            }
            key = &key[child.edge.len()..];
            children = &mut child.children;
        }
    }

    /// Returns `true` if the trie contains a value for the given key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: AsRef<[u8]> + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Inserts a key-value pair into the trie.
    ///
    /// If the key already exists its value is replaced and the previous value
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_mutable::Trie;
    ///
    /// let mut trie = Trie::new();
    ///
    /// assert_eq!(trie.insert("long", 5), None);
    /// assert_eq!(trie.insert("long", 8), Some(5));
    /// assert_eq!(trie.find("long"), Some(&8));
    /// ```
    pub fn insert<Q>(&mut self, key: &Q, value: V) -> Option<V>
    where
        Q: AsRef<[u8]> + ?Sized,
    {
        let mut key = key.as_ref();

        let previous = if key.is_empty() {
            self.value.replace(value)
        } else {
            let mut children = &mut self.children;
            loop {
                let i = match node::position(children, key[0]) {
                    Some(i) => i,
                    None => {
                        children.push(Node::leaf(key.to_vec(), value));
                        break None;
                    }
                };

                let child = &mut children[i];
                let common = prefix_match(key, &child.edge);

                if common < child.edge.len() {
                    // The key ends inside this edge, or leaves it partway
                    child.split(common, key, value);
                    break None;
                }
                if common == key.len() {
                    break child.value.replace(value);
                }

                // The edge is a strict prefix of the key
                key = &key[common..];
                children = &mut child.children;
            }
        };

        if previous.is_none() {
            self.size += 1;
        }
        previous
    }

    /// Removes a key from the trie, returning its value if it was present.
    ///
    /// A node left without a value is merged into its only child, or removed
    /// altogether if it has none, and the compaction continues upward through
    /// ancestors that were only kept alive by the removed node.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_mutable::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("low", 8);
    /// trie.insert("lowa", 9);
    ///
    /// assert_eq!(trie.remove("low"), Some(8));
    /// assert_eq!(trie.remove("low"), None);
    /// assert_eq!(trie.find("lowa"), Some(&9));
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: AsRef<[u8]> + ?Sized,
    {
        let mut key = key.as_ref();
        if key.is_empty() {
            let previous = self.value.take();
            if previous.is_some() {
                self.size -= 1;
            }
            return previous;
        }

        // Index of the child entered at each depth, target last
        let mut path = ScratchPath::acquire();

        let mut children = &self.children;
        loop {
            let i = node::position(children, key[0])?;
            let child = &children[i];
            if !key.starts_with(&child.edge) {
                return None;
            }
            path.push(i);
            if key.len() == child.edge.len() {
                break;
            }
            key = &key[child.edge.len()..];
            children = &child.children;
        }

        let (&target, parents) = path.split_last()?;
        let removed = children_at(&mut self.children, parents)[target].value.take()?;
        self.size -= 1;

        compact(&mut self.children, &mut path);
        Some(removed)
    }

    /// Checks every structural invariant of the trie.
    ///
    /// Returns the first violation found. A trie only ever mutated through its
    /// public API always validates.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_mutable::Trie;
    ///
    /// let trie: Trie<u8> = ["a", "ab", "b"].iter().map(|k| (*k, 0)).collect();
    /// assert!(trie.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<()> {
        let mut found = usize::from(self.value.is_some());
        validate_children(&self.children, 1, &mut found)?;

        if found != self.size {
            return Err(Error::LengthMismatch {
                expected: self.size,
                found,
            });
        }
        Ok(())
    }
}

/// Follows `path` from the root's children down to a children vector.
fn children_at<'a, V>(mut children: &'a mut Vec<Node<V>>, path: &[usize]) -> &'a mut Vec<Node<V>> {
    for &i in path {
        children = &mut children[i].children;
    }
    children
}

/// Restores path compression after the node at the end of `path` lost its value.
///
/// `path` holds the child index taken at each depth. The loop walks back up it:
/// a childless valueless node is dropped from its parent, a valueless node with
/// one child absorbs that child, and a node still branching is left alone.
fn compact<V>(root: &mut Vec<Node<V>>, path: &mut Vec<usize>) {
    while let Some(&i) = path.last() {
        let depth = path.len() - 1;
        let siblings = children_at(root, &path[..depth]);

        match siblings[i].children.len() {
            0 => {
                siblings.swap_remove(i);
                path.pop();

                let (&parent, grandparents) = match path.split_last() {
                    Some(last) => last,
                    // The removed node hung directly off the root
                    None => return,
                };
                let parent = &children_at(root, grandparents)[parent];
                if parent.is_terminal() || parent.children.len() > 1 {
                    return;
                }
            }
            1 => {
                siblings[i].merge_with_child();
                return;
            }
            _ => return,
        }
    }
}

fn validate_children<V>(children: &[Node<V>], depth: usize, found: &mut usize) -> Result<()> {
    for (i, child) in children.iter().enumerate() {
        let first = match child.edge.first() {
            Some(&first) => first,
            None => return Err(Error::EmptyEdge { depth }),
        };
        if children[..i].iter().any(|sibling| sibling.edge.first() == Some(&first)) {
            return Err(Error::DuplicateDiscriminant { depth, byte: first });
        }
        if !child.is_terminal() && child.children.len() < 2 {
            return Err(Error::DegenerateNode {
                depth,
                children: child.children.len(),
            });
        }

        *found += usize::from(child.is_terminal());
        validate_children(&child.children, depth + 1, found)?;
    }
    Ok(())
}

// Default implementation
impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for Trie<V>
where
    K: AsRef<[u8]>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<K, V> Extend<(K, V)> for Trie<V>
where
    K: AsRef<[u8]>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(&key, value);
        }
    }
}
