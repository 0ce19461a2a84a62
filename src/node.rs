//! Node implementation for the radix trie.
//!
//! A `Node` owns the edge label leading to it from its parent, the value stored
//! for the key ending at it (if any), and its children. Nodes never point back
//! at their parent: the tree is a plain ownership hierarchy.

/// Capacity reserved when a node receives its first children.
pub(crate) const CHILDREN_CAPACITY: usize = 4;

/// A node of the radix trie.
///
/// Each node below the root carries a non-empty edge label. A node is
/// *terminal* when it stores a value: the concatenation of edges from the root
/// down to it is then a stored key. Among siblings, no two edges start with the
/// same byte, so that byte identifies the child to descend into.
#[derive(Debug, Clone)]
pub struct Node<V> {
    /// The key fragment labelling the edge from the parent to this node
    pub(crate) edge: Vec<u8>,

    /// The value stored at this node, present iff the node is terminal
    pub(crate) value: Option<V>,

    /// Child nodes, unordered, each with a distinct first edge byte
    pub(crate) children: Vec<Node<V>>,
}

impl<V> Node<V> {
    /// Creates a terminal node without children.
    pub(crate) fn leaf(edge: Vec<u8>, value: V) -> Self {
        debug_assert!(!edge.is_empty());
        Node {
            edge,
            value: Some(value),
            children: Vec::new(),
        }
    }

    /// Creates a non-terminal node with room for its children.
    pub(crate) fn branch(edge: Vec<u8>) -> Self {
        debug_assert!(!edge.is_empty());
        Node {
            edge,
            value: None,
            children: Vec::with_capacity(CHILDREN_CAPACITY),
        }
    }

    /// The edge label leading to this node.
    pub fn edge(&self) -> &[u8] {
        &self.edge
    }

    /// The value stored at this node, if it is terminal.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Whether a stored key ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.value.is_some()
    }

    /// The children of this node, in no particular order.
    pub fn children(&self) -> &[Node<V>] {
        &self.children
    }

    /// Returns whether this node is a leaf node (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of values stored in this subtree
    pub fn subtree_size(&self) -> usize {
        let own = usize::from(self.is_terminal());
        own + self.children.iter().map(Node::subtree_size).sum::<usize>()
    }

    /// Splits this node's edge after its first `at` bytes.
    ///
    /// `key` is the remaining insertion key, which agrees with the edge on
    /// exactly its first `at` bytes. The node is replaced in place by a new
    /// node labelled `edge[..at]`, and the old node moves below it with its
    /// edge shortened to `edge[at..]`. If the key ends at the split point the
    /// new node stores `value`; otherwise it becomes a branch with a second
    /// child holding `value` under `key[at..]`.
    pub(crate) fn split(&mut self, at: usize, key: &[u8], value: V) {
        debug_assert!(at > 0 && at < self.edge.len() && at <= key.len());

        let suffix = self.edge.split_off(at);
        let prefix = std::mem::replace(&mut self.edge, suffix);

        let old = std::mem::replace(self, Node::branch(prefix));
        self.children.push(old);

        if at == key.len() {
            self.value = Some(value);
        } else {
            self.children.push(Node::leaf(key[at..].to_vec(), value));
        }
    }

    /// Replaces this node with its only child, prepending this node's edge to
    /// the child's edge.
    ///
    /// Only valid on a non-terminal node with exactly one child.
    pub(crate) fn merge_with_child(&mut self) {
        debug_assert!(self.value.is_none() && self.children.len() == 1);

        if let Some(mut child) = self.children.pop() {
            let mut edge = std::mem::take(&mut self.edge);
            edge.extend_from_slice(&child.edge);
            child.edge = edge;
            *self = child;
        }
    }
}

/// Returns the index of the child whose edge starts with `first`.
///
/// Siblings never share a first byte, so at most one child can match.
pub(crate) fn position<V>(children: &[Node<V>], first: u8) -> Option<usize> {
    children.iter().position(|child| child.edge[0] == first)
}
