//! Debug rendering of the trie structure.

use std::fmt::{self, Debug, Display, Write};

use crate::node::Node;
use crate::trie::Trie;

const INDENT: &str = "|   ";

impl<V: Debug> Trie<V> {
    /// Renders the tree as indented text, one node per line.
    ///
    /// Each line shows the node's position among its siblings, its quoted
    /// edge label and, for terminal nodes, the stored value. Sibling order is
    /// whatever the trie currently holds and carries no meaning.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_mutable::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("long", 5);
    /// trie.insert("lo", 6);
    ///
    /// assert_eq!(
    ///     trie.dump(),
    ///     "RadixTrie:\n[0] \"lo\" val: 6\n|   [0] \"ng\" val: 5\n"
    /// );
    /// ```
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl<V: Debug> Display for Trie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RadixTrie:\n")?;
        if let Some(value) = self.root_value() {
            writeln!(f, "\"\" val: {:?}", value)?;
        }
        dump_children(f, self.children(), 0)
    }
}

fn dump_children<V: Debug>(f: &mut fmt::Formatter<'_>, children: &[Node<V>], depth: usize) -> fmt::Result {
    for (i, node) in children.iter().enumerate() {
        for _ in 0..depth {
            f.write_str(INDENT)?;
        }
        write!(f, "[{}] \"{}\"", i, node.edge().escape_ascii())?;
        if let Some(value) = node.value() {
            write!(f, " val: {:?}", value)?;
        }
        f.write_char('\n')?;
        dump_children(f, node.children(), depth + 1)?;
    }
    Ok(())
}
