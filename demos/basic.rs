//! Examples of using the radix trie
use radix_mutable::Trie;

fn main() {
    // Create a new trie with integer values
    let mut trie = Trie::new();

    // Insert some values; each insert reports the value it replaced
    assert_eq!(trie.insert("hello", 1), None);
    assert_eq!(trie.insert("help", 2), None);
    assert_eq!(trie.insert("world", 3), None);
    assert_eq!(trie.insert("hello", 4), Some(1));

    // Check values
    assert_eq!(trie.find("hello"), Some(&4));
    assert_eq!(trie.find("help"), Some(&2));
    assert_eq!(trie.find("hel"), None);

    println!("{}", trie.dump());

    // Removing "help" folds the "hel" branch back into a single edge
    assert_eq!(trie.remove("help"), Some(2));
    assert_eq!(trie.remove("help"), None);

    println!("{}", trie.dump());

    // Byte keys work the same way
    let mut bytes = Trie::new();
    bytes.insert(&[0xde_u8, 0xad, 0xbe, 0xef][..], "beef");
    bytes.insert(&[0xde_u8, 0xad][..], "dead");
    assert_eq!(bytes.find(&[0xde_u8, 0xad]), Some(&"dead"));

    assert!(trie.validate().is_ok());
    assert!(bytes.validate().is_ok());
}
