use radix_mutable::Trie;

fn sample() -> Trie<i32> {
    let mut trie = Trie::new();
    trie.insert("", 1);
    trie.insert("a", 2);
    trie.insert("b", 3);
    trie.insert("ab", 4);
    trie.insert("long", 5);
    trie.insert("lo", 6);
    trie.insert("la", 7);
    trie
}

#[test]
fn test_empty_key_round_trip() {
    let mut trie = Trie::new();
    trie.insert("", 1);

    assert_eq!(trie.find(""), Some(&1));
}

#[test]
fn test_insert_reports_previous() {
    let inputs = [
        ("", 1, None),
        ("a", 2, None),
        ("b", 3, None),
        ("ab", 4, None),
        ("long", 5, None),
        ("lo", 6, None),
        ("la", 7, None),
        ("long", 8, Some(5)),
        ("long", 9, Some(8)),
    ];

    let mut trie = Trie::new();
    for (key, value, previous) in inputs {
        assert_eq!(trie.insert(key, value), previous, "inserting {:?}", key);
    }
    assert_eq!(trie.len(), 7);
    assert!(trie.validate().is_ok());
}

#[test]
fn test_find() {
    let trie = sample();

    let expected = [
        ("", Some(1)),
        ("a", Some(2)),
        ("b", Some(3)),
        ("ab", Some(4)),
        ("long", Some(5)),
        ("lo", Some(6)),
        ("la", Some(7)),
        ("lon", None),
        ("longs", None),
        ("lonb", None),
        ("l", None),
    ];
    for (key, value) in expected {
        assert_eq!(trie.find(key).copied(), value, "finding {:?}", key);
    }
}

#[test]
fn test_find_on_empty_trie() {
    let trie: Trie<i32> = Trie::new();
    assert_eq!(trie.find("a"), None);
}

#[test]
fn test_replace_then_find() {
    let mut trie = sample();

    assert_eq!(trie.insert("long", 8), Some(5));
    assert_eq!(trie.find("long"), Some(&8));
}

#[test]
fn test_remove_branch_key_keeps_children() {
    let mut trie = Trie::new();
    trie.insert("low", 8);
    trie.insert("lowa", 9);
    trie.insert("lowb", 10);

    assert_eq!(trie.remove("low"), Some(8));
    assert_eq!(trie.find("lowa"), Some(&9));
    assert_eq!(trie.find("lowb"), Some(&10));
    assert_eq!(trie.find("low"), None);
    assert!(trie.validate().is_ok());
}

#[test]
fn test_remove_sequence() {
    let mut trie = sample();
    trie.insert("low", 8);
    trie.insert("lowa", 9);
    trie.insert("lowb", 10);

    let steps = [
        ("", Some(1)),
        ("a", Some(2)),
        ("b", Some(3)),
        ("ab", Some(4)),
        ("lon", None),
        ("lonb", None),
        ("l", None),
        ("lz", None),
        ("low", Some(8)),
        ("long", Some(5)),
        ("lowa", Some(9)),
        ("lowb", Some(10)),
        ("lo", Some(6)),
        ("la", Some(7)),
        ("long", None),
        ("longs", None),
    ];
    for (key, removed) in steps {
        assert_eq!(trie.remove(key), removed, "removing {:?}", key);
        assert!(trie.validate().is_ok(), "after removing {:?}:\n{}", key, trie);
    }

    assert!(trie.is_empty());
    assert!(trie.children().is_empty());
    assert_eq!(trie.root_value(), None);
}

#[test]
fn test_remove_absent_leaves_others() {
    let keys = ["", "a", "b", "ab", "long", "lo", "la", "low", "lowa", "lowb"];
    let mut trie: Trie<usize> = keys.iter().enumerate().map(|(i, k)| (*k, i)).collect();

    assert_eq!(trie.remove("long"), Some(4));
    assert_eq!(trie.remove("longs"), None);
    assert_eq!(trie.len(), 9);

    for (i, key) in keys.iter().enumerate() {
        if *key == "long" {
            assert_eq!(trie.find(key), None);
        } else {
            assert_eq!(trie.find(key), Some(&i), "finding {:?}", key);
        }
    }
    assert!(trie.validate().is_ok());
}

#[test]
fn test_remove_on_empty_trie() {
    let mut trie: Trie<i32> = Trie::new();
    assert_eq!(trie.remove("a"), None);
    assert_eq!(trie.remove(""), None);
    assert!(trie.is_empty());
}

#[test]
fn test_absent_remove_does_not_mutate() {
    let mut trie = sample();
    let before = trie.dump();

    for key in ["l", "lon", "longer", "z", "abc"] {
        assert_eq!(trie.remove(key), None);
    }

    assert_eq!(trie.dump(), before);
    assert_eq!(trie.len(), 7);
}

#[test]
fn test_values_are_moved_not_cloned() {
    struct Opaque(String);

    let mut trie = Trie::new();
    trie.insert("k", Opaque("first".to_string()));

    let old = trie.insert("k", Opaque("second".to_string()));
    assert_eq!(old.map(|o| o.0), Some("first".to_string()));

    let removed = trie.remove("k");
    assert_eq!(removed.map(|o| o.0), Some("second".to_string()));
}

#[test]
fn test_shared_behind_lock() {
    use std::sync::{Arc, RwLock};

    let trie = Arc::new(RwLock::new(Trie::new()));
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let trie = Arc::clone(&trie);
            std::thread::spawn(move || {
                for i in 0..100 {
                    let key = format!("thread{}/key{}", t, i);
                    trie.write().unwrap().insert(&key, i);
                    if i % 2 == 0 {
                        trie.write().unwrap().remove(&key);
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let trie = trie.read().unwrap();
    assert_eq!(trie.len(), 200);
    assert_eq!(trie.find("thread3/key99"), Some(&99));
    assert_eq!(trie.find("thread3/key98"), None);
    assert!(trie.validate().is_ok());
}
