//! Round-trip and failure-path tests for index persistence.

use std::io::Write;

use menagerie::{Entry, LoadError, Trie};

fn sample() -> Trie {
    let mut trie = Trie::new();
    trie.insert(&["big", "g1", "regular"], Entry::new(0, "charizard"));
    trie.insert(&["small", "g1", "regular"], Entry::new(1, "pikachu"));
    trie.insert(&["small", "g1", "shiny"], Entry::new(2, "pikachu"));
    trie
}

#[test]
fn save_then_load_preserves_the_index() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dex.json");

    let trie = sample();
    trie.save(&path).unwrap();
    let loaded = Trie::load(&path).unwrap();

    assert_eq!(loaded, trie);
    assert_eq!(loaded.len(), 3);
    assert_eq!(
        loaded.find_by_key_path(&["small", "g1"]).unwrap().len(),
        2
    );
    assert_eq!(loaded.find("pikachu", true).unwrap().len(), 2);
}

#[test]
fn reader_round_trip() {
    let mut buf = Vec::new();
    sample().to_writer(&mut buf).unwrap();
    let loaded = Trie::from_reader(buf.as_slice()).unwrap();
    assert_eq!(loaded, sample());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Trie::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn garbage_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dex.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"not an index").unwrap();
    drop(file);

    let err = Trie::load(&path).unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)));
}

#[test]
fn cyclic_child_reference_is_corrupt() {
    // Node 1 lists itself as a child; walking it would never terminate.
    let json = r#"{
        "nodes": [
            {"children": {"a": 1}, "data": []},
            {"children": {"b": 1}, "data": []}
        ],
        "len": 0,
        "key_paths": []
    }"#;
    let err = Trie::from_reader(json.as_bytes()).unwrap_err();
    assert!(matches!(err, LoadError::Corrupt { parent: 1, child: 1 }));
}

#[test]
fn shared_child_reference_is_corrupt() {
    // Nodes 0 and 1 both claim node 2.
    let json = r#"{
        "nodes": [
            {"children": {"a": 1, "b": 2}, "data": []},
            {"children": {"c": 2}, "data": []},
            {"children": {}, "data": []}
        ],
        "len": 0,
        "key_paths": []
    }"#;
    let err = Trie::from_reader(json.as_bytes()).unwrap_err();
    assert!(matches!(err, LoadError::Corrupt { parent: 1, child: 2 }));
}

#[test]
fn dangling_child_reference_is_corrupt() {
    // Hand-built arena whose root references a node that does not exist.
    let json = r#"{
        "nodes": [{"children": {"big": 7}, "data": []}],
        "len": 0,
        "key_paths": []
    }"#;
    let err = Trie::from_reader(json.as_bytes()).unwrap_err();
    assert!(matches!(err, LoadError::Corrupt { parent: 0, child: 7 }));
}
