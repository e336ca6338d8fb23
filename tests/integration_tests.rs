// End-to-end tests: keyword-indexing workflows over realistic buffers

use multimatch::{Dialect, Trie};

// ============ Keyword Indexing Workflow ============

#[test]
fn test_keyword_index_workflow() {
    // Step 1: Compile the keyword set once
    let mut trie = Trie::new();
    trie.add_word(b"From:", 1, Dialect::Literal).unwrap();
    trie.add_word(b"subject", 2, Dialect::English).unwrap();
    trie.add_word(b"[0-9][0-9]:[0-9][0-9]", 3, Dialect::Extended)
        .unwrap();

    // Step 2: Scan an evidence buffer
    let buffer: &[u8] = b"From: alice\nSUBJECT: meeting at 14:30 today\n";
    let hits: Vec<_> = trie.scan(buffer).collect();

    // Step 3: Verify every keyword was found where expected
    assert_eq!(hits.len(), 3);

    assert_eq!(hits[0].offset, 0);
    assert_eq!(hits[0].payload, 1);

    assert_eq!(hits[1].offset, 12);
    assert_eq!(hits[1].payload, 2);
    assert_eq!(hits[1].length, 7);

    assert_eq!(hits[2].payload, 3);
    assert_eq!(
        &buffer[hits[2].offset..hits[2].offset + hits[2].length],
        b"14:30"
    );

    println!("Indexed {} hits in {} bytes", hits.len(), buffer.len());
}

#[test]
fn test_payloads_are_opaque_to_the_trie() {
    let mut trie = Trie::new();
    trie.add_word(b"a", i64::MIN, Dialect::Literal).unwrap();
    trie.add_word(b"b", i64::MAX, Dialect::Literal).unwrap();
    trie.add_word(b"c", -1, Dialect::Literal).unwrap();

    assert_eq!(trie.match_at(b"a", 0).unwrap().payload, i64::MIN);
    assert_eq!(trie.match_at(b"b", 0).unwrap().payload, i64::MAX);
    assert_eq!(trie.match_at(b"c", 0).unwrap().payload, -1);
}

#[test]
fn test_binary_patterns_and_buffers() {
    // Patterns are bytes, not text: NUL and high bytes are fine
    let mut trie = Trie::new();
    trie.add_word(&[0x00, 0xff, 0x00], 1, Dialect::Literal).unwrap();
    trie.add_word(b"\x89PNG", 2, Dialect::Literal).unwrap();

    let buffer = [0x00u8, 0x00, 0xff, 0x00, 0x89, b'P', b'N', b'G'];
    let hits: Vec<_> = trie.scan(&buffer).collect();

    assert_eq!(hits.len(), 2);
    assert_eq!((hits[0].offset, hits[0].payload), (1, 1));
    assert_eq!((hits[1].offset, hits[1].payload), (4, 2));
}

#[test]
fn test_rescanning_is_repeatable() {
    let mut trie = Trie::new();
    trie.add_word(b"cat", 1, Dialect::Literal).unwrap();

    let buffer = b"cat cat cat";
    let first: Vec<_> = trie.scan(buffer).collect();
    let second: Vec<_> = trie.scan(buffer).collect();

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
}

// ============ Build-Then-Freeze Discipline ============

#[test]
fn test_concurrent_readonly_matching() {
    // Build phase: sequential inserts
    let mut trie = Trie::new();
    for (payload, word) in [&b"cat"[..], b"car", b"dog", b"data"].iter().enumerate() {
        trie.add_word(word, payload as i64, Dialect::Literal).unwrap();
    }

    // Query phase: a shared reference used from several threads
    let trie = &trie;
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(move || {
                for _ in 0..1000 {
                    assert_eq!(trie.match_at(b"cat", 0).unwrap().payload, 0);
                    assert_eq!(trie.match_at(b"data", 0).unwrap().payload, 3);
                    assert_eq!(trie.match_at(b"dot", 0), None);
                }
            });
        }
    });
}

#[test]
fn test_clone_gives_independent_tries() {
    let mut original = Trie::new();
    original.add_word(b"cat", 1, Dialect::Literal).unwrap();

    let mut copy = original.clone();
    copy.add_word(b"dog", 2, Dialect::Literal).unwrap();

    assert_eq!(original.match_at(b"dog", 0), None);
    assert_eq!(copy.match_at(b"dog", 0).unwrap().payload, 2);
}

// ============ Structure at Scale ============

#[test]
fn test_dictionary_scale_sharing() {
    // Longest first: a word inserted before its extensions would win
    // at its own terminal and shadow them (sibling order is match order)
    let words: [&[u8]; 10] = [
        b"internal", b"internet", b"interval", b"input", b"index",
        b"inter", b"into", b"ink", b"inn", b"in",
    ];

    let mut trie = Trie::new();
    for (payload, word) in words.iter().enumerate() {
        trie.add_word(word, payload as i64, Dialect::Literal).unwrap();
    }

    // Every word starts with "in": one node at depth 1 and 2
    let counts = trie.node_count_by_depth();
    assert_eq!(counts.get(&1), Some(&1));
    assert_eq!(counts.get(&2), Some(&1));

    // All ten words resolve to their own payloads
    for (payload, word) in words.iter().enumerate() {
        let found = trie.match_at(word, 0).unwrap();
        assert_eq!(found.payload, payload as i64, "word {:?}", word);
        assert_eq!(found.length, word.len());
    }

    println!(
        "10 words: {} nodes, depth {}, depth counts {:?}",
        trie.node_count(),
        trie.max_depth(),
        counts
    );
}

#[test]
fn test_match_cost_is_depth_bounded() {
    // A large buffer after the match point must not matter
    let mut trie = Trie::new();
    trie.add_word(b"needle", 1, Dialect::Literal).unwrap();

    let mut buffer = b"needle".to_vec();
    buffer.extend(std::iter::repeat(b'x').take(1 << 20));

    let found = trie.match_at(&buffer, 0).unwrap();
    assert_eq!(found.length, 6);
}
