//! Property-based tests for the chunking pipeline.
//!
//! These tests verify the invariants that hold for any input:
//! - Small inputs pass through unfragmented
//! - Splitting is a pure function (deterministic)
//! - Surviving chunks respect the minimum word count
//! - Chunk ids reproduce 0..n-1 per document with no gaps
//! - Document fingerprints are stable and collision-resistant

use std::collections::BTreeMap;
use std::sync::Arc;

use proptest::prelude::*;
use shards::{
    doc_uid, CharCount, ChunkAssembler, Document, SplitterConfig, TextSplitter, SOURCE_URL_KEY,
};

// =============================================================================
// Test Generators
// =============================================================================

/// Generate a non-empty string of bounded character length.
fn short_text() -> impl Strategy<Value = String> {
    prop::string::string_regex(".{1,100}")
        .unwrap()
        .prop_filter("non-empty", |s| !s.is_empty())
}

/// Generate word-structured text long enough to force splitting.
fn wordy_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::string::string_regex("[a-z]{2,10}").unwrap(), 20..80)
        .prop_map(|words| words.join(" "))
}

fn splitter(size: usize, overlap: usize, min: usize) -> TextSplitter {
    let config = SplitterConfig::new(size, overlap, &["\n\n", "\n", " ", ""], min).unwrap();
    TextSplitter::new(config, Arc::new(CharCount))
}

// =============================================================================
// Splitter Invariants
// =============================================================================

proptest! {
    #[test]
    fn small_input_is_never_fragmented(text in short_text()) {
        // budget of 200 chars always covers a <=100 char input
        let s = splitter(200, 20, 5);
        let chunks = s.split(&text).unwrap();
        prop_assert_eq!(chunks, vec![text]);
    }

    #[test]
    fn splitting_is_deterministic(text in wordy_text()) {
        let s = splitter(50, 10, 1);
        prop_assert_eq!(s.split(&text).unwrap(), s.split(&text).unwrap());
    }

    #[test]
    fn surviving_chunks_meet_minimum_word_count(
        text in wordy_text(),
        min in 1usize..6,
    ) {
        let s = splitter(50, 10, min);
        for chunk in s.split(&text).unwrap() {
            // the base case returns the whole text unfiltered; every
            // chunk produced by actual splitting respects the minimum
            if chunk != text {
                prop_assert!(
                    chunk.split_whitespace().count() >= min,
                    "chunk {:?} has fewer than {} words",
                    chunk,
                    min
                );
            }
        }
    }

    #[test]
    fn overlap_must_be_smaller_than_size(
        size in 1usize..100,
        excess in 0usize..50,
    ) {
        let overlap = size + excess;
        prop_assert!(SplitterConfig::new(size, overlap, &[" "], 1).is_err());
    }
}

// =============================================================================
// Assembler Invariants
// =============================================================================

proptest! {
    #[test]
    fn chunk_ids_form_contiguous_range(text in wordy_text()) {
        let assembler = ChunkAssembler::new(splitter(50, 10, 1));
        let mut metadata = BTreeMap::new();
        metadata.insert(SOURCE_URL_KEY.to_string(), "https://example.com/doc".to_string());
        let doc = Document::new(text, metadata);

        let records = assembler.assemble(std::slice::from_ref(&doc)).unwrap();
        let uid = doc_uid(doc.source_url());

        for (i, record) in records.iter().enumerate() {
            prop_assert_eq!(&record.id, &format!("{}-{}", uid, i));
        }
    }

    #[test]
    fn identical_urls_share_a_fingerprint(url in "[a-z]{1,30}") {
        prop_assert_eq!(doc_uid(Some(&url)), doc_uid(Some(&url)));
    }

    #[test]
    fn distinct_urls_get_distinct_fingerprints(
        a in "[a-z]{1,30}",
        b in "[a-z]{1,30}",
    ) {
        prop_assume!(a != b);
        prop_assert_ne!(doc_uid(Some(&a)), doc_uid(Some(&b)));
    }
}
