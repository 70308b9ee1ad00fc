//! The Full Pipeline
//!
//! Extracted text in, embedding-ready JSON records out.
//!
//! ```bash
//! cargo run --example pipeline
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use shards::{
    load_documents, to_json, CharCount, ChunkAssembler, SplitterConfig, TextSplitter,
    SOURCE_URL_KEY, TITLE_KEY,
};

fn main() {
    // Extraction (out of scope here) hands over (text, metadata) pairs
    let mut meta = BTreeMap::new();
    meta.insert(
        SOURCE_URL_KEY.to_string(),
        "https://example.com/academy/what-is-chunking".to_string(),
    );
    meta.insert(TITLE_KEY.to_string(), "What is Chunking?".to_string());

    let body = "Machine learning models learn patterns from data. \
        They generalize these patterns to make predictions. \
        This is fundamentally different from traditional programming. \
        Deep learning extends this with multiple hidden layers. \
        Each layer learns increasingly abstract representations."
        .repeat(4);

    let documents = load_documents(vec![(body, meta)]);

    // Character budget here; swap in TiktokenOracle (feature `tiktoken`)
    // to budget by cl100k_base tokens instead.
    let config = SplitterConfig::new(300, 20, &["\n\n", "\n", " ", ""], 5)
        .expect("valid config");
    let splitter = TextSplitter::new(config, Arc::new(CharCount));
    let assembler = ChunkAssembler::new(splitter);

    let records = assembler.assemble(&documents).expect("chunking failed");

    println!("Documents: {}", documents.len());
    println!("Records:   {}\n", records.len());

    for record in &records {
        println!("[{}] {} chars", record.id, record.text.len());
    }

    // The JSON array is the handoff to the embedding stage
    let json = to_json(&records).expect("serialization failed");
    println!("\nJSON payload: {} bytes", json.len());
}
