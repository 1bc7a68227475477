//! Benchmarks for emoji name search
//!
//! Run with: cargo bench search

use emoji_picker::catalog::{Catalog, CatalogEntry, EmojiRecord, PlatformCapabilities};
use emoji_picker::search::{normalize, SearchIndex};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

/// Synthetic catalog about the size of a full emoji dataset and larger
fn make_entries(count: usize) -> Vec<CatalogEntry> {
    const WORDS: [&str; 8] = [
        "smiling", "face", "heart", "cat", "hand", "flag", "café", "star",
    ];
    (0..count)
        .map(|i| {
            let short_name = format!(
                "{}_{}_{}",
                WORDS[i % WORDS.len()],
                WORDS[(i / WORDS.len()) % WORDS.len()],
                i
            );
            CatalogEntry::new(EmojiRecord {
                category: "Smileys & Emotion".to_string(),
                unified: format!("{:X}", 0x1F300 + (i % 0x300)),
                short_name,
                added_in: "6.0".to_string(),
            })
            .expect("generated codepoint is valid")
        })
        .collect()
}

// ============================================================================
// Normalization
// ============================================================================

#[divan::bench(args = ["smile", "Café_Time", "  Thumbs__Up  "])]
fn normalize_query(text: &str) {
    divan::black_box(normalize(divan::black_box(text)));
}

// ============================================================================
// Index construction
// ============================================================================

#[divan::bench(args = [1_000, 2_000, 10_000])]
fn build_index(bencher: divan::Bencher, count: usize) {
    let entries = make_entries(count);
    bencher.bench_local(|| SearchIndex::new(divan::black_box(&entries)));
}

#[divan::bench]
fn build_builtin_catalog() {
    divan::black_box(Catalog::builtin(PlatformCapabilities::default()).ok());
}

// ============================================================================
// Queries
// ============================================================================

#[divan::bench(args = [1_000, 2_000, 10_000])]
fn search_common_prefix(bencher: divan::Bencher, count: usize) {
    let index = SearchIndex::new(&make_entries(count));
    bencher.bench_local(|| index.search(divan::black_box("he")));
}

#[divan::bench(args = [1_000, 2_000, 10_000])]
fn search_substring(bencher: divan::Bencher, count: usize) {
    let index = SearchIndex::new(&make_entries(count));
    bencher.bench_local(|| index.search(divan::black_box("face_c")));
}

#[divan::bench(args = [1_000, 2_000, 10_000])]
fn search_no_match(bencher: divan::Bencher, count: usize) {
    let index = SearchIndex::new(&make_entries(count));
    bencher.bench_local(|| index.search(divan::black_box("zebra")));
}

/// Typing "smiling face" one character at a time
#[divan::bench(args = [2_000, 10_000])]
fn search_incremental_typing(bencher: divan::Bencher, count: usize) {
    let index = SearchIndex::new(&make_entries(count));
    let query = "smiling face";
    bencher.bench_local(|| {
        for end in 1..=query.len() {
            divan::black_box(index.search(&query[..end]));
        }
    });
}
