//! Ranked name search over the flat catalog
//!
//! Matching is tiered rather than fuzzy: exact name, then prefix, then substring.
//! Names are normalized once when the index is built; the query is normalized
//! once per search.

use unicode_normalization::UnicodeNormalization;

use crate::catalog::CatalogEntry;

/// Queries shorter than this (in characters) never trigger a scan
pub const MIN_QUERY_CHARS: usize = 2;

/// Placeholder result used when nothing matched, so the list always has one item
pub const EMPTY_RESULT: &str = "";

/// Combining Diacritical Marks block
fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Normalize text for matching
///
/// Lowercases, decomposes (NFD), strips combining diacritics, collapses every
/// run of spaces and underscores into one space and trims the ends. Applying it
/// twice gives the same result as applying it once.
pub fn normalize(text: &str) -> String {
    let decomposed: String = text
        .to_lowercase()
        .nfd()
        .filter(|&c| !is_combining_diacritic(c))
        .collect();

    let mut out = String::with_capacity(decomposed.len());
    let mut pending_separator = false;
    for c in decomposed.chars() {
        if c == ' ' || c == '_' {
            pending_separator = true;
            continue;
        }
        if pending_separator && !out.is_empty() {
            out.push(' ');
        }
        pending_separator = false;
        out.push(c);
    }

    let trimmed = out.trim();
    if trimmed.len() == out.len() {
        out
    } else {
        trimmed.to_string()
    }
}

/// How well a normalized name matches a normalized query
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchScore {
    None = 0,
    Substring = 1,
    Prefix = 2,
    Exact = 3,
}

impl MatchScore {
    pub fn value(self) -> u8 {
        self as u8
    }
}

/// Score a normalized candidate against a normalized query
pub fn score(query: &str, candidate: &str) -> MatchScore {
    if candidate == query {
        MatchScore::Exact
    } else if candidate.starts_with(query) {
        MatchScore::Prefix
    } else if candidate.contains(query) {
        MatchScore::Substring
    } else {
        MatchScore::None
    }
}

/// Ranked glyphs for one query
///
/// Never empty: a query with no matches yields a single [`EMPTY_RESULT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    glyphs: Vec<String>,
}

impl SearchResults {
    fn from_matches(glyphs: Vec<String>) -> Self {
        if glyphs.is_empty() {
            Self {
                glyphs: vec![EMPTY_RESULT.to_string()],
            }
        } else {
            Self { glyphs }
        }
    }

    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    /// False when this is the empty-state placeholder
    pub fn has_matches(&self) -> bool {
        !(self.glyphs.len() == 1 && self.glyphs[0] == EMPTY_RESULT)
    }

    /// Number of real matches (0 for the placeholder)
    pub fn match_count(&self) -> usize {
        if self.has_matches() {
            self.glyphs.len()
        } else {
            0
        }
    }
}

/// What a query change means for the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Empty query: leave search mode
    Clear,
    /// Single character: keep whatever results are showing
    Unchanged,
    Results(SearchResults),
}

#[derive(Debug, Clone)]
struct IndexedName {
    normalized: String,
    glyph: String,
}

/// Search index over the flat filtered record list
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    names: Vec<IndexedName>,
}

impl SearchIndex {
    pub fn new(entries: &[CatalogEntry]) -> Self {
        let names = entries
            .iter()
            .map(|entry| IndexedName {
                normalized: normalize(entry.short_name()),
                glyph: entry.glyph.clone(),
            })
            .collect();
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Run a query
    ///
    /// Scores live in a scratch vector next to borrowed names; the index itself
    /// is never touched, so successive searches cannot see each other's scores.
    pub fn search(&self, query: &str) -> SearchOutcome {
        match query.chars().count() {
            0 => return SearchOutcome::Clear,
            n if n < MIN_QUERY_CHARS => return SearchOutcome::Unchanged,
            _ => {}
        }

        let query = normalize(query);
        let mut scored: Vec<(MatchScore, &IndexedName)> = self
            .names
            .iter()
            .filter_map(|name| {
                let s = score(&query, &name.normalized);
                (s > MatchScore::None).then_some((s, name))
            })
            .collect();

        // sort_by is stable: equal scores keep dataset order
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        tracing::trace!(query = %query, matches = scored.len(), "search");

        let glyphs = scored
            .into_iter()
            .map(|(_, name)| name.glyph.clone())
            .collect();
        SearchOutcome::Results(SearchResults::from_matches(glyphs))
    }
}
