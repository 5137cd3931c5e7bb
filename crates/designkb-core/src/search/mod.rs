//! Relevance scoring and ranking of corpus entries
//!
//! An entry's score is a weighted sum over the distinct query tokens:
//! keyword occurrences count linearly, body occurrences sublinearly
//! (`1 + ln tf`). Zero-score entries are never returned. Ties are broken by
//! declared order within the partition, then by id, so results are fully
//! deterministic for a fixed corpus and query.

pub mod weights;

use std::cmp::Ordering;
use std::num::NonZeroUsize;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::corpus::{load_family, CorpusSource, Entry, Partition};
use crate::error::{DesignKbError, Result};
use crate::selector;
use crate::text::{tokenize_query, tokenize_with_stemming, TermCounts};
use crate::trace_time;

pub use weights::Weights;

/// Default number of results when the caller gives none
pub const DEFAULT_TOP_N: usize = 5;

/// Scoring knobs shared by every query in an invocation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SearchOptions {
    pub weights: Weights,
    pub stemming: bool,
}

/// A validated search request
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub text: String,
    pub partition: Partition,
    pub top_n: NonZeroUsize,
}

/// One ranked result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    /// 1-based rank
    pub rank: usize,
    pub id: String,
    pub title: String,
    pub keywords: Vec<String>,
    pub body: String,
    pub score: f64,
    /// Distinct query tokens found in keywords or body
    pub matched_terms: Vec<String>,
}

/// Outcome of a search: the query echo plus ranked hits
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    pub query: String,
    pub partition: Partition,
    pub hits: Vec<SearchHit>,
}

/// Normalize query text, rejecting queries with no usable tokens
pub fn normalize_query(text: &str, stemming: bool) -> Result<TermCounts> {
    let counts = TermCounts::from_tokens(tokenize_query(text, stemming));
    if counts.is_empty() {
        return Err(DesignKbError::EmptyQuery);
    }
    Ok(counts)
}

/// Score a single entry against a normalized query
///
/// Returns the score and the distinct query tokens that matched.
pub fn score_entry(
    query: &TermCounts,
    entry: &Entry,
    options: &SearchOptions,
) -> (f64, Vec<String>) {
    let keyword_counts = TermCounts::from_tokens(tokenize_with_stemming(
        &entry.keywords.join(" "),
        options.stemming,
    ));
    let body_counts =
        TermCounts::from_tokens(tokenize_with_stemming(&entry.body, options.stemming));

    let mut score = 0.0;
    let mut matched = Vec::new();

    for (term, query_tf) in query.iter() {
        let keyword_tf = keyword_counts.get(term);
        let body_tf = body_counts.get(term);
        if keyword_tf == 0 && body_tf == 0 {
            continue;
        }

        let mut term_score = options.weights.keyword * f64::from(keyword_tf);
        if body_tf > 0 {
            term_score += options.weights.body * (1.0 + f64::from(body_tf).ln());
        }
        score += f64::from(query_tf) * term_score;
        matched.push(term.to_string());
    }

    (score, matched)
}

/// Score descending, then declared order, then id
fn compare_ranked(a_score: f64, a: &Entry, b_score: f64, b: &Entry) -> Ordering {
    b_score
        .total_cmp(&a_score)
        .then_with(|| a.position.cmp(&b.position))
        .then_with(|| a.id.cmp(&b.id))
}

/// Rank a partition's entries, returning at most `top_n` nonzero-score hits
pub fn rank(
    query: &TermCounts,
    entries: &[Entry],
    top_n: NonZeroUsize,
    options: &SearchOptions,
) -> Vec<SearchHit> {
    let mut scored: Vec<(f64, &Entry, Vec<String>)> = entries
        .iter()
        .filter_map(|entry| {
            let (score, matched) = score_entry(query, entry, options);
            (score > 0.0).then_some((score, entry, matched))
        })
        .collect();

    scored.sort_by(|a, b| compare_ranked(a.0, a.1, b.0, b.1));
    scored.truncate(top_n.get());

    scored
        .into_iter()
        .enumerate()
        .map(|(i, (score, entry, matched_terms))| SearchHit {
            rank: i + 1,
            id: entry.id.clone(),
            title: entry.title.clone(),
            keywords: entry.keywords.clone(),
            body: entry.body.clone(),
            score,
            matched_terms,
        })
        .collect()
}

/// Run the full pipeline: normalize, load the family, select the partition, rank
pub fn execute(
    query: &Query,
    source: &CorpusSource,
    options: &SearchOptions,
) -> Result<SearchReport> {
    let start = Instant::now();

    let terms = normalize_query(&query.text, options.stemming)?;
    debug!(
        query = %query.text,
        partition = query.partition.as_str(),
        terms = terms.distinct(),
        top_n = query.top_n.get(),
        "normalize_query"
    );

    let corpus = load_family(source, query.partition.family())?;
    let entries = selector::select(&corpus, query.partition)?;
    let hits = rank(&terms, entries, query.top_n, options);

    debug!(
        candidates = entries.len(),
        results = hits.len(),
        elapsed = ?start.elapsed(),
        "search"
    );
    trace_time!(start, "execute_search", results = hits.len());

    Ok(SearchReport {
        query: query.text.clone(),
        partition: query.partition,
        hits,
    })
}
