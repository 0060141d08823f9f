//! Matching engine: weighted keyword and skill-phrase overlap between a job
//! description and a resume.
//!
//! Pure and deterministic. No I/O, no shared state, no LLM calls. Identical
//! input texts always produce identical results, so this module is fully
//! testable without mocking anything.
//!
//! Texts handed to the engine must already be lowercase-normalized (see
//! `extraction`). The engine never reads files itself.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

/// Minimum token length for a keyword. Shorter runs are noise ("a", "to", "js").
const MIN_KEYWORD_LEN: usize = 4;

/// Scoring weights. A multi-word skill phrase is a stronger signal of relevant
/// experience than a single incidental word, so phrases count triple.
const WORD_WEIGHT: usize = 1;
const PHRASE_WEIGHT: usize = 3;

const DEFAULT_SKILL_PHRASES: &[&str] = &[
    "machine learning",
    "deep learning",
    "data science",
    "data analysis",
    "natural language processing",
    "computer vision",
    "web development",
    "backend development",
    "frontend development",
    "object oriented programming",
    "rest api",
    "sql database",
    "cloud computing",
    "data structures",
    "artificial intelligence",
];

const DEFAULT_STOP_WORDS: &[&str] = &[
    "and", "the", "with", "for", "are", "you", "your", "from", "that", "this",
    "have", "has", "had", "will", "shall", "can", "could", "would", "should",
    "may", "might", "into", "about", "onto", "over", "under", "between",
    "within", "using", "use", "used", "through", "responsible", "required",
    "including",
];

// ────────────────────────────────────────────────────────────────────────────
// Configuration
// ────────────────────────────────────────────────────────────────────────────

/// Curated vocabulary the matcher runs against. Injectable at construction so
/// both lists can be tuned (or localized) without touching the algorithm.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Multi-word domain phrases detected via substring containment,
    /// tested in list order.
    pub skill_phrases: Vec<String>,
    /// Common function words excluded from keyword extraction.
    pub stop_words: HashSet<String>,
}

impl MatchConfig {
    /// Builds a config from caller-supplied lists. Entries are lowercased to
    /// match the lowercase-normalized document texts.
    pub fn new(skill_phrases: Vec<String>, stop_words: Vec<String>) -> Self {
        Self {
            skill_phrases: skill_phrases
                .into_iter()
                .map(|p| p.to_lowercase())
                .collect(),
            stop_words: stop_words.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            skill_phrases: DEFAULT_SKILL_PHRASES
                .iter()
                .map(|p| p.to_string())
                .collect(),
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Result model
// ────────────────────────────────────────────────────────────────────────────

/// Outcome of matching a resume against a job description.
///
/// Invariants, for any pair of documents:
/// - `matched ∪ missing` equals the job's keywords plus its detected phrases
/// - `matched ∩ missing` is empty
/// - `0.0 <= score <= 100.0`, rounded to two decimals
///
/// Ordered sets keep API responses and test assertions deterministic.
/// Never persisted; recomputed on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: f64,
    pub matched: BTreeSet<String>,
    pub missing: BTreeSet<String>,
}

impl MatchResult {
    fn empty() -> Self {
        Self {
            score: 0.0,
            matched: BTreeSet::new(),
            missing: BTreeSet::new(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Matcher
// ────────────────────────────────────────────────────────────────────────────

/// Stateless scorer over two document texts. Safe to share across concurrent
/// requests; holds only the immutable configuration.
pub struct KeywordMatcher {
    config: MatchConfig,
}

impl KeywordMatcher {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Extracts the keyword set of a document: maximal runs of ASCII letters
    /// of length >= 4, minus stop words, duplicates collapsed.
    pub fn extract_keywords(&self, text: &str) -> BTreeSet<String> {
        text.split(|c: char| !c.is_ascii_alphabetic())
            .filter(|token| token.len() >= MIN_KEYWORD_LEN)
            .filter(|token| !self.config.stop_words.contains(*token))
            .map(str::to_string)
            .collect()
    }

    /// Detects configured skill phrases in both texts independently.
    ///
    /// Containment is a plain substring test: a phrase embedded in a longer
    /// sentence (or word) counts as present. No stemming, no fuzzy matching.
    pub fn extract_skill_phrases(
        &self,
        job_text: &str,
        resume_text: &str,
    ) -> (BTreeSet<String>, BTreeSet<String>) {
        let mut job_phrases = BTreeSet::new();
        let mut resume_phrases = BTreeSet::new();

        for phrase in &self.config.skill_phrases {
            if job_text.contains(phrase.as_str()) {
                job_phrases.insert(phrase.clone());
            }
            if resume_text.contains(phrase.as_str()) {
                resume_phrases.insert(phrase.clone());
            }
        }

        (job_phrases, resume_phrases)
    }

    /// Computes the weighted overlap score. The job description drives the
    /// keyword universe: only terms the job asks for can be matched or missing.
    pub fn calculate_match(&self, job_text: &str, resume_text: &str) -> MatchResult {
        let job_keywords = self.extract_keywords(job_text);
        let resume_keywords = self.extract_keywords(resume_text);

        let matched_words: BTreeSet<String> = job_keywords
            .intersection(&resume_keywords)
            .cloned()
            .collect();
        let missing_words: BTreeSet<String> = job_keywords
            .difference(&resume_keywords)
            .cloned()
            .collect();

        let (job_phrases, resume_phrases) = self.extract_skill_phrases(job_text, resume_text);
        let matched_phrases: BTreeSet<String> = job_phrases
            .intersection(&resume_phrases)
            .cloned()
            .collect();
        let missing_phrases: BTreeSet<String> =
            job_phrases.difference(&resume_phrases).cloned().collect();

        let possible = job_keywords.len() * WORD_WEIGHT + job_phrases.len() * PHRASE_WEIGHT;
        // A job text with no extractable vocabulary is defined as score 0,
        // not an error.
        if possible == 0 {
            return MatchResult::empty();
        }

        let achieved = matched_words.len() * WORD_WEIGHT + matched_phrases.len() * PHRASE_WEIGHT;
        let score = (achieved as f64 / possible as f64 * 100.0 * 100.0).round() / 100.0;

        MatchResult {
            score,
            matched: matched_words.into_iter().chain(matched_phrases).collect(),
            missing: missing_words.into_iter().chain(missing_phrases).collect(),
        }
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
