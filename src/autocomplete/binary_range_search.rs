use crate::autocomplete::Autocomplete;
use crate::models::Term;
use std::ops::Range;

/// Terms sorted by query, searched with a pair of binary searches
#[derive(Debug, Clone, Default)]
pub struct BinaryRangeSearch {
    terms: Vec<Term>,
}

impl BinaryRangeSearch {
    /// Take ownership of `terms` and sort them by natural order
    pub fn new(mut terms: Vec<Term>) -> Self {
        terms.sort();

        if cfg!(debug_assertions) && crate::debug::debug_enabled() {
            eprintln!("AUTOCOMPLETE: indexed {} terms", terms.len());
        }

        Self { terms }
    }

    /// Stored terms in natural order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Number of stored terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when no terms are stored
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Index range of the terms whose query starts with `prefix`.
    ///
    /// Truncating every query to the prefix length keeps the array sorted,
    /// so the matching run is bounded by a lower and an upper binary search.
    fn match_range(&self, prefix: &str) -> Range<usize> {
        let len = prefix.chars().count();
        let start = self
            .terms
            .partition_point(|term| term.query_prefix(len) < prefix);
        let end = self
            .terms
            .partition_point(|term| term.query_prefix(len) <= prefix);
        start..end
    }

    /// The `k` heaviest terms starting with `prefix`
    pub fn top_matches(&self, prefix: &str, k: usize) -> Vec<Term> {
        let mut matches = self.all_matches(prefix);
        matches.truncate(k);
        matches
    }
}

impl Autocomplete for BinaryRangeSearch {
    fn all_matches(&self, prefix: &str) -> Vec<Term> {
        let mut matches = self.terms[self.match_range(prefix)].to_vec();
        // stable: equal weights stay in query order
        matches.sort_by(Term::by_reverse_weight);
        matches
    }
}
