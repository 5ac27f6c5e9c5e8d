use std::cmp::Ordering;
use std::fmt;

/// A weighted query string used for prefix matching.
///
/// Terms order by query first (lexicographic, by code point), then by weight,
/// so sorting a collection groups every term sharing a prefix into one
/// contiguous run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term {
    /// The text being matched against
    pub query: String,
    /// Ranking weight, higher is more relevant
    pub weight: u64,
}

impl Term {
    /// Create a new term
    pub fn new(query: impl Into<String>, weight: u64) -> Self {
        Self {
            query: query.into(),
            weight,
        }
    }

    /// The first `len` characters of the query, or the whole query if shorter
    pub fn query_prefix(&self, len: usize) -> &str {
        match self.query.char_indices().nth(len) {
            Some((byte_idx, _)) => &self.query[..byte_idx],
            None => &self.query,
        }
    }

    /// Descending-weight comparator
    pub fn by_reverse_weight(a: &Term, b: &Term) -> Ordering {
        b.weight.cmp(&a.weight)
    }
}

impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        self.query
            .cmp(&other.query)
            .then_with(|| self.weight.cmp(&other.weight))
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.weight, self.query)
    }
}
