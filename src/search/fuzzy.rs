//! Approximate string matching for per-keystroke search.
//!
//! Case-insensitive. A contiguous substring match scores `1.0`; otherwise
//! a greedy, single-pass subsequence scan scores `matched / candidate_len`
//! when every query character was consumed, and `0.0` when not. Longer
//! candidates containing the same subsequence therefore score lower.

/// Score how well `query` matches `candidate`, in `[0, 1]`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fuzzy_score(candidate: &str, query: &str) -> f64 {
    let candidate = candidate.to_lowercase();
    let query = query.to_lowercase();

    if candidate.contains(&query) {
        return 1.0;
    }

    let mut wanted = query.chars().peekable();
    let mut matched = 0usize;
    let mut candidate_len = 0usize;
    for c in candidate.chars() {
        candidate_len += 1;
        if wanted.peek() == Some(&c) {
            wanted.next();
            matched += 1;
        }
    }

    if wanted.peek().is_some() || candidate_len == 0 {
        return 0.0;
    }

    matched as f64 / candidate_len as f64
}

/// Whether every character of `query` appears in `candidate` in order.
#[must_use]
pub fn is_subsequence(candidate: &str, query: &str) -> bool {
    let candidate = candidate.to_lowercase();
    let query = query.to_lowercase();
    let mut wanted = query.chars().peekable();
    for c in candidate.chars() {
        if wanted.peek() == Some(&c) {
            wanted.next();
        }
    }
    wanted.peek().is_none()
}
