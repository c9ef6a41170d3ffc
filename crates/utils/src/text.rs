//! String helpers

/// Number of non-overlapping occurrences of `needle` in `haystack`
///
/// An empty needle never matches.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Split on single spaces; consecutive spaces yield empty words
pub fn words(s: &str) -> Vec<&str> {
    s.split(' ').collect()
}
