//! Glob matching for cache keys.
//!
//! Only `*` is special: it matches any run of characters, including none.
//! This is the subset of Redis `KEYS` syntax that the in-memory cache and the
//! test doubles need to agree on.

/// Checks if a cache key matches a glob pattern.
///
/// # Examples
///
/// ```
/// use bookshelf_core::cache::pattern_matches;
///
/// assert!(pattern_matches("books:*", "books:12"));
/// assert!(pattern_matches("books:12", "books:12"));
/// assert!(!pattern_matches("books:*", "authors:12"));
/// ```
pub fn pattern_matches(pattern: &str, key: &str) -> bool {
    let pattern = pattern.as_bytes();
    let key = key.as_bytes();

    let (mut p, mut k) = (0, 0);
    // Position of the last `*` seen and the key position it was tried against
    let mut backtrack: Option<(usize, usize)> = None;

    while k < key.len() {
        if p < pattern.len() && pattern[p] == b'*' {
            backtrack = Some((p, k));
            p += 1;
        } else if p < pattern.len() && pattern[p] == key[k] {
            p += 1;
            k += 1;
        } else if let Some((star, matched)) = backtrack {
            // Let the last `*` swallow one more character and retry
            p = star + 1;
            k = matched + 1;
            backtrack = Some((star, k));
        } else {
            return false;
        }
    }

    pattern[p..].iter().all(|&b| b == b'*')
}
