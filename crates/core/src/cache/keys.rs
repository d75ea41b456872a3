/// Prefix shared by every book cache key.
pub const BOOK_KEY_PREFIX: &str = "books:";

/// Returns the cache key for a single book.
pub fn book_key(id: u64) -> String {
    format!("{BOOK_KEY_PREFIX}{id}")
}

/// Returns the pattern matching every book key.
pub fn book_key_pattern() -> String {
    format!("{BOOK_KEY_PREFIX}*")
}

/// Extracts the numeric id from a book cache key.
///
/// Returns `None` for anything that is not exactly `books:<u64>`, including
/// keys with additional `:` segments.
pub fn parse_book_id(key: &str) -> Option<u64> {
    let rest = key.strip_prefix(BOOK_KEY_PREFIX)?;
    if rest.contains(':') {
        return None;
    }
    rest.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_key() {
        assert_eq!(book_key(42), "books:42");
    }

    #[test]
    fn test_book_key_pattern() {
        assert_eq!(book_key_pattern(), "books:*");
    }

    #[test]
    fn test_parse_round_trips_book_key() {
        assert_eq!(parse_book_id(&book_key(9001)), Some(9001));
    }

    #[test]
    fn test_parse_rejects_other_prefixes() {
        assert_eq!(parse_book_id("authors:1"), None);
        assert_eq!(parse_book_id("book:1"), None);
        assert_eq!(parse_book_id("1"), None);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(parse_book_id("books:"), None);
        assert_eq!(parse_book_id("books:abc"), None);
        assert_eq!(parse_book_id("books:12a"), None);
        assert_eq!(parse_book_id("books:-1"), None);
    }

    #[test]
    fn test_parse_rejects_extra_segments() {
        assert_eq!(parse_book_id("books:1:2"), None);
        assert_eq!(parse_book_id("books:1:"), None);
    }

    #[test]
    fn test_parse_accepts_leading_zeros() {
        assert_eq!(parse_book_id("books:007"), Some(7));
    }
}
