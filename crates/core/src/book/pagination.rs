//! Pure windowing of cached book keys.
//!
//! The cache gives no ordering guarantee, so the cache-hit listing path
//! imposes one: every well-formed key is ordered by its numeric id and the
//! requested page is sliced out of that sorted list.

use crate::cache::parse_book_id;

use super::PageError;

/// Default number of books per page.
pub const DEFAULT_LIMIT: usize = 10;

/// Default starting position.
pub const DEFAULT_OFFSET: usize = 0;

/// A validated `limit`/`offset` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: usize,
    pub offset: usize,
}

impl PageRequest {
    /// Creates a new page request, validating that `limit` is positive.
    pub fn new(limit: usize, offset: usize) -> Result<Self, PageError> {
        if limit == 0 {
            return Err(PageError::InvalidLimit);
        }
        Ok(Self { limit, offset })
    }

    /// Exclusive upper bound of the window, saturating on overflow.
    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

/// Selects the cache keys that make up one page.
///
/// Keys whose id does not parse are dropped and do not count towards the
/// window. The survivors are sorted ascending by id and sliced to
/// `[offset, offset + limit)`, clamped to the number of valid keys. An
/// offset at or beyond that number yields an empty page.
///
/// The returned keys are the original strings, in page order.
///
/// # Examples
///
/// ```
/// use bookshelf_core::book::{paginate_book_keys, PageRequest};
///
/// let keys = vec![
///     "books:10".to_string(),
///     "books:2".to_string(),
///     "books:oops".to_string(),
///     "books:7".to_string(),
/// ];
/// let page = PageRequest::new(2, 1).unwrap();
///
/// assert_eq!(paginate_book_keys(&keys, page), vec!["books:7", "books:10"]);
/// ```
pub fn paginate_book_keys(keys: &[String], page: PageRequest) -> Vec<String> {
    let mut parsed: Vec<(u64, &String)> = keys
        .iter()
        .filter_map(|key| parse_book_id(key).map(|id| (id, key)))
        .collect();

    // Stable sort so that duplicate ids keep their enumeration order
    parsed.sort_by_key(|(id, _)| *id);

    let start = page.offset;
    if start >= parsed.len() {
        return Vec::new();
    }
    let end = page.end().min(parsed.len());

    parsed[start..end]
        .iter()
        .map(|(_, key)| (*key).clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::book_key;

    fn keys_for(ids: impl IntoIterator<Item = u64>) -> Vec<String> {
        ids.into_iter().map(book_key).collect()
    }

    fn ids_of(keys: &[String]) -> Vec<u64> {
        keys.iter().filter_map(|k| parse_book_id(k)).collect()
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        assert_eq!(PageRequest::new(0, 0), Err(PageError::InvalidLimit));
    }

    #[test]
    fn test_default_page() {
        let page = PageRequest::default();
        assert_eq!(page.limit, 10);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn test_end_saturates() {
        let page = PageRequest::new(usize::MAX, 5).unwrap();
        assert_eq!(page.end(), usize::MAX);
    }

    #[test]
    fn test_fifteen_books_first_page() {
        // Enumeration order from a cache is arbitrary
        let keys = keys_for([15, 3, 9, 1, 12, 5, 7, 2, 14, 4, 11, 6, 13, 8, 10]);
        let page = PageRequest::new(10, 0).unwrap();

        let selected = paginate_book_keys(&keys, page);

        assert_eq!(ids_of(&selected), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_fifteen_books_second_page_is_clamped() {
        let keys = keys_for((1..=15).rev());
        let page = PageRequest::new(10, 10).unwrap();

        let selected = paginate_book_keys(&keys, page);

        assert_eq!(ids_of(&selected), (11..=15).collect::<Vec<_>>());
    }

    #[test]
    fn test_offset_past_end_is_empty() {
        let keys = keys_for(1..=15);
        let page = PageRequest::new(10, 20).unwrap();

        assert!(paginate_book_keys(&keys, page).is_empty());
    }

    #[test]
    fn test_offset_equal_to_len_is_empty() {
        let keys = keys_for(1..=3);
        let page = PageRequest::new(1, 3).unwrap();

        assert!(paginate_book_keys(&keys, page).is_empty());
    }

    #[test]
    fn test_sparse_ids_sort_numerically() {
        // Lexicographic order would put 100 before 20
        let keys = keys_for([100, 20, 3]);
        let page = PageRequest::new(10, 0).unwrap();

        assert_eq!(ids_of(&paginate_book_keys(&keys, page)), vec![3, 20, 100]);
    }

    #[test]
    fn test_malformed_keys_are_not_counted() {
        let keys = vec![
            "books:1".to_string(),
            "books:".to_string(),
            "books:abc".to_string(),
            "books:2:extra".to_string(),
            "books:-4".to_string(),
            "books:2".to_string(),
            "books:3".to_string(),
        ];

        // Three valid keys, so offset 2 leaves exactly one
        let page = PageRequest::new(10, 2).unwrap();
        assert_eq!(paginate_book_keys(&keys, page), vec!["books:3"]);
    }

    #[test]
    fn test_result_size_matches_window_formula() {
        let n = 7usize;
        let keys = keys_for(1..=n as u64);

        for limit in 1..=9usize {
            for offset in 0..=9usize {
                let page = PageRequest::new(limit, offset).unwrap();
                let expected = limit.min(n.saturating_sub(offset));
                assert_eq!(
                    paginate_book_keys(&keys, page).len(),
                    expected,
                    "limit={limit} offset={offset}"
                );
            }
        }
    }

    #[test]
    fn test_same_input_same_output() {
        let keys = keys_for([4, 1, 3, 2]);
        let page = PageRequest::new(2, 1).unwrap();

        assert_eq!(
            paginate_book_keys(&keys, page),
            paginate_book_keys(&keys, page)
        );
    }

    #[test]
    fn test_returns_original_key_strings() {
        let keys = vec!["books:007".to_string(), "books:3".to_string()];
        let page = PageRequest::default();

        assert_eq!(paginate_book_keys(&keys, page), vec!["books:3", "books:007"]);
    }
}
