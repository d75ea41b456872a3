use serde::{Deserialize, Serialize};

/// A book as stored and cached.
///
/// The `id` is assigned by the store on insert and is always positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub year: i32,
}

impl Book {
    /// Builds a stored book from its assigned id and the caller-supplied fields.
    pub fn from_new(id: u64, new_book: NewBook) -> Self {
        Self {
            id,
            title: new_book.title,
            author: new_book.author,
            year: new_book.year,
        }
    }
}

/// Caller-supplied book fields used by create and update.
///
/// Missing JSON fields deserialize to their empty value so that validation,
/// not the decoder, reports which field is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub year: i32,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_new_keeps_fields() {
        let book = Book::from_new(7, NewBook::new("Dune", "Frank Herbert", 1965));

        assert_eq!(book.id, 7);
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.year, 1965);
    }

    #[test]
    fn test_book_json_shape() {
        let book = Book::from_new(1, NewBook::new("Emma", "Jane Austen", 1815));
        let json = serde_json::to_value(&book).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "title": "Emma",
                "author": "Jane Austen",
                "year": 1815
            })
        );
    }

    #[test]
    fn test_new_book_missing_fields_default_to_empty() {
        let new_book: NewBook = serde_json::from_str(r#"{"title": "Only a title"}"#).unwrap();

        assert_eq!(new_book.title, "Only a title");
        assert!(new_book.author.is_empty());
        assert_eq!(new_book.year, 0);
    }
}
