//! Active-row computation across the open columns.

use std::collections::HashMap;

use crate::core::path;
use crate::core::stack::ColumnStack;

/// Active entry paths per column id.
///
/// Every open column has a key; file columns map to an empty set. Surfaces
/// should clear the highlight from any row not listed for its column.
pub type HighlightMap = HashMap<String, Vec<String>>;

/// Compute which rows are highlighted for `active_path`.
///
/// An entry is active iff its path is a string-prefix ancestor of the active
/// path (or the active path itself), which lights one continuous trail from
/// the root column to the active leaf. Recomputed in full on every
/// navigation; cost is linear in the number of visible entries.
pub fn active_rows(stack: &ColumnStack, active_path: &str) -> HighlightMap {
    stack
        .iter()
        .map(|column| {
            let active = column
                .entries()
                .iter()
                .filter(|entry| path::is_ancestor_or_self(&entry.path, active_path))
                .map(|entry| entry.path.clone())
                .collect();
            (column.id().to_owned(), active)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Column, Entry, FileRecord};

    fn entry(name: &str, path: &str) -> Entry {
        Entry {
            name: name.to_string(),
            path: path.to_string(),
            size: None,
        }
    }

    #[test]
    fn test_trail_spans_all_columns() {
        let mut stack = ColumnStack::new();
        stack.open(Column::directory(
            "/",
            vec![entry("a/", "/a"), entry("x/", "/x")],
        ));
        stack.open(Column::directory(
            "/a",
            vec![entry("b/", "/a/b"), entry("notes.txt", "/a/notes.txt")],
        ));
        stack.open(Column::directory("/a/b", vec![entry("c", "/a/b/c")]));

        let rows = active_rows(&stack, "/a/b/c");
        assert_eq!(rows["/"], vec!["/a".to_string()]);
        assert_eq!(rows["/a"], vec!["/a/b".to_string()]);
        assert_eq!(rows["/a/b"], vec!["/a/b/c".to_string()]);
    }

    #[test]
    fn test_unrelated_entry_is_never_active() {
        let mut stack = ColumnStack::new();
        stack.open(Column::directory("/", vec![entry("x/", "/x")]));
        let rows = active_rows(&stack, "/a/b/c");
        assert!(rows["/"].is_empty());
    }

    #[test]
    fn test_file_column_has_no_active_rows() {
        let mut stack = ColumnStack::new();
        stack.open(Column::file(FileRecord {
            path: "/a.txt".to_string(),
            name: "a.txt".to_string(),
            size: None,
            permissions: None,
            filetype: None,
        }));
        let rows = active_rows(&stack, "/a.txt");
        assert!(rows["/a.txt"].is_empty());
    }
}
