//! The navigation orchestrator.
//!
//! [`Navigator`] owns the only mutable viewer state (the column stack and
//! the active path) and drives the collaborators on every navigation:
//! fetch, reconcile, open, highlight, breadcrumb, layout, scroll.
//!
//! Fetches are the only suspension points. The stack is untouched until a
//! fetch resolves, and all mutation happens in the synchronous commit step,
//! so overlapping navigations resolve to a last-writer-wins outcome without
//! locks: whichever fetch completes last commits last.

use crate::config::ROOT_PATH;
use crate::core::breadcrumb;
use crate::core::error::{FetchError, NavigateError};
use crate::core::highlight::{self, HighlightMap};
use crate::core::layout::{self, Layout};
use crate::core::stack::ColumnStack;
use crate::models::{Column, Crumb, DirectoryListing, FileRecord};

/// Asynchronous transport resolving paths to listing or file records.
///
/// Futures returned here are not required to be `Send`; the browser
/// executor this crate targets is single-threaded.
#[allow(async_fn_in_trait)]
pub trait Source {
    /// Fetch the listing of the directory at `path`.
    async fn fetch_directory(&self, path: &str) -> Result<DirectoryListing, FetchError>;

    /// Fetch the detail record of the file at `path`.
    async fn fetch_file(&self, path: &str) -> Result<FileRecord, FetchError>;
}

/// Pure markup producer. The core never inspects the fragments it returns.
pub trait Renderer {
    /// Render one column to a markup fragment.
    fn render_column(&self, column: &Column) -> String;

    /// Render the breadcrumb trail to a markup fragment.
    fn render_breadcrumb(&self, crumbs: &[Crumb]) -> String;
}

/// Rendering surface the navigator pushes updates to.
///
/// Implementations own node insertion/removal, height measurement, and
/// scroll control; the default browser implementation lives in
/// `utils::dom`.
pub trait Surface {
    /// Insert a rendered column at the end of the stack.
    fn append_column(&mut self, id: &str, markup: &str);

    /// Remove the column node for `id`.
    fn remove_column(&mut self, id: &str);

    /// Replace the breadcrumb fragment.
    fn set_breadcrumb(&mut self, markup: &str);

    /// Mark the given rows active, clearing any others.
    fn apply_highlight(&mut self, rows: &HighlightMap);

    /// Natural rendered heights of the open columns, left to right.
    fn natural_heights(&self) -> Vec<u32>;

    /// Resize columns and container to the computed layout.
    fn apply_layout(&mut self, layout: Layout);

    /// Scroll the viewport to the far (rightmost) end.
    fn scroll_to_end(&mut self);
}

/// Orchestrator for the column browser.
pub struct Navigator<S, R, V> {
    source: S,
    renderer: R,
    surface: V,
    stack: ColumnStack,
    active_path: String,
}

impl<S: Source, R: Renderer, V: Surface> Navigator<S, R, V> {
    /// New navigator with an empty stack and the root as active path.
    pub fn new(source: S, renderer: R, surface: V) -> Self {
        Self {
            source,
            renderer,
            surface,
            stack: ColumnStack::new(),
            active_path: ROOT_PATH.to_string(),
        }
    }

    /// Issue the startup navigation that opens the root column.
    pub async fn start(&mut self) -> Result<(), NavigateError> {
        self.navigate_directory(ROOT_PATH).await
    }

    /// Navigate to the directory at `path` (row click on a directory entry).
    pub async fn navigate_directory(&mut self, path: &str) -> Result<(), NavigateError> {
        let listing = self
            .source
            .fetch_directory(path)
            .await
            .map_err(|source| NavigateError::fetch(path, source))?;
        self.apply_directory(listing)
    }

    /// Navigate to the file at `path` (row click on a file entry).
    pub async fn navigate_file(&mut self, path: &str) -> Result<(), NavigateError> {
        let record = self
            .source
            .fetch_file(path)
            .await
            .map_err(|source| NavigateError::fetch(path, source))?;
        self.apply_file(record)
    }

    /// Navigate via a breadcrumb click. Breadcrumb targets are directories.
    pub async fn navigate_breadcrumb(&mut self, path: &str) -> Result<(), NavigateError> {
        self.navigate_directory(path).await
    }

    /// Commit a resolved directory listing.
    ///
    /// This is the synchronous half of `navigate_directory`, public so an
    /// embedder juggling overlapping fetches on a single-threaded executor
    /// can commit them in resolution order.
    pub fn apply_directory(&mut self, listing: DirectoryListing) -> Result<(), NavigateError> {
        listing.validate().map_err(|reason| NavigateError::MalformedListing {
            path: listing.path.clone(),
            source: FetchError::Malformed(reason),
        })?;
        self.commit(Column::directory(listing.path.clone(), listing.items));
        Ok(())
    }

    /// Commit a resolved file record. Synchronous half of `navigate_file`.
    pub fn apply_file(&mut self, record: FileRecord) -> Result<(), NavigateError> {
        if !record.path.starts_with('/') {
            return Err(NavigateError::MalformedListing {
                path: record.path.clone(),
                source: FetchError::Malformed("file path is not absolute".to_string()),
            });
        }
        self.commit(Column::file(record));
        Ok(())
    }

    /// The state transition: prune, append, then push every derived update
    /// out to the surface.
    fn commit(&mut self, column: Column) {
        let path = column.id().to_owned();

        for removed in self.stack.reconcile(&path) {
            self.surface.remove_column(&removed);
        }

        let markup = self.renderer.render_column(&column);
        if self.stack.open(column) {
            self.surface.append_column(&path, &markup);
        }

        self.active_path = path;

        let crumbs = breadcrumb::build(&self.active_path);
        let trail = self.renderer.render_breadcrumb(&crumbs);
        self.surface.set_breadcrumb(&trail);

        let rows = highlight::active_rows(&self.stack, &self.active_path);
        self.surface.apply_highlight(&rows);

        let heights = self.surface.natural_heights();
        self.surface
            .apply_layout(layout::compute(self.stack.len(), &heights));
        self.surface.scroll_to_end();
    }

    /// The currently active (most recently committed) path.
    pub fn active_path(&self) -> &str {
        &self.active_path
    }

    /// The open column stack.
    pub fn stack(&self) -> &ColumnStack {
        &self.stack
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::models::Entry;

    struct FakeSource {
        dirs: HashMap<String, DirectoryListing>,
    }

    impl Source for FakeSource {
        async fn fetch_directory(&self, path: &str) -> Result<DirectoryListing, FetchError> {
            self.dirs
                .get(path)
                .cloned()
                .ok_or_else(|| FetchError::Network("connection refused".to_string()))
        }

        async fn fetch_file(&self, _path: &str) -> Result<FileRecord, FetchError> {
            Err(FetchError::Http(404))
        }
    }

    struct NullRenderer;

    impl Renderer for NullRenderer {
        fn render_column(&self, _column: &Column) -> String {
            String::new()
        }

        fn render_breadcrumb(&self, _crumbs: &[Crumb]) -> String {
            String::new()
        }
    }

    #[derive(Default)]
    struct NullSurface;

    impl Surface for NullSurface {
        fn append_column(&mut self, _id: &str, _markup: &str) {}
        fn remove_column(&mut self, _id: &str) {}
        fn set_breadcrumb(&mut self, _markup: &str) {}
        fn apply_highlight(&mut self, _rows: &HighlightMap) {}
        fn natural_heights(&self) -> Vec<u32> {
            vec![]
        }
        fn apply_layout(&mut self, _layout: Layout) {}
        fn scroll_to_end(&mut self) {}
    }

    fn navigator_with(
        dirs: &[(&str, &[(&str, &str)])],
    ) -> Navigator<FakeSource, NullRenderer, NullSurface> {
        let dirs = dirs
            .iter()
            .map(|(path, entries)| {
                let listing = DirectoryListing {
                    path: (*path).to_string(),
                    items: entries
                        .iter()
                        .map(|(name, entry_path)| Entry {
                            name: (*name).to_string(),
                            path: (*entry_path).to_string(),
                            size: None,
                        })
                        .collect(),
                };
                ((*path).to_string(), listing)
            })
            .collect();
        Navigator::new(FakeSource { dirs }, NullRenderer, NullSurface)
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_state_untouched() {
        let mut navigator = navigator_with(&[("/", &[("a/", "/a")])]);
        navigator.start().await.expect("root fetch should succeed");

        let before_stack = navigator.stack().clone();
        let err = navigator
            .navigate_directory("/z")
            .await
            .expect_err("missing path should fail");
        assert!(matches!(err, NavigateError::FetchFailed { .. }));
        assert_eq!(err.path(), "/z");
        assert_eq!(navigator.active_path(), "/");
        assert_eq!(navigator.stack(), &before_stack);
    }

    #[tokio::test]
    async fn test_malformed_listing_is_rejected_without_commit() {
        let mut navigator = navigator_with(&[]);
        let err = navigator
            .apply_directory(DirectoryListing {
                path: "relative".to_string(),
                items: vec![],
            })
            .expect_err("relative listing path should be rejected");
        assert!(matches!(err, NavigateError::MalformedListing { .. }));
        assert!(navigator.stack().is_empty());
    }

    #[tokio::test]
    async fn test_file_navigation_opens_rightmost_file_column() {
        let mut navigator = navigator_with(&[("/", &[("a.txt", "/a.txt")])]);
        navigator.start().await.expect("root fetch should succeed");

        navigator
            .apply_file(FileRecord {
                path: "/a.txt".to_string(),
                name: "a.txt".to_string(),
                size: Some(7),
                permissions: None,
                filetype: None,
            })
            .expect("file commit should succeed");

        assert_eq!(navigator.stack().ids(), vec!["/", "/a.txt"]);
        assert_eq!(navigator.active_path(), "/a.txt");
    }

    #[tokio::test]
    async fn test_breadcrumb_navigation_is_directory_navigation() {
        let mut navigator = navigator_with(&[("/", &[("a/", "/a")]), ("/a", &[])]);
        navigator.start().await.expect("root fetch should succeed");
        navigator
            .navigate_directory("/a")
            .await
            .expect("descend should succeed");

        navigator
            .navigate_breadcrumb("/")
            .await
            .expect("breadcrumb to root should succeed");
        assert_eq!(navigator.active_path(), "/");
        assert_eq!(navigator.stack().ids(), vec!["/"]);
    }
}
