//! Miller-column browser for a remote hierarchical file tree.
//!
//! Presents the tree as a horizontally scrolling stack of columns: selecting
//! a directory opens a new column to its right, selecting a file opens a
//! detail column. This crate owns the column-stack state machine and the
//! path-matching logic; fetching, markup rendering, and the DOM are
//! collaborator seams ([`Source`], [`Renderer`], [`Surface`]) with default
//! implementations under [`utils`].
//!
//! # Concurrency
//!
//! Single-threaded and event-driven. Fetches are the only suspension points;
//! every state mutation happens synchronously when a fetch resolves. When
//! navigations overlap, the last fetch to resolve commits last and wins;
//! superseded fetches are not cancelled.
//!
//! # Wiring
//!
//! ```ignore
//! let mut navigator = Navigator::new(
//!     JsonSource::new(""),
//!     HtmlRenderer,
//!     DomSurface::attach().expect("viewer containers missing"),
//! );
//! navigator.start().await?;
//! // row clicks        -> navigator.navigate_directory / navigate_file
//! // breadcrumb clicks -> navigator.navigate_breadcrumb
//! ```

pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::core::breadcrumb;
pub use crate::core::error::{FetchError, NavigateError};
pub use crate::core::highlight::{self, HighlightMap};
pub use crate::core::layout::{self, Layout};
pub use crate::core::navigator::{Navigator, Renderer, Source, Surface};
pub use crate::core::path::NodeKind;
pub use crate::core::stack::ColumnStack;
pub use crate::models::{Column, ColumnContent, Crumb, DirectoryListing, Entry, FileRecord};
pub use crate::utils::markup::HtmlRenderer;
#[cfg(target_arch = "wasm32")]
pub use crate::utils::{dom::DomSurface, fetch::JsonSource};
