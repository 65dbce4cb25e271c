//! Core state machine and path logic for the column browser.
//!
//! This module provides:
//! - [`path`] - path segmentation and the string-prefix ancestry test
//! - [`ColumnStack`] - which columns are open, pruned on divergence
//! - [`breadcrumb`] and [`highlight`] - trails derived from the active path
//! - [`layout`] - uniform column height and total stack width
//! - [`Navigator`] - the orchestrator driving all of the above

pub mod breadcrumb;
pub mod error;
pub mod highlight;
pub mod layout;
pub mod navigator;
pub mod path;
pub mod stack;

pub use navigator::{Navigator, Renderer, Source, Surface};
pub use stack::ColumnStack;
