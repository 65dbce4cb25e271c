//! Default collaborator implementations and display helpers.
//!
//! Provides:
//! - [`HtmlRenderer`] - the default markup renderer (any target)
//! - [`JsonSource`] - Fetch-API transport for the JSON endpoint (wasm only)
//! - [`DomSurface`] - browser rendering surface (wasm only)

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod fetch;
pub mod markup;

#[cfg(target_arch = "wasm32")]
pub use dom::DomSurface;
#[cfg(target_arch = "wasm32")]
pub use fetch::JsonSource;
pub use markup::{HtmlRenderer, format_size};
