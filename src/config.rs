//! Viewer configuration.
//!
//! Centralizes the constants shared by the core and the browser adapters.

// =============================================================================
// Layout
// =============================================================================

/// Horizontal space one column occupies, in pixels.
pub const COLUMN_UNIT_WIDTH: u32 = 301;

// =============================================================================
// Paths
// =============================================================================

/// Path of the tree root.
pub const ROOT_PATH: &str = "/";

/// Label of the synthetic root breadcrumb.
pub const ROOT_LABEL: &str = "[root]";

// =============================================================================
// Network
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10_000;

/// Query string selecting the JSON representation of a node.
pub const JSON_QUERY: &str = "json=1";

// =============================================================================
// DOM wiring
// =============================================================================

/// CSS class marking a highlighted row.
pub const ACTIVE_CLASS: &str = "active";

/// Element ids the default DOM surface attaches to.
pub mod dom_ids {
    /// Container holding the column stack.
    pub const COLUMNS: &str = "directories";
    /// Breadcrumb trail container.
    pub const BREADCRUMB: &str = "breadcrumb";
    /// Scrollable viewport wrapping the column container.
    pub const VIEWPORT: &str = "directories_wrapper";
}
