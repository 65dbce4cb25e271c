//! Breadcrumb trail derivation.

use crate::config::{ROOT_LABEL, ROOT_PATH};
use crate::core::path;
use crate::models::Crumb;

/// Derive the breadcrumb trail for `active_path`.
///
/// Always starts with the synthetic root crumb. Each intermediate segment
/// becomes a clickable crumb whose target is the cumulative prefix up to and
/// including that segment; the final segment becomes the terminal crumb.
/// The root path yields the root crumb alone.
pub fn build(active_path: &str) -> Vec<Crumb> {
    let mut crumbs = vec![Crumb::link(ROOT_LABEL, ROOT_PATH)];

    let segs = path::segments(active_path);
    let Some((last, intermediate)) = segs.split_last() else {
        return crumbs;
    };

    let mut prefix = String::new();
    for seg in intermediate {
        prefix.push('/');
        prefix.push_str(seg);
        crumbs.push(Crumb::link(*seg, prefix.clone()));
    }
    crumbs.push(Crumb::terminal(*last));
    crumbs
}
