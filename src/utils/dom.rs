//! DOM surface for the column stack.
//!
//! [`DomSurface`] implements the core's `Surface` seam over three container
//! elements: the column stack, the breadcrumb trail, and the scrollable
//! viewport wrapping the stack. Column nodes use their path as element id,
//! so removal works by id lookup regardless of position.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::{ACTIVE_CLASS, dom_ids};
use crate::core::highlight::HighlightMap;
use crate::core::layout::Layout;
use crate::core::navigator::Surface;

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Browser rendering surface.
pub struct DomSurface {
    columns: Element,
    breadcrumb: Element,
    viewport: Element,
}

impl DomSurface {
    /// Attach to the default container ids (`#directories`, `#breadcrumb`,
    /// `#directories_wrapper`). Returns `None` if any is missing.
    pub fn attach() -> Option<Self> {
        Self::attach_to(dom_ids::COLUMNS, dom_ids::BREADCRUMB, dom_ids::VIEWPORT)
    }

    /// Attach to custom container element ids.
    pub fn attach_to(columns_id: &str, breadcrumb_id: &str, viewport_id: &str) -> Option<Self> {
        let document = document()?;
        Some(Self {
            columns: document.get_element_by_id(columns_id)?,
            breadcrumb: document.get_element_by_id(breadcrumb_id)?,
            viewport: document.get_element_by_id(viewport_id)?,
        })
    }

    fn column_elements(&self) -> Vec<Element> {
        let children = self.columns.children();
        (0..children.length()).filter_map(|i| children.item(i)).collect()
    }
}

impl Surface for DomSurface {
    fn append_column(&mut self, _id: &str, markup: &str) {
        if self.columns.insert_adjacent_html("beforeend", markup).is_err() {
            web_sys::console::warn_1(&"webtree: failed to insert column markup".into());
        }
    }

    fn remove_column(&mut self, id: &str) {
        if let Some(document) = document()
            && let Some(element) = document.get_element_by_id(id)
        {
            element.remove();
        }
    }

    fn set_breadcrumb(&mut self, markup: &str) {
        self.breadcrumb.set_inner_html(markup);
    }

    fn apply_highlight(&mut self, rows: &HighlightMap) {
        for column in self.column_elements() {
            let Some(active) = rows.get(&column.id()) else {
                continue;
            };
            let Ok(row_nodes) = column.query_selector_all("tbody tr") else {
                continue;
            };
            for i in 0..row_nodes.length() {
                let Some(row) = row_nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok())
                else {
                    continue;
                };
                let row_path = row
                    .query_selector("a")
                    .ok()
                    .flatten()
                    .and_then(|a| a.get_attribute("data-path"));
                let is_active = row_path.is_some_and(|p| active.contains(&p));
                let class_list = row.class_list();
                let _ = if is_active {
                    class_list.add_1(ACTIVE_CLASS)
                } else {
                    class_list.remove_1(ACTIVE_CLASS)
                };
            }
        }
    }

    fn natural_heights(&self) -> Vec<u32> {
        self.column_elements()
            .iter()
            .filter_map(|el| el.dyn_ref::<HtmlElement>())
            .map(|el| el.offset_height().max(0) as u32)
            .collect()
    }

    fn apply_layout(&mut self, layout: Layout) {
        let height = format!("{}px", layout.height);
        for element in self.column_elements() {
            if let Some(el) = element.dyn_ref::<HtmlElement>() {
                let _ = el.style().set_property("height", &height);
            }
        }
        if let Some(el) = self.columns.dyn_ref::<HtmlElement>() {
            let _ = el.style().set_property("height", &height);
            let _ = el
                .style()
                .set_property("width", &format!("{}px", layout.width));
        }
    }

    fn scroll_to_end(&mut self) {
        self.viewport.set_scroll_left(self.viewport.scroll_width());
    }
}
