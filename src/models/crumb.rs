//! Breadcrumb trail element.

/// One element of the breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    /// Display label.
    pub label: String,
    /// Navigation target; `None` marks the terminal, non-clickable crumb.
    pub target: Option<String>,
}

impl Crumb {
    /// Clickable crumb navigating to `target`.
    pub fn link(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: Some(target.into()),
        }
    }

    /// Terminal crumb for the current node; rendered distinctly, not clickable.
    pub fn terminal(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.target.is_none()
    }
}
