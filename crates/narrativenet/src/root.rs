//! The presentation root: the document-level node carrying theme markers.
//!
//! Consumers key their styling on which markers the root carries, the way a
//! stylesheet keys `.dark` selectors on `<html class="dark">`.

use std::collections::BTreeSet;

use crate::theme::ThemePreference;

/// Error returned when there is no root to apply markers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("presentation root is unavailable")]
pub struct RootUnavailable;

/// A node that receives boolean-style class markers.
pub trait PresentationRoot {
    /// Adds `marker`. Adding a marker that is already present is a no-op.
    fn add_marker(&mut self, marker: &str) -> Result<(), RootUnavailable>;

    /// Removes `marker`. Removing an absent marker is a no-op.
    fn remove_marker(&mut self, marker: &str) -> Result<(), RootUnavailable>;

    /// Returns whether `marker` is currently applied.
    fn has_marker(&self, marker: &str) -> bool;

    /// Returns the theme markers currently applied, light first.
    fn theme_markers(&self) -> Vec<&'static str> {
        ThemePreference::ALL
            .into_iter()
            .map(ThemePreference::marker)
            .filter(|marker| self.has_marker(marker))
            .collect()
    }
}

impl<R: PresentationRoot + ?Sized> PresentationRoot for Box<R> {
    fn add_marker(&mut self, marker: &str) -> Result<(), RootUnavailable> {
        (**self).add_marker(marker)
    }

    fn remove_marker(&mut self, marker: &str) -> Result<(), RootUnavailable> {
        (**self).remove_marker(marker)
    }

    fn has_marker(&self, marker: &str) -> bool {
        (**self).has_marker(marker)
    }
}

/// An attached document root holding a class list.
///
/// # Example
///
/// ```rust
/// use narrativenet::{DocumentRoot, PresentationRoot};
///
/// let mut root = DocumentRoot::new();
/// root.add_marker("dark").unwrap();
/// assert_eq!(root.class_attr(), "dark");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRoot {
    classes: BTreeSet<String>,
}

impl DocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates the applied markers in sorted order.
    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Returns the markers as a space-separated `class` attribute value.
    pub fn class_attr(&self) -> String {
        self.markers().collect::<Vec<_>>().join(" ")
    }
}

impl PresentationRoot for DocumentRoot {
    fn add_marker(&mut self, marker: &str) -> Result<(), RootUnavailable> {
        self.classes.insert(marker.to_string());
        Ok(())
    }

    fn remove_marker(&mut self, marker: &str) -> Result<(), RootUnavailable> {
        self.classes.remove(marker);
        Ok(())
    }

    fn has_marker(&self, marker: &str) -> bool {
        self.classes.contains(marker)
    }
}

/// The root of a non-interactive environment. Every application fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetachedRoot;

impl PresentationRoot for DetachedRoot {
    fn add_marker(&mut self, _marker: &str) -> Result<(), RootUnavailable> {
        Err(RootUnavailable)
    }

    fn remove_marker(&mut self, _marker: &str) -> Result<(), RootUnavailable> {
        Err(RootUnavailable)
    }

    fn has_marker(&self, _marker: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_root_add_remove() {
        let mut root = DocumentRoot::new();
        root.add_marker("light").unwrap();
        root.add_marker("light").unwrap();
        assert_eq!(root.markers().count(), 1);

        root.remove_marker("light").unwrap();
        root.remove_marker("light").unwrap();
        assert!(!root.has_marker("light"));
        assert_eq!(root.class_attr(), "");
    }

    #[test]
    fn test_class_attr_is_sorted() {
        let mut root = DocumentRoot::new();
        root.add_marker("scroll-smooth").unwrap();
        root.add_marker("dark").unwrap();
        assert_eq!(root.class_attr(), "dark scroll-smooth");
    }

    #[test]
    fn test_theme_markers_ignores_other_classes() {
        let mut root = DocumentRoot::new();
        root.add_marker("scroll-smooth").unwrap();
        root.add_marker("dark").unwrap();
        assert_eq!(root.theme_markers(), vec!["dark"]);
    }

    #[test]
    fn test_detached_root_is_unavailable() {
        let mut root = DetachedRoot;
        assert_eq!(root.add_marker("dark"), Err(RootUnavailable));
        assert_eq!(root.remove_marker("dark"), Err(RootUnavailable));
        assert!(!root.has_marker("dark"));
    }
}
