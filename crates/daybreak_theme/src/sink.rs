//! Root styling marker
//!
//! Global stylesheets switch palettes by looking for a marker class on the
//! document root. Widgets never touch that root directly; they are handed a
//! [`ThemeSink`] and report every scheme change to it.

/// Class name global styles key dark mode off
pub const DARK_MARKER: &str = "dark";

/// Receives scheme changes from a theme toggle.
///
/// `apply` must be idempotent: applying the scheme that is already active
/// is a no-op.
pub trait ThemeSink {
    fn apply(&mut self, is_dark: bool);
}

impl<T: ThemeSink + ?Sized> ThemeSink for &mut T {
    fn apply(&mut self, is_dark: bool) {
        (**self).apply(is_dark);
    }
}

impl<T: ThemeSink + ?Sized> ThemeSink for Box<T> {
    fn apply(&mut self, is_dark: bool) {
        (**self).apply(is_dark);
    }
}

/// An in-memory document root class list.
///
/// Keeps insertion order like a DOM token list; adding a present class or
/// removing an absent one changes nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootClassList {
    marker: String,
    classes: Vec<String>,
}

impl RootClassList {
    /// Empty class list using the `dark` marker
    pub fn new() -> Self {
        Self::with_marker(DARK_MARKER)
    }

    /// Empty class list using a custom marker class
    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            classes: Vec::new(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Whether the dark marker is currently present
    pub fn has_marker(&self) -> bool {
        self.contains(&self.marker)
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class; returns whether the list changed
    pub fn add(&mut self, class: &str) -> bool {
        if self.contains(class) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    /// Remove a class; returns whether the list changed
    pub fn remove(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Space-separated `class` attribute value
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }
}

impl Default for RootClassList {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeSink for RootClassList {
    fn apply(&mut self, is_dark: bool) {
        let marker = self.marker.clone();
        let changed = if is_dark {
            self.add(&marker)
        } else {
            self.remove(&marker)
        };
        tracing::debug!(is_dark, changed, marker = %marker, "root marker applied");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_adds_and_removes_marker() {
        let mut root = RootClassList::new();
        root.apply(true);
        assert!(root.has_marker());
        root.apply(false);
        assert!(!root.has_marker());
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut root = RootClassList::new();
        root.apply(false);
        assert_eq!(root.class_attr(), "");

        root.apply(true);
        root.apply(true);
        assert_eq!(root.classes().count(), 1);
    }

    #[test]
    fn test_other_classes_survive() {
        let mut root = RootClassList::with_marker("theme-dark");
        root.add("antialiased");
        root.apply(true);
        assert_eq!(root.class_attr(), "antialiased theme-dark");

        root.apply(false);
        assert_eq!(root.class_attr(), "antialiased");
    }

    #[test]
    fn test_sink_through_mutable_reference() {
        fn drive(mut sink: impl ThemeSink) {
            sink.apply(true);
        }

        let mut root = RootClassList::new();
        drive(&mut root);
        assert!(root.has_marker());
    }
}
