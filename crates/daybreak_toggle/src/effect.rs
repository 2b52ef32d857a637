//! Root styling marker effect

use daybreak_theme::ThemeSink;

/// Keeps a [`ThemeSink`] in step with the toggle flag.
///
/// The sink hears about each change exactly once. On unmount a marker left
/// in dark mode is removed, so a torn-down toggle never leaves the page dark.
#[derive(Debug)]
pub struct RootEffect<S: ThemeSink> {
    sink: S,
    applied: Option<bool>,
}

impl<S: ThemeSink> RootEffect<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            applied: None,
        }
    }

    /// Push `is_dark` to the sink if it differs from what was last applied
    pub fn sync(&mut self, is_dark: bool) {
        if self.applied == Some(is_dark) {
            return;
        }
        self.sink.apply(is_dark);
        self.applied = Some(is_dark);
        tracing::debug!(is_dark, "root effect synced");
    }

    /// Undo the marker on teardown
    pub fn cleanup(&mut self) {
        if self.applied == Some(true) {
            self.sink.apply(false);
            tracing::debug!("root marker removed on unmount");
        }
        self.applied = None;
    }

    /// Whether the sink was last told to show the dark marker
    pub fn marker_applied(&self) -> bool {
        self.applied == Some(true)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
