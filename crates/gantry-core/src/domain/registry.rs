//! Ordered accumulator of workspace member paths.

/// Append-only list of component paths, in registration order.
///
/// Duplicates are kept: registering the same path twice is a caller bug,
/// but the registry mirrors exactly what it was told so the manifest shows
/// it too.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ComponentRegistry {
    paths: Vec<String>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, relative_path: impl Into<String>) {
        self.paths.push(relative_path.into());
    }

    /// Consume the registry, yielding paths in registration order.
    pub fn drain(self) -> Vec<String> {
        self.paths
    }
}
