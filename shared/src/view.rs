use std::collections::HashSet;

use crate::keys::ContainerKey;

/// Tracks which containers are currently open from this host's point of
/// view.
///
/// Advisory local state only: it exists to deduplicate open/close
/// notifications, never to gate whether an operation is allowed. A container
/// appears at most once; entries are removed only by an explicit close,
/// never by time.
#[derive(Debug, Default)]
pub struct OpenContainers {
    inner: HashSet<ContainerKey>,
}

impl OpenContainers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a container open. Returns true if it was newly added.
    pub fn mark_open(&mut self, container: &ContainerKey) -> bool {
        self.inner.insert(*container)
    }

    /// Marks a container closed. Returns true if it was present.
    pub fn mark_closed(&mut self, container: &ContainerKey) -> bool {
        self.inner.remove(container)
    }

    pub fn is_open(&self, container: &ContainerKey) -> bool {
        self.inner.contains(container)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Copies the current membership out, so callers can close entries one
    /// by one without mutating the set they are iterating.
    pub fn snapshot(&self) -> Vec<ContainerKey> {
        self.inner.iter().copied().collect()
    }
}
