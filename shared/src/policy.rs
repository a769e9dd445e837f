/// The five engine event kinds this layer knows how to replicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Pick,
    Add,
    Drop,
    Open,
    Close,
}

/// Replication policy for a single event kind.
///
/// `replicate` decides whether a push is built at all; `owner_only` narrows
/// the target set to the owning observer instead of every observer of the
/// entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyncPolicy {
    pub replicate: bool,
    pub owner_only: bool,
}

impl SyncPolicy {
    /// Replicate to every observer of the entity.
    pub fn all_observers() -> Self {
        Self {
            replicate: true,
            owner_only: false,
        }
    }

    /// Replicate to the owning observer only.
    pub fn owner_only() -> Self {
        Self {
            replicate: true,
            owner_only: true,
        }
    }

    /// Never replicate this event kind.
    pub fn disabled() -> Self {
        Self {
            replicate: false,
            owner_only: false,
        }
    }
}

impl Default for SyncPolicy {
    fn default() -> Self {
        Self::all_observers()
    }
}

/// One [`SyncPolicy`] per event kind.
///
/// Configured before the entity goes active; this layer never mutates it
/// afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncPolicyTable {
    pick: SyncPolicy,
    add: SyncPolicy,
    drop: SyncPolicy,
    open: SyncPolicy,
    close: SyncPolicy,
}

impl SyncPolicyTable {
    pub fn new() -> Self {
        Self {
            pick: SyncPolicy::default(),
            add: SyncPolicy::default(),
            drop: SyncPolicy::default(),
            open: SyncPolicy::default(),
            close: SyncPolicy::default(),
        }
    }

    pub fn with(mut self, kind: EventKind, policy: SyncPolicy) -> Self {
        match kind {
            EventKind::Pick => self.pick = policy,
            EventKind::Add => self.add = policy,
            EventKind::Drop => self.drop = policy,
            EventKind::Open => self.open = policy,
            EventKind::Close => self.close = policy,
        }
        self
    }

    pub fn entry(&self, kind: EventKind) -> SyncPolicy {
        match kind {
            EventKind::Pick => self.pick,
            EventKind::Add => self.add,
            EventKind::Drop => self.drop,
            EventKind::Open => self.open,
            EventKind::Close => self.close,
        }
    }
}

impl Default for SyncPolicyTable {
    fn default() -> Self {
        Self::new()
    }
}
