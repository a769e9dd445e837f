// ObserverKey
//
// Identifies a connected observer (a remote host replicating a read-only
// view of authority state). Issued by the transport layer when the
// connection is accepted.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct ObserverKey(u64);

impl ObserverKey {
    pub fn from_u64(value: u64) -> Self {
        Self(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}

/// The observer target set of one push.
///
/// Derived at push time from the sync policy, never stored. The transport
/// expands [`AllObservers`](Self::AllObservers) into the concrete set of
/// hosts that currently observe the entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushTargets {
    /// Every observer of the entity.
    AllObservers,
    /// Exactly the owning observer.
    OwnerOnly(ObserverKey),
}
