use log::trace;

use stockpile_shared::{
    EventKind, InventoryEvent, ObjectSpawner, OpenContainers, ReferenceMap, SyncPolicy,
    SyncPolicyTable, SyncPush,
};

use crate::observer::{ObserverKey, PushTargets};

/// A replication push and the observers it should reach.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutgoingPush {
    pub targets: PushTargets,
    pub push: SyncPush,
}

/// Authority-side event replicator.
///
/// Turns engine events into filtered pushes: the policy table decides
/// whether a push is built at all and whether it targets every observer or
/// only the owner, and the open-container tracker suppresses duplicate
/// open/close notifications before any bandwidth is spent.
pub struct EventReplicator {
    policy: SyncPolicyTable,
}

impl EventReplicator {
    pub fn new(policy: SyncPolicyTable) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &SyncPolicyTable {
        &self.policy
    }

    /// Replicates one engine event, or decides not to.
    ///
    /// Open/close membership is updated before the policy gate is consulted,
    /// so the tracker stays accurate even for kinds that never replicate.
    /// A dropped object is made network-visible before its push exists, and
    /// even when the Drop policy is silent; the handle inside the push must
    /// resolve on every receiver.
    pub fn replicate<R: ReferenceMap + ObjectSpawner>(
        &self,
        references: &mut R,
        open_containers: &mut OpenContainers,
        owner: ObserverKey,
        event: &InventoryEvent,
    ) -> Option<OutgoingPush> {
        match *event {
            InventoryEvent::Picked { item, amount } => {
                let policy = self.gate(EventKind::Pick)?;
                Some(Self::push(policy, owner, SyncPush::Pick { item, amount }))
            }
            InventoryEvent::Added { item, amount } => {
                let policy = self.gate(EventKind::Add)?;
                Some(Self::push(policy, owner, SyncPush::Add { item, amount }))
            }
            InventoryEvent::Dropped { object } => {
                let Some(reference) = references.spawn_object(&object) else {
                    trace!("dropped object {:?} could not be spawned, not replicating", object);
                    return None;
                };
                let policy = self.gate(EventKind::Drop)?;
                Some(Self::push(policy, owner, SyncPush::Drop { object: reference }))
            }
            InventoryEvent::Opened { container } => {
                if !open_containers.mark_open(&container) {
                    trace!("container {:?} already open here, suppressing", container);
                    return None;
                }
                let policy = self.gate(EventKind::Open)?;
                let reference = references.container_ref(&container)?;
                Some(Self::push(policy, owner, SyncPush::Open { container: reference }))
            }
            InventoryEvent::Closed { container } => {
                if !open_containers.mark_closed(&container) {
                    trace!("container {:?} not open here, suppressing", container);
                    return None;
                }
                let policy = self.gate(EventKind::Close)?;
                let reference = references.container_ref(&container)?;
                Some(Self::push(policy, owner, SyncPush::Close { container: reference }))
            }
        }
    }

    fn gate(&self, kind: EventKind) -> Option<SyncPolicy> {
        let policy = self.policy.entry(kind);
        if !policy.replicate {
            trace!("{:?} replication disabled by policy", kind);
            return None;
        }
        Some(policy)
    }

    fn push(policy: SyncPolicy, owner: ObserverKey, push: SyncPush) -> OutgoingPush {
        let targets = if policy.owner_only {
            PushTargets::OwnerOnly(owner)
        } else {
            PushTargets::AllObservers
        };
        OutgoingPush { targets, push }
    }
}
