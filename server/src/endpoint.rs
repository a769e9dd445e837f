use std::mem;

use stockpile_shared::{
    ContainerKey, InventoryEngine, ObjectSpawner, OpenContainers, ReferenceMap, SyncPolicyTable,
    SyncRequest,
};

use crate::{
    observer::ObserverKey,
    replicator::{EventReplicator, OutgoingPush},
    router::RequestRouter,
};

/// Authority-side synchronization endpoint for one networked inventory
/// entity.
///
/// Composes a [`RequestRouter`] and an [`EventReplicator`] around a single
/// engine instance, plus the entity's open-container tracker and owner key.
/// Runs only on the authority; the transport boundary rejects requests
/// arriving anywhere else.
///
/// Everything here executes on the authority's single, logically-serialized
/// processing context: requests are handled one at a time, events replicate
/// synchronously in firing order, and no locking is needed.
pub struct ServerEndpoint<E: InventoryEngine> {
    router: RequestRouter<E>,
    replicator: EventReplicator,
    open_containers: OpenContainers,
    owner: ObserverKey,
    outgoing: Vec<OutgoingPush>,
}

impl<E: InventoryEngine> ServerEndpoint<E> {
    pub fn new(engine: E, policy: SyncPolicyTable, owner: ObserverKey) -> Self {
        Self {
            router: RequestRouter::new(engine),
            replicator: EventReplicator::new(policy),
            open_containers: OpenContainers::new(),
            owner,
            outgoing: Vec::new(),
        }
    }

    pub fn owner(&self) -> ObserverKey {
        self.owner
    }

    pub fn engine(&self) -> &E {
        self.router.engine()
    }

    /// Mutable engine access, for authority-initiated mutations. Call
    /// [`sync_local_events`](Self::sync_local_events) afterwards so the
    /// resulting events replicate like any other.
    pub fn engine_mut(&mut self) -> &mut E {
        self.router.engine_mut()
    }

    pub fn default_container(&self) -> Option<ContainerKey> {
        self.router.default_container()
    }

    pub fn open_containers(&self) -> &OpenContainers {
        &self.open_containers
    }

    /// Handles one observer-originated request, then replicates whatever
    /// events the engine fired while handling it.
    pub fn receive_request<R: ReferenceMap + ObjectSpawner>(
        &mut self,
        references: &mut R,
        request: SyncRequest,
    ) {
        self.router.route(references, &self.open_containers, request);
        self.sync_local_events(references);
    }

    /// Replicates events the engine fired outside of request handling.
    pub fn sync_local_events<R: ReferenceMap + ObjectSpawner>(&mut self, references: &mut R) {
        let events = self.router.engine_mut().events().take();
        for event in events {
            if let Some(push) = self.replicator.replicate(
                references,
                &mut self.open_containers,
                self.owner,
                &event,
            ) {
                self.outgoing.push(push);
            }
        }
    }

    pub fn has_outgoing(&self) -> bool {
        !self.outgoing.is_empty()
    }

    /// Drains the pushes queued since the last call, in decision order.
    pub fn take_outgoing(&mut self) -> Vec<OutgoingPush> {
        mem::take(&mut self.outgoing)
    }
}
