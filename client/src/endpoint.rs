use std::mem;

use log::trace;

use stockpile_shared::{
    ContainerRef, HostType, InventoryEvent, InventoryEvents, ItemDatabase, OpenContainers,
    ReferenceMap, ResolveError, SyncPush, SyncRequest,
};

/// Observer-side synchronization endpoint for one networked inventory
/// entity.
///
/// Applies replication pushes from the authority by re-firing them as local
/// [`InventoryEvent`]s, so reacting code behaves identically on both sides,
/// and builds the outgoing mutation requests the transport carries back.
pub struct ClientEndpoint {
    host_type: HostType,
    open_containers: OpenContainers,
    events: InventoryEvents,
    outgoing: Vec<SyncRequest>,
}

impl ClientEndpoint {
    pub fn new(host_type: HostType) -> Self {
        Self {
            host_type,
            open_containers: OpenContainers::new(),
            events: InventoryEvents::new(),
            outgoing: Vec::new(),
        }
    }

    /// The mirrored local event registry. Reacting code subscribes or
    /// drains here exactly as it would against the engine's registry on the
    /// authority.
    pub fn events(&mut self) -> &mut InventoryEvents {
        &mut self.events
    }

    pub fn open_containers(&self) -> &OpenContainers {
        &self.open_containers
    }

    // Requests (observer -> authority). None of these reply; outcomes are
    // observed through the pushes that follow.

    pub fn request_drop(&mut self, container: ContainerRef, slot_index: usize, amount: u16) {
        self.outgoing.push(SyncRequest::DropFromContainer {
            container,
            slot_index,
            amount,
        });
    }

    pub fn request_swap(
        &mut self,
        from: ContainerRef,
        slot_index: usize,
        amount: u16,
        to: ContainerRef,
    ) {
        self.outgoing.push(SyncRequest::SwapBetweenContainers {
            from,
            slot_index,
            amount,
            to,
        });
    }

    pub fn request_open(&mut self, container: ContainerRef) {
        self.outgoing.push(SyncRequest::OpenContainer { container });
    }

    pub fn request_open_default(&mut self) {
        self.outgoing.push(SyncRequest::OpenDefaultContainer);
    }

    pub fn request_close(&mut self, container: ContainerRef) {
        self.outgoing.push(SyncRequest::CloseContainer { container });
    }

    pub fn request_close_all(&mut self) {
        self.outgoing.push(SyncRequest::CloseAllContainers);
    }

    pub fn has_requests(&self) -> bool {
        !self.outgoing.is_empty()
    }

    /// Drains the requests queued since the last call, in issue order.
    pub fn take_requests(&mut self) -> Vec<SyncRequest> {
        mem::take(&mut self.outgoing)
    }

    /// Applies one replication push.
    ///
    /// A push arriving on the authority host is a no-op: the authority
    /// already applied the effect directly, pushes describe it for everyone
    /// else. An unresolvable reference aborts silently; the referenced
    /// entity may have despawned in the interim, a normal race.
    ///
    /// Pick pushes are received but deliberately produce no local effect:
    /// the picked item entity may already be destroyed by the time the push
    /// is processed, so there is nothing addressable left to reconstruct.
    pub fn receive<R: ReferenceMap, D: ItemDatabase>(
        &mut self,
        references: &R,
        database: &D,
        push: SyncPush,
    ) {
        if self.host_type.is_authority() {
            return;
        }
        if let Err(error) = self.try_apply(references, database, push) {
            trace!("push {:?} dropped: {}", push, error);
        }
    }

    fn try_apply<R: ReferenceMap, D: ItemDatabase>(
        &mut self,
        references: &R,
        database: &D,
        push: SyncPush,
    ) -> Result<(), ResolveError> {
        match push {
            SyncPush::Pick { item, amount } => {
                trace!("pick push ({:?} x{}) has no client-side effect", item, amount);
            }
            SyncPush::Add { item, amount } => {
                if !database.contains(&item) {
                    return Err(ResolveError::UnknownItem { item });
                }
                self.events.push(InventoryEvent::Added { item, amount });
            }
            SyncPush::Drop { object } => {
                let object = references
                    .object_key(&object)
                    .ok_or(ResolveError::UnresolvedObject { reference: object })?;
                self.events.push(InventoryEvent::Dropped { object });
            }
            SyncPush::Open { container } => {
                let key = references
                    .container_key(&container)
                    .ok_or(ResolveError::UnresolvedContainer { reference: container })?;
                if self.open_containers.mark_open(&key) {
                    self.events.push(InventoryEvent::Opened { container: key });
                } else {
                    trace!("container {:?} already open here, ignoring push", key);
                }
            }
            SyncPush::Close { container } => {
                let key = references
                    .container_key(&container)
                    .ok_or(ResolveError::UnresolvedContainer { reference: container })?;
                if self.open_containers.mark_closed(&key) {
                    self.events.push(InventoryEvent::Closed { container: key });
                } else {
                    trace!("container {:?} not open here, ignoring push", key);
                }
            }
        }

        Ok(())
    }
}
