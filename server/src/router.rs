use log::trace;

use stockpile_shared::{
    ContainerKey, ContainerRef, InventoryEngine, OpenContainers, ReferenceMap, ResolveError,
    SyncRequest,
};

/// Authority-side request router.
///
/// Resolves the references inside an observer-originated request and
/// forwards the call into the inventory engine. Constructed with its engine
/// instance; slot bounds and amount validity stay the engine's
/// responsibility and are not re-validated here.
///
/// Routing never replies and never surfaces errors: a request whose
/// references no longer resolve is dropped whole, which is the expected
/// outcome of a stale request racing an entity despawn.
pub struct RequestRouter<E: InventoryEngine> {
    engine: E,
}

impl<E: InventoryEngine> RequestRouter<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// The engine's default container, if it has one.
    pub fn default_container(&self) -> Option<ContainerKey> {
        self.engine.default_container()
    }

    /// Routes one request.
    ///
    /// `open_containers` is the requesting entity's current open set, used
    /// only by [`SyncRequest::CloseAllContainers`].
    pub fn route<R: ReferenceMap>(
        &mut self,
        references: &R,
        open_containers: &OpenContainers,
        request: SyncRequest,
    ) {
        if let Err(error) = self.try_route(references, open_containers, request) {
            trace!("request {:?} dropped: {}", request, error);
        }
    }

    fn try_route<R: ReferenceMap>(
        &mut self,
        references: &R,
        open_containers: &OpenContainers,
        request: SyncRequest,
    ) -> Result<(), ResolveError> {
        match request {
            SyncRequest::DropFromContainer {
                container,
                slot_index,
                amount,
            } => {
                let container = resolve_container(references, &container)?;
                self.engine.drop_from_container(&container, slot_index, amount);
            }
            SyncRequest::SwapBetweenContainers {
                from,
                slot_index,
                amount,
                to,
            } => {
                // both references must resolve before the engine is touched,
                // so an unresolvable destination cannot leave a partial swap
                let from = resolve_container(references, &from)?;
                let to = resolve_container(references, &to)?;
                self.engine
                    .swap_between_containers(&from, slot_index, amount, &to);
            }
            SyncRequest::OpenContainer { container } => {
                let container = resolve_container(references, &container)?;
                self.engine.open(&container);
            }
            SyncRequest::OpenDefaultContainer => {
                self.engine.open_default();
            }
            SyncRequest::CloseContainer { container } => {
                let container = resolve_container(references, &container)?;
                self.engine.close(&container);
            }
            SyncRequest::CloseAllContainers => {
                // each close removes an entry, so iterate a snapshot
                for container in open_containers.snapshot() {
                    self.engine.close(&container);
                }
            }
        }

        Ok(())
    }
}

fn resolve_container<R: ReferenceMap>(
    references: &R,
    reference: &ContainerRef,
) -> Result<ContainerKey, ResolveError> {
    references
        .container_key(reference)
        .ok_or(ResolveError::UnresolvedContainer {
            reference: *reference,
        })
}
