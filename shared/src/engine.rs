use crate::{events::InventoryEvents, keys::ContainerKey, types::ItemId};

/// The seam to the trusted inventory engine.
///
/// The engine owns all container and item state and performs the actual
/// stack math, capacity checks and slot validation. This layer forwards
/// resolved requests into it and replicates the events it fires; it never
/// re-validates slot bounds or amounts.
///
/// Mutating operations report their outcome only through the engine's
/// [`InventoryEvents`] registry, fired synchronously when the mutation
/// succeeds.
pub trait InventoryEngine {
    /// Drops `amount` items from the given slot of a container into the
    /// world.
    fn drop_from_container(&mut self, container: &ContainerKey, slot_index: usize, amount: u16);

    /// Moves `amount` items from a slot of one container into another.
    fn swap_between_containers(
        &mut self,
        from: &ContainerKey,
        slot_index: usize,
        amount: u16,
        to: &ContainerKey,
    );

    fn open(&mut self, container: &ContainerKey);

    /// Opens the caller's intrinsic default container.
    fn open_default(&mut self);

    fn close(&mut self, container: &ContainerKey);

    /// The container opened by [`open_default`](Self::open_default), if the
    /// engine has one.
    fn default_container(&self) -> Option<ContainerKey>;

    /// The event registry this engine fires into.
    fn events(&mut self) -> &mut InventoryEvents;
}

/// Lookup into the shared item definition database.
///
/// Both sides hold the same database, so an id that exists on the authority
/// exists on every observer. This layer never dereferences definitions; an
/// existence check is all it needs before mirroring an add.
pub trait ItemDatabase {
    fn contains(&self, item: &ItemId) -> bool;
}
