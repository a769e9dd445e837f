use crate::{
    reference::{ContainerRef, ObjectRef},
    types::ItemId,
};

/// An observer-originated mutation request.
///
/// Carried to the authority by the transport; the references inside are
/// resolved there and the call is forwarded into the inventory engine.
/// Requests have no reply: outcomes are observed through subsequent pushes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncRequest {
    DropFromContainer {
        container: ContainerRef,
        slot_index: usize,
        amount: u16,
    },
    SwapBetweenContainers {
        from: ContainerRef,
        slot_index: usize,
        amount: u16,
        to: ContainerRef,
    },
    OpenContainer {
        container: ContainerRef,
    },
    OpenDefaultContainer,
    CloseContainer {
        container: ContainerRef,
    },
    CloseAllContainers,
}

/// An authority-originated replication push, describing a state change that
/// already happened.
///
/// Carries the minimal payload needed to reconstruct the event on a
/// receiver: item id and amount for picks and adds, a wire handle for
/// drops, opens and closes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncPush {
    Pick { item: ItemId, amount: u16 },
    Add { item: ItemId, amount: u16 },
    Drop { object: ObjectRef },
    Open { container: ContainerRef },
    Close { container: ContainerRef },
}
