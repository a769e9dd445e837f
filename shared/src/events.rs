use std::mem;

use log::trace;

use crate::{
    keys::{ContainerKey, ObjectKey},
    types::ItemId,
};

/// A local inventory event.
///
/// Fired by the engine on the authority when a mutation succeeds, and
/// re-fired by the apply layer on observers when the matching push arrives,
/// so reacting code behaves identically on both sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InventoryEvent {
    Picked { item: ItemId, amount: u16 },
    Added { item: ItemId, amount: u16 },
    Dropped { object: ObjectKey },
    Opened { container: ContainerKey },
    Closed { container: ContainerKey },
}

/// Subscription registry and drainable queue for [`InventoryEvent`]s.
///
/// Owned by whoever fires the events: the engine on the authority, the
/// apply layer on observers. Subscribers are invoked synchronously on the
/// firing context; queued events stay available until drained with
/// [`take`](Self::take).
#[derive(Default)]
pub struct InventoryEvents {
    queued: Vec<InventoryEvent>,
    subscribers: Vec<Box<dyn FnMut(&InventoryEvent)>>,
}

impl InventoryEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback invoked synchronously for every event fired
    /// from now on.
    pub fn subscribe<F: FnMut(&InventoryEvent) + 'static>(&mut self, subscriber: F) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn push(&mut self, event: InventoryEvent) {
        trace!("inventory event fired: {:?}", event);
        for subscriber in &mut self.subscribers {
            subscriber(&event);
        }
        self.queued.push(event);
    }

    pub fn push_picked(&mut self, item: ItemId, amount: u16) {
        self.push(InventoryEvent::Picked { item, amount });
    }

    pub fn push_added(&mut self, item: ItemId, amount: u16) {
        self.push(InventoryEvent::Added { item, amount });
    }

    pub fn push_dropped(&mut self, object: ObjectKey) {
        self.push(InventoryEvent::Dropped { object });
    }

    pub fn push_opened(&mut self, container: ContainerKey) {
        self.push(InventoryEvent::Opened { container });
    }

    pub fn push_closed(&mut self, container: ContainerKey) {
        self.push(InventoryEvent::Closed { container });
    }

    pub fn is_empty(&self) -> bool {
        self.queued.is_empty()
    }

    /// Drains every event queued since the last call, in firing order.
    pub fn take(&mut self) -> Vec<InventoryEvent> {
        mem::take(&mut self.queued)
    }
}
