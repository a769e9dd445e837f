//! # Stockpile Server
//! The authority side of inventory synchronization: routes observer
//! mutation requests into the inventory engine and replicates the resulting
//! events to in-scope observers, filtered by per-event-kind policy.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use stockpile_shared::{
        ContainerKey, ContainerRef, EventKind, InventoryEngine, InventoryEvent, InventoryEvents,
        ObjectKey, ObjectRef, ObjectSpawner, OpenContainers, ReferenceMap, SyncPolicy,
        SyncPolicyTable, SyncPush, SyncRequest,
    };
}

mod endpoint;
mod observer;
mod replicator;
mod router;

pub use endpoint::ServerEndpoint;
pub use observer::{ObserverKey, PushTargets};
pub use replicator::{EventReplicator, OutgoingPush};
pub use router::RequestRouter;
