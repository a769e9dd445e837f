//! # Stockpile Client
//! The observer side of inventory synchronization: applies replication
//! pushes from the authority as mirrored local events and builds the
//! mutation requests sent back to it.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use stockpile_shared::{
        ContainerKey, ContainerRef, HostType, InventoryEvent, InventoryEvents, ItemDatabase,
        ItemId, ObjectKey, ObjectRef, OpenContainers, ReferenceMap, SyncPush, SyncRequest,
    };
}

mod endpoint;

pub use endpoint::ClientEndpoint;
