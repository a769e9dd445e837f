//! # Stockpile Shared
//! Common functionality shared between stockpile-server & stockpile-client crates.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod engine;
mod error;
mod events;
mod keys;
mod messages;
mod policy;
mod reference;
mod types;
mod view;

pub use engine::{InventoryEngine, ItemDatabase};
pub use error::ResolveError;
pub use events::{InventoryEvent, InventoryEvents};
pub use keys::{ContainerKey, ObjectKey};
pub use messages::{SyncPush, SyncRequest};
pub use policy::{EventKind, SyncPolicy, SyncPolicyTable};
pub use reference::{ContainerRef, ObjectRef, ObjectSpawner, ReferenceMap};
pub use types::{HostType, ItemId};
pub use view::OpenContainers;
