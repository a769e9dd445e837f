use thiserror::Error;

use crate::{
    reference::{ContainerRef, ObjectRef},
    types::ItemId,
};

/// Errors raised while resolving the opaque handles inside a request or
/// push.
///
/// None of these escape the public surface: an unresolvable reference is an
/// expected race in a live session (the entity was destroyed, or has not
/// replicated here yet), so receive paths log the error and drop the single
/// operation instead of propagating it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Container handle does not map to a live container on this host
    #[error("container reference {reference:?} does not resolve on this host")]
    UnresolvedContainer { reference: ContainerRef },

    /// Object handle does not map to a live world entity on this host
    #[error("object reference {reference:?} does not resolve on this host")]
    UnresolvedObject { reference: ObjectRef },

    /// Item id missing from the shared item database
    #[error("item {item:?} is not present in the item database")]
    UnknownItem { item: ItemId },
}
