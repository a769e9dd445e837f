use crate::keys::{ContainerKey, ObjectKey};

// ContainerRef
//
// Opaque, network-transmissible handle to a container. Resolves to a
// ContainerKey on any host that has the container replicated; permanently
// invalid once the container is destroyed or unregistered.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct ContainerRef(u64);

impl ContainerRef {
    pub fn from_u64(value: u64) -> Self {
        Self(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}

// ObjectRef
//
// Same concept for a dropped-item entity in the world.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct ObjectRef(u64);

impl ObjectRef {
    pub fn from_u64(value: u64) -> Self {
        Self(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}

/// Maps opaque wire handles to live local identities, and back.
///
/// Every lookup is fallible: the underlying entity may have been destroyed
/// or may not have replicated to this host yet. A `None` here is a normal
/// outcome of a live session, not an error.
pub trait ReferenceMap {
    fn container_key(&self, reference: &ContainerRef) -> Option<ContainerKey>;
    fn container_ref(&self, key: &ContainerKey) -> Option<ContainerRef>;
    fn object_key(&self, reference: &ObjectRef) -> Option<ObjectKey>;
    fn object_ref(&self, key: &ObjectKey) -> Option<ObjectRef>;
}

/// Makes a dropped-item world entity network-visible.
///
/// The returned handle must resolve on every observer before any push that
/// carries it is sent. Returns `None` if the entity cannot be spawned
/// (already despawned, for instance).
pub trait ObjectSpawner {
    fn spawn_object(&mut self, object: &ObjectKey) -> Option<ObjectRef>;
}
