use std::collections::HashMap;

use stockpile_shared::{
    ContainerKey, ContainerRef, ObjectKey, ObjectRef, ObjectSpawner, ReferenceMap,
};

/// In-memory reference registry, standing in for the transport layer's
/// handle tables.
///
/// Tests hand the same registry to the server and client endpoints, which
/// models a fully replicated session: a handle registered (or spawned) on
/// the authority resolves on the observer. Unregistering simulates entity
/// destruction.
pub struct TestReferences {
    containers: HashMap<ContainerRef, ContainerKey>,
    containers_rev: HashMap<ContainerKey, ContainerRef>,
    objects: HashMap<ObjectRef, ObjectKey>,
    objects_rev: HashMap<ObjectKey, ObjectRef>,
    next_ref: u64,
    spawned: Vec<ObjectKey>,
}

impl TestReferences {
    pub fn new() -> Self {
        Self {
            containers: HashMap::new(),
            containers_rev: HashMap::new(),
            objects: HashMap::new(),
            objects_rev: HashMap::new(),
            next_ref: 1,
            spawned: Vec::new(),
        }
    }

    pub fn register_container(&mut self, key: ContainerKey) -> ContainerRef {
        let reference = ContainerRef::from_u64(self.next_ref);
        self.next_ref += 1;
        self.containers.insert(reference, key);
        self.containers_rev.insert(key, reference);
        reference
    }

    pub fn unregister_container(&mut self, reference: ContainerRef) {
        if let Some(key) = self.containers.remove(&reference) {
            self.containers_rev.remove(&key);
        }
    }

    /// A handle that never resolves, as if its container had despawned.
    pub fn dangling_container_ref(&mut self) -> ContainerRef {
        let reference = ContainerRef::from_u64(self.next_ref);
        self.next_ref += 1;
        reference
    }

    pub fn unregister_object(&mut self, reference: ObjectRef) {
        if let Some(key) = self.objects.remove(&reference) {
            self.objects_rev.remove(&key);
        }
    }

    /// Objects made network-visible so far, in spawn order.
    pub fn spawned(&self) -> &[ObjectKey] {
        &self.spawned
    }
}

impl Default for TestReferences {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceMap for TestReferences {
    fn container_key(&self, reference: &ContainerRef) -> Option<ContainerKey> {
        self.containers.get(reference).copied()
    }

    fn container_ref(&self, key: &ContainerKey) -> Option<ContainerRef> {
        self.containers_rev.get(key).copied()
    }

    fn object_key(&self, reference: &ObjectRef) -> Option<ObjectKey> {
        self.objects.get(reference).copied()
    }

    fn object_ref(&self, key: &ObjectKey) -> Option<ObjectRef> {
        self.objects_rev.get(key).copied()
    }
}

impl ObjectSpawner for TestReferences {
    fn spawn_object(&mut self, object: &ObjectKey) -> Option<ObjectRef> {
        if let Some(existing) = self.objects_rev.get(object) {
            return Some(*existing);
        }
        let reference = ObjectRef::from_u64(self.next_ref);
        self.next_ref += 1;
        self.objects.insert(reference, *object);
        self.objects_rev.insert(*object, reference);
        self.spawned.push(*object);
        Some(reference)
    }
}
