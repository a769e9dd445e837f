// ContainerKey
//
// Stable local identity of a live container. Valid for the container's
// lifetime on the host that issued it; never sent over the wire (that is
// what ContainerRef is for).
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct ContainerKey(u64);

impl ContainerKey {
    pub fn from_u64(value: u64) -> Self {
        Self(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}

// ObjectKey
//
// Stable local identity of a dropped-item entity in the world.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct ObjectKey(u64);

impl ObjectKey {
    pub fn from_u64(value: u64) -> Self {
        Self(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}
