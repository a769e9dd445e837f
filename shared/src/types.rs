#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostType {
    Server,
    Client,
}

impl HostType {
    pub fn is_authority(&self) -> bool {
        *self == HostType::Server
    }
}

// ItemId
//
// Identifies an item definition in the engine's shared item database.
// Item definitions themselves are owned by the engine; this layer only
// ever carries their ids across the wire.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct ItemId(u16);

impl ItemId {
    pub fn new(value: u16) -> Self {
        Self(value)
    }

    pub fn to_u16(&self) -> u16 {
        self.0
    }
}
