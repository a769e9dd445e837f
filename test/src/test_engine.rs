use stockpile_shared::{ContainerKey, InventoryEngine, InventoryEvents, ItemId, ObjectKey};

/// One forwarded call, recorded for assertions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineCall {
    Drop {
        container: ContainerKey,
        slot_index: usize,
        amount: u16,
    },
    Swap {
        from: ContainerKey,
        slot_index: usize,
        amount: u16,
        to: ContainerKey,
    },
    Open {
        container: ContainerKey,
    },
    OpenDefault,
    Close {
        container: ContainerKey,
    },
}

/// Minimal in-memory inventory engine.
///
/// Records every forwarded call and fires the events a real engine would
/// fire on success. Stack math and capacity checks are out of scope, so
/// every operation "succeeds": drops create a fresh world object, opens and
/// closes always fire. Authority-initiated picks and adds are simulated
/// with [`pick`](Self::pick) and [`add`](Self::add).
pub struct TestEngine {
    default_container: Option<ContainerKey>,
    calls: Vec<EngineCall>,
    events: InventoryEvents,
    next_object: u64,
    last_dropped: Option<ObjectKey>,
}

impl TestEngine {
    pub fn new() -> Self {
        Self {
            default_container: None,
            calls: Vec::new(),
            events: InventoryEvents::new(),
            next_object: 1,
            last_dropped: None,
        }
    }

    pub fn with_default_container(default_container: ContainerKey) -> Self {
        let mut engine = Self::new();
        engine.default_container = Some(default_container);
        engine
    }

    pub fn calls(&self) -> &[EngineCall] {
        &self.calls
    }

    pub fn last_dropped(&self) -> Option<ObjectKey> {
        self.last_dropped
    }

    /// Simulates the engine picking up a world item.
    pub fn pick(&mut self, item: ItemId, amount: u16) {
        self.events.push_picked(item, amount);
    }

    /// Simulates the engine adding items to a container.
    pub fn add(&mut self, item: ItemId, amount: u16) {
        self.events.push_added(item, amount);
    }
}

impl Default for TestEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryEngine for TestEngine {
    fn drop_from_container(&mut self, container: &ContainerKey, slot_index: usize, amount: u16) {
        self.calls.push(EngineCall::Drop {
            container: *container,
            slot_index,
            amount,
        });
        let object = ObjectKey::from_u64(self.next_object);
        self.next_object += 1;
        self.last_dropped = Some(object);
        self.events.push_dropped(object);
    }

    fn swap_between_containers(
        &mut self,
        from: &ContainerKey,
        slot_index: usize,
        amount: u16,
        to: &ContainerKey,
    ) {
        self.calls.push(EngineCall::Swap {
            from: *from,
            slot_index,
            amount,
            to: *to,
        });
    }

    fn open(&mut self, container: &ContainerKey) {
        self.calls.push(EngineCall::Open {
            container: *container,
        });
        self.events.push_opened(*container);
    }

    fn open_default(&mut self) {
        self.calls.push(EngineCall::OpenDefault);
        if let Some(container) = self.default_container {
            self.events.push_opened(container);
        }
    }

    fn close(&mut self, container: &ContainerKey) {
        self.calls.push(EngineCall::Close {
            container: *container,
        });
        self.events.push_closed(*container);
    }

    fn default_container(&self) -> Option<ContainerKey> {
        self.default_container
    }

    fn events(&mut self) -> &mut InventoryEvents {
        &mut self.events
    }
}
