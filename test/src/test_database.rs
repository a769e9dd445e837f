use std::collections::HashSet;

use stockpile_shared::{ItemDatabase, ItemId};

/// In-memory item definition database shared by every host in a test.
pub struct TestItemDatabase {
    items: HashSet<ItemId>,
}

impl TestItemDatabase {
    pub fn new() -> Self {
        Self {
            items: HashSet::new(),
        }
    }

    pub fn with_items<I: IntoIterator<Item = u16>>(ids: I) -> Self {
        Self {
            items: ids.into_iter().map(ItemId::new).collect(),
        }
    }

    pub fn insert(&mut self, item: ItemId) {
        self.items.insert(item);
    }
}

impl Default for TestItemDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemDatabase for TestItemDatabase {
    fn contains(&self, item: &ItemId) -> bool {
        self.items.contains(item)
    }
}
