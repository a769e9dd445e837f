mod test_database;
mod test_engine;
mod test_references;

pub use test_database::TestItemDatabase;
pub use test_engine::{EngineCall, TestEngine};
pub use test_references::TestReferences;
