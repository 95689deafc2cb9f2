use std::sync::Arc;

use graphforge::{
    query::{build_read_nodes_command, build_read_relationships_command},
    GraphForgeError, GraphStore, StoreRecord, StoreTransaction,
};
use parking_lot::Mutex;

#[derive(Default)]
struct MemoryStoreState {
    commands: Vec<String>,
    transactions: Vec<Vec<String>>,
    node_records: Vec<StoreRecord>,
    relationship_records: Vec<StoreRecord>,
    fail_on_commit: Option<usize>,
}

/// In-memory store double: records every command and transaction, serves
/// seeded records for the read queries, and can inject a commit failure.
#[derive(Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryStoreState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_node(&self, record: StoreRecord) {
        self.state.lock().node_records.push(record);
    }

    pub fn seed_relationship(&self, record: StoreRecord) {
        self.state.lock().relationship_records.push(record);
    }

    /// Makes the commit of transaction number `index` (0-based) fail.
    pub fn fail_on_commit(&self, index: usize) {
        self.state.lock().fail_on_commit = Some(index);
    }

    pub fn executed_commands(&self) -> Vec<String> {
        self.state.lock().commands.clone()
    }

    pub fn committed_transactions(&self) -> Vec<Vec<String>> {
        self.state.lock().transactions.clone()
    }
}

impl GraphStore for MemoryStore {
    fn execute(&self, command: &str) -> Result<Vec<StoreRecord>, GraphForgeError> {
        let mut state = self.state.lock();
        state.commands.push(command.to_string());
        if command == build_read_nodes_command() {
            Ok(state.node_records.clone())
        } else if command == build_read_relationships_command() {
            Ok(state.relationship_records.clone())
        } else {
            Ok(Vec::new())
        }
    }

    fn begin_transaction(&self) -> Result<Box<dyn StoreTransaction + '_>, GraphForgeError> {
        Ok(Box::new(MemoryTransaction {
            state: Arc::clone(&self.state),
            commands: Vec::new(),
        }))
    }
}

struct MemoryTransaction {
    state: Arc<Mutex<MemoryStoreState>>,
    commands: Vec<String>,
}

impl StoreTransaction for MemoryTransaction {
    fn run(&mut self, command: &str) -> Result<(), GraphForgeError> {
        self.commands.push(command.to_string());
        Ok(())
    }

    fn commit(self: Box<Self>) -> Result<(), GraphForgeError> {
        let mut state = self.state.lock();
        if state.fail_on_commit == Some(state.transactions.len()) {
            return Err(GraphForgeError::store("injected commit failure"));
        }
        state.transactions.push(self.commands);
        Ok(())
    }
}
