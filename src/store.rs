//! Store collaborator boundary.
//!
//! The external property-graph store is reached only through the
//! [`GraphStore`] capability trait; this crate never opens sockets or
//! manages a driver. Query results come back as tagged [`StoreRecord`]
//! values so the bridge pattern-matches on record kind instead of
//! inspecting driver types.

use std::{io::Write, sync::Arc};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::{errors::GraphForgeError, model::PropertyMap};

/// One raw record returned by a store read query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoreRecord {
    Node {
        labels: Vec<String>,
        properties: PropertyMap,
    },
    Relationship {
        node_a_id: String,
        relationship_type: String,
        node_b_id: String,
        properties: PropertyMap,
    },
}

/// A logical store transaction: buffered commands applied on commit.
pub trait StoreTransaction {
    fn run(&mut self, command: &str) -> Result<(), GraphForgeError>;
    fn commit(self: Box<Self>) -> Result<(), GraphForgeError>;
}

/// Capability trait for a store connection.
///
/// Receivers are `&self` so one store can serve parallel export workers;
/// implementations guard their own state.
pub trait GraphStore {
    /// Runs one command outside any transaction and returns its records.
    fn execute(&self, command: &str) -> Result<Vec<StoreRecord>, GraphForgeError>;

    /// Opens a logical transaction.
    fn begin_transaction(&self) -> Result<Box<dyn StoreTransaction + '_>, GraphForgeError>;
}

impl<S> GraphStore for &S
where
    S: GraphStore + ?Sized,
{
    fn execute(&self, command: &str) -> Result<Vec<StoreRecord>, GraphForgeError> {
        (*self).execute(command)
    }

    fn begin_transaction(&self) -> Result<Box<dyn StoreTransaction + '_>, GraphForgeError> {
        (*self).begin_transaction()
    }
}

/// Store adapter that renders every issued command as one script line.
///
/// Useful for offline export: the resulting script can be replayed through
/// a store shell. Read queries have nothing to answer from a script sink,
/// so `execute` returns an empty record set.
pub struct ScriptStore<W: Write> {
    sink: Arc<Mutex<W>>,
}

impl<W: Write> ScriptStore<W> {
    pub fn new(writer: W) -> Self {
        Self {
            sink: Arc::new(Mutex::new(writer)),
        }
    }

    /// Recovers the writer. Fails while a transaction still holds the sink.
    pub fn into_inner(self) -> Result<W, GraphForgeError> {
        Arc::try_unwrap(self.sink)
            .map(Mutex::into_inner)
            .map_err(|_| GraphForgeError::store("script sink still borrowed by a transaction"))
    }
}

impl<W: Write + Send> GraphStore for ScriptStore<W> {
    fn execute(&self, command: &str) -> Result<Vec<StoreRecord>, GraphForgeError> {
        let mut sink = self.sink.lock();
        writeln!(sink, "{command}").map_err(|e| GraphForgeError::store(e.to_string()))?;
        Ok(Vec::new())
    }

    fn begin_transaction(&self) -> Result<Box<dyn StoreTransaction + '_>, GraphForgeError> {
        Ok(Box::new(ScriptTransaction {
            sink: Arc::clone(&self.sink),
            commands: Vec::new(),
        }))
    }
}

struct ScriptTransaction<W: Write> {
    sink: Arc<Mutex<W>>,
    commands: Vec<String>,
}

impl<W: Write> StoreTransaction for ScriptTransaction<W> {
    fn run(&mut self, command: &str) -> Result<(), GraphForgeError> {
        self.commands.push(command.to_string());
        Ok(())
    }

    // An uncommitted transaction writes nothing.
    fn commit(self: Box<Self>) -> Result<(), GraphForgeError> {
        let mut sink = self.sink.lock();
        for command in &self.commands {
            writeln!(sink, "{command}").map_err(|e| GraphForgeError::store(e.to_string()))?;
        }
        Ok(())
    }
}
