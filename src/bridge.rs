//! Bridge between in-memory graphs and an external store.
//!
//! Export partitions the graph into bounded chunks and commits one
//! transaction per chunk, all node chunks strictly before any relationship
//! chunk. There is no cross-chunk atomicity: a failed chunk aborts the
//! export but earlier commits stay persisted, an accepted tradeoff for
//! throughput. No command is ever retried.

use std::sync::atomic::{AtomicUsize, Ordering};

use ahash::AHashSet;
use parking_lot::Mutex;

use crate::{
    errors::GraphForgeError,
    model::{Database, Graph, Node, Relationship},
    query::{
        build_create_node_command, build_create_relationship_command, build_delete_all_command,
        build_read_nodes_command, build_read_relationships_command,
    },
    store::{GraphStore, StoreRecord},
};

fn check_batch_size(batch_size: usize) -> Result<(), GraphForgeError> {
    if batch_size == 0 {
        return Err(GraphForgeError::invalid_input("batch size must be positive"));
    }
    Ok(())
}

fn node_commands(graph: &Graph) -> Result<Vec<String>, GraphForgeError> {
    graph.nodes.iter().map(build_create_node_command).collect()
}

fn relationship_commands(graph: &Graph) -> Result<Vec<String>, GraphForgeError> {
    graph
        .relationships
        .iter()
        .map(build_create_relationship_command)
        .collect()
}

fn commit_chunk<S: GraphStore + ?Sized>(
    store: &S,
    commands: &[String],
) -> Result<(), GraphForgeError> {
    let mut tx = store.begin_transaction()?;
    for command in commands {
        tx.run(command)?;
    }
    tx.commit()
}

/// Writes a graph to the store in chunks of at most `batch_size` commands.
pub fn export_graph<S: GraphStore + ?Sized>(
    graph: &Graph,
    store: &S,
    batch_size: usize,
) -> Result<(), GraphForgeError> {
    check_batch_size(batch_size)?;
    // Rendering happens up front so a malformed entity fails the export
    // before the store sees anything.
    let nodes = node_commands(graph)?;
    let relationships = relationship_commands(graph)?;
    for chunk in nodes.chunks(batch_size) {
        commit_chunk(store, chunk)?;
    }
    for chunk in relationships.chunks(batch_size) {
        commit_chunk(store, chunk)?;
    }
    Ok(())
}

/// Writes a database's graph to the store.
pub fn export_database<S: GraphStore + ?Sized>(
    database: &Database,
    store: &S,
    batch_size: usize,
) -> Result<(), GraphForgeError> {
    export_graph(&database.graph, store, batch_size)
}

/// Parallel variant of [`export_graph`]: node chunks are spread over
/// `workers` scoped threads, with a full barrier before the first
/// relationship chunk so relationships never race their endpoints.
pub fn export_graph_parallel<S>(
    graph: &Graph,
    store: &S,
    batch_size: usize,
    workers: usize,
) -> Result<(), GraphForgeError>
where
    S: GraphStore + Sync + ?Sized,
{
    check_batch_size(batch_size)?;
    if workers == 0 {
        return Err(GraphForgeError::invalid_input("worker count must be positive"));
    }
    let nodes = node_commands(graph)?;
    let relationships = relationship_commands(graph)?;
    run_chunks_parallel(store, &nodes, batch_size, workers)?;
    run_chunks_parallel(store, &relationships, batch_size, workers)
}

/// Parallel variant of [`export_database`].
pub fn export_database_parallel<S>(
    database: &Database,
    store: &S,
    batch_size: usize,
    workers: usize,
) -> Result<(), GraphForgeError>
where
    S: GraphStore + Sync + ?Sized,
{
    export_graph_parallel(&database.graph, store, batch_size, workers)
}

fn run_chunks_parallel<S>(
    store: &S,
    commands: &[String],
    batch_size: usize,
    workers: usize,
) -> Result<(), GraphForgeError>
where
    S: GraphStore + Sync + ?Sized,
{
    let chunks: Vec<&[String]> = commands.chunks(batch_size).collect();
    if chunks.is_empty() {
        return Ok(());
    }
    let next = AtomicUsize::new(0);
    let failure: Mutex<Option<GraphForgeError>> = Mutex::new(None);
    std::thread::scope(|scope| {
        for _ in 0..workers.min(chunks.len()) {
            scope.spawn(|| loop {
                let index = next.fetch_add(1, Ordering::SeqCst);
                if index >= chunks.len() || failure.lock().is_some() {
                    break;
                }
                if let Err(err) = commit_chunk(store, chunks[index]) {
                    *failure.lock() = Some(err);
                    break;
                }
            });
        }
    });
    match failure.into_inner() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Issues the single detach-delete-all command. Irreversible.
pub fn delete_all_data<S: GraphStore + ?Sized>(store: &S) -> Result<(), GraphForgeError> {
    store.execute(&build_delete_all_command())?;
    Ok(())
}

/// Reads the whole store back into a graph.
///
/// Node records are resolved first and deduplicated by node identity, then
/// relationship records are filtered out of the mixed read result,
/// deduplicated, and resolved against the id index.
pub fn import_graph<S: GraphStore + ?Sized>(store: &S) -> Result<Graph, GraphForgeError> {
    let mut nodes: Vec<Node> = Vec::new();
    let mut seen_nodes: AHashSet<Node> = AHashSet::new();
    for record in store.execute(&build_read_nodes_command())? {
        if let StoreRecord::Node { labels, properties } = record {
            let node = Node::new(labels, properties)?;
            if seen_nodes.insert(node.clone()) {
                nodes.push(node);
            }
        }
    }

    let records = store.execute(&build_read_relationships_command())?;
    let relationships = {
        let index: ahash::AHashMap<&str, &Node> =
            nodes.iter().map(|node| (node.id(), node)).collect();
        let mut relationships: Vec<Relationship> = Vec::new();
        let mut seen: AHashSet<Relationship> = AHashSet::new();
        for record in records {
            let StoreRecord::Relationship {
                node_a_id,
                relationship_type,
                node_b_id,
                properties,
            } = record
            else {
                continue;
            };
            let resolve = |id: &str| -> Result<Node, GraphForgeError> {
                index
                    .get(id)
                    .map(|node| (*node).clone())
                    .ok_or_else(|| {
                        GraphForgeError::dangling_reference(format!("unknown node id {id}"))
                    })
            };
            let rel = Relationship::with_properties(
                resolve(&node_a_id)?,
                relationship_type,
                resolve(&node_b_id)?,
                properties,
            );
            if seen.insert(rel.clone()) {
                relationships.push(rel);
            }
        }
        relationships
    };
    Ok(Graph::new(nodes, relationships))
}

/// Reads the whole store back as a named database.
pub fn import_database<S: GraphStore + ?Sized>(
    store: &S,
    name: &str,
) -> Result<Database, GraphForgeError> {
    Ok(Database::new(import_graph(store)?, name))
}
