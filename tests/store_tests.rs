use graphforge::{store::ScriptStore, GraphStore};

fn script_lines(store: ScriptStore<Vec<u8>>) -> Vec<String> {
    let bytes = store.into_inner().expect("writer");
    String::from_utf8(bytes)
        .expect("utf8")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_execute_writes_one_line_per_command() {
    let store = ScriptStore::new(Vec::new());
    store.execute("MERGE (n:A {node_id: '1'})").expect("execute");
    store.execute("MATCH (n) DETACH DELETE n").expect("execute");
    assert_eq!(
        script_lines(store),
        vec![
            "MERGE (n:A {node_id: '1'})".to_string(),
            "MATCH (n) DETACH DELETE n".to_string(),
        ]
    );
}

#[test]
fn test_execute_returns_no_records() {
    let store = ScriptStore::new(Vec::new());
    let records = store.execute("MATCH (n) RETURN n").expect("execute");
    assert!(records.is_empty());
}

#[test]
fn test_transaction_writes_only_on_commit() {
    let store = ScriptStore::new(Vec::new());
    let mut tx = store.begin_transaction().expect("begin");
    tx.run("MERGE (n:A {node_id: '1'})").expect("run");
    tx.run("MERGE (n:B {node_id: '2'})").expect("run");
    tx.commit().expect("commit");
    assert_eq!(script_lines(store).len(), 2);
}

#[test]
fn test_dropped_transaction_writes_nothing() {
    let store = ScriptStore::new(Vec::new());
    {
        let mut tx = store.begin_transaction().expect("begin");
        tx.run("MERGE (n:A {node_id: '1'})").expect("run");
        // No commit.
    }
    assert!(script_lines(store).is_empty());
}
