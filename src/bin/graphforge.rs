use std::{
    env,
    fs::File,
    io::{self, BufWriter, Write},
    process,
};

use graphforge::{
    bridge::{delete_all_data, export_database},
    cli::{flag_value, required_flag_value, CommandLineConfig},
    codec::{read_database_from_path, write_database_to_path},
    config::{GeneratorConfig, PerturbConfig},
    generate::{generate_database, read_names_from_path},
    perturb::perturb_graph,
    store::ScriptStore,
};
use rand::{rngs::StdRng, SeedableRng};

const COMMANDS: [&str; 4] = ["generate", "perturb", "load", "wipe"];
const DEFAULT_BATCH_SIZE: usize = 100;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };
    if !COMMANDS.contains(&config.command.as_str()) {
        eprintln!("error: unknown command {}", config.command);
        process::exit(2);
    }
    if let Err(err) = run_command(&config.command, &config.command_args) {
        eprintln!("command failed: {err}");
        process::exit(1);
    }
}

fn run_command(command: &str, args: &[String]) -> Result<(), String> {
    match command {
        "generate" => run_generate(args),
        "perturb" => run_perturb(args),
        "load" => run_load(args),
        "wipe" => run_wipe(args),
        _ => Err(format!("unknown command {command}")),
    }
}

fn run_generate(args: &[String]) -> Result<(), String> {
    let names_path = required_flag_value(args, "--names")?;
    let output = flag_value(args, "--output")?.unwrap_or_else(|| "graph.json".to_string());
    let mut cfg = GeneratorConfig::default();
    if let Some(value) = flag_value(args, "--connection-chance")? {
        cfg.connection_chance = parse_number(&value, "--connection-chance")?;
    }
    let names = read_names_from_path(&names_path).map_err(|e| e.to_string())?;
    let mut rng = make_rng(args)?;
    let database = generate_database(&names, &cfg, &mut rng).map_err(|e| e.to_string())?;
    write_database_to_path(&database, &output).map_err(|e| e.to_string())?;
    println!(
        "generated {} nodes and {} relationships into {output}",
        database.graph.nodes.len(),
        database.graph.relationships.len()
    );
    Ok(())
}

fn run_perturb(args: &[String]) -> Result<(), String> {
    let input = required_flag_value(args, "--input")?;
    let output = required_flag_value(args, "--output")?;
    let mut cfg = PerturbConfig::default();
    if let Some(value) = flag_value(args, "--chance")? {
        cfg.chance = parse_number(&value, "--chance")?;
    }
    if let Some(value) = flag_value(args, "--iterations")? {
        cfg.iterations = parse_number(&value, "--iterations")?;
    }
    let mut database = read_database_from_path(&input).map_err(|e| e.to_string())?;
    let mut rng = make_rng(args)?;
    perturb_graph(&mut database.graph, &cfg, &mut rng).map_err(|e| e.to_string())?;
    write_database_to_path(&database, &output).map_err(|e| e.to_string())?;
    println!(
        "perturbed {input} into {output}: {} nodes, {} relationships",
        database.graph.nodes.len(),
        database.graph.relationships.len()
    );
    Ok(())
}

fn run_load(args: &[String]) -> Result<(), String> {
    let input = required_flag_value(args, "--input")?;
    let output = flag_value(args, "--output")?.unwrap_or_else(|| "-".to_string());
    let batch_size = match flag_value(args, "--batch-size")? {
        Some(value) => parse_number(&value, "--batch-size")?,
        None => DEFAULT_BATCH_SIZE,
    };
    let database = read_database_from_path(&input).map_err(|e| e.to_string())?;
    let store = ScriptStore::new(open_sink(&output)?);
    export_database(&database, &store, batch_size).map_err(|e| e.to_string())?;
    finish_sink(store)
}

fn run_wipe(args: &[String]) -> Result<(), String> {
    let output = flag_value(args, "--output")?.unwrap_or_else(|| "-".to_string());
    let store = ScriptStore::new(open_sink(&output)?);
    delete_all_data(&store).map_err(|e| e.to_string())?;
    finish_sink(store)
}

fn open_sink(path: &str) -> Result<Box<dyn Write + Send>, String> {
    if path == "-" {
        Ok(Box::new(io::stdout()))
    } else {
        let file = File::create(path).map_err(|e| format!("cannot create {path}: {e}"))?;
        Ok(Box::new(BufWriter::new(file)))
    }
}

fn finish_sink(store: ScriptStore<Box<dyn Write + Send>>) -> Result<(), String> {
    let mut sink = store.into_inner().map_err(|e| e.to_string())?;
    sink.flush().map_err(|e| e.to_string())
}

fn make_rng(args: &[String]) -> Result<StdRng, String> {
    match flag_value(args, "--seed")? {
        Some(value) => Ok(StdRng::seed_from_u64(parse_number(&value, "--seed")?)),
        None => Ok(StdRng::from_entropy()),
    }
}

fn parse_number<T: std::str::FromStr>(value: &str, flag: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("invalid value for {flag}: {value}"))
}
