//! Command-line argument handling for the graphforge binary.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub command: String,
    pub command_args: Vec<String>,
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut iter = args.iter().skip(1);
        let command = match iter.next() {
            Some(arg) if !arg.starts_with('-') => arg.to_string(),
            Some(arg) => return Err(format!("expected a command, found {arg}")),
            None => return Err("missing command".to_string()),
        };
        let command_args = iter.map(|arg| arg.to_string()).collect();
        Ok(Self {
            command,
            command_args,
        })
    }

    pub fn help() -> &'static str {
        r#"Usage: graphforge COMMAND [options]

Commands:
  generate --names PATH [--output PATH] [--connection-chance N] [--seed N]
                            Generate a random database JSON from a names list
  perturb --input PATH --output PATH [--chance F] [--iterations N] [--seed N]
                            Apply random structural noise to a database JSON
  load --input PATH [--output PATH|-] [--batch-size N]
                            Render the store command script for a database
  wipe [--output PATH|-]    Render the detach-delete-all command script

Options:
  --names PATH              JSON file of the form {"names": [...]}
  --input PATH              Database JSON to read
  --output PATH|-           Output file, or - for stdout (default graph.json
                            for generate/perturb, - for load/wipe)
  --connection-chance N     Max connection attempts per node (default 5)
  --chance F                Perturbation chance per draw (default 0.1)
  --iterations N            Draws per perturbation action (default 10)
  --batch-size N            Commands per export transaction (default 100)
  --seed N                  Seed the random generator for reproducible runs

Examples:
  graphforge generate --names names.json --output graph.json
  graphforge perturb --input graph.json --output perturbed.json --chance 0.2
  graphforge load --input graph.json --batch-size 50 > commands.cypher
  graphforge wipe
"#
    }
}

/// Returns the value following `flag`, if present.
pub fn flag_value(args: &[String], flag: &str) -> Result<Option<String>, String> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == flag {
            return match iter.next() {
                Some(value) => Ok(Some(value.clone())),
                None => Err(format!("{flag} requires a value")),
            };
        }
    }
    Ok(None)
}

/// Returns the value following `flag`, erroring when absent.
pub fn required_flag_value(args: &[String], flag: &str) -> Result<String, String> {
    flag_value(args, flag)?.ok_or_else(|| format!("{flag} is required"))
}
