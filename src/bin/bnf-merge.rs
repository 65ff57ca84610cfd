//! Command-line interface for bnf-merge
//! Merges every grammar file under a directory into a single JSON document.
//!
//! Settings come from the built-in defaults, then `bnf.toml` in the working
//! directory when present, then `--config`, then the individual flags.
//!
//! Usage:
//!   bnf-merge `<root>` [--output `<file>`] [--config `<file>`] [--extension `<ext>`] [--verbose]

use std::path::PathBuf;

use bnf_config::Loader;
use bnf_merge::output::write_grammar;
use bnf_merge::{BnfError, GrammarLoader};
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("bnf-merge")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert and merge BNF files to JSON")
        .arg(
            Arg::new("root")
                .help("Target folder containing grammar files")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output JSON file path (default: grammar.json)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("extension")
                .long("extension")
                .short('e')
                .help("File extension selecting grammar files (default: bnf)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log progress to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(output) => println!("Successfully converted BNF files to {}", output.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Optional settings file picked up from the working directory
const LOCAL_CONFIG: &str = "bnf.toml";

/// Resolve settings, merge the tree and write the document
fn run(matches: &ArgMatches) -> Result<PathBuf, BnfError> {
    let root = matches
        .get_one::<String>("root")
        .map(PathBuf::from)
        .unwrap_or_default();
    // no settings file is read before the root is known to exist
    if !root.is_dir() {
        return Err(BnfError::MissingRoot { path: root });
    }

    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(extension) = matches.get_one::<String>("extension") {
        loader = loader.set_override("source.extension", extension.as_str())?;
    }
    if let Some(output) = matches.get_one::<String>("output") {
        loader = loader.set_override("output.path", output.as_str())?;
    }
    let config = loader.build()?;

    let grammar = GrammarLoader::with_config(&config).load_dir(&root)?;

    let output = PathBuf::from(&config.output.path);
    write_grammar(&grammar, &output, config.output.indent)?;
    Ok(output)
}

/// Install the stderr subscriber; `RUST_LOG` takes precedence over `--verbose`
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
