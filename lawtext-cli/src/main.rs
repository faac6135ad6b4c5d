//! Command-line interface for Lawtext
//! This binary parses Lawtext statute files and prints the annotated tree in different formats.
//!
//! Usage:
//!   lawtext `<path>` [--format `<format>`] [--config `<file>`]   - Parse, decorate and print the tree
//!   lawtext `<path>` --no-decorate                             - Print the raw tree as written
//!   lawtext `<path>` --tokens                                  - Print the lexed line tokens as JSON

use clap::{Arg, ArgAction, ArgMatches, Command};
use lawtext_config::{ConfigError, LawtextConfig, Loader, OutputFormat};
use lawtext_parser::lawtext::formats::{to_json_str, to_treeviz_str, to_yaml_str, TreevizOptions};
use lawtext_parser::lawtext::parsing::lex_lawtext;
use lawtext_parser::{decorate, parse_lawtext, TreeNode};
use log::debug;

fn main() {
    let matches = Command::new("lawtext")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing Lawtext statute files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the Lawtext file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (overrides the configured one)")
                .value_parser(["treeviz", "json", "yaml"]),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("no-decorate")
                .long("no-decorate")
                .help("Print the raw tree without numbering and structural attributes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .help("Print the lexed line tokens as JSON instead of the tree")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log pipeline stages to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let Some(path) = matches.get_one::<String>("path") else {
        eprintln!("Missing input path");
        std::process::exit(1);
    };
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });

    let output = if matches.get_flag("tokens") {
        handle_tokens_command(&source)
    } else {
        handle_tree_command(&source, &config)
    };

    match output {
        Ok(output) => print!("{}", output),
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Defaults, then the --config file, then flags.
fn load_config(matches: &ArgMatches) -> Result<LawtextConfig, ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("no-decorate") {
        loader = loader.set_override("pipeline.decorate", false)?;
    }
    loader.build()
}

/// Run the pipeline and render the tree
fn handle_tree_command(source: &str, config: &LawtextConfig) -> Result<String, String> {
    let mut law = parse_lawtext(source).map_err(|e| format!("Parse error: {}", e))?;
    if config.pipeline.decorate {
        decorate(&mut law);
    }
    debug!("rendering as {:?}", config.output.format);
    render(&law, config)
}

fn render(law: &TreeNode, config: &LawtextConfig) -> Result<String, String> {
    match config.output.format {
        OutputFormat::Treeviz => {
            let options = TreevizOptions {
                label_width: config.treeviz.label_width,
                show_attributes: config.treeviz.show_attributes,
            };
            Ok(to_treeviz_str(law, &options))
        }
        OutputFormat::Json => to_json_str(law, config.output.pretty)
            .map(|json| json + "\n")
            .map_err(|e| format!("Error formatting JSON: {}", e)),
        OutputFormat::Yaml => {
            to_yaml_str(law).map_err(|e| format!("Error formatting YAML: {}", e))
        }
    }
}

/// Lex only and dump the tokens
fn handle_tokens_command(source: &str) -> Result<String, String> {
    let tokens = lex_lawtext(source).map_err(|e| format!("Lex error: {}", e))?;
    serde_json::to_string_pretty(&tokens)
        .map(|json| json + "\n")
        .map_err(|e| format!("Error formatting tokens: {}", e))
}
