use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for wikiprefs
#[derive(Parser, Debug)]
#[command(name = "wikiprefs")]
#[command(about = "Inspect and edit a reader preference store from the command line")]
pub struct Cli {
    /// Path to the store file
    #[arg(short, long, global = true, env = "WIKIPREFS_STORE")]
    pub store: Option<PathBuf>,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List stored preferences
    List {
        /// Glob patterns on the key (OR logic)
        #[arg(short, long)]
        query: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputType::JsonObject)]
        output_type: OutputType,
    },
    /// Print a single stored value without JSON wrapping
    Get { key: String },
    /// Store a value
    Set {
        key: String,
        value: String,

        /// How to interpret VALUE
        #[arg(short = 't', long = "type", value_enum, default_value_t = ValueType::String)]
        value_type: ValueType,
    },
    /// Remove a stored key
    Remove { key: String },
    /// Accumulate strings into a bounded set stored under KEY
    AddBounded {
        key: String,

        /// Replace the set with ELEMENTS once the union would reach this size
        #[arg(short, long)]
        cap: usize,

        #[arg(required = true)]
        elements: Vec<String>,
    },
    /// List every known setting with its kind and default
    Catalog {
        /// Glob patterns on the key (OR logic)
        #[arg(short, long)]
        query: Vec<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputType {
    /// `{ "key": value, ... }`
    JsonObject,
    /// `[{ "key": ..., "value": ... }, ...]`
    JsonArray,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueType {
    Bool,
    Int,
    Long,
    String,
    /// A string holding JSON text; validated before storing
    Json,
}
