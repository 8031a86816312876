mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let store = cli.store.as_deref();
    match cli.command {
        Commands::List { query, output_type } => {
            let patterns: Vec<&str> = query.iter().map(String::as_str).collect();
            commands::list(store, &patterns, output_type)
        }
        Commands::Get { key } => commands::get(store, &key),
        Commands::Set {
            key,
            value,
            value_type,
        } => commands::set(store, &key, &value, value_type),
        Commands::Remove { key } => commands::remove(store, &key),
        Commands::AddBounded {
            key,
            cap,
            elements,
        } => commands::add_bounded(store, &key, cap, &elements),
        Commands::Catalog { query } => {
            let patterns: Vec<&str> = query.iter().map(String::as_str).collect();
            commands::show_catalog(&patterns)
        }
    }
}
