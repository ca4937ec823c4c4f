//! Inspect and call the catalog tools from the command line.
//!
//! Handy for checking exactly what text a model receives for a given tool
//! call, without wiring up a model.
//!
//! # Examples
//!
//! ```sh
//! # Print the function-calling definitions
//! catalog-tools list
//!
//! # Call a tool with JSON arguments
//! catalog-tools call ProductDetailsInfo '{"product": "PD-1405"}'
//!
//! # No product: ask for one instead of listing everything
//! catalog-tools --unfiltered require-product call ProductDetailsInfo
//! ```

use std::process;

use catalog_tools::{CatalogToolsConfig, ToolError, UnfilteredPolicy};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;

/// Inspect and call the catalog tools.
#[derive(Parser)]
#[command(name = "catalog-tools")]
struct Cli {
    /// What ProductDetailsInfo answers when no product is given
    #[arg(long, value_enum, default_value_t = Unfiltered::All)]
    unfiltered: Unfiltered,

    /// Log more (repeat for trace output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the tool definitions as JSON
    List,
    /// Call a tool by name and print the text the model would see
    Call {
        /// Tool name, e.g. ProductSalesInfo
        name: String,
        /// Arguments as a JSON object (default: {})
        #[arg(default_value = "{}")]
        args: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Unfiltered {
    /// List every product with its models
    All,
    /// Ask the caller to name a product
    RequireProduct,
}

impl From<Unfiltered> for UnfilteredPolicy {
    fn from(value: Unfiltered) -> Self {
        match value {
            Unfiltered::All => UnfilteredPolicy::ListAll,
            Unfiltered::RequireProduct => UnfilteredPolicy::RequireProduct,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = CatalogToolsConfig::default().with_unfiltered_policy(cli.unfiltered.into());
    let registry = match config.build_registry() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: failed to register tools: {e}");
            process::exit(1);
        }
    };

    match cli.command {
        Command::List => match serde_json::to_string_pretty(&registry.definitions()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: failed to serialize definitions: {e}");
                process::exit(1);
            }
        },
        Command::Call { name, args } => match registry.invoke_json(&name, &args) {
            Ok(text) => println!("{text}"),
            Err(e @ ToolError::UnknownTool { .. }) => {
                eprintln!("Error: {e}. Known tools: {}", registry.names().join(", "));
                process::exit(2);
            }
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
    }
}
