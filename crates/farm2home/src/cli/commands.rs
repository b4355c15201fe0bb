//! # CLI Layer
//!
//! The CLI is the only place in the workspace that:
//! - Knows about terminal I/O (stdout, stderr, stdin prompts)
//! - Installs the tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Logging**: `RUST_LOG`, then `-v` (debug), then the configured filter
//! 3. **Context Setup**: Load config and hydrate the stores from the data directory
//! 4. **Dispatch**: Route commands to handlers
//! 5. **Output**: Print the rendered result; errors bubble up to `main`

use super::handlers;
use super::setup::{CartCommands, Cli, Commands, FarmerCommands, ProductCommands};
use anyhow::Result;
use clap::Parser;
use farm2homeapp::api::Farm2HomeApi;
use farm2homeapp::config::Farm2HomeConfig;
use farm2homeapp::init::{initialize, load_config};
use farm2homeapp::model::{FarmerId, FarmerInput};
use farm2homeapp::store::backend::StorageBackend;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config()?;
    init_tracing(&config, cli.verbose);

    let mut ctx = initialize(&config, cli.data_dir)?;
    tracing::debug!(
        command = ?cli.command,
        data_dir = %ctx.data_dir.display(),
        "dispatching"
    );

    let output = dispatch(&mut ctx.api, cli.command)?;
    print!("{}", output);
    Ok(())
}

fn init_tracing(config: &Farm2HomeConfig, verbose: bool) {
    let fallback = if verbose { "debug" } else { config.log_filter.as_str() };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn dispatch<B: StorageBackend>(api: &mut Farm2HomeApi<B>, command: Commands) -> Result<String> {
    match command {
        Commands::Products { action, category } => match action {
            Some(ProductCommands::Show { product_id }) => handlers::product_show(api, product_id),
            None => handlers::products(api, category.as_deref()),
        },
        Commands::Categories => handlers::categories(api),
        Commands::Deals => handlers::deals(api),
        Commands::Cart { action } => match action {
            CartCommands::Add { product_id } => handlers::cart_add(api, product_id),
            CartCommands::Show => handlers::cart_show(api),
            CartCommands::Remove { product_id } => handlers::cart_remove(api, product_id),
            CartCommands::Set {
                product_id,
                quantity,
            } => handlers::cart_set(api, product_id, quantity),
        },
        Commands::Farmers { action } => match action {
            FarmerCommands::Register {
                name,
                mobile,
                location,
                crops,
            } => handlers::farmer_register(api, &FarmerInput::new(name, mobile, location, crops)),
            FarmerCommands::List => handlers::farmer_list(api),
            FarmerCommands::Remove { id, yes } => handlers::farmer_remove(
                api,
                FarmerId(id),
                yes,
                &mut std::io::stdin().lock(),
                &mut std::io::stderr(),
            ),
        },
        Commands::Reset { yes } => handlers::reset(
            api,
            yes,
            &mut std::io::stdin().lock(),
            &mut std::io::stderr(),
        ),
    }
}
