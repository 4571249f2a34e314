use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

mod cli;
mod config;

use cli::Cli;
use cli::commands::{Commands, ProductFields};
use config::Config;
use productstore::{JsonFileBacking, LoadStatus, NewProduct, Product, ProductPatch, RecordStore};

fn setup_logging(default_filter: &str) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("productstore")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("productstore.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn open_store(cli: &Cli, config: &Config) -> RecordStore {
    let path = cli.file.clone().unwrap_or_else(|| config.store.path.clone());
    let backing = JsonFileBacking::new(&path).with_pretty(config.store.pretty);
    let store = RecordStore::with_backing(backing);

    match store.load_status() {
        LoadStatus::Loaded { count } if cli.is_verbose() => {
            println!("{} {} products from {}", "Loaded".cyan(), count, path.display());
        }
        LoadStatus::Missing if cli.is_verbose() => {
            println!("{} {}, starting empty", "No file at".yellow(), path.display());
        }
        LoadStatus::Failed { reason } => {
            println!("{} {}: {}", "Could not load".red(), path.display(), reason);
        }
        _ => {}
    }
    store
}

fn print_product(product: &Product) {
    println!(
        "  {:>4}  {:<10} {:<24} {:>12.2}  stock {:<5} {}",
        product.id.to_string().bold(),
        product.code,
        product.title,
        product.price,
        product.stock,
        product.thumbnail.dimmed()
    );
    println!("        {}", product.description);
}

fn warn_if_unsynced(store: &RecordStore) {
    if !store.is_synced() {
        println!("{}", "Warning: changes kept in memory but not written to disk".yellow());
    }
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    let mut store = open_store(cli, config);

    match &cli.command {
        None | Some(Commands::List) => handle_list_command(&store),
        Some(Commands::Add { fields }) => handle_add_command(&mut store, fields),
        Some(Commands::Get { id }) => handle_get_command(&store, *id),
        Some(Commands::Update { id, fields }) => handle_update_command(&mut store, *id, fields),
        Some(Commands::Delete { id }) => handle_delete_command(&mut store, *id),
        Some(Commands::Demo) => handle_demo_command(&mut store),
    }
}

fn handle_list_command(store: &RecordStore) -> Result<()> {
    info!("Listing {} products", store.len());
    if store.is_empty() {
        println!("{}", "No products".dimmed());
        return Ok(());
    }
    println!("{} ({})", "Products:".green(), store.len());
    for product in store.products() {
        print_product(product);
    }
    Ok(())
}

fn handle_add_command(store: &mut RecordStore, fields: &ProductFields) -> Result<()> {
    info!("Adding product: {:?}", fields.code);
    let product = store
        .add_product(fields.to_new_product())
        .context("Failed to add product")?;
    println!("{}", "Added:".green());
    print_product(&product);
    warn_if_unsynced(store);
    Ok(())
}

fn handle_get_command(store: &RecordStore, id: u64) -> Result<()> {
    info!("Getting product: {}", id);
    let product = store.get_product_by_id(id).context("Failed to get product")?;
    println!("{}", "Found:".green());
    print_product(product);
    Ok(())
}

fn handle_update_command(store: &mut RecordStore, id: u64, fields: &ProductFields) -> Result<()> {
    info!("Updating product: {}", id);
    let patch = fields.to_patch();
    if patch.is_empty() {
        println!("{}", "Nothing to update; product rewritten unchanged".yellow());
    }
    let product = store
        .update_product(id, patch)
        .context(format!("Failed to update product {}", id))?;
    println!("{}", "Updated:".green());
    print_product(&product);
    warn_if_unsynced(store);
    Ok(())
}

fn handle_delete_command(store: &mut RecordStore, id: u64) -> Result<()> {
    info!("Deleting product: {}", id);
    let product = store
        .delete_product(id)
        .context(format!("Failed to delete product {}", id))?;
    println!("{}", "Deleted:".red());
    print_product(&product);
    warn_if_unsynced(store);
    Ok(())
}

fn demo_products() -> Vec<NewProduct> {
    vec![
        NewProduct {
            title: "Samsung Z flip".to_string(),
            description: "Celular Samsung Z Flip".to_string(),
            price: 450000.0,
            thumbnail: "ruta/imagen1.jpg".to_string(),
            code: "PROD001".to_string(),
            stock: Some(5),
        },
        NewProduct {
            title: "Motorola Razr ultra".to_string(),
            description: "Celular Motorola plegable".to_string(),
            price: 420000.0,
            thumbnail: "ruta/imagen2.jpg".to_string(),
            code: "PROD002".to_string(),
            stock: Some(3),
        },
        NewProduct {
            title: "iPhone 14".to_string(),
            description: "iPhone 14 Pro".to_string(),
            price: 550000.0,
            thumbnail: "ruta/imagen3.jpg".to_string(),
            code: "PROD003".to_string(),
            stock: Some(5),
        },
    ]
}

/// Outcomes are reported one by one; a failing step does not stop the rest.
fn handle_demo_command(store: &mut RecordStore) -> Result<()> {
    info!("Running demo");

    for candidate in demo_products() {
        report("Added", store.add_product(candidate));
    }

    let patch = ProductPatch::default().price(430000.0).stock(10);
    report("Updated", store.update_product(1, patch));

    report("Deleted", store.delete_product(2));

    warn_if_unsynced(store);
    handle_list_command(store)
}

fn report(action: &str, outcome: productstore::Result<Product>) {
    match outcome {
        Ok(product) => {
            println!("{}", format!("{}:", action).green());
            print_product(&product);
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(config.log_filter()).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
