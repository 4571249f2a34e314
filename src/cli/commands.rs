//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - add / get / update / delete: one store operation each
//! - list: print every product
//! - demo: populate sample data, then update and delete

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use productstore::{NewProduct, ProductPatch};

/// productstore - a file-persisted product catalog
#[derive(Parser, Debug)]
#[command(name = "productstore")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backing JSON file (overrides the configured path)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute (defaults to list)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new product
    Add {
        #[command(flatten)]
        fields: ProductFields,
    },

    /// Show a product by id
    Get {
        /// Product id
        id: u64,
    },

    /// Overwrite some fields of a product
    Update {
        /// Product id
        id: u64,

        #[command(flatten)]
        fields: ProductFields,
    },

    /// Delete a product by id
    Delete {
        /// Product id
        id: u64,
    },

    /// List all products
    List,

    /// Add three sample products, update one and delete another
    Demo,
}

/// Product fields as flags. All optional so the store reports what is missing.
#[derive(Args, Debug, Clone, Default)]
pub struct ProductFields {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long, value_parser = parse_price)]
    pub price: Option<f64>,

    #[arg(long)]
    pub thumbnail: Option<String>,

    #[arg(long)]
    pub code: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub stock: Option<i64>,
}

/// Prices must be finite; `inf` and `NaN` parse as f64 but cannot be stored as JSON.
fn parse_price(value: &str) -> Result<f64, String> {
    let price: f64 = value.parse().map_err(|e| format!("{}", e))?;
    if price.is_finite() {
        Ok(price)
    } else {
        Err(format!("price must be a finite number, got {}", value))
    }
}

impl ProductFields {
    /// Candidate for insertion; absent text fields become empty strings
    pub fn to_new_product(&self) -> NewProduct {
        NewProduct {
            title: self.title.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            thumbnail: self.thumbnail.clone().unwrap_or_default(),
            code: self.code.clone().unwrap_or_default(),
            stock: self.stock,
        }
    }

    pub fn to_patch(&self) -> ProductPatch {
        ProductPatch {
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.price,
            thumbnail: self.thumbnail.clone(),
            code: self.code.clone(),
            stock: self.stock,
        }
    }
}
