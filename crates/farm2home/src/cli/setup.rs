use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "farm2home", bin_name = "farm2home", version)]
#[command(about = "Fresh produce from local farmers: storefront cart and farmer portal")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the cart and farmer data
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse fresh produce
    #[command(alias = "ls", args_conflicts_with_subcommands = true)]
    Products {
        #[command(subcommand)]
        action: Option<ProductCommands>,

        /// Only show this category (e.g. Vegetables, Dairy)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List product categories
    Categories,

    /// Today's top deals
    Deals,

    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartCommands,
    },

    /// Farmer portal: register and manage farmers
    Farmers {
        #[command(subcommand)]
        action: FarmerCommands,
    },

    /// Clear the cart and the farmer registry
    Reset {
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProductCommands {
    /// Show one product's details
    #[command(alias = "view")]
    Show { product_id: u32 },
}

#[derive(Subcommand, Debug)]
pub enum CartCommands {
    /// Add one unit of a product to the cart
    Add {
        /// Product id (see `farm2home products`)
        product_id: u32,
    },

    /// Show the cart
    #[command(alias = "view")]
    Show,

    /// Remove a product from the cart
    #[command(alias = "rm")]
    Remove { product_id: u32 },

    /// Set a product's quantity (0 removes it)
    Set { product_id: u32, quantity: u32 },
}

#[derive(Subcommand, Debug)]
pub enum FarmerCommands {
    /// Register a new farmer
    #[command(alias = "add")]
    Register {
        /// Farmer full name
        #[arg(long, default_value = "")]
        name: String,

        /// 10-digit mobile number
        #[arg(long, default_value = "")]
        mobile: String,

        /// Village / town / city
        #[arg(long, default_value = "")]
        location: String,

        /// Main crops, e.g. "Tomatoes, Brinjal, Paddy"
        #[arg(long, default_value = "")]
        crops: String,
    },

    /// List registered farmers, newest first
    #[command(alias = "ls")]
    List,

    /// Remove a farmer from the list
    #[command(alias = "rm")]
    Remove {
        /// Farmer id (see `farm2home farmers list`)
        id: u64,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}
