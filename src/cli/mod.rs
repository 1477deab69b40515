// src/cli/mod.rs
//! CLI definitions for the Recetario recipe book
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.
//!
//! - `init` - Create or migrate the database
//! - `recipe` - Recipes and the ingredients they use
//! - `ingredient` - The ingredient catalog
//! - `prepare` - Scale a recipe for a number of diners
//! - `completions` - Shell completion scripts

use clap::{Parser, Subcommand};
use clap_complete::Shell;

mod ingredient;
mod recipe;

pub use ingredient::IngredientCommands;
pub use recipe::RecipeCommands;

#[derive(Parser)]
#[command(name = "recetario")]
#[command(version)]
#[command(about = "A recipe book that scales preparations for any number of diners", long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Path to the database file (overrides the configuration)
    #[arg(short, long, global = true)]
    pub db_path: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the recipe database
    Init,

    /// Recipe management
    #[command(subcommand)]
    Recipe(RecipeCommands),

    /// Ingredient catalog management
    #[command(subcommand)]
    Ingredient(IngredientCommands),

    /// Show a recipe scaled for a number of diners
    #[command(allow_negative_numbers = true)]
    Prepare {
        /// Recipe id
        recipe: i64,

        /// Number of diners to cook for
        diners: i64,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
