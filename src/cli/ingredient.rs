// src/cli/ingredient.rs
//! Ingredient catalog commands

use clap::Subcommand;

#[derive(Subcommand)]
pub enum IngredientCommands {
    /// List all ingredients sorted by name and unit
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show one ingredient
    Show {
        /// Ingredient id
        id: i64,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Add a new ingredient
    Add {
        /// Ingredient name
        #[arg(long, default_value = "")]
        name: String,

        /// Unit the price refers to (kg, g, l, ...)
        #[arg(long, default_value = "")]
        unit: String,

        /// Price per unit, e.g. 4000 or "$4,000"
        #[arg(long, default_value = "")]
        price: String,

        /// Where the ingredient is bought
        #[arg(long, default_value = "")]
        source: String,
    },

    /// Edit an ingredient (unspecified fields keep their value)
    Edit {
        /// Ingredient id
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        unit: Option<String>,

        #[arg(long)]
        price: Option<String>,

        #[arg(long)]
        source: Option<String>,
    },

    /// Remove an ingredient from the catalog and from every recipe
    Remove {
        /// Ingredient id
        id: i64,
    },
}
