// src/cli/recipe.rs
//! Recipe and recipe ingredient commands

use clap::Subcommand;

#[derive(Subcommand)]
pub enum RecipeCommands {
    /// List all recipes sorted by name
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show a recipe with its ingredients
    Show {
        /// Recipe id
        id: i64,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Add a new recipe
    ///
    /// Preparation time uses the format HH:MM:SS, e.g. 01:30:00
    Add {
        /// Recipe name
        #[arg(long, default_value = "")]
        name: String,

        /// Preparation time (HH:MM:SS)
        #[arg(long, default_value = "")]
        time: String,

        /// Number of diners the recipe serves
        #[arg(long, default_value = "")]
        diners: String,

        /// Calories per serving
        #[arg(long, default_value = "")]
        calories: String,

        /// Preparation instructions
        #[arg(long, default_value = "")]
        preparation: String,
    },

    /// Edit a recipe (unspecified fields keep their value)
    Edit {
        /// Recipe id
        id: i64,

        #[arg(long)]
        name: Option<String>,

        /// Preparation time (HH:MM:SS)
        #[arg(long)]
        time: Option<String>,

        #[arg(long)]
        diners: Option<String>,

        #[arg(long)]
        calories: Option<String>,

        #[arg(long)]
        preparation: Option<String>,
    },

    /// Remove a recipe and its ingredient list
    Remove {
        /// Recipe id
        id: i64,
    },

    /// List the ingredients of a recipe
    Ingredients {
        /// Recipe id
        id: i64,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Add an ingredient to a recipe
    AddIngredient {
        /// Recipe id
        recipe: i64,

        /// Ingredient id
        ingredient: i64,

        /// Quantity in the ingredient's unit
        quantity: String,
    },

    /// Change the quantity of a recipe ingredient or swap the ingredient
    EditIngredient {
        /// Recipe id
        recipe: i64,

        /// Ingredient id currently on the recipe
        ingredient: i64,

        /// Replace the ingredient with this one
        #[arg(long)]
        replace_with: Option<i64>,

        /// New quantity
        #[arg(short, long)]
        quantity: String,
    },

    /// Remove an ingredient from a recipe
    RemoveIngredient {
        /// Recipe id
        recipe: i64,

        /// Ingredient id
        ingredient: i64,
    },
}
