// src/commands/mod.rs
//! Command handlers for the Recetario CLI

mod ingredient;
mod prepare;
mod recipe;
mod system;

pub use ingredient::{
    IngredientChanges, cmd_ingredient_add, cmd_ingredient_edit, cmd_ingredient_list,
    cmd_ingredient_remove, cmd_ingredient_show,
};
pub use prepare::cmd_prepare;
pub use recipe::{
    RecipeChanges, cmd_recipe_add, cmd_recipe_add_ingredient, cmd_recipe_edit,
    cmd_recipe_edit_ingredient, cmd_recipe_ingredients, cmd_recipe_list, cmd_recipe_remove,
    cmd_recipe_remove_ingredient, cmd_recipe_show,
};
pub use system::{cmd_completions, cmd_init};

use anyhow::{Context, Result};
use recetario::{Config, Cookbook};
use serde::Serialize;

/// Open the recipe book stored at `db_path`
fn open_cookbook(config: &Config, db_path: &str) -> Result<Cookbook> {
    Cookbook::open(config, db_path)
        .with_context(|| format!("Failed to open recipe book at {}", db_path))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Fail with the validator's message when the form was rejected
fn check_form(message: String) -> Result<()> {
    if !message.is_empty() {
        anyhow::bail!("{}", message);
    }
    Ok(())
}

/// Print the outcome of a mutation, failing unless it is `success`
fn finish(message: String, success: &str) -> Result<()> {
    if message != success {
        anyhow::bail!("{}", message);
    }
    println!("{}", message);
    Ok(())
}
