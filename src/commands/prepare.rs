// src/commands/prepare.rs

//! Scaled preparation view

use super::{open_cookbook, print_json};
use anyhow::Result;
use recetario::Config;

/// Show recipe `recipe_id` scaled for `diners`
pub fn cmd_prepare(
    config: &Config,
    db_path: &str,
    recipe_id: i64,
    diners: i64,
    json: bool,
) -> Result<()> {
    let book = open_cookbook(config, db_path)?;
    let prep = book.preparation(recipe_id, diners)?;

    if json {
        return print_json(&prep);
    }

    let currency = book.currency();
    println!("{} for {} diner(s)", prep.recipe, prep.diners);
    println!("  Preparation time: {}", prep.prep_time);
    println!("  Calories per serving: {}", prep.calories);
    println!("  Cost: {}", currency.format(prep.cost));

    if !prep.ingredients.is_empty() {
        println!("  Ingredients:");
        for item in &prep.ingredients {
            println!(
                "    {} {} {} ({} per {})",
                item.quantity,
                item.unit,
                item.name,
                currency.format(item.unit_price),
                item.unit
            );
        }
    }

    Ok(())
}
