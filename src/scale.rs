// src/scale.rs

//! Recipe scaling for a number of diners
//!
//! A recipe's stored time is meant for its base diner count `PB`. Cooking
//! for `n <= PB` diners shrinks the time linearly, down to half of the base
//! time for a single diner:
//!
//! ```text
//! TPP = TR - ((PB - n) / (2 * PB)) * TR
//! ```
//!
//! Any party larger than `PB` takes a flat two thirds of the base time.
//! The cost is the plain sum of the unit prices of the recipe's ingredients;
//! quantities are reported but do not enter the total.

use crate::db::models::{Recipe, RecipeIngredient};
use crate::prep_time::PrepTime;
use rusqlite::Connection;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Why a preparation could not be computed
#[derive(Error, Debug)]
pub enum ScaleError {
    #[error("recipe {recipe_id} not found")]
    NotFound { recipe_id: i64 },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("computation failed: {0}")]
    Computation(String),

    #[error("store error: {0}")]
    Store(#[from] crate::Error),
}

/// A recipe scaled for a number of diners
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preparation {
    pub recipe: String,
    pub diners: i64,
    /// Calories per serving, unchanged by scaling
    pub calories: i64,
    /// Sum of the unit prices of every ingredient
    pub cost: i64,
    pub prep_time: PrepTime,
    pub ingredients: Vec<PreparationIngredient>,
}

/// One ingredient line of a [`Preparation`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreparationIngredient {
    pub name: String,
    pub unit: String,
    pub quantity: i64,
    pub unit_price: i64,
}

/// Scale a base time of `base_seconds` for `base_diners` to `target_diners`
///
/// The result is rounded to the nearest second.
pub fn scaled_seconds(
    base_seconds: u32,
    base_diners: i64,
    target_diners: i64,
) -> Result<u32, ScaleError> {
    if base_diners < 1 {
        return Err(ScaleError::InvalidInput(format!(
            "recipe base diners must be at least 1, found {}",
            base_diners
        )));
    }
    if target_diners < 1 {
        return Err(ScaleError::InvalidInput(format!(
            "number of diners must be at least 1, got {}",
            target_diners
        )));
    }

    let tr = f64::from(base_seconds);
    let pb = base_diners as f64;
    let n = target_diners as f64;

    let tpp = if target_diners <= base_diners {
        tr - ((pb - n) / (2.0 * pb)) * tr
    } else {
        (2.0 * tr) / 3.0
    };

    if !tpp.is_finite() || tpp < 0.0 || tpp > f64::from(u32::MAX) {
        return Err(ScaleError::Computation(format!(
            "scaled time out of range: {}",
            tpp
        )));
    }

    Ok(tpp.round() as u32)
}

/// Compute the preparation of recipe `recipe_id` for `target_diners`
pub fn compute_preparation(
    conn: &Connection,
    recipe_id: i64,
    target_diners: i64,
) -> Result<Preparation, ScaleError> {
    let recipe =
        Recipe::find_by_id(conn, recipe_id)?.ok_or(ScaleError::NotFound { recipe_id })?;

    let seconds = scaled_seconds(recipe.prep_time.as_seconds(), recipe.diners, target_diners)?;

    let lines = RecipeIngredient::lines_for_recipe(conn, recipe_id)?;
    let cost = lines
        .iter()
        .try_fold(0i64, |total, line| total.checked_add(line.unit_price))
        .ok_or_else(|| ScaleError::Computation("total cost overflow".to_string()))?;

    debug!(
        "Scaled '{}' from {} to {} diners: {}s -> {}s, cost {}",
        recipe.name,
        recipe.diners,
        target_diners,
        recipe.prep_time.as_seconds(),
        seconds,
        cost
    );

    Ok(Preparation {
        recipe: recipe.name,
        diners: target_diners,
        calories: recipe.calories,
        cost,
        prep_time: PrepTime::from_seconds(seconds),
        ingredients: lines
            .into_iter()
            .map(|line| PreparationIngredient {
                name: line.name,
                unit: line.unit,
                quantity: line.quantity,
                unit_price: line.unit_price,
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::db::models::Ingredient;

    #[test]
    fn test_scaling_at_and_below_base() {
        assert_eq!(scaled_seconds(3600, 4, 4).unwrap(), 3600);
        assert_eq!(scaled_seconds(3600, 4, 2).unwrap(), 2700);
        assert_eq!(scaled_seconds(3600, 4, 1).unwrap(), 2250);
        // One diner from a base of one is the base time
        assert_eq!(scaled_seconds(1800, 1, 1).unwrap(), 1800);
    }

    #[test]
    fn test_scaling_above_base_is_flat() {
        assert_eq!(scaled_seconds(3600, 4, 5).unwrap(), 2400);
        assert_eq!(scaled_seconds(3600, 4, 10).unwrap(), 2400);
        assert_eq!(scaled_seconds(3600, 4, 1000).unwrap(), 2400);
    }

    #[test]
    fn test_scaling_rounds_to_seconds() {
        // 100 * 2 / 3 = 66.67
        assert_eq!(scaled_seconds(100, 1, 2).unwrap(), 67);
        // 45 - (2/6) * 45 = 30
        assert_eq!(scaled_seconds(45, 3, 1).unwrap(), 30);
    }

    #[test]
    fn test_scaling_rejects_bad_diners() {
        assert!(matches!(
            scaled_seconds(3600, 0, 2),
            Err(ScaleError::InvalidInput(_))
        ));
        assert!(matches!(
            scaled_seconds(3600, 4, 0),
            Err(ScaleError::InvalidInput(_))
        ));
        assert!(matches!(
            scaled_seconds(3600, 4, -3),
            Err(ScaleError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_compute_preparation() {
        let conn = db::open_in_memory().unwrap();
        let recipe_id = Recipe::new(
            "Ajiaco".to_string(),
            PrepTime::from_seconds(3600),
            4,
            500,
            "Boil".to_string(),
        )
        .insert(&conn)
        .unwrap();

        let potato = Ingredient::new("Potato".into(), "kg".into(), 3000, "Market".into())
            .insert(&conn)
            .unwrap();
        let chicken = Ingredient::new("Chicken".into(), "kg".into(), 12000, "Butcher".into())
            .insert(&conn)
            .unwrap();
        RecipeIngredient::new(recipe_id, potato, 2).insert(&conn).unwrap();
        RecipeIngredient::new(recipe_id, chicken, 3).insert(&conn).unwrap();

        let prep = compute_preparation(&conn, recipe_id, 2).unwrap();
        assert_eq!(prep.recipe, "Ajiaco");
        assert_eq!(prep.diners, 2);
        assert_eq!(prep.calories, 500);
        assert_eq!(prep.prep_time.to_string(), "00:45:00");
        // Unit prices are summed without quantities
        assert_eq!(prep.cost, 15000);
        assert_eq!(prep.ingredients.len(), 2);
        assert_eq!(prep.ingredients[0].name, "Chicken");
        assert_eq!(prep.ingredients[0].quantity, 3);
        assert_eq!(prep.ingredients[1].unit_price, 3000);

        let big = compute_preparation(&conn, recipe_id, 10).unwrap();
        assert_eq!(big.prep_time.as_seconds(), 2400);
    }

    #[test]
    fn test_compute_preparation_without_ingredients() {
        let conn = db::open_in_memory().unwrap();
        let recipe_id = Recipe::new(
            "Tea".to_string(),
            PrepTime::from_seconds(300),
            1,
            5,
            "Steep".to_string(),
        )
        .insert(&conn)
        .unwrap();

        let prep = compute_preparation(&conn, recipe_id, 1).unwrap();
        assert_eq!(prep.cost, 0);
        assert!(prep.ingredients.is_empty());
    }

    #[test]
    fn test_compute_preparation_missing_recipe() {
        let conn = db::open_in_memory().unwrap();
        assert!(matches!(
            compute_preparation(&conn, 77, 2),
            Err(ScaleError::NotFound { recipe_id: 77 })
        ));
    }
}
