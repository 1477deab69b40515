// src/db/models/recipe_ingredient.rs

//! Recipe ingredient model - how much of an ingredient a recipe uses
//!
//! Rows are keyed by `(recipe_id, ingredient_id)` and disappear with either
//! parent through `ON DELETE CASCADE`.

use crate::error::Result;
use rusqlite::{Connection, OptionalExtension, Row, params};

/// Association between a recipe and one of its ingredients
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeIngredient {
    pub recipe_id: i64,
    pub ingredient_id: i64,
    pub quantity: i64,
}

/// A recipe's ingredient joined with the ingredient row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientLine {
    pub ingredient_id: i64,
    pub name: String,
    pub unit: String,
    pub unit_price: i64,
    pub quantity: i64,
}

impl RecipeIngredient {
    /// Create a new RecipeIngredient
    pub fn new(recipe_id: i64, ingredient_id: i64, quantity: i64) -> Self {
        Self {
            recipe_id,
            ingredient_id,
            quantity,
        }
    }

    /// Insert this association into the database
    pub fn insert(&self, conn: &Connection) -> Result<()> {
        conn.execute(
            "INSERT INTO recipe_ingredients (recipe_id, ingredient_id, quantity)
             VALUES (?1, ?2, ?3)",
            params![self.recipe_id, self.ingredient_id, self.quantity],
        )?;
        Ok(())
    }

    /// Find the association for a (recipe, ingredient) pair
    pub fn find_by_pair(
        conn: &Connection,
        recipe_id: i64,
        ingredient_id: i64,
    ) -> Result<Option<Self>> {
        let mut stmt = conn.prepare(
            "SELECT recipe_id, ingredient_id, quantity FROM recipe_ingredients
             WHERE recipe_id = ?1 AND ingredient_id = ?2",
        )?;

        let entry = stmt
            .query_row([recipe_id, ingredient_id], Self::from_row)
            .optional()?;
        Ok(entry)
    }

    /// All associations of a recipe
    pub fn find_by_recipe(conn: &Connection, recipe_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT recipe_id, ingredient_id, quantity FROM recipe_ingredients
             WHERE recipe_id = ?1 ORDER BY ingredient_id",
        )?;

        let entries = stmt
            .query_map([recipe_id], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// Ingredients of a recipe with their names, units and prices,
    /// ordered by ingredient name then unit
    pub fn lines_for_recipe(conn: &Connection, recipe_id: i64) -> Result<Vec<IngredientLine>> {
        let mut stmt = conn.prepare(
            "SELECT i.id, i.name, i.unit, i.unit_price, ri.quantity
             FROM recipe_ingredients ri
             JOIN ingredients i ON i.id = ri.ingredient_id
             WHERE ri.recipe_id = ?1
             ORDER BY i.name, i.unit",
        )?;

        let lines = stmt
            .query_map([recipe_id], |row| {
                Ok(IngredientLine {
                    ingredient_id: row.get(0)?,
                    name: row.get(1)?,
                    unit: row.get(2)?,
                    unit_price: row.get(3)?,
                    quantity: row.get(4)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(lines)
    }

    /// Move this association to `ingredient_id` with a new quantity
    ///
    /// `self` identifies the existing row; returns whether it was found.
    pub fn replace(&self, conn: &Connection, ingredient_id: i64, quantity: i64) -> Result<bool> {
        let changed = conn.execute(
            "UPDATE recipe_ingredients SET ingredient_id = ?1, quantity = ?2
             WHERE recipe_id = ?3 AND ingredient_id = ?4",
            params![ingredient_id, quantity, self.recipe_id, self.ingredient_id],
        )?;
        Ok(changed > 0)
    }

    /// Delete one association, returning whether a row was removed
    pub fn delete(conn: &Connection, recipe_id: i64, ingredient_id: i64) -> Result<bool> {
        let removed = conn.execute(
            "DELETE FROM recipe_ingredients WHERE recipe_id = ?1 AND ingredient_id = ?2",
            [recipe_id, ingredient_id],
        )?;
        Ok(removed > 0)
    }

    /// Delete every association of a recipe
    pub fn delete_by_recipe(conn: &Connection, recipe_id: i64) -> Result<usize> {
        let removed = conn.execute(
            "DELETE FROM recipe_ingredients WHERE recipe_id = ?1",
            [recipe_id],
        )?;
        Ok(removed)
    }

    /// Delete every association referencing an ingredient
    pub fn delete_by_ingredient(conn: &Connection, ingredient_id: i64) -> Result<usize> {
        let removed = conn.execute(
            "DELETE FROM recipe_ingredients WHERE ingredient_id = ?1",
            [ingredient_id],
        )?;
        Ok(removed)
    }

    /// Convert a database row to a RecipeIngredient
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            recipe_id: row.get(0)?,
            ingredient_id: row.get(1)?,
            quantity: row.get(2)?,
        })
    }
}
