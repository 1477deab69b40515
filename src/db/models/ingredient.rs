// src/db/models/ingredient.rs

//! Ingredient model - purchasable items priced per unit of measure

use crate::error::{Error, Result};
use rusqlite::{Connection, OptionalExtension, Row, params};

const COLUMNS: &str = "id, name, unit, unit_price, purchase_source, created_at";

/// An ingredient as stored. `(name, unit)` is unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub id: Option<i64>,
    pub name: String,
    pub unit: String,
    /// Price of one unit in the smallest currency unit
    pub unit_price: i64,
    pub purchase_source: String,
    pub created_at: Option<String>,
}

impl Ingredient {
    /// Create a new Ingredient
    pub fn new(name: String, unit: String, unit_price: i64, purchase_source: String) -> Self {
        Self {
            id: None,
            name,
            unit,
            unit_price,
            purchase_source,
            created_at: None,
        }
    }

    /// Insert this ingredient into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO ingredients (name, unit, unit_price, purchase_source)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                &self.name,
                &self.unit,
                &self.unit_price,
                &self.purchase_source,
            ],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Write every field back to the row with this ingredient's ID
    pub fn update(&self, conn: &Connection) -> Result<()> {
        let id = self
            .id
            .ok_or_else(|| Error::InitError("Cannot update ingredient without ID".to_string()))?;

        let changed = conn.execute(
            "UPDATE ingredients SET name = ?1, unit = ?2, unit_price = ?3, purchase_source = ?4
             WHERE id = ?5",
            params![
                &self.name,
                &self.unit,
                &self.unit_price,
                &self.purchase_source,
                id,
            ],
        )?;

        if changed == 0 {
            return Err(Error::not_found(format!("ingredient {}", id)));
        }
        Ok(())
    }

    /// Find an ingredient by ID
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let sql = format!("SELECT {COLUMNS} FROM ingredients WHERE id = ?1");
        let ingredient = conn.query_row(&sql, [id], Self::from_row).optional()?;
        Ok(ingredient)
    }

    /// Find ingredients matching both name and unit exactly
    pub fn find_by_name_and_unit(conn: &Connection, name: &str, unit: &str) -> Result<Vec<Self>> {
        let sql = format!("SELECT {COLUMNS} FROM ingredients WHERE name = ?1 AND unit = ?2");
        let mut stmt = conn.prepare(&sql)?;

        let ingredients = stmt
            .query_map([name, unit], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(ingredients)
    }

    /// List all ingredients ordered by name, then unit
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let sql = format!("SELECT {COLUMNS} FROM ingredients ORDER BY name, unit, id");
        let mut stmt = conn.prepare(&sql)?;

        let ingredients = stmt
            .query_map([], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(ingredients)
    }

    /// Count recipes referencing this ingredient
    pub fn recipe_count(conn: &Connection, id: i64) -> Result<i64> {
        let count = conn.query_row(
            "SELECT COUNT(*) FROM recipe_ingredients WHERE ingredient_id = ?1",
            [id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Delete an ingredient by ID, returning whether a row was removed
    pub fn delete(conn: &Connection, id: i64) -> Result<bool> {
        let removed = conn.execute("DELETE FROM ingredients WHERE id = ?1", [id])?;
        Ok(removed > 0)
    }

    /// Convert a database row to an Ingredient
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            unit: row.get(2)?,
            unit_price: row.get(3)?,
            purchase_source: row.get(4)?,
            created_at: row.get(5)?,
        })
    }
}
