// src/db/models/recipe.rs

//! Recipe model - named dishes with a base time and diner count

use crate::error::{Error, Result};
use crate::prep_time::PrepTime;
use rusqlite::{Connection, OptionalExtension, Row, params};

const COLUMNS: &str = "id, name, prep_time, diners, calories, preparation, created_at";

/// A recipe as stored
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: Option<i64>,
    pub name: String,
    pub prep_time: PrepTime,
    /// Number of diners `prep_time` is meant for
    pub diners: i64,
    /// Calories per serving
    pub calories: i64,
    pub preparation: String,
    pub created_at: Option<String>,
}

impl Recipe {
    /// Create a new Recipe
    pub fn new(
        name: String,
        prep_time: PrepTime,
        diners: i64,
        calories: i64,
        preparation: String,
    ) -> Self {
        Self {
            id: None,
            name,
            prep_time,
            diners,
            calories,
            preparation,
            created_at: None,
        }
    }

    /// Insert this recipe into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO recipes (name, prep_time, diners, calories, preparation)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                &self.name,
                &self.prep_time,
                &self.diners,
                &self.calories,
                &self.preparation,
            ],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Write every field back to the row with this recipe's ID
    pub fn update(&self, conn: &Connection) -> Result<()> {
        let id = self
            .id
            .ok_or_else(|| Error::InitError("Cannot update recipe without ID".to_string()))?;

        let changed = conn.execute(
            "UPDATE recipes SET name = ?1, prep_time = ?2, diners = ?3, calories = ?4,
             preparation = ?5 WHERE id = ?6",
            params![
                &self.name,
                &self.prep_time,
                &self.diners,
                &self.calories,
                &self.preparation,
                id,
            ],
        )?;

        if changed == 0 {
            return Err(Error::not_found(format!("recipe {}", id)));
        }
        Ok(())
    }

    /// Find a recipe by ID
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let sql = format!("SELECT {COLUMNS} FROM recipes WHERE id = ?1");
        let recipe = conn.query_row(&sql, [id], Self::from_row).optional()?;
        Ok(recipe)
    }

    /// Find recipes with exactly this name
    pub fn find_by_name(conn: &Connection, name: &str) -> Result<Vec<Self>> {
        let sql = format!("SELECT {COLUMNS} FROM recipes WHERE name = ?1");
        let mut stmt = conn.prepare(&sql)?;

        let recipes = stmt
            .query_map([name], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(recipes)
    }

    /// List all recipes ordered by name
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let sql = format!("SELECT {COLUMNS} FROM recipes ORDER BY name, id");
        let mut stmt = conn.prepare(&sql)?;

        let recipes = stmt
            .query_map([], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(recipes)
    }

    /// Count stored recipes
    pub fn count(conn: &Connection) -> Result<i64> {
        let count = conn.query_row("SELECT COUNT(*) FROM recipes", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Delete a recipe by ID, returning whether a row was removed
    pub fn delete(conn: &Connection, id: i64) -> Result<bool> {
        let removed = conn.execute("DELETE FROM recipes WHERE id = ?1", [id])?;
        Ok(removed > 0)
    }

    /// Convert a database row to a Recipe
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            prep_time: row.get(2)?,
            diners: row.get(3)?,
            calories: row.get(4)?,
            preparation: row.get(5)?,
            created_at: row.get(6)?,
        })
    }
}
