// src/db/models/mod.rs

//! Data models for Recetario database entities
//!
//! This module defines Rust structs that correspond to database tables
//! and provides methods for creating, reading, updating, and deleting records.

mod ingredient;
mod recipe;
mod recipe_ingredient;

pub use ingredient::Ingredient;
pub use recipe::Recipe;
pub use recipe_ingredient::{IngredientLine, RecipeIngredient};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema;
    use crate::prep_time::PrepTime;
    use rusqlite::Connection;
    use tempfile::NamedTempFile;

    fn create_test_db() -> (NamedTempFile, Connection) {
        let temp_file = NamedTempFile::new().unwrap();
        let conn = Connection::open(temp_file.path()).unwrap();
        conn.execute("PRAGMA foreign_keys = ON", []).unwrap();
        schema::migrate(&conn).unwrap();
        (temp_file, conn)
    }

    fn ajiaco() -> Recipe {
        Recipe::new(
            "Ajiaco".to_string(),
            PrepTime::from_seconds(3600),
            4,
            500,
            "Boil everything".to_string(),
        )
    }

    #[test]
    fn test_recipe_crud() {
        let (_temp, conn) = create_test_db();

        let mut recipe = ajiaco();
        let id = recipe.insert(&conn).unwrap();
        assert!(id > 0);
        assert_eq!(recipe.id, Some(id));

        let found = Recipe::find_by_id(&conn, id).unwrap().unwrap();
        assert_eq!(found.name, "Ajiaco");
        assert_eq!(found.prep_time.as_seconds(), 3600);
        assert_eq!(found.diners, 4);
        assert!(found.created_at.is_some());

        let mut edited = found.clone();
        edited.diners = 6;
        edited.prep_time = PrepTime::from_seconds(4500);
        edited.update(&conn).unwrap();
        let reloaded = Recipe::find_by_id(&conn, id).unwrap().unwrap();
        assert_eq!(reloaded.diners, 6);
        assert_eq!(reloaded.prep_time.to_string(), "01:15:00");

        assert_eq!(Recipe::find_by_name(&conn, "Ajiaco").unwrap().len(), 1);
        assert_eq!(Recipe::count(&conn).unwrap(), 1);

        assert!(Recipe::delete(&conn, id).unwrap());
        assert!(Recipe::find_by_id(&conn, id).unwrap().is_none());
        assert!(!Recipe::delete(&conn, id).unwrap());
    }

    #[test]
    fn test_recipe_name_is_unique() {
        let (_temp, conn) = create_test_db();

        ajiaco().insert(&conn).unwrap();
        let err = ajiaco().insert(&conn).unwrap_err();
        assert!(err.is_constraint_violation());
    }

    #[test]
    fn test_recipe_update_missing_row() {
        let (_temp, conn) = create_test_db();

        let mut recipe = ajiaco();
        recipe.id = Some(42);
        assert!(matches!(
            recipe.update(&conn),
            Err(crate::Error::NotFound(_))
        ));
    }

    #[test]
    fn test_ingredient_crud_and_ordering() {
        let (_temp, conn) = create_test_db();

        for (name, unit) in [("Rice", "kg"), ("Potato", "kg"), ("Rice", "g")] {
            Ingredient::new(name.to_string(), unit.to_string(), 1000, "Market".to_string())
                .insert(&conn)
                .unwrap();
        }

        let all = Ingredient::list_all(&conn).unwrap();
        let keys: Vec<_> = all.iter().map(|i| (i.name.as_str(), i.unit.as_str())).collect();
        assert_eq!(keys, vec![("Potato", "kg"), ("Rice", "g"), ("Rice", "kg")]);

        let rice_kg = Ingredient::find_by_name_and_unit(&conn, "Rice", "kg").unwrap();
        assert_eq!(rice_kg.len(), 1);

        let mut edited = rice_kg[0].clone();
        edited.unit_price = 4200;
        edited.update(&conn).unwrap();
        let reloaded = Ingredient::find_by_id(&conn, edited.id.unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(reloaded.unit_price, 4200);
    }

    #[test]
    fn test_ingredient_name_unit_unique() {
        let (_temp, conn) = create_test_db();

        let mut a = Ingredient::new("Rice".into(), "kg".into(), 1, "Market".into());
        a.insert(&conn).unwrap();
        let mut b = Ingredient::new("Rice".into(), "kg".into(), 2, "Shop".into());
        assert!(b.insert(&conn).unwrap_err().is_constraint_violation());
    }

    #[test]
    fn test_recipe_ingredient_lines_and_cascade() {
        let (_temp, conn) = create_test_db();

        let recipe_id = ajiaco().insert(&conn).unwrap();
        let potato = Ingredient::new("Potato".into(), "kg".into(), 3000, "Market".into())
            .insert(&conn)
            .unwrap();
        let chicken = Ingredient::new("Chicken".into(), "kg".into(), 12000, "Butcher".into())
            .insert(&conn)
            .unwrap();

        RecipeIngredient::new(recipe_id, potato, 2).insert(&conn).unwrap();
        RecipeIngredient::new(recipe_id, chicken, 1).insert(&conn).unwrap();

        let lines = RecipeIngredient::lines_for_recipe(&conn, recipe_id).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].name, "Chicken");
        assert_eq!(lines[1].name, "Potato");
        assert_eq!(lines[1].quantity, 2);

        assert_eq!(Ingredient::recipe_count(&conn, potato).unwrap(), 1);

        // Deleting the recipe cascades to its associations
        Recipe::delete(&conn, recipe_id).unwrap();
        assert!(RecipeIngredient::find_by_recipe(&conn, recipe_id).unwrap().is_empty());
        assert_eq!(Ingredient::recipe_count(&conn, potato).unwrap(), 0);
    }

    #[test]
    fn test_recipe_ingredient_pair_is_unique() {
        let (_temp, conn) = create_test_db();

        let recipe_id = ajiaco().insert(&conn).unwrap();
        let potato = Ingredient::new("Potato".into(), "kg".into(), 3000, "Market".into())
            .insert(&conn)
            .unwrap();

        RecipeIngredient::new(recipe_id, potato, 2).insert(&conn).unwrap();
        let err = RecipeIngredient::new(recipe_id, potato, 5)
            .insert(&conn)
            .unwrap_err();
        assert!(err.is_constraint_violation());
    }

    #[test]
    fn test_recipe_ingredient_replace() {
        let (_temp, conn) = create_test_db();

        let recipe_id = ajiaco().insert(&conn).unwrap();
        let potato = Ingredient::new("Potato".into(), "kg".into(), 3000, "Market".into())
            .insert(&conn)
            .unwrap();
        let yuca = Ingredient::new("Yuca".into(), "kg".into(), 2500, "Market".into())
            .insert(&conn)
            .unwrap();

        let entry = RecipeIngredient::new(recipe_id, potato, 2);
        entry.insert(&conn).unwrap();
        assert!(entry.replace(&conn, yuca, 3).unwrap());

        assert!(RecipeIngredient::find_by_pair(&conn, recipe_id, potato).unwrap().is_none());
        let moved = RecipeIngredient::find_by_pair(&conn, recipe_id, yuca)
            .unwrap()
            .unwrap();
        assert_eq!(moved.quantity, 3);

        assert!(RecipeIngredient::delete(&conn, recipe_id, yuca).unwrap());
        assert!(!RecipeIngredient::delete(&conn, recipe_id, yuca).unwrap());
    }
}
