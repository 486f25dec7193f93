//! Recipe CRUD operations and queries.

use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, RecipeError, Result},
    models::{Recipe, RecipeId},
};

const INSERT_RECIPE_SQL: &str =
    "INSERT INTO recipes (uuid, title, body, post_date, edit_date) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPDATE_RECIPE_SQL: &str =
    "UPDATE recipes SET title = ?2, body = ?3, post_date = ?4, edit_date = ?5 WHERE uuid = ?1";
const SELECT_RECIPE_SQL: &str = "SELECT body FROM recipes WHERE uuid = ?1";
const LIST_RECIPES_SQL: &str = "SELECT body FROM recipes ORDER BY post_date ASC, title ASC";
const DELETE_RECIPE_SQL: &str = "DELETE FROM recipes WHERE uuid = ?1";

impl super::Database {
    /// Stores a new recipe. Fails if a recipe with the same id exists.
    pub fn insert_recipe(&self, recipe: &Recipe) -> Result<()> {
        let body = serde_json::to_string(recipe)?;

        self.connection
            .execute(
                INSERT_RECIPE_SQL,
                params![
                    recipe.id.to_string(),
                    recipe.title,
                    body,
                    recipe.post_date.as_microsecond(),
                    recipe.edit_date.as_microsecond()
                ],
            )
            .db_context("Failed to insert recipe")?;

        Ok(())
    }

    /// Replaces the stored recipe with the same id.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::RecipeNotFound` if no such recipe is stored.
    pub fn update_recipe(&self, recipe: &Recipe) -> Result<()> {
        let body = serde_json::to_string(recipe)?;

        let updated = self
            .connection
            .execute(
                UPDATE_RECIPE_SQL,
                params![
                    recipe.id.to_string(),
                    recipe.title,
                    body,
                    recipe.post_date.as_microsecond(),
                    recipe.edit_date.as_microsecond()
                ],
            )
            .db_context("Failed to update recipe")?;

        if updated == 0 {
            return Err(RecipeError::RecipeNotFound {
                id: recipe.id.to_string(),
            });
        }

        Ok(())
    }

    /// Retrieves a recipe by its id.
    pub fn get_recipe(&self, id: RecipeId) -> Result<Option<Recipe>> {
        let body: Option<String> = self
            .connection
            .query_row(SELECT_RECIPE_SQL, params![id.to_string()], |row| row.get(0))
            .optional()
            .db_context("Failed to query recipe")?;

        match body {
            Some(body) => Ok(Some(serde_json::from_str(&body)?)),
            None => Ok(None),
        }
    }

    /// Lists every recipe, oldest post first, ties broken by title.
    pub fn list_recipes(&self) -> Result<Vec<Recipe>> {
        let mut stmt = self
            .connection
            .prepare(LIST_RECIPES_SQL)
            .db_context("Failed to prepare query")?;

        let bodies = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .db_context("Failed to query recipes")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read recipe rows")?;

        bodies
            .iter()
            .map(|body| serde_json::from_str(body).map_err(RecipeError::from))
            .collect()
    }

    /// Deletes a recipe. Returns whether a row was removed.
    pub fn delete_recipe(&self, id: RecipeId) -> Result<bool> {
        let deleted = self
            .connection
            .execute(DELETE_RECIPE_SQL, params![id.to_string()])
            .db_context("Failed to delete recipe")?;

        Ok(deleted > 0)
    }
}
