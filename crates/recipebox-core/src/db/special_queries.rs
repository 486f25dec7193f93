//! Special storage and queries.

use rusqlite::{params, types::Type};
use uuid::Uuid;

use crate::{
    error::{DatabaseResultExt, Result},
    models::{IngredientId, Special},
};

const INSERT_SPECIAL_SQL: &str =
    "INSERT INTO specials (uuid, ingredient_id, title, type, text) VALUES (?1, ?2, ?3, ?4, ?5)";
const LIST_SPECIALS_SQL: &str =
    "SELECT uuid, ingredient_id, title, type, text FROM specials ORDER BY rowid ASC";
const DELETE_SPECIAL_SQL: &str = "DELETE FROM specials WHERE uuid = ?1";

fn parse_uuid(column: usize, value: String) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(&value)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
}

impl super::Database {
    /// Stores a special.
    pub fn insert_special(&self, special: &Special) -> Result<()> {
        self.connection
            .execute(
                INSERT_SPECIAL_SQL,
                params![
                    special.id.to_string(),
                    special.ingredient_id.to_string(),
                    special.title,
                    special.kind,
                    special.text
                ],
            )
            .db_context("Failed to insert special")?;

        Ok(())
    }

    /// Lists specials in insertion order.
    pub fn list_specials(&self) -> Result<Vec<Special>> {
        let mut stmt = self
            .connection
            .prepare(LIST_SPECIALS_SQL)
            .db_context("Failed to prepare query")?;

        let specials = stmt
            .query_map([], |row| {
                Ok(Special {
                    id: parse_uuid(0, row.get(0)?)?,
                    ingredient_id: IngredientId::from(parse_uuid(1, row.get(1)?)?),
                    title: row.get(2)?,
                    kind: row.get(3)?,
                    text: row.get(4)?,
                })
            })
            .db_context("Failed to query specials")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read special rows")?;

        Ok(specials)
    }

    /// Deletes a special. Returns whether a row was removed.
    pub fn delete_special(&self, id: Uuid) -> Result<bool> {
        let deleted = self
            .connection
            .execute(DELETE_SPECIAL_SQL, params![id.to_string()])
            .db_context("Failed to delete special")?;

        Ok(deleted > 0)
    }
}
