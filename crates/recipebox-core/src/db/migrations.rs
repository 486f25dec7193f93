//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS recipes (
    uuid TEXT PRIMARY KEY NOT NULL,
    title TEXT NOT NULL,
    body TEXT NOT NULL,
    post_date INTEGER NOT NULL,
    edit_date INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_recipes_post_date ON recipes (post_date, title);

CREATE TABLE IF NOT EXISTS specials (
    uuid TEXT PRIMARY KEY NOT NULL,
    ingredient_id TEXT NOT NULL,
    title TEXT NOT NULL,
    type TEXT NOT NULL,
    text TEXT NOT NULL DEFAULT ''
);

CREATE INDEX IF NOT EXISTS idx_specials_ingredient ON specials (ingredient_id);
";

impl super::Database {
    /// Creates missing tables and applies migrations for older files.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute_batch(SCHEMA_SQL)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Files written before specials carried promotional text lack the
    /// `text` column.
    fn apply_migrations(&self) -> Result<()> {
        let has_text_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('specials') WHERE name = 'text'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect specials table")?;

        if !has_text_column {
            self.connection
                .execute(
                    "ALTER TABLE specials ADD COLUMN text TEXT NOT NULL DEFAULT ''",
                    [],
                )
                .db_context("Failed to add text column to specials table")?;
        }

        Ok(())
    }
}
