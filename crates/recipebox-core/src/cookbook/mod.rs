//! Local recipe collection with an async API.
//!
//! [`Cookbook`] is the persistence collaborator used by the CLI. Every call
//! opens the SQLite file on a blocking task, runs one query batch and
//! returns, so a `Cookbook` is cheap to share between tasks.
//!
//! ```rust
//! use recipebox_core::{CookbookBuilder, draft::RecipeDraft};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let cookbook = CookbookBuilder::new()
//!     .with_database_path(Some("/tmp/recipebox-doc.db"))
//!     .build()
//!     .await?;
//!
//! let draft = RecipeDraft::new_recipe()?;
//! let stored = cookbook.create_recipe(draft.into_recipe()).await?;
//! assert!(cookbook.get_recipe(stored.id).await?.is_some());
//! # Ok(())
//! # }
//! ```

pub mod builder;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use jiff::Timestamp;
use log::debug;
use tokio::task;
use uuid::Uuid;

pub use builder::CookbookBuilder;

use crate::{
    db::Database,
    error::{RecipeError, Result},
    models::{Recipe, RecipeId, Special},
    specials::SpecialsSnapshot,
    submission::RecipeStore,
};

/// Async façade over the recipe database.
#[derive(Debug, Clone)]
pub struct Cookbook {
    db_path: PathBuf,
}

impl Cookbook {
    fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the SQLite file backing this cookbook.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `op` against a fresh connection on the blocking pool.
    async fn with_db<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            op(&db)
        })
        .await
        .map_err(RecipeError::join)?
    }

    /// Stores a new recipe, stamping its post and edit dates.
    pub async fn create_recipe(&self, mut recipe: Recipe) -> Result<Recipe> {
        let now = Timestamp::now();
        recipe.post_date = now;
        recipe.edit_date = now;

        debug!("Storing new recipe {}", recipe.id);
        self.with_db(move |db| {
            db.insert_recipe(&recipe)?;
            Ok(recipe)
        })
        .await
    }

    /// Replaces the recipe `id`, keeping its original post date and
    /// stamping a new edit date.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::InvalidInput` if `recipe` carries a different id
    /// and `RecipeError::RecipeNotFound` if `id` is not stored.
    pub async fn update_recipe(&self, id: RecipeId, mut recipe: Recipe) -> Result<Recipe> {
        if recipe.id != id {
            return Err(RecipeError::invalid_input("uuid")
                .with_reason(format!("Recipe {} cannot replace recipe {id}", recipe.id)));
        }

        debug!("Replacing recipe {id}");
        self.with_db(move |db| {
            let stored = db
                .get_recipe(id)?
                .ok_or_else(|| RecipeError::RecipeNotFound { id: id.to_string() })?;

            recipe.post_date = stored.post_date;
            recipe.edit_date = Timestamp::now();
            db.update_recipe(&recipe)?;
            Ok(recipe)
        })
        .await
    }

    /// Retrieves a recipe by its id.
    pub async fn get_recipe(&self, id: RecipeId) -> Result<Option<Recipe>> {
        self.with_db(move |db| db.get_recipe(id)).await
    }

    /// Lists every stored recipe.
    pub async fn list_recipes(&self) -> Result<Vec<Recipe>> {
        self.with_db(|db| db.list_recipes()).await
    }

    /// Deletes a recipe. Returns whether it existed.
    pub async fn delete_recipe(&self, id: RecipeId) -> Result<bool> {
        self.with_db(move |db| db.delete_recipe(id)).await
    }

    /// Stores a special.
    pub async fn add_special(&self, special: Special) -> Result<Special> {
        self.with_db(move |db| {
            db.insert_special(&special)?;
            Ok(special)
        })
        .await
    }

    /// Lists specials in insertion order.
    pub async fn list_specials(&self) -> Result<Vec<Special>> {
        self.with_db(|db| db.list_specials()).await
    }

    /// Deletes a special. Returns whether it existed.
    pub async fn delete_special(&self, id: Uuid) -> Result<bool> {
        self.with_db(move |db| db.delete_special(id)).await
    }

    /// Current specials for rendering. A failing read yields an empty
    /// snapshot so that recipes still display.
    pub async fn specials_snapshot(&self) -> SpecialsSnapshot {
        SpecialsSnapshot::from_feed(self.list_specials().await)
    }
}

#[async_trait]
impl RecipeStore for Cookbook {
    async fn create(&self, recipe: Recipe) -> anyhow::Result<Recipe> {
        Ok(self.create_recipe(recipe).await?)
    }

    async fn update(&self, id: RecipeId, recipe: Recipe) -> anyhow::Result<Recipe> {
        Ok(self.update_recipe(id, recipe).await?)
    }
}
