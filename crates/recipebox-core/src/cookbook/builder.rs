//! Builder for creating and configuring Cookbook instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Cookbook;
use crate::{
    db::Database,
    error::{RecipeError, Result},
};

/// Builder for creating and configuring Cookbook instances.
#[derive(Debug, Clone, Default)]
pub struct CookbookBuilder {
    database_path: Option<PathBuf>,
}

impl CookbookBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG data directory:
    /// `$XDG_DATA_HOME/recipebox/recipebox.db` or
    /// `~/.local/share/recipebox/recipebox.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the cookbook, creating the database file and schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::FileSystem` if the parent directory cannot be
    /// created and `RecipeError::Database` if schema initialization fails.
    pub async fn build(self) -> Result<Cookbook> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| RecipeError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let init_path = db_path.clone();
        task::spawn_blocking(move || Database::new(&init_path).map(drop))
            .await
            .map_err(RecipeError::join)??;

        debug!("Using recipe database at {}", db_path.display());
        Ok(Cookbook::new(db_path))
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("recipebox")
            .place_data_file("recipebox.db")
            .map_err(|e| RecipeError::XdgDirectory(e.to_string()))
    }
}
