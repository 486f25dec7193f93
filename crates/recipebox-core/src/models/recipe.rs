//! Recipe model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Direction, Ingredient, RecipeId};

/// Image references for a recipe at three resolutions.
///
/// Each entry is a URI (usually relative to the image host) or empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeImages {
    #[serde(default)]
    pub full: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub small: String,
}

/// Represents a complete recipe with metadata, ingredients and directions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique identifier for the recipe, assigned at creation
    #[serde(rename = "uuid")]
    pub id: RecipeId,

    /// Title of the recipe
    pub title: String,

    /// Short description shown in lists and on the recipe card
    pub description: String,

    /// Image references (full, medium, small)
    #[serde(default)]
    pub images: RecipeImages,

    /// Number of servings
    pub servings: i64,

    /// Preparation time in minutes
    pub prep_time: i64,

    /// Cooking time in minutes
    pub cook_time: i64,

    /// Timestamp when the recipe was first posted (UTC)
    pub post_date: Timestamp,

    /// Timestamp when the recipe was last edited (UTC)
    pub edit_date: Timestamp,

    /// Ordered ingredients; never null, possibly empty
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    /// Ordered directions; never null, possibly empty
    #[serde(default)]
    pub directions: Vec<Direction>,
}

impl Recipe {
    /// Returns true when the recipe was edited after it was posted.
    pub fn was_edited(&self) -> bool {
        self.edit_date > self.post_date
    }
}
