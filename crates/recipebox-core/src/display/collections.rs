//! Collection wrapper types for displaying groups of recipes.

use std::{fmt, ops::Index};

use crate::models::Recipe;

/// Newtype wrapper for displaying the recipe list.
///
/// Each recipe shows its title, description and identifier. Handles empty
/// collections gracefully.
///
/// # Examples
///
/// ```rust
/// use recipebox_core::{display::RecipeSummaries, draft::RecipeDraft};
///
/// let recipe = RecipeDraft::new_recipe().unwrap().into_recipe();
/// let output = RecipeSummaries(vec![recipe]).to_string();
/// assert!(output.contains("## Name your favorite recipe..."));
///
/// assert_eq!(RecipeSummaries(vec![]).to_string(), "No recipes found.\n");
/// ```
pub struct RecipeSummaries(pub Vec<Recipe>);

impl RecipeSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of recipes in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the recipes.
    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.0.iter()
    }
}

impl Index<usize> for RecipeSummaries {
    type Output = Recipe;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for RecipeSummaries {
    type Item = Recipe;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecipeSummaries {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for RecipeSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No recipes found.");
        }

        for recipe in &self.0 {
            writeln!(f, "## {}", recipe.title)?;
            writeln!(f)?;
            if !recipe.description.is_empty() {
                writeln!(f, "{}", recipe.description)?;
                writeln!(f)?;
            }
            writeln!(f, "- **ID**: {}", recipe.id)?;
            writeln!(
                f,
                "- **Ingredients**: {}, **Steps**: {}",
                recipe.ingredients.len(),
                recipe.directions.len()
            )?;
            writeln!(f)?;
        }
        Ok(())
    }
}
