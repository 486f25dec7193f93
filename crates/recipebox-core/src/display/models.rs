//! Display implementations for domain models.
//!
//! A recipe renders as a markdown card: title, description, timestamps and
//! yield, then its ingredients (with kitchen quantities and any matching
//! specials) and its numbered directions.

use std::fmt;

use super::{datetime::LocalDateTime, ingredients::IngredientLine};
use crate::{
    models::{Direction, FormMode, Recipe},
    quantity::QuantityFormatter,
    specials::SpecialsSnapshot,
};

impl fmt::Display for FormMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Direction {
    /// Format the direction as the `step`-th (1-based) step of a recipe.
    fn fmt_step(&self, step: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### Step {step}:")?;
        writeln!(f)?;

        if self.optional {
            writeln!(f, "_Optional_")?;
            writeln!(f)?;
        }

        writeln!(f, "{}", self.instructions)?;
        writeln!(f)
    }
}

/// A recipe card with a specials snapshot attached to its ingredients.
pub struct RecipeCard<'a> {
    pub recipe: &'a Recipe,
    pub specials: &'a SpecialsSnapshot,
    pub formatter: QuantityFormatter,
}

impl<'a> RecipeCard<'a> {
    pub fn new(recipe: &'a Recipe, specials: &'a SpecialsSnapshot) -> Self {
        Self {
            recipe,
            specials,
            formatter: QuantityFormatter::default(),
        }
    }

    /// Ingredient lines in recipe order, each paired with its special.
    pub fn ingredient_lines(&self) -> impl Iterator<Item = IngredientLine<'a>> + '_ {
        self.recipe.ingredients.iter().map(move |ingredient| {
            IngredientLine::new(ingredient, self.specials.find(ingredient), self.formatter)
        })
    }
}

impl fmt::Display for RecipeCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recipe = self.recipe;

        writeln!(f, "# {}", recipe.title)?;
        writeln!(f)?;
        writeln!(f, "{}", recipe.description)?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", recipe.id)?;
        writeln!(f, "- Posted: {}", LocalDateTime(&recipe.post_date))?;
        if recipe.was_edited() {
            writeln!(f, "- Edited: {}", LocalDateTime(&recipe.edit_date))?;
        }
        writeln!(f, "- Servings: {}", recipe.servings)?;
        writeln!(f, "- Prep time: {} minutes", recipe.prep_time)?;
        writeln!(f, "- Cook time: {} minutes", recipe.cook_time)?;

        writeln!(f, "\n## Ingredients")?;
        writeln!(f)?;
        if recipe.ingredients.is_empty() {
            writeln!(f, "No ingredients listed.")?;
        } else {
            for line in self.ingredient_lines() {
                let text = line.to_string();
                let mut lines = text.lines();
                if let Some(primary) = lines.next() {
                    writeln!(f, "- {primary}")?;
                }
                for extra in lines {
                    writeln!(f, "  {extra}")?;
                }
            }
        }

        writeln!(f, "\n## Directions")?;
        writeln!(f)?;
        if recipe.directions.is_empty() {
            writeln!(f, "No directions yet.")?;
        } else {
            for (index, direction) in recipe.directions.iter().enumerate() {
                direction.fmt_step(index + 1, f)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let specials = SpecialsSnapshot::default();
        write!(f, "{}", RecipeCard::new(self, &specials))
    }
}
