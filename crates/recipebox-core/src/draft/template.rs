//! Default values for a freshly created recipe.

use jiff::Timestamp;

use super::list::IdAllocator;
use crate::{
    error::{RecipeError, Result},
    models::{Direction, Ingredient, Recipe, RecipeImages},
};

/// Placeholder values used to seed a draft in create mode.
///
/// Numeric fields of the template always start at zero; the text fields
/// below must be non-empty so the form never opens blank.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSpec {
    pub title: String,
    pub description: String,
    pub ingredient_measurement: String,
    pub ingredient_name: String,
    pub direction_instructions: String,
}

impl Default for TemplateSpec {
    fn default() -> Self {
        Self {
            title: "Name your favorite recipe...".to_string(),
            description: "Describe your delicious recipe...".to_string(),
            ingredient_measurement: "cups".to_string(),
            ingredient_name: "Dune Spice".to_string(),
            direction_instructions: "How do you make this dish?".to_string(),
        }
    }
}

impl TemplateSpec {
    /// Checks that every placeholder is non-empty.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("title", &self.title),
            ("description", &self.description),
            ("ingredient_measurement", &self.ingredient_measurement),
            ("ingredient_name", &self.ingredient_name),
            ("direction_instructions", &self.direction_instructions),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(RecipeError::invalid_input(field)
                    .with_reason("template placeholders must not be empty"));
            }
        }
        Ok(())
    }

    /// Builds a recipe with one placeholder ingredient and one placeholder
    /// direction, drawing every identifier from `ids`.
    pub(crate) fn build(&self, ids: &mut IdAllocator) -> Result<Recipe> {
        self.validate()?;

        let now = Timestamp::now();
        Ok(Recipe {
            id: ids.fresh(),
            title: self.title.clone(),
            description: self.description.clone(),
            images: RecipeImages::default(),
            servings: 0,
            prep_time: 0,
            cook_time: 0,
            post_date: now,
            edit_date: now,
            ingredients: vec![Ingredient {
                id: ids.fresh(),
                amount: 0.0,
                measurement: self.ingredient_measurement.clone(),
                name: self.ingredient_name.clone(),
            }],
            directions: vec![Direction {
                id: ids.fresh(),
                instructions: self.direction_instructions.clone(),
                optional: false,
            }],
        })
    }
}
