//! Ingredient model definition.

use serde::{Deserialize, Serialize};

use super::IngredientId;

/// A single ingredient line of a recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    /// Unique identifier, never reused within a draft
    #[serde(rename = "uuid")]
    pub id: IngredientId,

    /// Quantity in `measurement` units
    pub amount: f64,

    /// Free-form unit ("cups", "tbsp", "pinch")
    pub measurement: String,

    /// Name of the ingredient
    pub name: String,
}

impl Ingredient {
    /// Creates an ingredient with a freshly generated identifier.
    pub fn new(amount: f64, measurement: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: IngredientId::generate(),
            amount,
            measurement: measurement.into(),
            name: name.into(),
        }
    }
}
