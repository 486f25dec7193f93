//! Data models for recipes, their nested items and specials.
//!
//! This module contains the core domain models. Display implementations for
//! these models are located in [`crate::display::models`] to keep data
//! structures apart from presentation logic.
//!
//! # Identity
//!
//! Recipes, ingredients and directions each carry their own identifier type
//! (see [`ids`]). Ingredient and direction identifiers are unique within
//! their collection and are never reused, even after the item is removed.
//!
//! # Wire format
//!
//! Models serialize with the field names used by the recipe service
//! (`uuid`, `prepTime`, `ingredientId`, ...), so a recipe read from the
//! service can be written back unchanged.
//!
//! # Examples
//!
//! ```rust
//! use recipebox_core::models::{Direction, Ingredient, Recipe, RecipeId, RecipeImages};
//! use jiff::Timestamp;
//!
//! let recipe = Recipe {
//!     id: RecipeId::generate(),
//!     title: "Pancakes".to_string(),
//!     description: "Fluffy".to_string(),
//!     images: RecipeImages::default(),
//!     servings: 4,
//!     prep_time: 10,
//!     cook_time: 15,
//!     post_date: Timestamp::now(),
//!     edit_date: Timestamp::now(),
//!     ingredients: vec![Ingredient::new(1.5, "cups", "Flour")],
//!     directions: vec![Direction::new("Whisk everything", false)],
//! };
//! println!("{}", recipe); // Formats as a markdown card
//! ```

pub mod direction;
pub mod ids;
pub mod ingredient;
pub mod mode;
pub mod recipe;
pub mod special;

#[cfg(test)]
mod tests;

pub use direction::Direction;
pub use ids::{DirectionId, IngredientId, RecipeId};
pub use ingredient::Ingredient;
pub use mode::FormMode;
pub use recipe::{Recipe, RecipeImages};
pub use special::Special;
