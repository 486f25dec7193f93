//! Display formatting functions and wrapper types.
//!
//! Domain models implement [`std::fmt::Display`] directly for their standalone
//! form; the wrappers in this module format them for a specific context
//! (a recipe card with specials attached, a list of recipes, a submission
//! alert). All output is markdown, rendered by the CLI's terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display Wrapper │    │   Formatted     │
//! │ (Recipe, ...)   │───▶│ (RecipeCard,    │───▶│    Output       │
//! │ + Specials      │    │  IngredientLine)│    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`ingredients`]: Ingredient lines with kitchen quantities and specials
//! - [`models`]: Display implementations for domain models and the recipe card
//! - [`collections`]: The recipe list
//! - [`status`]: Submission alerts
//! - [`datetime`]: Date/time formatting utilities
//!
//! ## Usage Examples
//!
//! ```rust
//! use recipebox_core::{
//!     display::IngredientLine,
//!     models::Ingredient,
//!     quantity::QuantityFormatter,
//! };
//!
//! let butter = Ingredient::new(0.5, "cup", "Butter");
//! let line = IngredientLine::new(&butter, None, QuantityFormatter::default());
//! assert_eq!(line.to_string(), "1/2 cup Butter\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod ingredients;
pub mod models;
pub mod status;

pub use collections::RecipeSummaries;
pub use datetime::LocalDateTime;
pub use ingredients::IngredientLine;
pub use models::RecipeCard;
