//! Core library for the recipebox recipe manager.
//!
//! This crate holds everything behind the recipe form and the recipe list:
//! editing a recipe draft with its ingredient and direction lists, submitting
//! it to a persistence collaborator, showing quantities as kitchen fractions
//! and annotating ingredients with matching specials.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Format models for a context, such as a
//!   recipe card with specials attached or the recipe list
//! - **Terminal Rendering**: Markdown output via the CLI's terminal renderer
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use recipebox_core::{
//!     CookbookBuilder, RecipeDraft, SubmissionConfig, SubmissionController, SubmitOutcome,
//!     submission::testing::RecordingHost,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let cookbook = CookbookBuilder::new()
//!     .with_database_path(Some("recipes.db"))
//!     .build()
//!     .await?;
//!
//! let mut draft = RecipeDraft::new_recipe()?;
//! draft.set_field("title", "Pancakes")?;
//! draft.set_field("ingredients[0].amount", "1.5")?;
//! draft.ingredients().append_template();
//!
//! let controller = SubmissionController::with_config(
//!     Arc::new(cookbook),
//!     Arc::new(RecordingHost::default()),
//!     SubmissionConfig::immediate(),
//! );
//! if let SubmitOutcome::Succeeded(recipe) = controller.submit(&draft).await? {
//!     println!("{recipe}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod cookbook;
pub mod db;
pub mod display;
pub mod draft;
pub mod error;
pub mod models;
pub mod params;
pub mod quantity;
pub mod specials;
pub mod submission;

// Re-export commonly used types
pub use cookbook::{Cookbook, CookbookBuilder};
pub use db::Database;
pub use display::{IngredientLine, LocalDateTime, RecipeCard, RecipeSummaries};
pub use draft::{DraftSource, FieldEdit, FieldPath, ListEditor, RecipeDraft, TemplateSpec};
pub use error::{RecipeError, Result};
pub use models::{
    Direction, DirectionId, FormMode, Ingredient, IngredientId, Recipe, RecipeId, RecipeImages,
    Special,
};
pub use params::NewSpecial;
pub use quantity::{format_quantity, Fraction, QuantityFormatter};
pub use specials::{find_special, SpecialsSnapshot};
pub use submission::{
    Alert, AlertSeverity, FormHost, RecipeStore, SubmissionConfig, SubmissionController,
    SubmissionState, SubmitOutcome,
};
