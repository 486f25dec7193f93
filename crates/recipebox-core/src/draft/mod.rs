//! Editable recipe drafts.
//!
//! A [`RecipeDraft`] is the working copy behind one open recipe form. It is
//! created when the form opens, either as a deep copy of an existing recipe
//! (edit mode) or from a [`TemplateSpec`] (create mode), and dropped when the
//! form closes. The original recipe is never touched by edits to the draft.
//!
//! ```text
//! ┌──────────────┐   set_field    ┌──────────────┐   payload()   ┌──────────────┐
//! │  form input  │──────────────▶│ RecipeDraft  │──────────────▶│  submission  │
//! │ (add/remove) │──ListEditor──▶│              │               │  controller  │
//! └──────────────┘                └──────────────┘               └──────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use recipebox_core::draft::{DraftSource, RecipeDraft};
//!
//! let mut draft = RecipeDraft::initialize(DraftSource::create()).unwrap();
//! draft.ingredients().append_template();
//! draft.set_field("ingredients[1].name", "Salt").unwrap();
//! draft.directions().remove_at(0).unwrap();
//!
//! assert_eq!(draft.recipe().ingredients.len(), 2);
//! assert!(draft.recipe().directions.is_empty());
//! ```

pub mod field;
pub mod list;
pub mod template;


use field::{coerce_flag, coerce_integer, coerce_number};
use log::debug;

pub use field::{DirectionField, FieldEdit, FieldPath, ImageSize, IngredientField};
pub use list::{resolve_position, IdAllocator, ListEditor, ListItem};
pub use template::TemplateSpec;

use crate::{
    error::{RecipeError, Result},
    models::{Direction, FormMode, Ingredient, Recipe},
};

/// What a draft is seeded from.
#[derive(Debug, Clone)]
pub enum DraftSource<'a> {
    /// Deep copy of an existing recipe
    Edit(&'a Recipe),
    /// Fresh recipe built from placeholders
    Create(TemplateSpec),
}

impl DraftSource<'_> {
    /// Create mode with the default placeholders.
    pub fn create() -> Self {
        DraftSource::Create(TemplateSpec::default())
    }
}

/// The in-progress editable copy of a recipe.
#[derive(Debug, Clone)]
pub struct RecipeDraft {
    mode: FormMode,
    recipe: Recipe,
    ids: IdAllocator,
}

impl RecipeDraft {
    /// Creates a draft from `source`.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::InvalidInput` when a template placeholder is
    /// empty, or when the recipe being edited carries duplicate ingredient
    /// or direction identifiers.
    pub fn initialize(source: DraftSource<'_>) -> Result<Self> {
        let mut ids = IdAllocator::default();

        let (mode, recipe) = match source {
            DraftSource::Create(template) => (FormMode::Create, template.build(&mut ids)?),
            DraftSource::Edit(recipe) => {
                ids.reserve(recipe.id);
                for ingredient in &recipe.ingredients {
                    if !ids.reserve(ingredient.id) {
                        return Err(RecipeError::invalid_input("ingredients")
                            .with_reason(format!("duplicate identifier {}", ingredient.id)));
                    }
                }
                for direction in &recipe.directions {
                    if !ids.reserve(direction.id) {
                        return Err(RecipeError::invalid_input("directions")
                            .with_reason(format!("duplicate identifier {}", direction.id)));
                    }
                }
                (FormMode::Edit, recipe.clone())
            }
        };

        debug!("Initialized {} draft for recipe {}", mode.as_str(), recipe.id);
        Ok(Self { mode, recipe, ids })
    }

    /// Shorthand for a create-mode draft with default placeholders.
    pub fn new_recipe() -> Result<Self> {
        Self::initialize(DraftSource::create())
    }

    /// Shorthand for an edit-mode draft of `recipe`.
    pub fn edit(recipe: &Recipe) -> Result<Self> {
        Self::initialize(DraftSource::Edit(recipe))
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    /// Returns true when `id` has been used by this draft, including
    /// identifiers of items that were since removed.
    pub fn has_issued(&self, id: impl Into<uuid::Uuid>) -> bool {
        self.ids.was_issued(id)
    }

    /// Editor over the ingredients collection.
    pub fn ingredients(&mut self) -> ListEditor<'_, Ingredient> {
        ListEditor::new(&mut self.recipe.ingredients, &mut self.ids)
    }

    /// Editor over the directions collection.
    pub fn directions(&mut self) -> ListEditor<'_, Direction> {
        ListEditor::new(&mut self.recipe.directions, &mut self.ids)
    }

    /// Parses `path` and assigns `value` to it.
    pub fn set_field(&mut self, path: &str, value: &str) -> Result<()> {
        let path: FieldPath = path.parse()?;
        self.set(path, value)
    }

    /// Applies a parsed `path=value` edit.
    pub fn apply(&mut self, edit: &FieldEdit) -> Result<()> {
        self.set(edit.path, &edit.value)
    }

    /// Assigns `value` to the field at `path`, coercing it to the field's
    /// type. Range checks are left to [`RecipeDraft::validate`].
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::InvalidInput` when `value` cannot be coerced and
    /// `RecipeError::IndexOutOfRange` when `path` addresses a missing item.
    pub fn set(&mut self, path: FieldPath, value: &str) -> Result<()> {
        match path {
            FieldPath::Title => self.recipe.title = value.to_string(),
            FieldPath::Description => self.recipe.description = value.to_string(),
            FieldPath::Servings => self.recipe.servings = coerce_integer(&path, value)?,
            FieldPath::PrepTime => self.recipe.prep_time = coerce_integer(&path, value)?,
            FieldPath::CookTime => self.recipe.cook_time = coerce_integer(&path, value)?,
            FieldPath::Image(size) => {
                let slot = match size {
                    ImageSize::Full => &mut self.recipe.images.full,
                    ImageSize::Medium => &mut self.recipe.images.medium,
                    ImageSize::Small => &mut self.recipe.images.small,
                };
                *slot = value.to_string();
            }
            FieldPath::Ingredient { position, field } => {
                let mut ingredients = self.ingredients();
                let ingredient = ingredients.get_mut(position)?;
                match field {
                    IngredientField::Amount => {
                        ingredient.amount = coerce_number(&path, value)?;
                    }
                    IngredientField::Measurement => ingredient.measurement = value.to_string(),
                    IngredientField::Name => ingredient.name = value.to_string(),
                }
            }
            FieldPath::Direction { position, field } => {
                let mut directions = self.directions();
                let direction = directions.get_mut(position)?;
                match field {
                    DirectionField::Instructions => direction.instructions = value.to_string(),
                    DirectionField::Optional => {
                        direction.optional = coerce_flag(&path, value)?;
                    }
                }
            }
        }

        debug!("Set {path} on draft {}", self.recipe.id);
        Ok(())
    }

    /// Checks the draft before it is handed to the persistence
    /// collaborator.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::InvalidInput` for a blank title, negative
    /// servings or times, and negative or non-finite ingredient amounts.
    pub fn validate(&self) -> Result<()> {
        let recipe = &self.recipe;

        if recipe.title.trim().is_empty() {
            return Err(RecipeError::invalid_input("title").with_reason("must not be empty"));
        }

        let counts = [
            (FieldPath::Servings, recipe.servings),
            (FieldPath::PrepTime, recipe.prep_time),
            (FieldPath::CookTime, recipe.cook_time),
        ];
        for (path, value) in counts {
            if value < 0 {
                return Err(RecipeError::invalid_input(path.to_string())
                    .with_reason(format!("must not be negative (got {value})")));
            }
        }

        for (position, ingredient) in recipe.ingredients.iter().enumerate() {
            if !ingredient.amount.is_finite() || ingredient.amount < 0.0 {
                let path = FieldPath::Ingredient {
                    position,
                    field: IngredientField::Amount,
                };
                return Err(RecipeError::invalid_input(path.to_string()).with_reason(format!(
                    "must be a non-negative number (got {})",
                    ingredient.amount
                )));
            }
        }

        Ok(())
    }

    /// The recipe to send to the persistence collaborator.
    pub fn payload(&self) -> Recipe {
        self.recipe.clone()
    }

    /// Consumes the draft, returning the edited recipe.
    pub fn into_recipe(self) -> Recipe {
        self.recipe
    }
}
