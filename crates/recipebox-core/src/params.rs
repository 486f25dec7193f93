//! Parameter structures shared by the front ends.
//!
//! These carry user input into the core without any interface-specific
//! derives; the CLI maps its clap arguments onto them.

use uuid::Uuid;

use crate::{
    error::{RecipeError, Result},
    models::{IngredientId, Special},
};

/// Parameters for registering a special against an ingredient.
#[derive(Debug, Clone)]
pub struct NewSpecial {
    pub ingredient_id: IngredientId,
    pub title: String,
    pub kind: String,
    pub text: String,
}

impl NewSpecial {
    /// Validates the input and assigns the special a fresh identifier.
    pub fn into_special(self) -> Result<Special> {
        if self.title.trim().is_empty() {
            return Err(RecipeError::invalid_input("title").with_reason("Title cannot be empty"));
        }
        if self.kind.trim().is_empty() {
            return Err(RecipeError::invalid_input("type").with_reason("Type cannot be empty"));
        }

        Ok(Special {
            id: Uuid::new_v4(),
            ingredient_id: self.ingredient_id,
            title: self.title,
            kind: self.kind.trim().to_lowercase(),
            text: self.text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(title: &str, kind: &str) -> NewSpecial {
        NewSpecial {
            ingredient_id: IngredientId::generate(),
            title: title.to_string(),
            kind: kind.to_string(),
            text: String::new(),
        }
    }

    #[test]
    fn test_into_special_normalizes_kind() {
        let special = params("Half off", " Local ").into_special().unwrap();
        assert_eq!(special.kind, "local");
        assert_eq!(special.headline(), "Half off Local Deal!");
    }

    #[test]
    fn test_into_special_rejects_blank_fields() {
        assert!(matches!(
            params("  ", "local").into_special(),
            Err(RecipeError::InvalidInput { field, .. }) if field == "title"
        ));
        assert!(matches!(
            params("Half off", "").into_special(),
            Err(RecipeError::InvalidInput { field, .. }) if field == "type"
        ));
    }
}
