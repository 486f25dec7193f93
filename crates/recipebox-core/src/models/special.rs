//! Promotional specials keyed to ingredients.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::IngredientId;

/// An externally supplied promotion attached to one ingredient.
///
/// Specials are read-only from the core's perspective: they come from the
/// specials source as a snapshot and are only ever matched against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Special {
    /// Identifier of the special record itself
    #[serde(rename = "uuid", default = "Uuid::new_v4")]
    pub id: Uuid,

    /// Identifier of the ingredient this special applies to
    pub ingredient_id: IngredientId,

    /// Short headline, e.g. "Half off"
    pub title: String,

    /// Free-form category tag, e.g. "local" or "promocode"
    #[serde(rename = "type")]
    pub kind: String,

    /// Promotional body text
    #[serde(default)]
    pub text: String,
}
