//! Opaque identifiers for recipes and their nested items.
//!
//! Every identifier wraps a random (v4) UUID. Identifiers are assigned once
//! at creation and never regenerated; the newtypes keep a recipe identifier
//! from being mistaken for an ingredient identifier at compile time.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4())
            }

            /// Returns the underlying UUID.
            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim()).map(Self)
            }
        }
    };
}

define_id!(
    /// Identifier of a [`Recipe`](super::Recipe).
    RecipeId
);

define_id!(
    /// Identifier of an [`Ingredient`](super::Ingredient), distinct from the
    /// owning recipe's identifier.
    IngredientId
);

define_id!(
    /// Synthetic identifier of a [`Direction`](super::Direction), used as its
    /// rendering and removal key instead of its position.
    DirectionId
);
