//! Matching ingredients against active specials.
//!
//! A special applies to an ingredient when its `ingredient_id` equals the
//! ingredient's identifier. When the specials feed carries several specials
//! for the same ingredient, the first one in feed order wins.

use log::warn;

use crate::models::{Ingredient, Special};

/// Finds the special attached to `ingredient`, if any.
///
/// # Examples
///
/// ```rust
/// use recipebox_core::{models::Ingredient, specials::find_special};
///
/// let flour = Ingredient::new(2.0, "cups", "Flour");
/// assert!(find_special(&flour, &[]).is_none());
/// ```
pub fn find_special<'a>(ingredient: &Ingredient, specials: &'a [Special]) -> Option<&'a Special> {
    specials
        .iter()
        .find(|special| special.ingredient_id == ingredient.id)
}

/// Upper-cases the first character of `s`, leaving the rest unchanged.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Special {
    /// Promotional headline, e.g. `"Half off Local Deal!"`.
    pub fn headline(&self) -> String {
        format!("{} {} Deal!", self.title, capitalize_first(&self.kind))
    }
}

/// A snapshot of the active specials.
///
/// A feed that failed to load degrades to an empty snapshot so rendering
/// proceeds with no specials attached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecialsSnapshot(Vec<Special>);

impl SpecialsSnapshot {
    pub fn new(specials: Vec<Special>) -> Self {
        Self(specials)
    }

    /// Builds a snapshot from a feed result, logging and discarding errors.
    pub fn from_feed<E: std::fmt::Display>(feed: std::result::Result<Vec<Special>, E>) -> Self {
        match feed {
            Ok(specials) => Self(specials),
            Err(e) => {
                warn!("Specials feed unavailable, continuing without specials: {e}");
                Self::default()
            }
        }
    }

    /// Finds the special attached to `ingredient`, if any.
    pub fn find(&self, ingredient: &Ingredient) -> Option<&Special> {
        find_special(ingredient, &self.0)
    }

    pub fn as_slice(&self) -> &[Special] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
