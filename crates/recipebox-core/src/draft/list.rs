//! Editing the variable-length collections inside a draft.
//!
//! [`ListEditor`] is a controller over one named ordered collection
//! (ingredients or directions). Every appended item receives an identifier
//! from the draft's [`IdAllocator`], so identities stay unique for the whole
//! lifetime of the draft and a removed identifier is never handed out again.

use std::{collections::HashSet, fmt};

use log::debug;
use uuid::Uuid;

use crate::{
    error::{RecipeError, Result},
    models::{Direction, DirectionId, Ingredient, IngredientId},
};

/// Text of a direction appended through the form.
pub const APPENDED_DIRECTION_INSTRUCTIONS: &str = "Add sugar, spice, and everything nice.";
/// Measurement of an ingredient appended through the form.
pub const APPENDED_INGREDIENT_MEASUREMENT: &str = "Measurement";
/// Name of an ingredient appended through the form.
pub const APPENDED_INGREDIENT_NAME: &str = "Name";

/// Issues identifiers that are unique within one draft session.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    issued: HashSet<Uuid>,
}

impl IdAllocator {
    /// Records an identifier that already exists in the draft.
    ///
    /// Returns `false` when the identifier had been seen before.
    pub fn reserve(&mut self, id: impl Into<Uuid>) -> bool {
        self.issued.insert(id.into())
    }

    /// Issues an identifier never seen in this session.
    pub fn fresh<I: From<Uuid>>(&mut self) -> I {
        loop {
            let candidate = Uuid::new_v4();
            if self.issued.insert(candidate) {
                return I::from(candidate);
            }
        }
    }

    /// Returns true when `id` was issued or reserved in this session.
    pub fn was_issued(&self, id: impl Into<Uuid>) -> bool {
        self.issued.contains(&id.into())
    }
}

/// An element of a collection managed by a [`ListEditor`].
pub trait ListItem {
    /// Stable key used for rendering and removal.
    type Id: Copy + Eq + fmt::Display + From<Uuid> + Into<Uuid>;

    /// Name of the collection, as used in field paths and errors.
    const LIST_NAME: &'static str;

    fn id(&self) -> Self::Id;

    fn set_id(&mut self, id: Self::Id);

    /// The default element appended by the form's "add" button.
    fn template() -> Self;
}

impl ListItem for Ingredient {
    type Id = IngredientId;

    const LIST_NAME: &'static str = "ingredients";

    fn id(&self) -> IngredientId {
        self.id
    }

    fn set_id(&mut self, id: IngredientId) {
        self.id = id;
    }

    fn template() -> Self {
        Ingredient::new(0.0, APPENDED_INGREDIENT_MEASUREMENT, APPENDED_INGREDIENT_NAME)
    }
}

impl ListItem for Direction {
    type Id = DirectionId;

    const LIST_NAME: &'static str = "directions";

    fn id(&self) -> DirectionId {
        self.id
    }

    fn set_id(&mut self, id: DirectionId) {
        self.id = id;
    }

    fn template() -> Self {
        Direction::new(APPENDED_DIRECTION_INSTRUCTIONS, false)
    }
}

/// Converts a signed position into an index of a list of length `len`.
///
/// # Errors
///
/// Returns `RecipeError::IndexOutOfRange` when `position` is negative or not
/// below `len`.
pub fn resolve_position(list: &'static str, position: i64, len: usize) -> Result<usize> {
    usize::try_from(position)
        .ok()
        .filter(|index| *index < len)
        .ok_or(RecipeError::IndexOutOfRange {
            list,
            position,
            len,
        })
}

/// Controller over one ordered collection of a draft.
pub struct ListEditor<'a, T: ListItem> {
    items: &'a mut Vec<T>,
    ids: &'a mut IdAllocator,
}

impl<'a, T: ListItem> ListEditor<'a, T> {
    pub(crate) fn new(items: &'a mut Vec<T>, ids: &'a mut IdAllocator) -> Self {
        Self { items, ids }
    }

    /// Appends `item` at the end under a freshly issued identifier.
    ///
    /// Existing elements keep their identities and order.
    pub fn append(&mut self, mut item: T) -> T::Id {
        let id = self.ids.fresh::<T::Id>();
        item.set_id(id);
        self.items.push(item);
        debug!("Appended {} item {id} at position {}", T::LIST_NAME, self.items.len() - 1);
        id
    }

    /// Appends the collection's default element.
    pub fn append_template(&mut self) -> T::Id {
        self.append(T::template())
    }

    /// Removes and returns the element at `position`, shifting later
    /// elements down by one.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::IndexOutOfRange` when `position >= len`; the
    /// collection is left unchanged.
    pub fn remove_at(&mut self, position: usize) -> Result<T> {
        let len = self.items.len();
        if position >= len {
            return Err(RecipeError::IndexOutOfRange {
                list: T::LIST_NAME,
                position: i64::try_from(position).unwrap_or(i64::MAX),
                len,
            });
        }
        let removed = self.items.remove(position);
        debug!("Removed {} item {} from position {position}", T::LIST_NAME, removed.id());
        Ok(removed)
    }

    /// Removes and returns the element identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::InvalidInput` when no element has that
    /// identifier.
    pub fn remove(&mut self, id: T::Id) -> Result<T> {
        let position = self.position_of(id).ok_or_else(|| {
            RecipeError::invalid_input(T::LIST_NAME).with_reason(format!("no item with ID {id}"))
        })?;
        self.remove_at(position)
    }

    /// Position of the element identified by `id`.
    pub fn position_of(&self, id: T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Mutable access to the element at `position`.
    pub fn get_mut(&mut self, position: usize) -> Result<&mut T> {
        let len = self.items.len();
        self.items
            .get_mut(position)
            .ok_or(RecipeError::IndexOutOfRange {
                list: T::LIST_NAME,
                position: i64::try_from(position).unwrap_or(i64::MAX),
                len,
            })
    }

    pub fn items(&self) -> &[T] {
        self.items.as_slice()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
