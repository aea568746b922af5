//! Ordered toggle-sets for diner and cuisine selection.

use serde::{Deserialize, Serialize};

use crate::domain::dining::CuisineTag;
use crate::domain::foundation::PersonKey;

/// Insertion-ordered set with toggle semantics.
///
/// Toggling an absent item appends it; toggling a present item removes
/// it. Two toggles of the same item restore the original selection.
/// Order matters: diners vote in the order they were selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToggleSet<T> {
    items: Vec<T>,
}

impl<T: PartialEq> ToggleSet<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Flips membership of the item, returning true when the item is
    /// present after the call.
    pub fn toggle(&mut self, item: T) -> bool {
        if let Some(position) = self.items.iter().position(|existing| existing == &item) {
            self.items.remove(position);
            false
        } else {
            self.items.push(item);
            true
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: PartialEq> Default for ToggleSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Diners chosen to vote, in selection order.
pub type DinerSelection = ToggleSet<PersonKey>;

/// Preferred cuisines, in selection order.
pub type CuisineSelection = ToggleSet<CuisineTag>;
