//! Item pool with selection flags and stable compaction.

use super::{Item, Money};

/// The set of items not yet assigned to any vehicle.
///
/// The pool exclusively owns its items for the duration of a run. Each
/// allocation round marks the chosen items and then removes them with a
/// stable compaction, so the relative order of the remaining items never
/// changes between rounds.
///
/// # Examples
///
/// ```
/// use u_loading::models::{Item, ItemPool, Money};
///
/// let mut pool = ItemPool::new(vec![
///     Item::new("AAA", Money::from_cents(100), 1, 1),
///     Item::new("BBB", Money::from_cents(200), 2, 2),
///     Item::new("CCC", Money::from_cents(300), 3, 3),
/// ]);
/// pool.mark_selected(1);
/// let removed = pool.remove_selected();
/// assert_eq!(removed.len(), 1);
/// assert_eq!(removed[0].code(), "BBB");
/// assert_eq!(pool.len(), 2);
/// assert_eq!(pool.items()[1].code(), "CCC");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ItemPool {
    items: Vec<Item>,
}

impl ItemPool {
    /// Creates a pool from the given items, clearing any selection flags.
    pub fn new(items: Vec<Item>) -> Self {
        let mut pool = Self { items };
        pool.reset_selection();
        pool
    }

    /// Number of items currently in the pool.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no items remain.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items currently in the pool, in stable order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Clears the selection flag on every item.
    pub fn reset_selection(&mut self) {
        for item in &mut self.items {
            item.set_selected(false);
        }
    }

    /// Marks the item at `index` as selected for the current round.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn mark_selected(&mut self, index: usize) {
        self.items[index].set_selected(true);
    }

    /// Removes all selected items, preserving the relative order of both the
    /// removed items and the remainder.
    pub fn remove_selected(&mut self) -> Vec<Item> {
        let (selected, rest): (Vec<Item>, Vec<Item>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(Item::is_selected);
        self.items = rest;
        selected
    }

    /// Sum of the values of all items in the pool.
    pub fn total_value(&self) -> Money {
        self.items.iter().map(Item::value).sum()
    }

    /// Sum of the weights of all items in the pool.
    pub fn total_weight(&self) -> u32 {
        self.items.iter().map(Item::weight).sum()
    }

    /// Sum of the volumes of all items in the pool.
    pub fn total_volume(&self) -> u32 {
        self.items.iter().map(Item::volume).sum()
    }
}
