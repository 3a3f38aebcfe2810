//! Backward walk recovering the chosen subset from a completed table.

use super::CapacityTable;
use crate::error::{InvariantError, Result};
use crate::models::{Item, Money};

/// The subset recovered from a table walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    indices: Vec<usize>,
    total_value: Money,
    total_weight: u32,
    total_volume: u32,
}

impl Selection {
    /// Indices of the chosen items, ascending (source order).
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Summed value of the chosen items.
    pub fn total_value(&self) -> Money {
        self.total_value
    }

    /// Summed weight of the chosen items.
    pub fn total_weight(&self) -> u32 {
        self.total_weight
    }

    /// Summed volume of the chosen items.
    pub fn total_volume(&self) -> u32 {
        self.total_volume
    }

    /// Number of chosen items.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if nothing was chosen.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Walks the completed table backward and returns the chosen subset.
///
/// Starting from `(n, W, V)`, item `i-1` is part of the optimum exactly when
/// the cell value differs from the cell one row above; its footprint is then
/// subtracted from the remaining budgets. Values are integer cents, so the
/// comparison is exact — when including an item would not change the value
/// (an equal-value alternative optimum), the item is deterministically NOT
/// taken.
///
/// The recovered subset is verified against the table: remaining budgets
/// must never go negative and the summed value must equal
/// [`CapacityTable::optimum`] exactly. Either failure is a fatal
/// [`InvariantError`].
///
/// # Panics
///
/// Panics if `items` is not the slice the table was built over (length
/// mismatch).
///
/// # Examples
///
/// ```
/// use u_loading::knapsack::{reconstruct, CapacityTable};
/// use u_loading::models::{Item, Money};
///
/// let items = vec![
///     Item::new("AAA", Money::from_cents(100), 2, 2),
///     Item::new("BBB", Money::from_cents(300), 3, 3),
/// ];
/// let table = CapacityTable::build(&items, 5, 5).unwrap();
/// let selection = reconstruct(&table, &items).unwrap();
/// assert_eq!(selection.indices(), [0, 1]);
/// assert_eq!(selection.total_value(), Money::from_cents(400));
/// assert_eq!(selection.total_weight(), 5);
/// ```
pub fn reconstruct(table: &CapacityTable, items: &[Item]) -> Result<Selection> {
    assert_eq!(
        items.len(),
        table.num_items(),
        "item slice does not match the table"
    );

    let mut weight_left = i64::from(table.weight_cap());
    let mut volume_left = i64::from(table.volume_cap());
    let mut indices = Vec::new();

    let mut i = table.num_items();
    while i > 0 {
        let with_item = table.get(i, weight_left as u32, volume_left as u32);
        let without_item = table.get(i - 1, weight_left as u32, volume_left as u32);

        if with_item != without_item {
            let item = &items[i - 1];
            weight_left -= i64::from(item.weight());
            volume_left -= i64::from(item.volume());
            if weight_left < 0 || volume_left < 0 {
                return Err(InvariantError::NegativeCapacity {
                    item_index: i - 1,
                    weight_left,
                    volume_left,
                }
                .into());
            }
            indices.push(i - 1);
        }
        i -= 1;
    }
    indices.reverse();

    let total_value: Money = indices.iter().map(|&i| items[i].value()).sum();
    let total_weight: u32 = indices.iter().map(|&i| items[i].weight()).sum();
    let total_volume: u32 = indices.iter().map(|&i| items[i].volume()).sum();

    if total_value != table.optimum() {
        return Err(InvariantError::ValueMismatch {
            expected: table.optimum(),
            actual: total_value,
        }
        .into());
    }

    Ok(Selection {
        indices,
        total_value,
        total_weight,
        total_volume,
    })
}
