//! Dense DP value table over (items, weight, volume).

use crate::error::{Error, Result};
use crate::models::{Item, Money};

/// The dynamic-programming value table of the dual-constraint 0/1 knapsack.
///
/// Cell `(i, w, v)` holds the best achievable value using only the first `i`
/// items under weight budget `w` and volume budget `v`. The table is stored
/// as a single contiguous buffer addressed by a computed stride, so one
/// allocation covers all `(n+1)·(W+1)·(V+1)` cells.
///
/// A table is scratch state for one allocation round: build it, walk it,
/// drop it.
///
/// # Examples
///
/// ```
/// use u_loading::knapsack::CapacityTable;
/// use u_loading::models::{Item, Money};
///
/// let items = vec![
///     Item::new("AAA", Money::from_cents(100), 2, 2),
///     Item::new("BBB", Money::from_cents(300), 3, 3),
/// ];
/// let table = CapacityTable::build(&items, 4, 4).unwrap();
/// // Only one of the two fits: the higher-valued BBB wins.
/// assert_eq!(table.optimum(), Money::from_cents(300));
/// ```
#[derive(Debug, Clone)]
pub struct CapacityTable {
    cells: Vec<Money>,
    num_items: usize,
    weight_cap: u32,
    volume_cap: u32,
    stride_weight: usize,
    stride_item: usize,
}

impl CapacityTable {
    /// Builds the completed table for `items` under the capacity pair
    /// `(weight_cap, volume_cap)`.
    ///
    /// Runs in `O(n·W·V)` time and space. Returns
    /// [`Error::TableAllocation`] if the cell count overflows `usize` or the
    /// buffer cannot be reserved; a partially allocated table is never
    /// returned.
    pub fn build(items: &[Item], weight_cap: u32, volume_cap: u32) -> Result<Self> {
        let stride_weight = volume_cap as usize + 1;
        let stride_item = (weight_cap as usize + 1)
            .checked_mul(stride_weight)
            .ok_or(Error::TableAllocation {
                items: items.len(),
                weight_cap,
                volume_cap,
            })?;
        let total = (items.len() + 1)
            .checked_mul(stride_item)
            .ok_or(Error::TableAllocation {
                items: items.len(),
                weight_cap,
                volume_cap,
            })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(total)
            .map_err(|_| Error::TableAllocation {
                items: items.len(),
                weight_cap,
                volume_cap,
            })?;
        cells.resize(total, Money::ZERO);

        let mut table = Self {
            cells,
            num_items: items.len(),
            weight_cap,
            volume_cap,
            stride_weight,
            stride_item,
        };
        table.fill(items);
        Ok(table)
    }

    /// Bottom-up fill of the recurrence. Row 0 stays zero: no items, no
    /// value. Each cell either carries the value from the row above or takes
    /// the current item on top of the state its footprint points back to.
    fn fill(&mut self, items: &[Item]) {
        for (idx, item) in items.iter().enumerate() {
            let i = idx + 1;
            let item_weight = item.weight();
            let item_volume = item.volume();
            let item_value = item.value();

            for w in 0..=self.weight_cap {
                let fits_weight = w >= item_weight;

                for v in 0..=self.volume_cap {
                    let mut best = self.get(i - 1, w, v);

                    if fits_weight && v >= item_volume {
                        let take =
                            self.get(i - 1, w - item_weight, v - item_volume) + item_value;
                        if take > best {
                            best = take;
                        }
                    }

                    let at = self.index(i, w, v);
                    self.cells[at] = best;
                }
            }
        }
    }

    fn index(&self, i: usize, w: u32, v: u32) -> usize {
        debug_assert!(i <= self.num_items);
        debug_assert!(w <= self.weight_cap);
        debug_assert!(v <= self.volume_cap);
        i * self.stride_item + w as usize * self.stride_weight + v as usize
    }

    /// Value of cell `(i, w, v)`.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is out of range.
    pub fn get(&self, i: usize, w: u32, v: u32) -> Money {
        self.cells[self.index(i, w, v)]
    }

    /// The optimal value for the full item set and both budgets.
    pub fn optimum(&self) -> Money {
        self.get(self.num_items, self.weight_cap, self.volume_cap)
    }

    /// Number of items the table was built over.
    pub fn num_items(&self) -> usize {
        self.num_items
    }

    /// Weight budget of the last column.
    pub fn weight_cap(&self) -> u32 {
        self.weight_cap
    }

    /// Volume budget of the last column.
    pub fn volume_cap(&self) -> u32 {
        self.volume_cap
    }
}
