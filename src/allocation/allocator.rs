//! Sequential per-vehicle allocation rounds.

use crate::error::{InvariantError, Result};
use crate::knapsack::{reconstruct, CapacityTable};
use crate::models::{AllocationRun, Item, ItemPool, PendingReport, Vehicle, VehicleManifest};

/// Runs one allocation round: solve the knapsack for `vehicle` over the
/// current pool, remove the chosen items, and return the manifest.
///
/// An empty pool yields a zero-value manifest without building a table. A
/// vehicle with zero capacity in either dimension needs no special case —
/// the recurrence degenerates to zero rows on its own.
///
/// The DP table lives only inside this call; nothing of it survives into
/// the next round.
///
/// # Examples
///
/// ```
/// use u_loading::allocation::allocate_round;
/// use u_loading::models::{Item, ItemPool, Money, Vehicle};
///
/// let mut pool = ItemPool::new(vec![
///     Item::new("AAA", Money::from_cents(100), 2, 2),
///     Item::new("BBB", Money::from_cents(300), 9, 9),
/// ]);
/// let vehicle = Vehicle::new("ABC1D23", 4, 4);
/// let manifest = allocate_round(&mut pool, &vehicle).unwrap();
/// assert_eq!(manifest.item_codes(), ["AAA".to_string()]);
/// assert_eq!(pool.len(), 1); // BBB stays behind
/// ```
pub fn allocate_round(pool: &mut ItemPool, vehicle: &Vehicle) -> Result<VehicleManifest> {
    pool.reset_selection();

    if pool.is_empty() {
        return Ok(VehicleManifest::empty(vehicle));
    }

    let selection = {
        let table = CapacityTable::build(pool.items(), vehicle.weight_cap(), vehicle.volume_cap())?;
        reconstruct(&table, pool.items())?
    };

    if selection.total_weight() > vehicle.weight_cap() {
        return Err(InvariantError::CapacityExceeded {
            plate: vehicle.plate().to_string(),
            dimension: "weight",
            used: selection.total_weight(),
            capacity: vehicle.weight_cap(),
        }
        .into());
    }
    if selection.total_volume() > vehicle.volume_cap() {
        return Err(InvariantError::CapacityExceeded {
            plate: vehicle.plate().to_string(),
            dimension: "volume",
            used: selection.total_volume(),
            capacity: vehicle.volume_cap(),
        }
        .into());
    }

    for &index in selection.indices() {
        pool.mark_selected(index);
    }
    let loaded = pool.remove_selected();
    let codes = loaded.iter().map(|i| i.code().to_string()).collect();

    Ok(VehicleManifest::new(
        vehicle,
        selection.total_value(),
        selection.total_weight(),
        selection.total_volume(),
        codes,
    ))
}

/// Plans loads for the whole fleet: one round per vehicle, strictly in input
/// order, each round consuming from the pool the previous round left behind.
/// Whatever remains after the last vehicle becomes the pending report.
///
/// Any allocation or invariant failure aborts the run with no partial
/// result.
///
/// # Examples
///
/// ```
/// use u_loading::allocation::plan_loads;
/// use u_loading::models::{Item, Money, Vehicle};
///
/// let items = vec![
///     Item::new("AAA", Money::from_cents(100), 2, 2),
///     Item::new("BBB", Money::from_cents(300), 9, 9),
/// ];
/// let vehicles = vec![Vehicle::new("ABC1D23", 4, 4)];
/// let run = plan_loads(items, &vehicles).unwrap();
/// assert_eq!(run.manifests().len(), 1);
/// assert_eq!(run.pending().item_codes(), ["BBB".to_string()]);
/// ```
pub fn plan_loads(items: Vec<Item>, vehicles: &[Vehicle]) -> Result<AllocationRun> {
    let mut pool = ItemPool::new(items);
    let mut manifests = Vec::with_capacity(vehicles.len());

    for vehicle in vehicles {
        manifests.push(allocate_round(&mut pool, vehicle)?);
    }

    let pending = PendingReport::from_items(pool.items());
    Ok(AllocationRun::new(manifests, pending))
}
