//! Property tests for the DP solve and the allocation loop.

use proptest::prelude::*;
use u_loading::allocation::{allocate_round, plan_loads};
use u_loading::knapsack::{reconstruct, CapacityTable};
use u_loading::models::{Item, ItemPool, Money, Vehicle};

fn arb_items(max_len: usize) -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec((0u64..=10_000, 0u32..=8, 0u32..=8), 0..=max_len).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (cents, weight, volume))| {
                Item::new(
                    format!("IT{i:03}"),
                    Money::from_cents(cents),
                    weight,
                    volume,
                )
            })
            .collect()
    })
}

fn arb_vehicles() -> impl Strategy<Value = Vec<Vehicle>> {
    prop::collection::vec((0u32..=15, 0u32..=15), 0..=3).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (weight_cap, volume_cap))| {
                Vehicle::new(format!("VH{i:03}A00"), weight_cap, volume_cap)
            })
            .collect()
    })
}

/// Exhaustive subset search, the reference the DP must match.
fn brute_force_optimum(items: &[Item], weight_cap: u32, volume_cap: u32) -> Money {
    let mut best = Money::ZERO;
    for mask in 0u32..(1 << items.len()) {
        let mut value = Money::ZERO;
        let mut weight = 0u64;
        let mut volume = 0u64;
        for (i, item) in items.iter().enumerate() {
            if mask & (1 << i) != 0 {
                value += item.value();
                weight += u64::from(item.weight());
                volume += u64::from(item.volume());
            }
        }
        if weight <= u64::from(weight_cap) && volume <= u64::from(volume_cap) && value > best {
            best = value;
        }
    }
    best
}

proptest! {
    #[test]
    fn prop_optimum_matches_brute_force(
        items in arb_items(6),
        weight_cap in 0u32..=15,
        volume_cap in 0u32..=15,
    ) {
        let table = CapacityTable::build(&items, weight_cap, volume_cap).unwrap();
        prop_assert_eq!(table.optimum(), brute_force_optimum(&items, weight_cap, volume_cap));
    }

    #[test]
    fn prop_reconstruction_is_consistent(
        items in arb_items(6),
        weight_cap in 0u32..=15,
        volume_cap in 0u32..=15,
    ) {
        let table = CapacityTable::build(&items, weight_cap, volume_cap).unwrap();
        let selection = reconstruct(&table, &items).unwrap();
        prop_assert_eq!(selection.total_value(), table.optimum());
        prop_assert!(selection.total_weight() <= weight_cap);
        prop_assert!(selection.total_volume() <= volume_cap);
        // Indices come back ascending and unique.
        prop_assert!(selection.indices().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_round_value_is_idempotent(
        items in arb_items(6),
        weight_cap in 0u32..=15,
        volume_cap in 0u32..=15,
    ) {
        let vehicle = Vehicle::new("VHX0X00", weight_cap, volume_cap);
        let mut first = ItemPool::new(items.clone());
        let mut second = ItemPool::new(items);
        let a = allocate_round(&mut first, &vehicle).unwrap();
        let b = allocate_round(&mut second, &vehicle).unwrap();
        prop_assert_eq!(a.total_value(), b.total_value());
        prop_assert_eq!(a.item_codes(), b.item_codes());
    }

    #[test]
    fn prop_optimum_monotone_in_capacity(
        items in arb_items(5),
        weight_cap in 0u32..=14,
        volume_cap in 0u32..=14,
    ) {
        let base = CapacityTable::build(&items, weight_cap, volume_cap).unwrap().optimum();
        let wider = CapacityTable::build(&items, weight_cap + 1, volume_cap).unwrap().optimum();
        let taller = CapacityTable::build(&items, weight_cap, volume_cap + 1).unwrap().optimum();
        prop_assert!(wider >= base);
        prop_assert!(taller >= base);
    }

    #[test]
    fn prop_manifests_respect_capacities(
        items in arb_items(8),
        vehicles in arb_vehicles(),
    ) {
        let run = plan_loads(items, &vehicles).unwrap();
        for (manifest, vehicle) in run.manifests().iter().zip(&vehicles) {
            prop_assert!(manifest.weight_used() <= vehicle.weight_cap());
            prop_assert!(manifest.volume_used() <= vehicle.volume_cap());
        }
    }

    #[test]
    fn prop_items_are_conserved(
        items in arb_items(8),
        vehicles in arb_vehicles(),
    ) {
        let expected: Vec<String> = items.iter().map(|i| i.code().to_string()).collect();
        let run = plan_loads(items, &vehicles).unwrap();

        let mut seen: Vec<String> = run
            .manifests()
            .iter()
            .flat_map(|m| m.item_codes().iter().cloned())
            .chain(run.pending().item_codes().iter().cloned())
            .collect();
        seen.sort();
        let mut expected_sorted = expected;
        expected_sorted.sort();
        // Every item lands in exactly one manifest or the pending set.
        prop_assert_eq!(seen, expected_sorted);
    }

    #[test]
    fn prop_manifest_value_is_sum_of_round_items(
        items in arb_items(6),
        weight_cap in 0u32..=15,
        volume_cap in 0u32..=15,
    ) {
        let total_before: Money = items.iter().map(Item::value).sum();
        let vehicle = Vehicle::new("VHX0X00", weight_cap, volume_cap);
        let mut pool = ItemPool::new(items);
        let manifest = allocate_round(&mut pool, &vehicle).unwrap();
        // Loaded value plus residual value covers the whole pool.
        prop_assert_eq!(manifest.total_value() + pool.total_value(), total_before);
    }
}
