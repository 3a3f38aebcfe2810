//! Allocation result types: per-vehicle manifests and the pending report.

use super::{Item, Money, Vehicle};
use serde::{Deserialize, Serialize};

/// Capacity usage as a whole percentage.
///
/// Rounds half away from zero; a zero capacity reports zero usage.
///
/// # Examples
///
/// ```
/// use u_loading::models::usage_pct;
///
/// assert_eq!(usage_pct(49, 50), 98);
/// assert_eq!(usage_pct(1250, 2000), 63); // 62.5 rounds up
/// assert_eq!(usage_pct(0, 0), 0);
/// ```
pub fn usage_pct(used: u32, capacity: u32) -> u32 {
    if capacity == 0 {
        return 0;
    }
    (100.0 * f64::from(used) / f64::from(capacity)).round() as u32
}

/// The load manifest for one vehicle: total value, capacity usage, and the
/// chosen item codes in pool (source) order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleManifest {
    plate: String,
    total_value: Money,
    weight_used: u32,
    weight_pct: u32,
    volume_used: u32,
    volume_pct: u32,
    item_codes: Vec<String>,
}

impl VehicleManifest {
    /// Builds a manifest for `vehicle`, computing usage percentages from its
    /// capacity pair.
    pub fn new(
        vehicle: &Vehicle,
        total_value: Money,
        weight_used: u32,
        volume_used: u32,
        item_codes: Vec<String>,
    ) -> Self {
        Self {
            plate: vehicle.plate().to_string(),
            total_value,
            weight_used,
            weight_pct: usage_pct(weight_used, vehicle.weight_cap()),
            volume_used,
            volume_pct: usage_pct(volume_used, vehicle.volume_cap()),
            item_codes,
        }
    }

    /// A zero-value manifest with no items, for rounds with an empty pool.
    pub fn empty(vehicle: &Vehicle) -> Self {
        Self::new(vehicle, Money::ZERO, 0, 0, Vec::new())
    }

    /// Vehicle plate.
    pub fn plate(&self) -> &str {
        &self.plate
    }

    /// Total value loaded.
    pub fn total_value(&self) -> Money {
        self.total_value
    }

    /// Weight actually loaded.
    pub fn weight_used(&self) -> u32 {
        self.weight_used
    }

    /// Weight usage as a whole percentage of capacity.
    pub fn weight_pct(&self) -> u32 {
        self.weight_pct
    }

    /// Volume actually loaded.
    pub fn volume_used(&self) -> u32 {
        self.volume_used
    }

    /// Volume usage as a whole percentage of capacity.
    pub fn volume_pct(&self) -> u32 {
        self.volume_pct
    }

    /// Codes of the loaded items, in pool order.
    pub fn item_codes(&self) -> &[String] {
        &self.item_codes
    }

    /// Number of items loaded.
    pub fn len(&self) -> usize {
        self.item_codes.len()
    }

    /// Returns `true` if nothing was loaded.
    pub fn is_empty(&self) -> bool {
        self.item_codes.is_empty()
    }
}

/// Aggregate of the items left unassigned after the last vehicle.
///
/// Pure aggregation in pool order; no selection logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingReport {
    total_value: Money,
    total_weight: u32,
    total_volume: u32,
    item_codes: Vec<String>,
}

impl PendingReport {
    /// Summarizes the given items, preserving their order.
    pub fn from_items(items: &[Item]) -> Self {
        Self {
            total_value: items.iter().map(Item::value).sum(),
            total_weight: items.iter().map(Item::weight).sum(),
            total_volume: items.iter().map(Item::volume).sum(),
            item_codes: items.iter().map(|i| i.code().to_string()).collect(),
        }
    }

    /// Total value of the pending items.
    pub fn total_value(&self) -> Money {
        self.total_value
    }

    /// Total weight of the pending items.
    pub fn total_weight(&self) -> u32 {
        self.total_weight
    }

    /// Total volume of the pending items.
    pub fn total_volume(&self) -> u32 {
        self.total_volume
    }

    /// Codes of the pending items, in pool order.
    pub fn item_codes(&self) -> &[String] {
        &self.item_codes
    }

    /// Returns `true` if no items are pending.
    pub fn is_empty(&self) -> bool {
        self.item_codes.is_empty()
    }
}

/// Result of a full allocation run: one manifest per vehicle, in vehicle
/// order, plus the final pending report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationRun {
    manifests: Vec<VehicleManifest>,
    pending: PendingReport,
}

impl AllocationRun {
    /// Assembles a run result.
    pub fn new(manifests: Vec<VehicleManifest>, pending: PendingReport) -> Self {
        Self { manifests, pending }
    }

    /// Per-vehicle manifests, in vehicle order.
    pub fn manifests(&self) -> &[VehicleManifest] {
        &self.manifests
    }

    /// The final pending report.
    pub fn pending(&self) -> &PendingReport {
        &self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_pct_exact() {
        assert_eq!(usage_pct(50, 50), 100);
        assert_eq!(usage_pct(0, 50), 0);
        assert_eq!(usage_pct(49, 50), 98);
    }

    #[test]
    fn test_usage_pct_rounding() {
        assert_eq!(usage_pct(1, 3), 33); // 33.33…
        assert_eq!(usage_pct(2, 3), 67); // 66.67…
        assert_eq!(usage_pct(1250, 2000), 63); // 62.5 → half away from zero
    }

    #[test]
    fn test_usage_pct_zero_capacity() {
        assert_eq!(usage_pct(10, 0), 0);
        assert_eq!(usage_pct(0, 0), 0);
    }

    #[test]
    fn test_manifest_new() {
        let vehicle = Vehicle::new("ABC1D23", 50, 100);
        let m = VehicleManifest::new(
            &vehicle,
            Money::from_cents(10_000),
            49,
            10,
            vec!["CCC".to_string()],
        );
        assert_eq!(m.plate(), "ABC1D23");
        assert_eq!(m.total_value(), Money::from_cents(10_000));
        assert_eq!(m.weight_used(), 49);
        assert_eq!(m.weight_pct(), 98);
        assert_eq!(m.volume_used(), 10);
        assert_eq!(m.volume_pct(), 10);
        assert_eq!(m.item_codes(), ["CCC".to_string()]);
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_manifest_empty() {
        let vehicle = Vehicle::new("ABC1D23", 0, 0);
        let m = VehicleManifest::empty(&vehicle);
        assert!(m.is_empty());
        assert_eq!(m.total_value(), Money::ZERO);
        assert_eq!(m.weight_pct(), 0);
        assert_eq!(m.volume_pct(), 0);
    }

    #[test]
    fn test_pending_from_items() {
        let items = [
            Item::new("AAA", Money::from_cents(4999), 2, 1),
            Item::new("BBB", Money::from_cents(1), 3, 4),
        ];
        let pending = PendingReport::from_items(&items);
        assert_eq!(pending.total_value(), Money::from_cents(5000));
        assert_eq!(pending.total_weight(), 5);
        assert_eq!(pending.total_volume(), 5);
        assert_eq!(pending.item_codes(), ["AAA".to_string(), "BBB".to_string()]);
        assert!(!pending.is_empty());
    }

    #[test]
    fn test_pending_empty() {
        let pending = PendingReport::from_items(&[]);
        assert!(pending.is_empty());
        assert_eq!(pending.total_value(), Money::ZERO);
    }
}
