//! Report formatting.
//!
//! The text format is the wire format of the original dispatch tooling:
//! one `[PLATE]R$…` line per vehicle and a trailing `PENDENTE:` line only
//! when items remain unassigned.

use crate::error::Result;
use crate::models::{AllocationRun, PendingReport, VehicleManifest};
use std::io::Write;

/// Writes one vehicle manifest line:
/// `[PLATE]R$<value>,<w>KG(<w%>),<v>L(<v%>)-><codes>`.
pub fn write_manifest<W: Write>(out: &mut W, manifest: &VehicleManifest) -> Result<()> {
    write!(
        out,
        "[{}]R${},{}KG({}%),{}L({}%)->",
        manifest.plate(),
        manifest.total_value(),
        manifest.weight_used(),
        manifest.weight_pct(),
        manifest.volume_used(),
        manifest.volume_pct(),
    )?;
    writeln!(out, "{}", manifest.item_codes().join(","))?;
    Ok(())
}

/// Writes the pending line: `PENDENTE:R$<value>,<w>KG,<v>L-><codes>`.
pub fn write_pending<W: Write>(out: &mut W, pending: &PendingReport) -> Result<()> {
    write!(
        out,
        "PENDENTE:R${},{}KG,{}L->",
        pending.total_value(),
        pending.total_weight(),
        pending.total_volume(),
    )?;
    writeln!(out, "{}", pending.item_codes().join(","))?;
    Ok(())
}

/// Writes a full run as text: every manifest in vehicle order, then the
/// pending line if any items remain.
///
/// # Examples
///
/// ```
/// use u_loading::allocation::plan_loads;
/// use u_loading::io::write_run;
/// use u_loading::models::{Item, Money, Vehicle};
///
/// let items = vec![Item::new("ITEM01", Money::from_cents(10_000), 49, 10)];
/// let vehicles = vec![Vehicle::new("ABC1D23", 50, 100)];
/// let run = plan_loads(items, &vehicles).unwrap();
///
/// let mut out = Vec::new();
/// write_run(&mut out, &run).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "[ABC1D23]R$100.00,49KG(98%),10L(10%)->ITEM01\n"
/// );
/// ```
pub fn write_run<W: Write>(out: &mut W, run: &AllocationRun) -> Result<()> {
    for manifest in run.manifests() {
        write_manifest(out, manifest)?;
    }
    if !run.pending().is_empty() {
        write_pending(out, run.pending())?;
    }
    Ok(())
}

/// Writes a full run as pretty-printed JSON.
pub fn write_run_json<W: Write>(out: &mut W, run: &AllocationRun) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, run)?;
    writeln!(out)?;
    Ok(())
}
