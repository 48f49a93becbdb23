//! Multi-objective distance to the ideal goal corner.
//!
//! Each goal is normalised to 0..1 with its column's observed range and
//! compared against its target (1 when maximising, 0 when minimising). The
//! per-goal deviations are combined as a Minkowski mean with exponent `p`.
//! A missing goal cell counts as already at its target. A NaN distance sorts last.

use crate::table::Table;
use crate::value::{Row, Value};

pub fn distance_to_ideal(table: &Table, row: &[Value], p: f64) -> f64 {
    let mut d = 0.0;
    let mut n = 0usize;
    for col in table.cols().y() {
        n += 1;
        let Some(num) = col.num() else { continue };
        if let Some(Value::Num(x)) = row.get(col.at).map(|cell| num.normalize(cell)) {
            d += (x - num.more).abs().powf(p);
        }
    }
    if n == 0 {
        return 0.0;
    }
    (d / n as f64).powf(1.0 / p)
}

/// Sort rows ascending by distance to the ideal; closest first.
pub fn sort_by_distance(table: &Table, rows: &mut [Row], p: f64) {
    let mut keyed: Vec<(f64, Row)> = rows
        .iter_mut()
        .map(|r| {
            let d = distance_to_ideal(table, r, p);
            (if d.is_nan() { f64::INFINITY } else { d }, std::mem::take(r))
        })
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    for (slot, (_, row)) in rows.iter_mut().zip(keyed) {
        *slot = row;
    }
}
