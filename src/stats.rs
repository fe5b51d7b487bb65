use crate::models::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary statistics for one region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionSummary {
    pub region: String,
    pub count: usize,
    pub total: f64,
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Compute per-region statistics over the given records, in region name order.
pub fn region_summary(records: &[Record]) -> Vec<RegionSummary> {
    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for r in records {
        groups.entry(r.region.clone()).or_default().push(r.value);
    }

    let mut out = Vec::new();
    for (region, vals) in groups {
        let count = vals.len();
        let total: f64 = vals.iter().sum();
        let mean = if count > 0 {
            Some(total / count as f64)
        } else {
            None
        };
        let min = vals.iter().copied().fold(None, |acc: Option<f64>, v| {
            Some(acc.map_or(v, |a| a.min(v)))
        });
        let max = vals.iter().copied().fold(None, |acc: Option<f64>, v| {
            Some(acc.map_or(v, |a| a.max(v)))
        });
        out.push(RegionSummary {
            region,
            count,
            total,
            mean,
            min,
            max,
        });
    }
    out
}
