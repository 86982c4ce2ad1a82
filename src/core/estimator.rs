//! Cost jitter and recommendation generation
//!
//! Pure computation: given a base cost table and a random source, produce
//! the per-request jittered costs and the recommendation text derived from
//! them.

use std::collections::BTreeMap;

use rand::Rng;

use crate::core::scenario::ScenarioCatalog;
use crate::types::Service;

/// Jitter multiplier bounds; drawn independently per service per request.
pub const JITTER_MIN: f64 = 0.97;
pub const JITTER_MAX: f64 = 1.06;

/// Fixed advisory appended when data-transfer spend is present.
pub const DATA_TRANSFER_ADVISORY: &str =
    "Data Transfer: use CloudFront, VPC endpoints; reduce cross-AZ/region traffic.";

/// Fixed advisory appended when storage spend is present.
pub const STORAGE_ADVISORY: &str = "S3: lifecycle to IA/Glacier, compress small objects.";

/// Fixed advisory appended when compute spend is present.
pub const COMPUTE_ADVISORY: &str = "EC2: rightsizing & modern families; stop non-prod off-hours.";

/// Apply independent uniform jitter to each base cost.
///
/// Each value becomes `round(base * U, 2)` with `U` in `[JITTER_MIN,
/// JITTER_MAX]`, floored at 0. The floor is vacuous for the current range
/// but stays as an explicit guard should the range ever go below 1.
pub fn jitter_costs<R: Rng>(base_costs: &BTreeMap<Service, f64>, rng: &mut R) -> BTreeMap<Service, f64> {
    base_costs
        .iter()
        .map(|(&service, &base)| {
            let multiplier = rng.gen_range(JITTER_MIN..=JITTER_MAX);
            let jittered = (base * multiplier * 100.0).round() / 100.0;
            (service, jittered.max(0.0))
        })
        .collect()
}

/// Derive recommendation lines from a jittered cost table.
///
/// Per-service savings lines come first, in cost-table order, followed by
/// the data-transfer, storage, and compute advisories in that fixed order
/// (each only when the matching spend is positive).
pub fn build_recommendations(catalog: &ScenarioCatalog, costs: &BTreeMap<Service, f64>) -> Vec<String> {
    let mut recommendations = Vec::new();

    for (&service, &cost) in costs {
        let fraction = catalog.savings_fraction(service);
        if fraction > 0.0 && cost > 0.0 {
            recommendations.push(format!(
                "{service}: potential savings ~ {:.2} $ (~{}%).",
                cost * fraction,
                (fraction * 100.0) as i64
            ));
        }
    }

    if costs.get(&Service::Dt).copied().unwrap_or(0.0) > 0.0 {
        recommendations.push(DATA_TRANSFER_ADVISORY.to_string());
    }
    if costs.get(&Service::S3).copied().unwrap_or(0.0) > 0.0 {
        recommendations.push(STORAGE_ADVISORY.to_string());
    }
    if costs.get(&Service::Ec2).copied().unwrap_or(0.0) > 0.0 {
        recommendations.push(COMPUTE_ADVISORY.to_string());
    }

    recommendations
}
