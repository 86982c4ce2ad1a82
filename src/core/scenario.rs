//! Scenario catalog and savings table
//!
//! Pure business data with no I/O dependencies. The catalog is built once at
//! startup and never mutated afterwards, so concurrent unsynchronized reads
//! are safe.

use std::collections::BTreeMap;

use crate::types::Service;

/// Resolved scenario identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioName {
    Small,
    Medium,
    Large,
}

impl ScenarioName {
    /// Resolve a raw scenario parameter.
    ///
    /// Anything other than the three known names silently falls back to
    /// `small`; unknown input is normalized, never rejected.
    pub fn resolve(raw: &str) -> Self {
        match raw {
            "small" => Self::Small,
            "medium" => Self::Medium,
            "large" => Self::Large,
            _ => Self::Small,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// A preset inventory: resource counts plus base monthly costs per service.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub ec2_instances: u32,
    pub rds_instances: u32,
    pub s3_buckets: u32,
    pub base_costs: BTreeMap<Service, f64>,
}

impl Scenario {
    fn new(ec2_instances: u32, rds_instances: u32, s3_buckets: u32, costs: &[(Service, f64)]) -> Self {
        Self {
            ec2_instances,
            rds_instances,
            s3_buckets,
            base_costs: costs.iter().copied().collect(),
        }
    }
}

/// Immutable catalog of the three preset scenarios and the savings table.
#[derive(Debug)]
pub struct ScenarioCatalog {
    small: Scenario,
    medium: Scenario,
    large: Scenario,
    savings: BTreeMap<Service, f64>,
}

impl ScenarioCatalog {
    /// Build the fixed demo catalog.
    pub fn builtin() -> Self {
        Self {
            small: Scenario::new(
                2,
                1,
                3,
                &[(Service::Ec2, 28.7), (Service::Rds, 12.5), (Service::S3, 4.2)],
            ),
            medium: Scenario::new(
                6,
                3,
                7,
                &[
                    (Service::Ec2, 180.3),
                    (Service::Rds, 95.4),
                    (Service::S3, 22.6),
                    (Service::Ebs, 18.0),
                ],
            ),
            large: Scenario::new(
                18,
                6,
                15,
                &[
                    (Service::Ec2, 920.0),
                    (Service::Rds, 430.0),
                    (Service::S3, 140.0),
                    (Service::Ebs, 120.0),
                    (Service::Dt, 75.0),
                ],
            ),
            savings: [
                (Service::Ec2, 0.20),
                (Service::Rds, 0.25),
                (Service::S3, 0.30),
                (Service::Ebs, 0.20),
                (Service::Dt, 0.15),
            ]
            .into_iter()
            .collect(),
        }
    }

    pub fn get(&self, name: ScenarioName) -> &Scenario {
        match name {
            ScenarioName::Small => &self.small,
            ScenarioName::Medium => &self.medium,
            ScenarioName::Large => &self.large,
        }
    }

    /// Savings fraction for a service; absence from the table means 0%.
    pub fn savings_fraction(&self, service: Service) -> f64 {
        self.savings.get(&service).copied().unwrap_or(0.0)
    }
}
