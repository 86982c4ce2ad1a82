//! Wire types for the inventory service
//!
//! This module contains the data types shared between the core logic and the
//! HTTP handlers, plus the constants that appear verbatim in responses.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed disclaimer attached to every response.
pub const SYNTHETIC_NOTE: &str = "Synthetic demo – no real cloud access.";

/// Cloud service labels used in cost tables and recommendations.
///
/// Variant order matches the cost-table order (EC2, RDS, S3, EBS, DT);
/// `BTreeMap<Service, _>` iteration relies on the derived `Ord` to walk
/// costs in exactly that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Service {
    #[serde(rename = "EC2")]
    Ec2,
    #[serde(rename = "RDS")]
    Rds,
    #[serde(rename = "S3")]
    S3,
    #[serde(rename = "EBS")]
    Ebs,
    #[serde(rename = "DT")]
    Dt,
}

impl Service {
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Ec2 => "EC2",
            Service::Rds => "RDS",
            Service::S3 => "S3",
            Service::Ebs => "EBS",
            Service::Dt => "DT",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response body for `GET /inventory`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryResponse {
    pub ec2_instances: u32,
    pub rds_instances: u32,
    pub s3_buckets: u32,
    pub costs: BTreeMap<Service, f64>,
    pub recommendations: Vec<String>,
    pub scenario: String,
    pub note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_ordering_matches_cost_table() {
        let mut costs = BTreeMap::new();
        costs.insert(Service::Dt, 1.0);
        costs.insert(Service::S3, 1.0);
        costs.insert(Service::Ec2, 1.0);
        costs.insert(Service::Ebs, 1.0);
        costs.insert(Service::Rds, 1.0);

        let order: Vec<Service> = costs.keys().copied().collect();
        assert_eq!(
            order,
            vec![Service::Ec2, Service::Rds, Service::S3, Service::Ebs, Service::Dt]
        );
    }

    #[test]
    fn test_inventory_response_serialization() {
        let mut costs = BTreeMap::new();
        costs.insert(Service::Ec2, 28.7);
        costs.insert(Service::S3, 4.2);

        let response = InventoryResponse {
            ec2_instances: 2,
            rds_instances: 1,
            s3_buckets: 3,
            costs,
            recommendations: vec!["EC2: potential savings ~ 5.74 $ (~20%).".to_string()],
            scenario: "small".to_string(),
            note: SYNTHETIC_NOTE.to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["ec2_instances"], 2);
        assert_eq!(json["costs"]["EC2"], 28.7);
        assert_eq!(json["costs"]["S3"], 4.2);
        assert_eq!(json["scenario"], "small");
        assert_eq!(json["note"], SYNTHETIC_NOTE);

        let parsed: InventoryResponse = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.costs.get(&Service::Ec2), Some(&28.7));
    }
}
