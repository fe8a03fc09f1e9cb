//! Tenant, mapping and contract fixture utilities.

pub mod data;
pub mod factory;

use crate::TestContext;

impl TestContext {
    pub fn tenancy<'a>(&'a self) -> TenancyFixtures<'a> {
        TenancyFixtures { setup: self }
    }
}

pub struct TenancyFixtures<'a> {
    setup: &'a TestContext,
}

/// Identifies the organization, property and property part a fixture row points at.
///
/// Snapshot names are derived from the ids so assertions can predict them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartRef {
    pub organization_id: i32,
    pub property_id: i32,
    pub property_part_id: i32,
}

impl PartRef {
    pub fn new(organization_id: i32, property_id: i32, property_part_id: i32) -> Self {
        Self {
            organization_id,
            property_id,
            property_part_id,
        }
    }

    pub fn organization_name(&self) -> String {
        format!("Organization {}", self.organization_id)
    }

    pub fn property_name(&self) -> String {
        format!("Property {}", self.property_id)
    }

    pub fn property_part_name(&self) -> String {
        format!("Part {}", self.property_part_id)
    }
}
