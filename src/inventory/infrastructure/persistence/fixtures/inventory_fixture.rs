use std::{
    collections::{BTreeMap, HashMap},
    path::Path,
};

use serde::Deserialize;

use crate::inventory::domain::model::{
    entities::stock_record::StockRecord,
    enums::inventory_domain_error::InventoryDomainError,
    value_objects::{product_name::ProductName, tenant_id::TenantId},
};

const EMBEDDED_INVENTORY: &str = include_str!("default_inventory.json");

#[derive(Debug, Deserialize)]
struct StockLevelEntry {
    quantity: i64,
    min_stock: i64,
}

/// Tenant-partitioned seed data, validated record by record.
#[derive(Clone, Debug)]
pub struct InventoryFixture {
    partitions: HashMap<TenantId, Vec<StockRecord>>,
}

impl InventoryFixture {
    pub fn embedded() -> Result<Self, InventoryDomainError> {
        Self::from_json(EMBEDDED_INVENTORY)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InventoryDomainError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            InventoryDomainError::InfrastructureError(format!(
                "failed to read inventory fixture {}: {e}",
                path.display()
            ))
        })?;

        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, InventoryDomainError> {
        let parsed: BTreeMap<String, BTreeMap<String, StockLevelEntry>> =
            serde_json::from_str(raw)
                .map_err(|e| InventoryDomainError::InfrastructureError(e.to_string()))?;

        let mut partitions = HashMap::with_capacity(parsed.len());
        for (tenant, products) in parsed {
            let tenant_id = TenantId::new(tenant)?;
            if partitions.contains_key(&tenant_id) {
                return Err(InventoryDomainError::DuplicateTenant(
                    tenant_id.value().to_string(),
                ));
            }
            let records = products
                .into_iter()
                .map(|(product_name, entry)| {
                    StockRecord::new(
                        ProductName::new(product_name)?,
                        entry.quantity,
                        entry.min_stock,
                    )
                })
                .collect::<Result<Vec<_>, _>>()?;
            partitions.insert(tenant_id, records);
        }

        Ok(Self { partitions })
    }

    pub fn tenant_ids(&self) -> Vec<TenantId> {
        let mut tenant_ids: Vec<TenantId> = self.partitions.keys().cloned().collect();
        tenant_ids.sort();
        tenant_ids
    }

    pub fn into_partitions(self) -> HashMap<TenantId, Vec<StockRecord>> {
        self.partitions
    }
}
