use std::sync::Arc;

use async_trait::async_trait;

use crate::inventory::{
    domain::{
        model::{
            entities::inventory_item::InventoryItem,
            enums::inventory_domain_error::InventoryDomainError,
            queries::{
                get_inventory_item_query::GetInventoryItemQuery,
                list_inventory_query::ListInventoryQuery,
                list_low_stock_query::ListLowStockQuery,
            },
        },
        services::inventory_query_service::InventoryQueryService,
    },
    infrastructure::persistence::repositories::stock_record_repository::StockRecordRepository,
};

pub struct InventoryQueryServiceImpl {
    stock_record_repository: Arc<dyn StockRecordRepository>,
}

impl InventoryQueryServiceImpl {
    pub fn new(stock_record_repository: Arc<dyn StockRecordRepository>) -> Self {
        Self {
            stock_record_repository,
        }
    }
}

#[async_trait]
impl InventoryQueryService for InventoryQueryServiceImpl {
    async fn handle_get(
        &self,
        query: GetInventoryItemQuery,
    ) -> Result<InventoryItem, InventoryDomainError> {
        tracing::info!(
            tenant_id = %query.tenant_id(),
            product_name = %query.product_name(),
            "looking up stock level"
        );

        let Some(record) = self
            .stock_record_repository
            .find_by_product(query.tenant_id(), query.product_name())
            .await?
        else {
            tracing::warn!(
                tenant_id = %query.tenant_id(),
                product_name = %query.product_name(),
                "product not found"
            );
            return Err(InventoryDomainError::ProductNotFound(
                query.product_name().value().to_string(),
            ));
        };

        let item = InventoryItem::from_record(query.tenant_id().clone(), record);
        tracing::info!(
            tenant_id = %item.tenant_id(),
            product_name = %item.product_name(),
            quantity = item.quantity(),
            min_stock = item.min_stock(),
            needs_restock = item.needs_restock(),
            "stock level found"
        );

        Ok(item)
    }

    async fn handle_list(
        &self,
        query: ListInventoryQuery,
    ) -> Result<Vec<InventoryItem>, InventoryDomainError> {
        let records = self
            .stock_record_repository
            .list_by_tenant(query.tenant_id())
            .await?;

        if records.is_empty() {
            tracing::warn!(tenant_id = %query.tenant_id(), "tenant has no inventory");
        }

        let items: Vec<InventoryItem> = records
            .into_iter()
            .map(|record| InventoryItem::from_record(query.tenant_id().clone(), record))
            .collect();

        tracing::info!(
            tenant_id = %query.tenant_id(),
            count = items.len(),
            "listed inventory"
        );

        Ok(items)
    }

    async fn handle_list_low_stock(
        &self,
        query: ListLowStockQuery,
    ) -> Result<Vec<InventoryItem>, InventoryDomainError> {
        let records = self
            .stock_record_repository
            .list_below_minimum(query.tenant_id())
            .await?;

        let items: Vec<InventoryItem> = records
            .into_iter()
            .map(|record| InventoryItem::from_record(query.tenant_id().clone(), record))
            .collect();

        tracing::info!(
            tenant_id = %query.tenant_id(),
            count = items.len(),
            "listed low stock items"
        );

        Ok(items)
    }
}
