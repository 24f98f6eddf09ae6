use async_trait::async_trait;

use crate::inventory::domain::model::{
    entities::inventory_item::InventoryItem,
    enums::inventory_domain_error::InventoryDomainError,
    queries::{
        get_inventory_item_query::GetInventoryItemQuery,
        list_inventory_query::ListInventoryQuery, list_low_stock_query::ListLowStockQuery,
    },
};

#[async_trait]
pub trait InventoryQueryService: Send + Sync {
    async fn handle_get(
        &self,
        query: GetInventoryItemQuery,
    ) -> Result<InventoryItem, InventoryDomainError>;

    async fn handle_list(
        &self,
        query: ListInventoryQuery,
    ) -> Result<Vec<InventoryItem>, InventoryDomainError>;

    async fn handle_list_low_stock(
        &self,
        query: ListLowStockQuery,
    ) -> Result<Vec<InventoryItem>, InventoryDomainError>;
}
