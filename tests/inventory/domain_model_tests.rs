use std::str::FromStr;

use stockwise_api::inventory::domain::model::{
    entities::{inventory_item::InventoryItem, stock_record::StockRecord},
    enums::{inventory_domain_error::InventoryDomainError, restock_status::RestockStatus},
    value_objects::{product_name::ProductName, restock_quantity::RestockQuantity},
};

use crate::support::{fixtures::TENANT_A, tenant};

fn product(name: &str) -> ProductName {
    ProductName::new(name.to_string()).expect("valid product name")
}

#[test]
fn stock_record_rejects_negative_levels() {
    let negative_quantity = StockRecord::new(product("Alicate"), -1, 10);
    let negative_minimum = StockRecord::new(product("Alicate"), 10, -5);

    assert!(matches!(
        negative_quantity,
        Err(InventoryDomainError::InvalidStockLevel)
    ));
    assert!(matches!(
        negative_minimum,
        Err(InventoryDomainError::InvalidStockLevel)
    ));
}

#[test]
fn stock_record_needs_restock_only_strictly_below_minimum() {
    let below = StockRecord::new(product("Alicate"), 9, 10).expect("valid record");
    let equal = StockRecord::new(product("Alicate"), 10, 10).expect("valid record");
    let above = StockRecord::new(product("Alicate"), 11, 10).expect("valid record");
    let zero = StockRecord::new(product("Alicate"), 0, 0).expect("valid record");

    assert!(below.needs_restock());
    assert!(!equal.needs_restock());
    assert!(!above.needs_restock());
    assert!(!zero.needs_restock());
}

#[test]
fn inventory_item_copies_record_and_derives_flag() {
    let record = StockRecord::new(product("Parafuso M8"), 15, 50).expect("valid record");

    let item = InventoryItem::from_record(tenant(TENANT_A), record);

    assert_eq!(item.tenant_id().value(), TENANT_A);
    assert_eq!(item.product_name().value(), "Parafuso M8");
    assert_eq!(item.quantity(), 15);
    assert_eq!(item.min_stock(), 50);
    assert!(item.needs_restock());
}

#[test]
fn product_name_is_kept_verbatim() {
    assert_eq!(product(" Martelo").value(), " Martelo");
    assert!(matches!(
        ProductName::new(String::new()),
        Err(InventoryDomainError::InvalidProductName)
    ));
}

#[test]
fn restock_quantity_requires_positive_u32() {
    assert_eq!(RestockQuantity::new(1).expect("valid").value(), 1);
    assert!(RestockQuantity::new(0).is_err());
    assert!(RestockQuantity::new(-3).is_err());
    assert!(RestockQuantity::new(i64::from(u32::MAX) + 1).is_err());
}

#[test]
fn restock_status_round_trips_through_wire_names() {
    for status in [
        RestockStatus::Success,
        RestockStatus::Pending,
        RestockStatus::Failed,
    ] {
        assert_eq!(RestockStatus::from_str(status.as_str()).ok(), Some(status));
    }
    assert!(matches!(
        RestockStatus::from_str("done"),
        Err(InventoryDomainError::UnknownRestockStatus(value)) if value == "done"
    ));
}
