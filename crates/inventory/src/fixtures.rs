//! Shared test records.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use wigstock_core::ItemId;

use crate::item::{InventoryItem, ItemFields, ItemStatus};

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
}

pub fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

pub fn fields(name: &str, price: &str) -> ItemFields {
    ItemFields {
        barcode: format!("BC-{}", name.to_lowercase().replace(' ', "-")),
        name: name.to_string(),
        style: "Straight".to_string(),
        length: None,
        color: None,
        hair_type: None,
        hair_texture: None,
        size: None,
        location: None,
        price: dec(price),
        cost_price: None,
        status: ItemStatus::InStock,
        client_name: None,
        is_new_order: false,
        receive_date: date("2024-01-01"),
        sold_date: None,
    }
}

pub fn item(name: &str, price: &str) -> InventoryItem {
    InventoryItem::new(ItemId::new(), fields(name, price), at(1))
}

pub fn elegant_wave() -> InventoryItem {
    let fields = ItemFields {
        barcode: "123456789".to_string(),
        name: "Elegant Wave".to_string(),
        style: "Wavy".to_string(),
        length: Some("18 inches".to_string()),
        color: Some("Dark Brown".to_string()),
        hair_type: Some("Human Hair".to_string()),
        hair_texture: Some("Silky".to_string()),
        size: Some("Medium".to_string()),
        location: Some("Shelf A1".to_string()),
        price: dec("299.99"),
        cost_price: Some(dec("150.00")),
        status: ItemStatus::InStock,
        client_name: None,
        is_new_order: false,
        receive_date: date("2024-01-15"),
        sold_date: None,
    };
    InventoryItem::new(ItemId::new(), fields, at(3))
}

pub fn sleek_straight() -> InventoryItem {
    let fields = ItemFields {
        barcode: "987654321".to_string(),
        name: "Sleek Straight".to_string(),
        style: "Straight".to_string(),
        length: Some("20 inches".to_string()),
        color: Some("Black".to_string()),
        hair_type: Some("Synthetic".to_string()),
        hair_texture: Some("Straight".to_string()),
        size: Some("Large".to_string()),
        location: Some("Shelf B2".to_string()),
        price: dec("249.99"),
        cost_price: Some(dec("120.00")),
        status: ItemStatus::Hold,
        client_name: Some("Jane Smith".to_string()),
        is_new_order: true,
        receive_date: date("2024-02-01"),
        sold_date: None,
    };
    InventoryItem::new(ItemId::new(), fields, at(2))
}

pub fn curly_dream() -> InventoryItem {
    let fields = ItemFields {
        barcode: "456789123".to_string(),
        name: "Curly Dream".to_string(),
        style: "Curly".to_string(),
        length: Some("16 inches".to_string()),
        color: Some("Auburn".to_string()),
        hair_type: Some("Human Hair".to_string()),
        hair_texture: Some("Curly".to_string()),
        size: Some("Small".to_string()),
        location: Some("Shelf C3".to_string()),
        price: dec("329.99"),
        cost_price: Some(dec("180.00")),
        status: ItemStatus::Sold,
        client_name: Some("Mary Johnson".to_string()),
        is_new_order: false,
        receive_date: date("2024-01-20"),
        sold_date: Some(date("2024-02-15")),
    };
    InventoryItem::new(ItemId::new(), fields, at(1))
}

/// The three sample wigs, newest first.
pub fn sample() -> Vec<InventoryItem> {
    vec![elegant_wave(), sleek_straight(), curly_dream()]
}
