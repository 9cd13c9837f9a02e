//! Demo records for local runs.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use wigstock_inventory::{ItemFields, ItemStatus};

use crate::store::{InventoryStore, StoreError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Three sample wigs, oldest first.
pub fn demo_fields() -> Vec<ItemFields> {
    vec![
        ItemFields {
            barcode: "123456789".to_string(),
            name: "Elegant Wave".to_string(),
            style: "Wavy".to_string(),
            length: Some("18 inches".to_string()),
            color: Some("Dark Brown".to_string()),
            hair_type: Some("Human Hair".to_string()),
            hair_texture: Some("Silky".to_string()),
            size: Some("Medium".to_string()),
            location: Some("Shelf A1".to_string()),
            price: Decimal::new(29999, 2),
            cost_price: Some(Decimal::new(15000, 2)),
            status: ItemStatus::InStock,
            client_name: None,
            is_new_order: false,
            receive_date: date(2024, 1, 15),
            sold_date: None,
        },
        ItemFields {
            barcode: "987654321".to_string(),
            name: "Sleek Straight".to_string(),
            style: "Straight".to_string(),
            length: Some("20 inches".to_string()),
            color: Some("Black".to_string()),
            hair_type: Some("Synthetic".to_string()),
            hair_texture: Some("Straight".to_string()),
            size: Some("Large".to_string()),
            location: Some("Shelf B2".to_string()),
            price: Decimal::new(24999, 2),
            cost_price: Some(Decimal::new(12000, 2)),
            status: ItemStatus::Hold,
            client_name: Some("Jane Smith".to_string()),
            is_new_order: true,
            receive_date: date(2024, 2, 1),
            sold_date: None,
        },
        ItemFields {
            barcode: "456789123".to_string(),
            name: "Curly Dream".to_string(),
            style: "Curly".to_string(),
            length: Some("16 inches".to_string()),
            color: Some("Auburn".to_string()),
            hair_type: Some("Human Hair".to_string()),
            hair_texture: Some("Curly".to_string()),
            size: Some("Small".to_string()),
            location: Some("Shelf C3".to_string()),
            price: Decimal::new(32999, 2),
            cost_price: Some(Decimal::new(18000, 2)),
            status: ItemStatus::Sold,
            client_name: Some("Mary Johnson".to_string()),
            is_new_order: false,
            receive_date: date(2024, 1, 20),
            sold_date: Some(date(2024, 2, 15)),
        },
    ]
}

/// Insert the demo records; returns how many were written.
pub async fn seed<S>(store: &S) -> Result<usize, StoreError>
where
    S: InventoryStore + ?Sized,
{
    let fields = demo_fields();
    let count = fields.len();
    for f in fields {
        store.insert(f).await?;
    }
    tracing::info!(count, "seeded demo inventory");
    Ok(count)
}
