//! Inventory records: status, typed fields and the stored item.

use core::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use wigstock_core::{DomainError, ItemId};

/// Stock status of a single wig.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemStatus {
    #[default]
    #[serde(rename = "In Stock")]
    InStock,
    Hold,
    Sold,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 3] = [ItemStatus::InStock, ItemStatus::Hold, ItemStatus::Sold];

    /// Display name, as shown in the status picker.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::InStock => "In Stock",
            ItemStatus::Hold => "Hold",
            ItemStatus::Sold => "Sold",
        }
    }

    pub fn is_sold(&self) -> bool {
        *self == ItemStatus::Sold
    }
}

impl core::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = status_key(s);
        ItemStatus::ALL
            .into_iter()
            .find(|status| status_key(status.as_str()) == key)
            .ok_or_else(|| DomainError::validation(format!("unknown status: {s}")))
    }
}

/// Lowercased with whitespace, `_` and `-` dropped: "in_stock" == "In Stock".
fn status_key(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .collect::<String>()
        .to_lowercase()
}

/// Validated, typed field set of an inventory item.
///
/// Everything except the store-assigned `id` and `created_at`. Inserts and
/// updates always carry the whole set; there is no partial-field diffing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFields {
    pub barcode: String,
    pub name: String,
    pub style: String,
    pub length: Option<String>,
    pub color: Option<String>,
    pub hair_type: Option<String>,
    pub hair_texture: Option<String>,
    pub size: Option<String>,
    pub location: Option<String>,
    pub price: Decimal,
    pub cost_price: Option<Decimal>,
    pub status: ItemStatus,
    pub client_name: Option<String>,
    pub is_new_order: bool,
    pub receive_date: NaiveDate,
    pub sold_date: Option<NaiveDate>,
}

impl ItemFields {
    /// Stamp `sold_date` with `today` when the status moves into `Sold`.
    ///
    /// `previous` is the status before the change (`None` for a new item).
    /// An explicit sold date is kept, and leaving `Sold` does not clear it.
    pub fn stamp_sold_date(&mut self, previous: Option<ItemStatus>, today: NaiveDate) {
        let entering_sold = self.status.is_sold() && previous.is_none_or(|s| !s.is_sold());
        if entering_sold && self.sold_date.is_none() {
            self.sold_date = Some(today);
        }
    }
}

/// One stored inventory record, as returned by the persistence client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    #[serde(flatten)]
    pub fields: ItemFields,
    pub created_at: DateTime<Utc>,
}

impl InventoryItem {
    pub fn new(id: ItemId, fields: ItemFields, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            fields,
            created_at,
        }
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }

    pub fn barcode(&self) -> &str {
        &self.fields.barcode
    }

    pub fn status(&self) -> ItemStatus {
        self.fields.status
    }

    /// Exact match on barcode or on the id's string form (scanner lookup).
    pub fn matches_code(&self, code: &str) -> bool {
        let code = code.trim();
        !code.is_empty() && (self.fields.barcode == code || self.id.to_string() == code)
    }
}
