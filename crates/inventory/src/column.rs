//! Columns of the inventory table and the raw values behind them.

use core::str::FromStr;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use wigstock_core::DomainError;

use crate::item::InventoryItem;

/// A sortable, filterable field of an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Barcode,
    Name,
    Style,
    Length,
    Color,
    HairType,
    HairTexture,
    Size,
    Location,
    Price,
    CostPrice,
    Status,
    ClientName,
    NewOrder,
    ReceiveDate,
    SoldDate,
    CreatedAt,
}

impl Column {
    pub const ALL: [Column; 17] = [
        Column::Barcode,
        Column::Name,
        Column::Style,
        Column::Length,
        Column::Color,
        Column::HairType,
        Column::HairTexture,
        Column::Size,
        Column::Location,
        Column::Price,
        Column::CostPrice,
        Column::Status,
        Column::ClientName,
        Column::NewOrder,
        Column::ReceiveDate,
        Column::SoldDate,
        Column::CreatedAt,
    ];

    /// Header columns of the table view, in display order.
    pub const TABLE: [Column; 6] = [
        Column::Barcode,
        Column::Name,
        Column::Style,
        Column::Color,
        Column::Price,
        Column::Status,
    ];

    /// Fields the free-text search looks at.
    pub const SEARCHABLE: [Column; 5] = [
        Column::Name,
        Column::Style,
        Column::Color,
        Column::Barcode,
        Column::ClientName,
    ];

    /// Snake-case key (storage column name).
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Barcode => "barcode",
            Column::Name => "name",
            Column::Style => "style",
            Column::Length => "length",
            Column::Color => "color",
            Column::HairType => "hair_type",
            Column::HairTexture => "hair_texture",
            Column::Size => "size",
            Column::Location => "location",
            Column::Price => "price",
            Column::CostPrice => "cost_price",
            Column::Status => "status",
            Column::ClientName => "client_name",
            Column::NewOrder => "new_order",
            Column::ReceiveDate => "receive_date",
            Column::SoldDate => "sold_date",
            Column::CreatedAt => "created_at",
        }
    }

    /// Human-readable header label.
    pub fn label(&self) -> &'static str {
        match self {
            Column::Barcode => "Barcode",
            Column::Name => "Name",
            Column::Style => "Style",
            Column::Length => "Length",
            Column::Color => "Color",
            Column::HairType => "Hair Type",
            Column::HairTexture => "Hair Texture",
            Column::Size => "Size",
            Column::Location => "Location",
            Column::Price => "Price",
            Column::CostPrice => "Cost Price",
            Column::Status => "Status",
            Column::ClientName => "Client Name",
            Column::NewOrder => "New Order",
            Column::ReceiveDate => "Receive Date",
            Column::SoldDate => "Sold Date",
            Column::CreatedAt => "Created At",
        }
    }
}

impl core::fmt::Display for Column {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Column {
    type Err = DomainError;

    /// Accepts `hair_type`, `hairType` and `HairType` alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_')
            .collect::<String>()
            .to_lowercase();
        let column = match key.as_str() {
            "barcode" => Column::Barcode,
            "name" => Column::Name,
            "style" => Column::Style,
            "length" => Column::Length,
            "color" => Column::Color,
            "hairtype" => Column::HairType,
            "hairtexture" => Column::HairTexture,
            "size" => Column::Size,
            "location" => Column::Location,
            "price" => Column::Price,
            "costprice" => Column::CostPrice,
            "status" => Column::Status,
            "clientname" => Column::ClientName,
            "neworder" | "isneworder" => Column::NewOrder,
            "receivedate" => Column::ReceiveDate,
            "solddate" => Column::SoldDate,
            "createdat" => Column::CreatedAt,
            _ => return Err(DomainError::unknown_column(s)),
        };
        Ok(column)
    }
}

/// Raw value of one field, borrowed from the record.
///
/// Two values of the same column always share a variant, so the derived
/// ordering is the natural one: lexicographic text, numeric decimals,
/// chronological dates. Status compares by its display name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Decimal(Decimal),
    Flag(bool),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
}

impl core::fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Decimal(d) => write!(f, "{}", d.normalize()),
            FieldValue::Flag(b) => write!(f, "{b}"),
            FieldValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            FieldValue::Timestamp(t) => f.write_str(&t.to_rfc3339_opts(SecondsFormat::Secs, true)),
        }
    }
}

impl InventoryItem {
    /// Raw value of `column`, `None` when the field is absent.
    pub fn field(&self, column: Column) -> Option<FieldValue<'_>> {
        let f = &self.fields;
        match column {
            Column::Barcode => Some(FieldValue::Text(&f.barcode)),
            Column::Name => Some(FieldValue::Text(&f.name)),
            Column::Style => Some(FieldValue::Text(&f.style)),
            Column::Length => text(&f.length),
            Column::Color => text(&f.color),
            Column::HairType => text(&f.hair_type),
            Column::HairTexture => text(&f.hair_texture),
            Column::Size => text(&f.size),
            Column::Location => text(&f.location),
            Column::Price => Some(FieldValue::Decimal(f.price)),
            Column::CostPrice => f.cost_price.map(FieldValue::Decimal),
            Column::Status => Some(FieldValue::Text(f.status.as_str())),
            Column::ClientName => text(&f.client_name),
            Column::NewOrder => Some(FieldValue::Flag(f.is_new_order)),
            Column::ReceiveDate => Some(FieldValue::Date(f.receive_date)),
            Column::SoldDate => f.sold_date.map(FieldValue::Date),
            Column::CreatedAt => Some(FieldValue::Timestamp(self.created_at)),
        }
    }

    /// Display text of `column`, used for substring matching.
    pub fn field_text(&self, column: Column) -> Option<String> {
        self.field(column).map(|v| v.to_string())
    }
}

fn text(value: &Option<String>) -> Option<FieldValue<'_>> {
    value.as_deref().map(FieldValue::Text)
}
