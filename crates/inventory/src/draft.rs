//! Form drafts and their validation.
//!
//! A draft holds what the add/edit form holds: free text for every field.
//! Validation reports every failing field at once so the form can mark
//! them all, and only a clean draft converts into [`ItemFields`].

use core::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::item::{InventoryItem, ItemFields, ItemStatus};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Untyped add/edit form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub barcode: String,
    pub name: String,
    pub style: String,
    pub length: String,
    pub color: String,
    pub hair_type: String,
    pub hair_texture: String,
    pub size: String,
    pub location: String,
    pub price: String,
    pub cost_price: String,
    pub status: ItemStatus,
    pub client_name: String,
    pub is_new_order: bool,
    /// `YYYY-MM-DD`; blank means "today" at conversion time.
    pub receive_date: String,
    pub sold_date: String,
}

/// Draft field a validation error points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Barcode,
    Name,
    Style,
    Price,
    CostPrice,
    ReceiveDate,
    SoldDate,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Barcode => "barcode",
            DraftField::Name => "name",
            DraftField::Style => "style",
            DraftField::Price => "price",
            DraftField::CostPrice => "cost_price",
            DraftField::ReceiveDate => "receive_date",
            DraftField::SoldDate => "sold_date",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            DraftField::Barcode => "Barcode",
            DraftField::Name => "Name",
            DraftField::Style => "Style",
            DraftField::Price => "Price",
            DraftField::CostPrice => "Cost price",
            DraftField::ReceiveDate => "Receive date",
            DraftField::SoldDate => "Sold date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationReason {
    Required,
    NotANumber,
    NotPositive,
    Negative,
    InvalidDate,
}

/// One failing field of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("{}", self.message())]
pub struct ValidationError {
    pub field: DraftField,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(field: DraftField, reason: ValidationReason) -> Self {
        Self { field, reason }
    }

    /// Inline message shown under the field.
    pub fn message(&self) -> String {
        match (self.field, self.reason) {
            (field, ValidationReason::Required) => format!("{} is required", field.label()),
            (DraftField::Price, _) => "Price must be a valid positive number".to_string(),
            (field, ValidationReason::InvalidDate) => {
                format!("{} must be a date (YYYY-MM-DD)", field.label())
            }
            (field, _) => format!("{} must be a non-negative number", field.label()),
        }
    }
}

/// Every failing field of a draft, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    pub fn fields(&self) -> Vec<DraftField> {
        self.errors.iter().map(|e| e.field).collect()
    }

    pub fn get(&self, field: DraftField) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn contains(&self, field: DraftField) -> bool {
        self.get(field).is_some()
    }

    fn push(&mut self, field: DraftField, reason: ValidationReason) {
        self.errors.push(ValidationError::new(field, reason));
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = core::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Validate a candidate record. Pure; never fails fast.
pub fn validate(draft: &ItemDraft) -> ValidationErrors {
    draft.validate()
}

impl ItemDraft {
    /// Blank form with the receive date pre-filled.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            receive_date: today.format(DATE_FORMAT).to_string(),
            ..Self::default()
        }
    }

    /// Pre-fill an edit form from a stored record.
    pub fn from_item(item: &InventoryItem) -> Self {
        let f = &item.fields;
        let opt = |s: &Option<String>| s.clone().unwrap_or_default();
        Self {
            barcode: f.barcode.clone(),
            name: f.name.clone(),
            style: f.style.clone(),
            length: opt(&f.length),
            color: opt(&f.color),
            hair_type: opt(&f.hair_type),
            hair_texture: opt(&f.hair_texture),
            size: opt(&f.size),
            location: opt(&f.location),
            price: f.price.to_string(),
            cost_price: f.cost_price.map(|d| d.to_string()).unwrap_or_default(),
            status: f.status,
            client_name: opt(&f.client_name),
            is_new_order: f.is_new_order,
            receive_date: f.receive_date.format(DATE_FORMAT).to_string(),
            sold_date: f
                .sold_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        for (field, value) in [
            (DraftField::Barcode, &self.barcode),
            (DraftField::Name, &self.name),
            (DraftField::Style, &self.style),
        ] {
            if is_blank(value) {
                errors.push(field, ValidationReason::Required);
            }
        }

        if is_blank(&self.price) {
            errors.push(DraftField::Price, ValidationReason::Required);
        } else {
            match parse_decimal(&self.price) {
                None => errors.push(DraftField::Price, ValidationReason::NotANumber),
                Some(price) if price <= Decimal::ZERO => {
                    errors.push(DraftField::Price, ValidationReason::NotPositive)
                }
                Some(_) => {}
            }
        }

        if !is_blank(&self.cost_price) {
            match parse_decimal(&self.cost_price) {
                None => errors.push(DraftField::CostPrice, ValidationReason::NotANumber),
                Some(cost) if cost < Decimal::ZERO => {
                    errors.push(DraftField::CostPrice, ValidationReason::Negative)
                }
                Some(_) => {}
            }
        }

        for (field, value) in [
            (DraftField::ReceiveDate, &self.receive_date),
            (DraftField::SoldDate, &self.sold_date),
        ] {
            if !is_blank(value) && parse_date(value).is_none() {
                errors.push(field, ValidationReason::InvalidDate);
            }
        }

        errors
    }

    /// Convert a clean draft into typed fields.
    ///
    /// Blank optional text becomes `None`; a blank receive date becomes `today`.
    pub fn to_fields(&self, today: NaiveDate) -> Result<ItemFields, ValidationErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        // Validation above guarantees these parse.
        let price = parse_decimal(&self.price).unwrap_or_default();
        let cost_price = parse_decimal(&self.cost_price);
        let receive_date = parse_date(&self.receive_date).unwrap_or(today);
        let sold_date = parse_date(&self.sold_date);

        Ok(ItemFields {
            barcode: self.barcode.trim().to_string(),
            name: self.name.trim().to_string(),
            style: self.style.trim().to_string(),
            length: non_blank(&self.length),
            color: non_blank(&self.color),
            hair_type: non_blank(&self.hair_type),
            hair_texture: non_blank(&self.hair_texture),
            size: non_blank(&self.size),
            location: non_blank(&self.location),
            price,
            cost_price,
            status: self.status,
            client_name: non_blank(&self.client_name),
            is_new_order: self.is_new_order,
            receive_date,
            sold_date,
        })
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_decimal(value: &str) -> Option<Decimal> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}
