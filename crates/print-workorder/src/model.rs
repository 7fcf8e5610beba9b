use chrono::NaiveDate;
use print_impose::ImpositionRecord;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::types::*;

/// A customer's print order, rendered as one page per line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrder {
    pub order_number: String,
    pub customer: Customer,
    pub created_on: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_on: Option<NaiveDate>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// One product of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product: String,
    pub quantity: u32,
    /// Product configuration in display order (paper, finish, ...)
    #[serde(default)]
    pub config: Vec<ConfigEntry>,
    #[serde(default)]
    pub production_notes: String,
    /// Present when imposition is enabled for this item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imposition: Option<ImpositionRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
}

impl ConfigEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl LineItem {
    pub fn new(product: impl Into<String>, quantity: u32) -> Self {
        Self {
            product: product.into(),
            quantity,
            config: Vec::new(),
            production_notes: String::new(),
            imposition: None,
        }
    }

    /// Turn imposition on with a default record, keeping an existing one
    pub fn enable_imposition(&mut self) -> &mut ImpositionRecord {
        self.imposition.get_or_insert_with(ImpositionRecord::default)
    }
}

impl WorkOrder {
    pub fn new(order_number: impl Into<String>, customer: Customer, created_on: NaiveDate) -> Self {
        Self {
            order_number: order_number.into(),
            customer,
            created_on,
            due_on: None,
            notes: String::new(),
            line_items: Vec::new(),
        }
    }

    /// Validate the order before generating a document
    pub fn validate(&self) -> Result<()> {
        if self.order_number.trim().is_empty() {
            return Err(WorkOrderError::Config(
                "Order number must not be empty".to_string(),
            ));
        }

        if self.line_items.is_empty() {
            return Err(WorkOrderError::NoLineItems(self.order_number.clone()));
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load an order from a JSON file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = tokio::fs::read_to_string(path).await?;
        let order = Self::from_json(&json)?;
        log::debug!(
            "Loaded work order {} with {} line items",
            order.order_number,
            order.line_items.len()
        );
        Ok(order)
    }

    /// Save the order to a JSON file
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json()?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Number of line items with imposition enabled
    pub fn imposed_items(&self) -> usize {
        self.line_items
            .iter()
            .filter(|item| item.imposition.is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> WorkOrder {
        WorkOrder::new(
            "WO-1001",
            Customer {
                name: "Ana Example".to_string(),
                ..Customer::default()
            },
            NaiveDate::from_ymd_opt(2024, 3, 18).unwrap(),
        )
    }

    #[test]
    fn test_validate_requires_line_items() {
        let order = order();
        assert!(matches!(
            order.validate(),
            Err(WorkOrderError::NoLineItems(number)) if number == "WO-1001"
        ));
    }

    #[test]
    fn test_validate_requires_order_number() {
        let mut order = order();
        order.order_number = "  ".to_string();
        order.line_items.push(LineItem::new("Flyer", 500));
        assert!(matches!(order.validate(), Err(WorkOrderError::Config(_))));
    }

    #[test]
    fn test_enable_imposition_keeps_existing_record() {
        let mut item = LineItem::new("Poster", 10);
        item.enable_imposition()
            .set(print_impose::ImpositionField::ProductWidth, 297.0);
        item.enable_imposition();
        assert_eq!(item.imposition.as_ref().unwrap().input().product_width, 297.0);
    }
}
