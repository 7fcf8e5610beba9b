use chrono::{Local, NaiveDate};
use print_workorder::{Customer, LineItem, WorkOrder, WorkOrderOptions};
use std::path::PathBuf;

use crate::views::imposition::ImpositionState;

pub struct WorkOrderState {
    pub order: WorkOrder,
    /// File the order was loaded from or last saved to
    pub order_path: Option<PathBuf>,
    pub options: WorkOrderOptions,
    pub selected_item: usize,
    /// Text of the due date field, kept while it does not parse
    pub due_text: String,
    pub sheet_margin: f32,
}

impl Default for WorkOrderState {
    fn default() -> Self {
        let mut order = WorkOrder::new("", Customer::default(), Local::now().date_naive());
        order.line_items.push(LineItem::new("", 1));
        Self::from_order(order, None)
    }
}

impl WorkOrderState {
    pub fn from_order(order: WorkOrder, order_path: Option<PathBuf>) -> Self {
        let due_text = order
            .due_on
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        Self {
            order,
            order_path,
            options: WorkOrderOptions::default(),
            selected_item: 0,
            due_text,
            sheet_margin: ImpositionState::default().sheet_margin,
        }
    }

    /// Replace the order, keeping the document options
    pub fn load(&mut self, order: WorkOrder, path: PathBuf) {
        let options = std::mem::take(&mut self.options);
        *self = Self::from_order(order, Some(path));
        self.options = options;
    }

    /// Apply the due date text. Empty clears the date; unparsable text is kept
    /// without touching the order.
    pub fn apply_due_text(&mut self) -> bool {
        let text = self.due_text.trim();
        if text.is_empty() {
            self.order.due_on = None;
            return true;
        }
        match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            Ok(date) => {
                self.order.due_on = Some(date);
                true
            }
            Err(_) => false,
        }
    }

    pub fn add_item(&mut self) {
        self.order.line_items.push(LineItem::new("", 1));
        self.selected_item = self.order.line_items.len() - 1;
    }

    pub fn remove_selected_item(&mut self) {
        if self.selected_item < self.order.line_items.len() {
            self.order.line_items.remove(self.selected_item);
        }
        self.selected_item = self
            .selected_item
            .min(self.order.line_items.len().saturating_sub(1));
    }
}
