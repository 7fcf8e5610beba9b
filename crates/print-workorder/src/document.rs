//! Work-order PDF generation
//!
//! Each line item starts a new A4 page. Content that does not fit spills
//! onto continuation pages of the same item.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use print_impose::layout::summarize;
use print_impose::render::pdf::finish_page_tree;
use print_impose::render::{PdfPlacement, diagram_operations};
use print_impose::{ImpositionRecord, render_diagram_with};
use std::path::Path;

use crate::model::{LineItem, WorkOrder};
use crate::options::WorkOrderOptions;
use crate::text::{Font, text_width, to_win_ansi, wrap_text};
use crate::types::*;

const REGULAR_FONT: &[u8] = b"F1";
const BOLD_FONT: &[u8] = b"F2";

/// Width reserved for labels in key/value rows
const KEY_COLUMN_WIDTH: f32 = 130.0;

/// Below this much free height the diagram moves to a continuation page
const MIN_DIAGRAM_HEIGHT: f32 = 160.0;

/// Space between sections
const SECTION_GAP: f32 = 10.0;

// =============================================================================
// Public API
// =============================================================================

/// Build the work-order document in memory.
pub fn build_work_order(order: &WorkOrder, options: &WorkOrderOptions) -> Result<Document> {
    order.validate()?;
    options.validate()?;

    let mut output = Document::with_version("1.7");
    let pages_id = output.new_object_id();
    let resources_id = add_font_resources(&mut output);

    let total = order.line_items.len();
    let mut page_ids = Vec::new();

    for (index, item) in order.line_items.iter().enumerate() {
        let mut writer = PageWriter::new(
            options,
            format!("Work Order {} (continued)", order.order_number),
        );
        write_line_item(&mut writer, order, item, index, total);

        for operations in writer.finish() {
            let page_id = add_page(&mut output, pages_id, resources_id, operations, options)?;
            page_ids.push(page_id);
        }
    }

    finish_page_tree(&mut output, pages_id, &page_ids);

    log::debug!(
        "Built work order {}: {} line items on {} pages",
        order.order_number,
        total,
        page_ids.len()
    );

    Ok(output)
}

/// Validate and build a work order on a blocking task.
pub async fn generate_work_order(
    order: &WorkOrder,
    options: &WorkOrderOptions,
) -> Result<Document> {
    let order = order.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || build_work_order(&order, &options)).await?
}

/// Save a generated work order
pub async fn save_pdf(doc: Document, path: impl AsRef<Path>) -> Result<()> {
    print_impose::save_pdf(doc, path).await?;
    Ok(())
}

// =============================================================================
// Page Content
// =============================================================================

fn write_line_item(
    writer: &mut PageWriter,
    order: &WorkOrder,
    item: &LineItem,
    index: usize,
    total: usize,
) {
    let options = writer.options;

    writer.title(
        &format!("Work Order {}", order.order_number),
        &format!("Item {} of {}", index + 1, total),
    );
    if let Some(shop) = &options.shop_name {
        writer.line(shop, false);
    }
    writer.rule();

    writer.heading("Customer");
    writer.key_value("Name", &order.customer.name);
    for (key, value) in [
        ("Company", &order.customer.company),
        ("Email", &order.customer.email),
        ("Phone", &order.customer.phone),
    ] {
        if let Some(value) = value {
            writer.key_value(key, value);
        }
    }
    writer.key_value("Created", &order.created_on.format("%Y-%m-%d").to_string());
    let due = order
        .due_on
        .map_or_else(|| "Not set".to_string(), |date| date.format("%Y-%m-%d").to_string());
    writer.key_value("Due", &due);

    writer.heading("Product");
    writer.key_value("Product", &item.product);
    writer.key_value("Quantity", &item.quantity.to_string());
    for entry in &item.config {
        writer.key_value(&entry.key, &entry.value);
    }

    writer.heading("Imposition");
    match &item.imposition {
        Some(record) => write_imposition(writer, record),
        None => writer.line("No imposition configured", false),
    }

    if !item.production_notes.trim().is_empty() {
        writer.heading("Production notes");
        writer.paragraph(&item.production_notes);
    }

    if !order.notes.trim().is_empty() {
        writer.heading("Order notes");
        writer.paragraph(&order.notes);
    }
}

fn write_imposition(writer: &mut PageWriter, record: &ImpositionRecord) {
    let input = record.input();
    let summary = summarize(record);

    writer.key_value(
        "Sheet",
        &format!("{} × {} mm", fmt_mm(input.sheet_width), fmt_mm(input.sheet_height)),
    );
    writer.key_value(
        "Valid area",
        &format!("{} × {} mm", fmt_mm(input.valid_width), fmt_mm(input.valid_height)),
    );
    writer.key_value(
        "Product",
        &format!(
            "{} × {} mm",
            fmt_mm(input.product_width),
            fmt_mm(input.product_height)
        ),
    );
    writer.key_value("Bleed", &format!("{} mm", fmt_mm(input.bleed)));
    writer.key_value(
        "Gutters",
        &format!("{} × {} mm", fmt_mm(input.gutter_h), fmt_mm(input.gutter_v)),
    );
    writer.key_value("Orientation", input.orientation.name());
    writer.key_value("Repetitions", &summary.repetitions_label());
    writer.key_value("Utilization", &format!("{:.1} %", summary.utilization));

    writer.diagram(record);
}

/// Millimeters with at most two decimals
fn fmt_mm(value: f32) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

// =============================================================================
// Page Writer
// =============================================================================

/// Accumulates content stream operations top to bottom, opening continuation
/// pages when the current one is full.
struct PageWriter<'a> {
    options: &'a WorkOrderOptions,
    continuation_title: String,
    finished: Vec<Vec<Operation>>,
    ops: Vec<Operation>,
    /// Top of the free space (PDF y-up)
    cursor: f32,
}

impl<'a> PageWriter<'a> {
    fn new(options: &'a WorkOrderOptions, continuation_title: String) -> Self {
        Self {
            options,
            continuation_title,
            finished: Vec::new(),
            ops: Self::page_prologue(),
            cursor: options.page_height - options.margin,
        }
    }

    fn page_prologue() -> Vec<Operation> {
        vec![Operation::new(
            "rg",
            vec![Object::Integer(0), Object::Integer(0), Object::Integer(0)],
        )]
    }

    fn finish(mut self) -> Vec<Vec<Operation>> {
        self.finished.push(self.ops);
        self.finished
    }

    fn remaining(&self) -> f32 {
        self.cursor - self.options.margin
    }

    fn line_height(&self, font_size: f32) -> f32 {
        font_size * self.options.line_spacing
    }

    /// Make room for `height`, starting a continuation page if needed
    fn ensure(&mut self, height: f32) {
        if self.remaining() >= height {
            return;
        }
        let ops = std::mem::replace(&mut self.ops, Self::page_prologue());
        self.finished.push(ops);
        self.cursor = self.options.page_height - self.options.margin;

        let title = self.continuation_title.clone();
        let size = self.options.heading_font_size;
        self.advance_line(size);
        self.text(self.options.margin, self.cursor, BOLD_FONT, size, &title);
        self.cursor -= SECTION_GAP;
    }

    /// Move the cursor down one line and return its baseline
    fn advance_line(&mut self, font_size: f32) -> f32 {
        self.cursor -= self.line_height(font_size);
        self.cursor
    }

    fn text(&mut self, x: f32, y: f32, font: &[u8], size: f32, text: &str) {
        self.ops.push(Operation::new("BT", vec![]));
        self.ops.push(Operation::new(
            "Tf",
            vec![Object::Name(font.to_vec()), Object::Real(size)],
        ));
        self.ops.push(Operation::new("Td", vec![Object::Real(x), Object::Real(y)]));
        self.ops.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        ));
        self.ops.push(Operation::new("ET", vec![]));
    }

    fn title(&mut self, left: &str, right: &str) {
        let size = self.options.title_font_size;
        let baseline = self.advance_line(size);
        self.text(self.options.margin, baseline, BOLD_FONT, size, left);

        let body = self.options.body_font_size;
        let right_edge = self.options.page_width - self.options.margin;
        let x = right_edge - text_width(right, Font::Regular, body);
        self.text(x, baseline, REGULAR_FONT, body, right);
    }

    fn heading(&mut self, heading: &str) {
        let size = self.options.heading_font_size;
        self.ensure(SECTION_GAP + 3.0 * self.line_height(size));
        self.cursor -= SECTION_GAP;
        let baseline = self.advance_line(size);
        self.text(self.options.margin, baseline, BOLD_FONT, size, heading);
    }

    fn line(&mut self, text: &str, bold: bool) {
        let size = self.options.body_font_size;
        self.ensure(self.line_height(size));
        let baseline = self.advance_line(size);
        let font = if bold { BOLD_FONT } else { REGULAR_FONT };
        self.text(self.options.margin, baseline, font, size, text);
    }

    fn paragraph(&mut self, text: &str) {
        let size = self.options.body_font_size;
        for line in wrap_text(text, Font::Regular, size, self.options.content_width()) {
            self.line(&line, false);
        }
    }

    /// Label in the key column, value wrapped in the remaining width
    fn key_value(&mut self, key: &str, value: &str) {
        let size = self.options.body_font_size;
        let value_x = self.options.margin + KEY_COLUMN_WIDTH;
        let value_width = self.options.content_width() - KEY_COLUMN_WIDTH;

        let mut lines = wrap_text(value, Font::Regular, size, value_width);
        if lines.is_empty() {
            lines.push(String::new());
        }

        for (i, line) in lines.iter().enumerate() {
            self.ensure(self.line_height(size));
            let baseline = self.advance_line(size);
            if i == 0 {
                self.text(self.options.margin, baseline, BOLD_FONT, size, key);
            }
            self.text(value_x, baseline, REGULAR_FONT, size, line);
        }
    }

    fn rule(&mut self) {
        self.cursor -= 6.0;
        let left = self.options.margin;
        let right = self.options.page_width - self.options.margin;
        let y = self.cursor;
        self.ops.extend([
            Operation::new("w", vec![Object::Real(0.5)]),
            Operation::new("m", vec![Object::Real(left), Object::Real(y)]),
            Operation::new("l", vec![Object::Real(right), Object::Real(y)]),
            Operation::new("S", vec![]),
        ]);
    }

    /// Print-mode diagram centered in the content width
    fn diagram(&mut self, record: &ImpositionRecord) {
        self.ensure(MIN_DIAGRAM_HEIGHT + SECTION_GAP);
        self.cursor -= SECTION_GAP;

        let input = record.input();
        let config =
            self.options
                .diagram_config(input.sheet_width, input.sheet_height, self.remaining());
        let diagram = render_diagram_with(record, &config);

        let left = self.options.margin + (self.options.content_width() - diagram.width) / 2.0;
        let bottom = self.cursor - diagram.height;
        self.ops
            .extend(diagram_operations(&diagram, PdfPlacement::new(left, bottom)));
        self.cursor = bottom;

        if diagram.truncated {
            self.line(
                "Grid simplified: too many repetitions to draw individually",
                false,
            );
        }
    }
}

// =============================================================================
// Document Assembly
// =============================================================================

fn add_font_resources(output: &mut Document) -> ObjectId {
    let mut font_ref = |base_font: &[u8]| {
        let mut font_dict = Dictionary::new();
        font_dict.set("Type", Object::Name(b"Font".to_vec()));
        font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
        font_dict.set("BaseFont", Object::Name(base_font.to_vec()));
        font_dict.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
        Object::Reference(output.add_object(font_dict))
    };

    let mut fonts = Dictionary::new();
    fonts.set(REGULAR_FONT, font_ref(b"Helvetica"));
    fonts.set(BOLD_FONT, font_ref(b"Helvetica-Bold"));

    let mut resources = Dictionary::new();
    resources.set("Font", Object::Dictionary(fonts));
    output.add_object(resources)
}

fn add_page(
    output: &mut Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    operations: Vec<Operation>,
    options: &WorkOrderOptions,
) -> Result<ObjectId> {
    let content = Content { operations }.encode()?;
    let content_id = output.add_object(Stream::new(Dictionary::new(), content));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(options.page_width),
            Object::Real(options.page_height),
        ]),
    );
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Reference(resources_id));

    Ok(output.add_object(page_dict))
}
