use chrono::NaiveDate;
use print_impose::{ImpositionField, ImpositionRecord, Orientation};
use print_workorder::*;

fn a4_flyer_record() -> ImpositionRecord {
    let mut record = ImpositionRecord::default();
    record.set(ImpositionField::ProductWidth, 210.0);
    record.set(ImpositionField::ProductHeight, 297.0);
    record
}

fn sample_order() -> WorkOrder {
    let mut order = WorkOrder::new(
        "WO-2024-0042",
        Customer {
            name: "Jordan Rivera".to_string(),
            company: Some("Café Müller".to_string()),
            email: Some("jordan@example.com".to_string()),
            phone: None,
        },
        NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
    );
    order.due_on = NaiveDate::from_ymd_opt(2024, 5, 9);
    order.notes = "Deliver to the back entrance.".to_string();

    let mut flyer = LineItem::new("Flyer A4", 5000);
    flyer.config = vec![
        ConfigEntry::new("Paper", "135 g/m² gloss"),
        ConfigEntry::new("Colors", "4/4"),
    ];
    flyer.production_notes = "Check registration on the first sheet.".to_string();
    flyer.imposition = Some(a4_flyer_record());

    let mut cards = LineItem::new("Business cards", 250);
    cards.config = vec![ConfigEntry::new("Finish", "Matte laminate")];

    order.line_items = vec![flyer, cards];
    order
}

fn page_text(doc: &lopdf::Document, page_number: u32) -> String {
    let pages = doc.get_pages();
    let page_id = pages[&page_number];
    let content = doc.get_page_content(page_id).unwrap();
    String::from_utf8_lossy(&content).into_owned()
}

#[test]
fn test_one_page_per_line_item() {
    let doc = build_work_order(&sample_order(), &WorkOrderOptions::default()).unwrap();
    assert_eq!(doc.get_pages().len(), 2);

    let first = page_text(&doc, 1);
    assert!(first.contains("Work Order WO-2024-0042"));
    assert!(first.contains("Item 1 of 2"));
    assert!(first.contains("Flyer A4"));
    assert!(first.contains("5000"));
    assert!(first.contains("Check registration"));
    // Diagram rectangles are drawn on the imposed page
    assert!(first.contains(" re"));

    let second = page_text(&doc, 2);
    assert!(second.contains("Item 2 of 2"));
    assert!(second.contains("No imposition configured"));
    assert!(second.contains("Matte laminate"));
}

#[test]
fn test_imposition_summary_on_page() {
    let doc = build_work_order(&sample_order(), &WorkOrderOptions::default()).unwrap();
    let first = page_text(&doc, 1);
    assert!(first.contains("700 \\327 1000 mm") || first.contains("700 \u{fffd} 1000 mm"));
    assert!(first.contains("horizontal"));
    assert!(first.contains("88.4 %"));
}

#[test]
fn test_vertical_orientation_is_reported() {
    let mut order = sample_order();
    if let Some(record) = order.line_items[0].imposition.as_mut() {
        record.set_orientation(Orientation::Vertical);
    }
    let doc = build_work_order(&order, &WorkOrderOptions::default()).unwrap();
    assert!(page_text(&doc, 1).contains("vertical"));
}

#[test]
fn test_empty_order_is_rejected() {
    let mut order = sample_order();
    order.line_items.clear();
    let result = build_work_order(&order, &WorkOrderOptions::default());
    assert!(matches!(result, Err(WorkOrderError::NoLineItems(_))));
}

#[test]
fn test_invalid_options_are_rejected() {
    let options = WorkOrderOptions {
        page_width: 0.0,
        ..WorkOrderOptions::default()
    };
    let result = build_work_order(&sample_order(), &options);
    assert!(matches!(result, Err(WorkOrderError::Config(_))));
}

#[test]
fn test_long_notes_spill_onto_continuation_pages() {
    let mut order = sample_order();
    order.line_items[0].production_notes = "Trim carefully. ".repeat(600);
    let doc = build_work_order(&order, &WorkOrderOptions::default()).unwrap();
    assert!(doc.get_pages().len() > 2);
    assert!(page_text(&doc, 2).contains("continued"));
}

#[test]
fn test_order_json_shape() {
    let json = sample_order().to_json().unwrap();
    for key in [
        "orderNumber",
        "createdOn",
        "dueOn",
        "lineItems",
        "productionNotes",
        "productWidth",
        "totalRepetitions",
    ] {
        assert!(json.contains(key), "missing {key}");
    }
    assert!(json.contains("\"2024-05-02\""));
    // Absent optional fields are omitted
    assert!(!json.contains("phone"));
}

#[test]
fn test_minimal_order_json() {
    let order = WorkOrder::from_json(
        r#"{
            "orderNumber": "7",
            "customer": { "name": "Sam" },
            "createdOn": "2024-01-15",
            "lineItems": [
                { "product": "Poster", "quantity": 20,
                  "imposition": { "productWidth": 500, "productHeight": 700, "bleed": 0,
                                  "validWidth": 700, "validHeight": 1000, "gutterH": 0, "gutterV": 0 } }
            ]
        }"#,
    )
    .unwrap();

    assert!(order.due_on.is_none());
    assert!(order.notes.is_empty());
    let record = order.line_items[0].imposition.as_ref().unwrap();
    assert_eq!(record.result().total_repetitions, 1);
    assert!(order.validate().is_ok());
}

#[tokio::test]
async fn test_load_generate_and_save() {
    let dir = tempfile::tempdir().unwrap();
    let order_path = dir.path().join("order.json");
    let pdf_path = dir.path().join("order.pdf");

    let order = sample_order();
    order.save(&order_path).await.unwrap();
    let loaded = WorkOrder::load(&order_path).await.unwrap();
    assert_eq!(loaded, order);
    assert_eq!(loaded.imposed_items(), 1);

    let doc = generate_work_order(&loaded, &WorkOrderOptions::default())
        .await
        .unwrap();
    save_pdf(doc, &pdf_path).await.unwrap();

    let reloaded = lopdf::Document::load(&pdf_path).unwrap();
    assert_eq!(reloaded.get_pages().len(), 2);
}

#[tokio::test]
async fn test_load_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    tokio::fs::write(&path, "{ \"orderNumber\": ").await.unwrap();
    let result = WorkOrder::load(&path).await;
    assert!(matches!(result, Err(WorkOrderError::Json(_))));
}
