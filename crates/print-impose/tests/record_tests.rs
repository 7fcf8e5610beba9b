use print_impose::*;

fn business_card() -> ImpositionInput {
    ImpositionInput {
        product_width: 85.0,
        product_height: 55.0,
        bleed: 2.0,
        sheet_width: 450.0,
        sheet_height: 320.0,
        valid_width: 430.0,
        valid_height: 300.0,
        gutter_h: 4.0,
        gutter_v: 4.0,
        orientation: Orientation::Horizontal,
    }
}

#[test]
fn test_record_recomputes_on_every_edit() {
    let mut record = ImpositionRecord::new(business_card());
    // (430 + 4) / (89 + 4) = 4.66, (300 + 4) / (59 + 4) = 4.82
    assert_eq!(record.result().total_repetitions, 16);

    record.set(ImpositionField::GutterH, 0.0);
    // 430 / 89 = 4.83
    assert_eq!(record.result().repetitions_h, 4);

    record.set_orientation(Orientation::Vertical);
    assert_eq!(*record.result(), compute_layout(record.input()));

    record.update(|input| {
        input.product_width = 0.0;
        input.product_height = 0.0;
    });
    assert_eq!(record.result().total_repetitions, 0);
}

#[cfg(feature = "serde")]
#[test]
fn test_json_uses_camel_case() {
    let record = ImpositionRecord::new(business_card());
    let json = record.to_json().unwrap();
    for key in [
        "productWidth",
        "productHeight",
        "sheetWidth",
        "validHeight",
        "gutterH",
        "gutterV",
        "repetitionsH",
        "repetitionsV",
        "totalRepetitions",
        "utilization",
    ] {
        assert!(json.contains(key), "missing {key}");
    }
    assert!(json.contains("\"horizontal\""));
}

#[cfg(feature = "serde")]
#[test]
fn test_missing_fields_use_defaults() {
    let record =
        ImpositionRecord::from_json(r#"{"productWidth": 210, "productHeight": 297}"#).unwrap();
    let input = record.input();
    assert_eq!(input.bleed, 3.0);
    assert_eq!((input.sheet_width, input.sheet_height), (700.0, 1000.0));
    assert_eq!((input.valid_width, input.valid_height), (680.0, 980.0));
    assert_eq!(input.orientation, Orientation::Horizontal);
    assert_eq!(record.result().total_repetitions, 9);
}

#[cfg(feature = "serde")]
#[test]
fn test_stale_derived_fields_are_recomputed() {
    let json = r#"{
        "productWidth": 210, "productHeight": 297, "bleed": 3,
        "sheetWidth": 700, "sheetHeight": 1000,
        "validWidth": 680, "validHeight": 980,
        "gutterH": 5, "gutterV": 5, "orientation": "vertical",
        "repetitionsH": 3, "repetitionsV": 3, "totalRepetitions": 9,
        "utilization": 88.39
    }"#;
    let record = ImpositionRecord::from_json(json).unwrap();
    assert_eq!(record.result().repetitions_h, 2);
    assert_eq!(record.result().repetitions_v, 4);
    assert_eq!(record.result().total_repetitions, 8);
}

#[cfg(feature = "serde")]
#[test]
fn test_invalid_json_is_an_error() {
    let result = ImpositionRecord::from_json("{ not json");
    assert!(matches!(result, Err(ImposeError::Json(_))));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_record() {
    use tempfile::NamedTempFile;

    let mut record = ImpositionRecord::new(business_card());
    record.apply_sheet(SheetPreset::SRA3, 5.0);

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    record.save(path).await.unwrap();
    let loaded = ImpositionRecord::load(path).await.unwrap();

    assert_eq!(loaded, record);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_missing_file() {
    let result = ImpositionRecord::load("/nonexistent/record.json").await;
    assert!(matches!(result, Err(ImposeError::Io(_))));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_diagram_config_round_trip_and_validation() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    let config = DiagramConfig::compact();
    config.save(path).await.unwrap();
    assert_eq!(DiagramConfig::load(path).await.unwrap(), config);

    let broken = DiagramConfig {
        margin: 200.0,
        ..DiagramConfig::compact()
    };
    broken.save(path).await.unwrap();
    assert!(matches!(
        DiagramConfig::load(path).await,
        Err(ImposeError::Config(_))
    ));
}
