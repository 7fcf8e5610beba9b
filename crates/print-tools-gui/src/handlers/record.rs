use print_async_runtime::{DiagramFormat, PrintUpdate};
use print_impose::render::{diagram_to_pdf, to_svg};
use print_impose::{DiagramConfig, ImpositionRecord, render_diagram_with, save_pdf, save_svg};
use std::path::PathBuf;
use tokio::sync::mpsc;

pub async fn handle_load(path: PathBuf, update_tx: &mpsc::UnboundedSender<PrintUpdate>) {
    match ImpositionRecord::load(&path).await {
        Ok(record) => {
            log::info!("Loaded imposition record from {}", path.display());
            let _ = update_tx.send(PrintUpdate::RecordLoaded { record, path });
        }
        Err(e) => {
            let _ = update_tx.send(PrintUpdate::Error {
                message: format!("Failed to load record: {e}"),
            });
        }
    }
}

pub async fn handle_save(
    record: ImpositionRecord,
    path: PathBuf,
    update_tx: &mpsc::UnboundedSender<PrintUpdate>,
) {
    match record.save(&path).await {
        Ok(()) => {
            log::info!("Record saved to {}", path.display());
            let _ = update_tx.send(PrintUpdate::RecordSaved { path });
        }
        Err(e) => {
            let _ = update_tx.send(PrintUpdate::Error {
                message: format!("Failed to save record: {e}"),
            });
        }
    }
}

pub async fn handle_export(
    record: ImpositionRecord,
    config: DiagramConfig,
    format: DiagramFormat,
    output_path: PathBuf,
    update_tx: &mpsc::UnboundedSender<PrintUpdate>,
) {
    if let Err(e) = config.validate() {
        let _ = update_tx.send(PrintUpdate::Error {
            message: format!("Invalid diagram configuration: {e}"),
        });
        return;
    }

    let diagram = render_diagram_with(&record, &config);
    if diagram.truncated {
        log::warn!(
            "Diagram exported as a single block: {} repetitions exceed the cap of {}",
            record.result().total_repetitions,
            config.max_cells
        );
    }

    let saved = match format {
        DiagramFormat::Svg => save_svg(&to_svg(&diagram), &output_path).await,
        DiagramFormat::Pdf => match diagram_to_pdf(&diagram) {
            Ok(doc) => save_pdf(doc, &output_path).await,
            Err(e) => Err(e),
        },
    };

    match saved {
        Ok(()) => {
            let _ = update_tx.send(PrintUpdate::DiagramExported {
                path: output_path,
                truncated: diagram.truncated,
            });
        }
        Err(e) => {
            let _ = update_tx.send(PrintUpdate::Error {
                message: format!("Failed to export diagram: {e}"),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use print_impose::{ImpositionInput, RenderMode};

    fn record() -> ImpositionRecord {
        ImpositionRecord::new(ImpositionInput {
            product_width: 210.0,
            product_height: 297.0,
            ..ImpositionInput::default()
        })
    }

    #[tokio::test]
    async fn test_save_then_load_reports_updates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.json");
        let (tx, mut rx) = mpsc::unbounded_channel();

        handle_save(record(), path.clone(), &tx).await;
        assert!(matches!(rx.recv().await, Some(PrintUpdate::RecordSaved { .. })));

        handle_load(path, &tx).await;
        match rx.recv().await {
            Some(PrintUpdate::RecordLoaded { record: loaded, .. }) => {
                assert_eq!(loaded, record());
            }
            other => panic!("unexpected update: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_export_writes_svg_and_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let (sw, sh) = (record().input().sheet_width, record().input().sheet_height);
        let config = DiagramConfig::for_mode(RenderMode::Print, sw, sh);

        for name in ["sheet.svg", "sheet.pdf"] {
            let path = dir.path().join(name);
            let format = DiagramFormat::from_path(&path);
            handle_export(record(), config.clone(), format, path.clone(), &tx).await;
            assert!(matches!(
                rx.recv().await,
                Some(PrintUpdate::DiagramExported { truncated: false, .. })
            ));
            assert!(path.exists());
        }
    }

    #[tokio::test]
    async fn test_invalid_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let config = DiagramConfig::preview().with_canvas(0.0, 100.0);

        handle_export(
            record(),
            config,
            DiagramFormat::Svg,
            dir.path().join("bad.svg"),
            &tx,
        )
        .await;
        assert!(matches!(rx.recv().await, Some(PrintUpdate::Error { .. })));
    }
}
