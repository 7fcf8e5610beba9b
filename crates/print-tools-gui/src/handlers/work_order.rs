use print_async_runtime::PrintUpdate;
use print_workorder::{WorkOrder, WorkOrderOptions, generate_work_order, save_pdf};
use std::path::PathBuf;
use tokio::sync::mpsc;

pub async fn handle_load(path: PathBuf, update_tx: &mpsc::UnboundedSender<PrintUpdate>) {
    match WorkOrder::load(&path).await {
        Ok(order) => {
            log::info!(
                "Loaded work order {} from {}",
                order.order_number,
                path.display()
            );
            let _ = update_tx.send(PrintUpdate::WorkOrderLoaded { order, path });
        }
        Err(e) => {
            let _ = update_tx.send(PrintUpdate::Error {
                message: format!("Failed to load work order: {e}"),
            });
        }
    }
}

pub async fn handle_save(
    order: WorkOrder,
    path: PathBuf,
    update_tx: &mpsc::UnboundedSender<PrintUpdate>,
) {
    match order.save(&path).await {
        Ok(()) => {
            log::info!("Work order saved to {}", path.display());
            let _ = update_tx.send(PrintUpdate::WorkOrderSaved { path });
        }
        Err(e) => {
            let _ = update_tx.send(PrintUpdate::Error {
                message: format!("Failed to save work order: {e}"),
            });
        }
    }
}

pub async fn handle_generate(
    order: WorkOrder,
    options: WorkOrderOptions,
    output_path: PathBuf,
    update_tx: &mpsc::UnboundedSender<PrintUpdate>,
) {
    let _ = update_tx.send(PrintUpdate::Progress {
        operation: "Building work order".to_string(),
        current: 0,
        total: 2,
    });

    let doc = match generate_work_order(&order, &options).await {
        Ok(doc) => doc,
        Err(e) => {
            let _ = update_tx.send(PrintUpdate::Error {
                message: format!("Failed to build work order: {e}"),
            });
            return;
        }
    };
    let page_count = doc.get_pages().len();

    let _ = update_tx.send(PrintUpdate::Progress {
        operation: "Saving PDF".to_string(),
        current: 1,
        total: 2,
    });

    if let Err(e) = save_pdf(doc, &output_path).await {
        let _ = update_tx.send(PrintUpdate::Error {
            message: format!("Failed to save PDF: {e}"),
        });
        return;
    }

    let _ = update_tx.send(PrintUpdate::WorkOrderGenerated {
        path: output_path,
        page_count,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use print_workorder::{Customer, LineItem};

    fn order(items: usize) -> WorkOrder {
        let mut order = WorkOrder::new(
            "WO-2002",
            Customer {
                name: "Studio North".to_string(),
                ..Customer::default()
            },
            NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
        );
        for i in 0..items {
            let mut item = LineItem::new(format!("Flyer {i}"), 250);
            item.enable_imposition();
            order.line_items.push(item);
        }
        order
    }

    #[tokio::test]
    async fn test_generate_reports_progress_then_pages() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("order.pdf");
        let (tx, mut rx) = mpsc::unbounded_channel();

        handle_generate(order(2), WorkOrderOptions::default(), path.clone(), &tx).await;

        let mut updates = Vec::new();
        while let Ok(update) = rx.try_recv() {
            updates.push(update);
        }
        assert!(matches!(updates[0], PrintUpdate::Progress { current: 0, .. }));
        assert!(matches!(
            updates.last(),
            Some(PrintUpdate::WorkOrderGenerated { page_count: 2, .. })
        ));
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_empty_order_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();

        handle_generate(
            order(0),
            WorkOrderOptions::default(),
            dir.path().join("empty.pdf"),
            &tx,
        )
        .await;

        let mut last = None;
        while let Ok(update) = rx.try_recv() {
            last = Some(update);
        }
        assert!(matches!(last, Some(PrintUpdate::Error { .. })));
    }

    #[tokio::test]
    async fn test_load_missing_file_is_reported() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        handle_load(PathBuf::from("/nonexistent/order.json"), &tx).await;
        assert!(matches!(rx.recv().await, Some(PrintUpdate::Error { .. })));
    }
}
