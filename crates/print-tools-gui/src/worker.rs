use print_async_runtime::{PrintCommand, PrintUpdate};
use tokio::sync::mpsc;

use crate::handlers;

/// Async worker task that processes editor commands and sends updates
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<PrintCommand>,
    update_tx: mpsc::UnboundedSender<PrintUpdate>,
) {
    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &update_tx).await;
    }
    log::debug!("Command channel closed, worker exiting");
}

async fn process_command(cmd: PrintCommand, update_tx: &mpsc::UnboundedSender<PrintUpdate>) {
    match cmd {
        PrintCommand::RecordLoad { path } => {
            handlers::record::handle_load(path, update_tx).await;
        }
        PrintCommand::RecordSave { record, path } => {
            handlers::record::handle_save(record, path, update_tx).await;
        }
        PrintCommand::DiagramExport {
            record,
            config,
            format,
            output_path,
        } => {
            handlers::record::handle_export(record, config, format, output_path, update_tx).await;
        }
        PrintCommand::WorkOrderLoad { path } => {
            handlers::work_order::handle_load(path, update_tx).await;
        }
        PrintCommand::WorkOrderSave { order, path } => {
            handlers::work_order::handle_save(order, path, update_tx).await;
        }
        PrintCommand::WorkOrderGenerate {
            order,
            options,
            output_path,
        } => {
            handlers::work_order::handle_generate(order, options, output_path, update_tx).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use print_impose::{ImpositionInput, ImpositionRecord};

    #[tokio::test]
    async fn test_worker_answers_each_command() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.json");
        let record = ImpositionRecord::new(ImpositionInput {
            product_width: 85.0,
            product_height: 55.0,
            ..ImpositionInput::default()
        });

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, mut update_rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(worker_task(command_rx, update_tx));

        command_tx
            .send(PrintCommand::RecordSave {
                record: record.clone(),
                path: path.clone(),
            })
            .unwrap();
        command_tx
            .send(PrintCommand::RecordLoad { path: path.clone() })
            .unwrap();
        drop(command_tx);
        worker.await.unwrap();

        assert!(matches!(
            update_rx.recv().await,
            Some(PrintUpdate::RecordSaved { .. })
        ));
        match update_rx.recv().await {
            Some(PrintUpdate::RecordLoaded { record: loaded, .. }) => {
                assert_eq!(loaded.result().total_repetitions, record.result().total_repetitions);
            }
            other => panic!("unexpected update: {other:?}"),
        }
    }
}
